//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. Environment variables: `CODE_DAILY__MODEL__NAME=gemini-1.5-pro`
//! 2. Config file: `--config FILE`, else [`AppConfig::config_path`] if it exists
//! 3. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use code_daily_adapters::{
    GeminiConfig,
    credentials::{DEFAULT_CREDENTIALS_FILE, DEFAULT_KEY_NAME},
    model::{DEFAULT_API_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS},
};

const ENV_PREFIX: &str = "CODE_DAILY";
const ENV_SEPARATOR: &str = "__";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Content model endpoint.
    pub model: ModelConfig,
    /// Where the API key is stored.
    pub credentials: CredentialsConfig,
    /// Where workspaces are created.
    pub workspace: WorkspaceConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub api_url: String,
    pub name: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialsConfig {
    /// Dotenv file, relative to the working directory unless absolute.
    pub file: PathBuf,
    pub key_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    pub output_root: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            name: DEFAULT_MODEL.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_CREDENTIALS_FILE),
            key_name: DEFAULT_KEY_NAME.into(),
        }
    }
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from("."),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the file, then the environment.
    ///
    /// An explicit `config_file` must exist; the platform default is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required)
    }

    fn load_from(path: &Path, required: bool) -> anyhow::Result<Self> {
        let defaults = Config::try_from(&Self::default())
            .context("Failed to build default configuration")?;

        let settings = Config::builder()
            .add_source(defaults)
            .add_source(File::from(path).format(FileFormat::Toml).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .context("Configuration has invalid values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.code-daily.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "code-daily", "code-daily")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".code-daily.toml"))
    }

    /// The file `init` writes and `config path` reports.
    pub fn active_path(config_file: Option<&PathBuf>) -> PathBuf {
        config_file.cloned().unwrap_or_else(Self::config_path)
    }

    pub fn gemini(&self) -> GeminiConfig {
        GeminiConfig {
            api_url: self.model.api_url.clone(),
            model: self.model.name.clone(),
            timeout_secs: self.model.timeout_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_documented_values() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.model.name, "gemini-1.5-flash");
        assert_eq!(cfg.model.timeout_secs, 120);
        assert_eq!(cfg.credentials.file, PathBuf::from(".env"));
        assert_eq!(cfg.credentials.key_name, "GEMINI_API_KEY");
        assert_eq!(cfg.workspace.output_root, PathBuf::from("."));
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn missing_optional_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = AppConfig::load_from(&dir.path().join("absent.toml"), false).unwrap();
        assert_eq!(cfg.model, AppConfig::default().model);
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn file_overrides_only_the_keys_it_names() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[model]\nname = \"gemini-1.5-pro\"\n\n[workspace]\noutput_root = \"practice\"").unwrap();

        let cfg = AppConfig::load_from(file.path(), true).unwrap();
        assert_eq!(cfg.model.name, "gemini-1.5-pro");
        assert_eq!(cfg.model.timeout_secs, 120);
        assert_eq!(cfg.workspace.output_root, PathBuf::from("practice"));
        assert_eq!(cfg.credentials.key_name, "GEMINI_API_KEY");
    }

    #[test]
    fn default_serialises_to_toml_and_back() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(text.contains("[model]"));
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn gemini_config_follows_model_section() {
        let mut cfg = AppConfig::default();
        cfg.model.name = "other".into();
        let gemini = cfg.gemini();
        assert_eq!(gemini.model, "other");
        assert_eq!(gemini.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn active_path_prefers_explicit_file() {
        let explicit = PathBuf::from("custom.toml");
        assert_eq!(AppConfig::active_path(Some(&explicit)), explicit);
        assert!(!AppConfig::active_path(None).as_os_str().is_empty());
    }
}
