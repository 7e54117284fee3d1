//! API key stored as `KEY=value` in a dotenv file.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use code_daily_core::{
    application::{ApplicationError, ports::CredentialRepository},
    domain::Credential,
    error::{CoreError, CoreResult},
};

use crate::filesystem::map_io_error;

pub const DEFAULT_CREDENTIALS_FILE: &str = ".env";
pub const DEFAULT_KEY_NAME: &str = "GEMINI_API_KEY";

/// Reads one key of a dotenv file; saving replaces the whole file with
/// that single `KEY=value` line.
#[derive(Debug, Clone)]
pub struct DotenvCredentialFile {
    path: PathBuf,
    key_name: String,
}

impl DotenvCredentialFile {
    pub fn new(path: impl Into<PathBuf>, key_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key_name: key_name.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn storage_error(&self, reason: impl ToString) -> CoreError {
        ApplicationError::CredentialStorage {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
        .into()
    }
}

impl Default for DotenvCredentialFile {
    fn default() -> Self {
        Self::new(DEFAULT_CREDENTIALS_FILE, DEFAULT_KEY_NAME)
    }
}

impl CredentialRepository for DotenvCredentialFile {
    fn load(&self) -> CoreResult<Option<Credential>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No credential file");
            return Ok(None);
        }

        let entries = dotenvy::from_path_iter(&self.path).map_err(|e| self.storage_error(e))?;
        for entry in entries {
            let (name, value) = entry.map_err(|e| self.storage_error(e))?;
            if name == self.key_name {
                // A blank value counts as no key at all.
                return Ok(Credential::new(value).ok());
            }
        }

        debug!(key = %self.key_name, "Credential file has no API key entry");
        Ok(None)
    }

    fn save(&self, credential: &Credential) -> CoreResult<()> {
        let content = format!("{}={}\n", self.key_name, credential.expose());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| map_io_error(parent, e, "create directory"))?;
        }
        std::fs::write(&self.path, content)
            .map_err(|e| map_io_error(&self.path, e, "write credential file"))?;
        restrict_to_owner(&self.path)?;

        info!(path = %self.path.display(), key = %credential.masked(), "API key saved");
        Ok(())
    }
}

#[cfg(unix)]
fn restrict_to_owner(path: &Path) -> CoreResult<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = std::fs::metadata(path)
        .map_err(|e| map_io_error(path, e, "get metadata"))?
        .permissions();
    perms.set_mode(0o600);
    std::fs::set_permissions(path, perms).map_err(|e| map_io_error(path, e, "set permissions"))
}

#[cfg(not(unix))]
fn restrict_to_owner(_path: &Path) -> CoreResult<()> {
    Ok(())
}
