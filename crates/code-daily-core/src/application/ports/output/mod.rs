//! Driven (output) ports - implemented by infrastructure.

use std::path::Path;

use chrono::NaiveDate;

use crate::application::services::session::SessionEvent;
use crate::domain::Credential;
use crate::error::CoreResult;

/// Port for the generative text model.
///
/// Implemented by:
/// - `code_daily_adapters::model::GeminiClient` (production)
///
/// One call, one prompt, one text. Implementations own their timeouts and
/// never retry.
#[cfg_attr(test, mockall::automock)]
pub trait ContentModel: Send + Sync {
    fn generate(&self, credential: &Credential, prompt: &str) -> CoreResult<String>;
}

/// Port for the persisted API key.
///
/// Implemented by:
/// - `code_daily_adapters::credentials::DotenvCredentialFile`
pub trait CredentialRepository: Send + Sync {
    /// `Ok(None)` when nothing usable is stored.
    fn load(&self) -> CoreResult<Option<Credential>>;

    /// Persist, replacing whatever was stored.
    fn save(&self, credential: &Credential) -> CoreResult<()>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `code_daily_adapters::filesystem::LocalFilesystem` (production)
/// - `code_daily_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Ok if it exists.
    fn create_dir_all(&self, path: &Path) -> CoreResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> CoreResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the current calendar day.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Port for blocking interactive questions.
///
/// Implemented by the CLI on top of `dialoguer`. Every method blocks until
/// the user answers.
pub trait UserPrompt: Send + Sync {
    /// Index into `choices` of the picked entry.
    fn select(&self, question: &str, choices: &[&str], default: usize) -> CoreResult<usize>;

    fn confirm(&self, question: &str, default: bool) -> CoreResult<bool>;

    /// Free text, returned as typed.
    fn input(&self, question: &str) -> CoreResult<String>;

    /// Free text with the echo masked.
    fn secret(&self, question: &str) -> CoreResult<String>;
}

/// Port for showing session progress and results.
pub trait SessionPresenter: Send + Sync {
    fn present(&self, event: &SessionEvent);
}
