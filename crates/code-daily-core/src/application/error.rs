//! Application layer errors.
//!
//! These errors represent failures in orchestration and at the ports, not
//! business rules. Business rule violations are `DomainError`.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Which generation call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStage {
    Exercises,
    Solution,
}

impl fmt::Display for GenerationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exercises => f.write_str("exercises"),
            Self::Solution => f.write_str("solution"),
        }
    }
}

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No working API key could be obtained.
    #[error("No working API key is available: {reason}")]
    CredentialUnavailable { reason: String },

    /// The persisted credential could not be read or written.
    #[error("Credential file error at {path}: {reason}")]
    CredentialStorage { path: PathBuf, reason: String },

    /// The content model rejected or failed a request.
    #[error("Model request failed: {reason}")]
    ModelRequest { reason: String },

    /// A generation call failed. Never retried.
    #[error("Generating {stage} failed: {reason}")]
    GenerationFailed {
        stage: GenerationStage,
        reason: String,
    },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The interactive prompt could not be shown or read.
    #[error("Prompt failed: {reason}")]
    PromptFailed { reason: String },

    /// The user aborted an interactive prompt.
    #[error("Prompt cancelled by user")]
    PromptCancelled,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::CredentialUnavailable { .. } => vec![
                "Create an API key at https://aistudio.google.com/app/apikey".into(),
                "Run `code-daily` again and paste the key when asked".into(),
            ],
            Self::CredentialStorage { path, .. } => vec![
                format!("Check that {} is readable and writable", path.display()),
                "Set credentials.file in the config to use another location".into(),
            ],
            Self::ModelRequest { .. } | Self::GenerationFailed { .. } => vec![
                "Check your network connection".into(),
                "Check that the API key is still valid".into(),
                "Try again in a moment; requests are not retried automatically".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Files written before the failure are left in place".into(),
            ],
            Self::PromptFailed { .. } => vec![
                "code-daily needs an interactive terminal".into(),
            ],
            Self::PromptCancelled => Vec::new(),
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::CredentialUnavailable { .. } | Self::CredentialStorage { .. } => {
                ErrorCategory::Credential
            }
            Self::ModelRequest { .. } | Self::GenerationFailed { .. } => ErrorCategory::Model,
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::PromptFailed { .. } => ErrorCategory::Internal,
            Self::PromptCancelled => ErrorCategory::Cancelled,
        }
    }
}
