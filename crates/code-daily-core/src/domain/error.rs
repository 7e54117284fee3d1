// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (the session reports them and keeps going)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("unknown language '{0}'")]
    UnknownLanguage(String),

    #[error("unknown section '{0}'")]
    UnknownSection(String),

    #[error("{language} does not offer the '{section}' section")]
    SectionNotOffered { language: String, section: String },

    #[error("'{input}' is not an exercise number between 1 and 5")]
    InvalidExerciseNumber { input: String },

    #[error("API key must not be empty")]
    EmptyCredential,

    #[error("Scaffold path must be relative and stay inside the exercise folder: {path}")]
    InvalidScaffoldPath { path: String },

    #[error("Duplicate path in workspace layout: {path}")]
    DuplicatePath { path: String },

    // ========================================================================
    // Generated content did not have the expected shape
    // ========================================================================
    #[error("could not extract exercise {number}: {kind}")]
    ExtractionMismatch {
        number: u32,
        kind: ExtractionMismatchKind,
    },
}

/// Why a numbered exercise could not be cut out of a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionMismatchKind {
    /// `Exercise {n}` does not appear in the document.
    MarkerMissing,
    /// `Exercise {n}` appears more than once, so the boundary is ambiguous.
    MarkerDuplicated,
    /// The marker exists but nothing but whitespace follows it.
    EmptyBody,
}

impl std::fmt::Display for ExtractionMismatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MarkerMissing => f.write_str("its heading is missing from exercises.md"),
            Self::MarkerDuplicated => f.write_str("its heading appears more than once"),
            Self::EmptyBody => f.write_str("its body is empty"),
        }
    }
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownLanguage(lang) => vec![
                format!("'{}' is not in the catalog", lang),
                "Supported: javascript, python, typescript, rust, go".into(),
                "Run `code-daily list` to see every language and section".into(),
            ],
            Self::UnknownSection(_) | Self::SectionNotOffered { .. } => vec![
                "Run `code-daily list --lang <language>` to see its sections".into(),
            ],
            Self::InvalidExerciseNumber { .. } => {
                vec!["Enter a whole number from 1 to 5".into()]
            }
            Self::EmptyCredential => vec![
                "Paste the API key from Google AI Studio".into(),
            ],
            Self::ExtractionMismatch { number, .. } => vec![
                format!("Open exercises.md and check the 'Exercise {}' heading", number),
                "Generate a fresh batch if the document is malformed".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownLanguage(_) | Self::UnknownSection(_) | Self::SectionNotOffered { .. } => {
                ErrorCategory::NotFound
            }
            Self::InvalidExerciseNumber { .. } | Self::EmptyCredential => {
                ErrorCategory::Validation
            }
            Self::ExtractionMismatch { .. } => ErrorCategory::Content,
            Self::InvalidScaffoldPath { .. } | Self::DuplicatePath { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Content,
    Internal,
}
