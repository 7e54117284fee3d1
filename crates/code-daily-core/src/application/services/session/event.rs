use std::path::PathBuf;

use crate::application::GenerationStage;
use crate::domain::ExerciseNumber;
use crate::error::CoreError;

/// Everything the session tells the user, in the order it happens.
///
/// Presenters decide how each event looks; the session never prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// A stored key was found and is about to be probed.
    CredentialFound { masked: String },
    CredentialMissing,
    /// The model refused the key.
    CredentialRejected,
    CredentialSaved { masked: String },

    GenerationStarted(GenerationStage),
    GenerationFinished(GenerationStage),
    /// The model call failed; the error follows separately.
    GenerationFailed(GenerationStage),

    WorkspaceReady { root: PathBuf, starter_files: usize },
    SolutionSaved {
        number: ExerciseNumber,
        path: PathBuf,
        text: String,
    },

    /// A failure the session recovers from.
    Problem {
        message: String,
        suggestions: Vec<String>,
    },

    RoundFinished,
    Farewell,
}

impl SessionEvent {
    pub fn problem(error: &CoreError) -> Self {
        Self::Problem {
            message: error.to_string(),
            suggestions: error.suggestions(),
        }
    }
}
