use crate::domain::{ExerciseBatch, ExerciseNumber, LanguageKey, SectionKey, Workspace};

/// Where the interactive session is.
///
/// `Generating`, `Scaffolding` and `OfferingSolution::GeneratingSolution`
/// are the only states that call out to the model or the filesystem.
/// `Terminated` is reached only from the language menu's Exit entry or from
/// `OfferingContinuation`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    AwaitingCredential,
    SelectingLanguage,
    SelectingSection {
        language: LanguageKey,
    },
    Generating {
        language: LanguageKey,
        section: SectionKey,
    },
    Scaffolding {
        language: LanguageKey,
        section: SectionKey,
        batch: ExerciseBatch,
    },
    OfferingSolution {
        round: Round,
        phase: SolutionPhase,
    },
    OfferingContinuation,
    Terminated,
}

/// Sub-states of `OfferingSolution`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionPhase {
    Idle,
    AwaitingExerciseNumber,
    GeneratingSolution { number: ExerciseNumber },
}

/// The batch of the current round and the workspace it was written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub workspace: Workspace,
    pub batch: ExerciseBatch,
}

impl SessionState {
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminated)
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::AwaitingCredential => "awaiting-credential",
            Self::SelectingLanguage => "selecting-language",
            Self::SelectingSection { .. } => "selecting-section",
            Self::Generating { .. } => "generating",
            Self::Scaffolding { .. } => "scaffolding",
            Self::OfferingSolution { phase, .. } => match phase {
                SolutionPhase::Idle => "offering-solution",
                SolutionPhase::AwaitingExerciseNumber => "awaiting-exercise-number",
                SolutionPhase::GeneratingSolution { .. } => "generating-solution",
            },
            Self::OfferingContinuation => "offering-continuation",
            Self::Terminated => "terminated",
        }
    }
}
