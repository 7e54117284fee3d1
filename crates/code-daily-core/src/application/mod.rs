//! Application layer for code-daily.
//!
//! This layer contains:
//! - **Services**: use case orchestration (credential check, generation,
//!   scaffolding and the interactive session)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! Business rules live in `crate::domain`; this layer only sequences them.

pub mod error;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use services::{
    ContentGenerator, CredentialStore, SessionController, SessionEvent, SessionState,
    SolutionPhase, WorkspaceScaffolder,
};

pub use ports::{
    Clock, ContentModel, CredentialRepository, Filesystem, SessionPresenter, UserPrompt,
};

pub use error::{ApplicationError, GenerationStage};
