//! Application ports (traits) for external dependencies.
//!
//! Ports define what the application needs from the outside world.
//! Adapters in `code-daily-adapters` and the CLI implement them.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: called by the application
//!   - `ContentModel`: text generation
//!   - `CredentialRepository`: persisted API key
//!   - `Filesystem`: directory creation and file writes
//!   - `Clock`: today's date
//!   - `UserPrompt`: blocking questions to the user
//!   - `SessionPresenter`: progress and results shown to the user

pub mod output;

pub use output::{
    Clock, ContentModel, CredentialRepository, Filesystem, SessionPresenter, UserPrompt,
};

#[cfg(test)]
pub use output::MockContentModel;
