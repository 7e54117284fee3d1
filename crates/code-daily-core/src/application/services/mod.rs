//! Application services - orchestrate use cases.

pub mod content_service;
pub mod credential_service;
pub mod scaffold_service;
pub mod session;

pub use content_service::ContentGenerator;
pub use credential_service::CredentialStore;
pub use scaffold_service::WorkspaceScaffolder;
pub use session::{SessionController, SessionEvent, SessionState, SolutionPhase};
