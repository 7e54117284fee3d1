//! code-daily core - ports-and-adapters implementation.
//!
//! This crate provides the domain and application layers for the
//! `code-daily` practice generator.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          code-daily-cli (CLI)           │
//! │   (dialoguer prompt, terminal output)   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (SessionController, CredentialStore,   │
//! │ ContentGenerator, WorkspaceScaffolder)  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (ContentModel, Filesystem, UserPrompt…) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   code-daily-adapters (Infrastructure)  │
//! │ (GeminiClient, LocalFilesystem, .env)   │
//! └─────────────────────────────────────────┘
//!
//! Domain layer (pure logic): catalog, extractor, prompts, workspace layout
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use code_daily_core::prelude::*;
//!
//! let model: Arc<dyn ContentModel> = Arc::new(gemini_client);
//! let mut session = SessionController::new(
//!     CredentialStore::new(Box::new(credential_file), Arc::clone(&model)),
//!     model,
//!     WorkspaceScaffolder::new(Box::new(filesystem), Box::new(clock), "."),
//!     Box::new(prompt),
//!     Box::new(presenter),
//! );
//! session.run()?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, ContentGenerator, CredentialStore, GenerationStage, SessionController,
        SessionEvent, SessionState, WorkspaceScaffolder,
        ports::{
            Clock, ContentModel, CredentialRepository, Filesystem, SessionPresenter, UserPrompt,
        },
    };
    pub use crate::domain::{
        Credential, DomainError, ExerciseBatch, ExerciseNumber, LanguageKey, SectionKey, Solution,
        Workspace, WorkspaceLayout,
    };
    pub use crate::error::{CoreError, CoreResult, ErrorCategory};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
