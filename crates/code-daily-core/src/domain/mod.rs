//! Core domain layer for code-daily.
//!
//! Pure logic only. Filesystem, network and terminal access are reached
//! through the ports defined in the application layer.
//!
//! - **No I/O**: prompts, extraction and layout planning are plain functions
//! - **Static catalog**: languages, sections and starter files are `'static` data
//! - **Typed failures**: every rejection is a [`DomainError`] variant

pub mod catalog;
pub mod entities;
pub mod error;
pub mod extractor;
pub mod prompts;
pub mod value_objects;

mod validation;

pub use catalog::{FileTemplate, LanguageProfile, SectionTemplate};
pub use entities::{
    ExerciseBatch, Solution, Workspace, WorkspaceLayout,
    common::RelativePath,
    workspace::{DirectoryToCreate, FileToWrite, FsEntry},
};
pub use error::{DomainError, ErrorCategory, ExtractionMismatchKind};
pub use validation::DomainValidator;
pub use value_objects::{Credential, EXERCISES_PER_BATCH, ExerciseNumber, LanguageKey, SectionKey};
