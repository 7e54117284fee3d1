pub mod common;
pub mod content;
pub mod workspace;

pub use crate::domain::DomainError;
pub use content::{ExerciseBatch, Solution};
pub use workspace::{Workspace, WorkspaceLayout};
