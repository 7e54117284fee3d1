//! Infrastructure adapters for code-daily.
//!
//! This crate implements the ports defined in `code_daily_core::application::ports`.
//! All network, filesystem and clock access lives here.

pub mod clock;
pub mod credentials;
pub mod filesystem;
pub mod model;

// Re-export commonly used adapters
pub use clock::SystemClock;
pub use credentials::DotenvCredentialFile;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use model::{GeminiClient, GeminiConfig};
