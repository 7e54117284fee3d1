//! Content model adapters.

mod gemini;

pub use gemini::{DEFAULT_API_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS, GeminiClient, GeminiConfig};
