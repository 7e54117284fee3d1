//! Credential persistence adapters.

mod dotenv_file;

pub use dotenv_file::{DEFAULT_CREDENTIALS_FILE, DEFAULT_KEY_NAME, DotenvCredentialFile};
