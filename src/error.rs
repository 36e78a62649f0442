//! Server error type.

use thiserror::Error;

/// Errors that stop the server from starting or serving.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
