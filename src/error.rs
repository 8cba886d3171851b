//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Parsing itself never fails; these variants cover the I/O, JSON and
//! configuration plumbing around it.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config file {path:?}: {message}")]
    Config { path: PathBuf, message: String },
}

impl Error {
    pub fn config<E: std::fmt::Display>(path: impl Into<PathBuf>, e: E) -> Self {
        Error::Config {
            path: path.into(),
            message: e.to_string(),
        }
    }
}
