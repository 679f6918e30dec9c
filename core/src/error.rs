use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid config field '{field}': {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("Record incomplete: '{field}' was never set")]
    IncompleteRecord { field: &'static str },

    #[error("Distribution rejected parameters: {0}")]
    Distribution(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GenError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig { field, reason: reason.into() }
    }
}

pub type GenResult<T> = Result<T, GenError>;
