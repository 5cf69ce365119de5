//! Errors raised while loading the startup data set.

use service_core::error::AppError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("Failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed model artifact: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Column '{0}' not found")]
    MissingColumn(String),

    #[error("Invalid training header: {0}")]
    InvalidSchema(String),

    #[error("Invalid model artifact: {0}")]
    InvalidModel(String),
}

impl DataError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DataError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<DataError> for AppError {
    fn from(err: DataError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}
