use thiserror::Error;

// Bring in specific errors from the modules that own them
use crate::config::ConfigError;
use crate::io::IoError;
use crate::text::WrapError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    #[error("Serialization/Deserialization error (JSON): {0}")]
    Json(#[from] serde_json::Error),

    #[error("Wrap error: {0}")]
    Wrap(#[from] WrapError),

    #[error("Template error: {0}")]
    Template(#[from] handlebars::RenderError),
}

pub type AppResult<T> = Result<T, AppError>;
