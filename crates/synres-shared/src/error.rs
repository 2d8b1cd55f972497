//! Error types for Synthetic Respondents.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SynresError {
    /// The single client-facing failure kind: non-success status, network
    /// failure or an undecodable body. The message is shown verbatim.
    #[error("{0}")]
    RequestFailed(String),

    #[error("Ollama error: {0}")]
    Ollama(String),

    #[error("{0}")]
    Parse(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SynresError {
    pub fn request_failed(message: impl Into<String>) -> Self {
        SynresError::RequestFailed(message.into())
    }
}

pub type Result<T> = std::result::Result<T, SynresError>;
