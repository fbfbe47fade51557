use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum CcpError {
    #[error("I/O Error: {0}")]
    Io(#[from] Arc<std::io::Error>),

    #[error("JSON Error: {0}")]
    Json(#[from] Arc<serde_json::Error>),

    #[error("Truncated input: wanted {wanted} bytes at offset {offset:#x}, but the source is {available} bytes long")]
    TruncatedInput {
        offset: u64,
        wanted: u64,
        available: u64,
    },

    #[error("Resource Not Found: {0}")]
    NotFound(String),

    #[error("Unable to read {}: {reason}", .path.display())]
    Unreadable { path: PathBuf, reason: String },

    #[error("Directory walk failed: {0}")]
    Walk(String),

    #[error("Configuration Error: {0}")]
    Config(String),
}

impl CcpError {
    /// True when a read ran past the end of its byte source.
    pub fn is_truncated(&self) -> bool {
        matches!(self, CcpError::TruncatedInput { .. })
    }
}

impl From<std::io::Error> for CcpError {
    fn from(err: std::io::Error) -> Self {
        CcpError::Io(Arc::new(err))
    }
}

impl From<serde_json::Error> for CcpError {
    fn from(err: serde_json::Error) -> Self {
        CcpError::Json(Arc::new(err))
    }
}

pub type Result<T> = std::result::Result<T, CcpError>;
