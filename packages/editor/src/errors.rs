//! Error types for the editor boundary
//!
//! Mutations themselves never fail (see [`crate::Outcome`]); these errors
//! come from decoding input that crosses into the editor.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Unknown component kind: {0}")]
    UnknownKind(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}
