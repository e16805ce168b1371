use thiserror::Error;

use crate::diagnostics::Stage;

/// Errors that abort a run or a whole input file.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("JSON error in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },

    /// The input parsed as JSON but is not the expected mapping
    #[error("Malformed input {path}: {reason}")]
    MalformedInput { path: String, reason: String },

    #[error("Config error: {0}")]
    Config(String),
}

impl EngineError {
    pub fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// A failure confined to one item. The batch records it and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("item {id} failed at {stage}: {reason}")]
pub struct ItemError {
    /// Numeric id, or the raw key when the id itself is unusable.
    pub id: String,
    pub stage: Stage,
    pub reason: String,
}

impl ItemError {
    pub fn new(id: impl ToString, stage: Stage, reason: impl Into<String>) -> Self {
        Self {
            id: id.to_string(),
            stage,
            reason: reason.into(),
        }
    }
}
