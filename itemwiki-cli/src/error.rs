use thiserror::Error;

use itemwiki_lib::EngineError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Engine failure that aborts the run
    #[error("{0}")]
    Engine(#[from] EngineError),

    /// Runtime creation or async error
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// Item id not present in the scraped input
    #[error("Unknown item: {0}")]
    UnknownItem(String),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

impl CliError {
    pub(crate) fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }

    pub(crate) fn unknown_item(msg: impl Into<String>) -> Self {
        Self::UnknownItem(msg.into())
    }

    pub(crate) fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
