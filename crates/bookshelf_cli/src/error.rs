use bookshelf_core::{ConfigError, LoggingError, StoreError};
use thiserror::Error;

/// Errors that can end or interrupt a CLI session.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Terminal read/write failure
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Standard input reached end of file
    #[error("input closed")]
    InputClosed,

    /// Settings file could not be used
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog file could not be saved or loaded
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Log backend could not start
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),
}
