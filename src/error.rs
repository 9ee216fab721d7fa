//! Error types for the laugh detection library.
//!
//! The error surface is deliberately narrow: per-frame geometric input never
//! produces an error (malformed landmarks degrade to zero-valued features so
//! a corrupted frame cannot disrupt the temporal state). Errors only arise
//! from configuration handling and trace file I/O.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Landmark trace parsing error
    #[error("Trace error: {0}")]
    TraceError(String),

    /// Invalid input parameters provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
