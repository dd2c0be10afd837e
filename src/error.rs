//! Error types for the `usbtint` application.
//!
//! Uses [`thiserror`] for ergonomic error derivation.

use thiserror::Error;

/// Errors that can occur in `usbtint`.
///
/// Maps to exit codes: [`Config`](Self::Config) → exit 1,
/// [`Io`](Self::Io) → exit 2. Per-line log content never produces an error;
/// unrecognized lines are dropped and garbled bytes are decoded best-effort.
#[derive(Debug, Error)]
pub enum TintError {
    /// Configuration error (unknown dialect name, unreadable config file).
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error during read or write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML deserialization error.
    #[error("config file error: {0}")]
    Toml(#[from] toml::de::Error),
}
