//! Error types for `phrasewise-core`.

use thiserror::Error;

/// Errors produced by passphrase generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Passphrase generation failure (invalid parameters).
    #[error("passphrase generation error: {0}")]
    Generation(String),
}
