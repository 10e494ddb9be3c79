//! Error types shared across the crate

use thiserror::Error;

/// Errors that can occur while loading configuration or descriptor manifests.
///
/// Note that a failed image load is deliberately *not* represented here: the
/// display layer reports it as a signal and it is absorbed into
/// [`crate::classifier::PreviewState`], never surfaced as an error value.
#[derive(Debug, Error)]
pub enum PrevuError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PrevuError>;
