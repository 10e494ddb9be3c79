//! Prevu - a file preview classifier library
//!
//! This crate decides which preview representation a display layer should
//! render for a file attachment: the image itself, a document icon, or a
//! generic icon. Classification is a pure function of an immutable descriptor
//! and a small per-descriptor load state; the image fetch itself is owned by
//! the display layer, which reports back success or failure signals.

pub mod classifier;
pub mod cli;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod manifest;

// Re-export primary types for convenience
pub use classifier::{classify, PreviewDecision, PreviewSession, PreviewState};
pub use config::UserConfig;
pub use descriptor::{FileDescriptor, IconKey};
pub use error::{PrevuError, Result};
pub use manifest::load_manifest;
