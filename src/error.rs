use std::io;

use foldkit_layout::LayoutError;

/// Result alias used across the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors surfaced by foldkit.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A layout pass could not complete.
    #[error(transparent)]
    Layout(#[from] LayoutError),
    /// A configuration document could not be parsed.
    #[error("invalid fold configuration: {0}")]
    Config(#[from] serde_json::Error),
    /// A configuration file could not be read.
    #[error("failed to read fold configuration: {0}")]
    Io(#[from] io::Error),
}
