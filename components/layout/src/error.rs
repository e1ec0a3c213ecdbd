//! Errors raised while placing a fold-aware layout.

/// Why a layout pass could not complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// The host had not resolved the container's window position by the
    /// time children were placed, so fold overlap could not be tested.
    #[error("window position of the fold-aware column is unavailable at placement time")]
    WindowPositionUnavailable,
}
