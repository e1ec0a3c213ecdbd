#![no_std]
//! Fold-aware layout containers.
//!
//! A foldable device reports its hinge as a [`FoldingFeature`]. The
//! [`FoldAwareColumnLayout`] stacks its children top to bottom like an
//! ordinary column, but when the hinge separates content it moves any child
//! that would straddle the hinge down so that it starts just below it.
//!
//! The layout runs in two explicit phases:
//!
//! 1. [`FoldAwareColumnLayout::measure`] measures every child and sizes the
//!    column. No window position is needed.
//! 2. [`MeasuredColumn::place`] receives the column's window position, once
//!    the host has resolved it, and assigns each child an offset.
//!
//! # Example
//!
//! ```rust,ignore
//! use foldkit_layout::{FoldAwareColumnLayout, FoldPadding};
//!
//! let layout = FoldAwareColumnLayout::new(&features, &FoldPadding::vertical(8.0, 8.0), density);
//! let measured = layout.measure(proposal, &children);
//! let placement = measured.place(host.window_position())?;
//! ```
//!
//! [`FoldingFeature`]: foldkit_core::FoldingFeature

extern crate alloc;

pub use foldkit_core::layout::*;

pub mod column;
pub mod error;
pub mod fold;
pub mod padding;

pub use column::{ColumnPlacement, FoldAwareColumnLayout, MeasuredColumn, MissingPosition};
pub use error::LayoutError;
pub use fold::Fold;
pub use padding::FoldPadding;
