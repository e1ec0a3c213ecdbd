#![no_std]
//! Core types shared by every foldkit crate.
//!
//! - [`layout`]: pixel geometry and the two-phase [`SubView`]/[`Layout`]
//!   protocol,
//! - [`display`]: the display features a host reports for the current window,
//! - [`unit`]: density-aware conversion from dp to pixels.
//!
//! Everything here is plain data. Nothing is cached between layout passes.

extern crate alloc;

pub mod display;
pub mod layout;
pub mod unit;

pub use display::{DisplayFeature, DisplayFeatures, FoldOrientation, FoldingFeature};
pub use layout::{Layout, Point, ProposalSize, Rect, Size, SubView};
pub use unit::Density;
