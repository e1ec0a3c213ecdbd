#![doc = include_str!("../README.md")]

pub mod column;
pub mod config;
/// Error type covering layout, configuration and I/O failures.
pub mod error;
pub mod host;
pub mod logging;

#[doc(inline)]
pub use column::{ColumnLayout, FoldAwareColumn};
#[doc(inline)]
pub use config::FoldConfig;
#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use host::{FixedHost, Host};

pub use foldkit_core as types;
pub use foldkit_layout as layout;

pub use foldkit_core::{
    Density, DisplayFeature, DisplayFeatures, FoldOrientation, FoldingFeature, Point,
    ProposalSize, Rect, Size, SubView,
};
pub use foldkit_layout::{FoldPadding, LayoutError, MissingPosition};

pub mod prelude {
    //! Commonly used types for laying out a fold-aware column.
    //!
    //! ```rust
    //! use foldkit::prelude::*;
    //! ```
    pub use super::{
        ColumnLayout, Density, DisplayFeature, DisplayFeatures, FixedHost, FoldAwareColumn,
        FoldConfig, FoldOrientation, FoldPadding, FoldingFeature, Host, MissingPosition, Point,
        ProposalSize, Rect, Size, SubView,
    };
}
