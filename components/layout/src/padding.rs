//! Extra space reserved around a fold.

use foldkit_core::Density;

/// Padding, in dp, that widens the region children must not straddle.
///
/// Only `top` and `bottom` take part in fold avoidance: `top` is subtracted
/// from the fold's top edge and `bottom` is added to its bottom edge. The
/// horizontal edges exist so a padding value can be shared with other
/// containers, and are ignored here.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FoldPadding {
    /// Space above the fold.
    pub top: f32,
    /// Space below the fold.
    pub bottom: f32,
    /// Leading space (unused by fold avoidance).
    pub leading: f32,
    /// Trailing space (unused by fold avoidance).
    pub trailing: f32,
}

impl FoldPadding {
    /// No padding on any edge.
    pub const ZERO: Self = Self::all(0.0);

    /// Creates a [`FoldPadding`] with explicit edges.
    #[must_use]
    pub const fn new(top: f32, bottom: f32, leading: f32, trailing: f32) -> Self {
        Self {
            top,
            bottom,
            leading,
            trailing,
        }
    }

    /// Returns equal padding on every edge.
    #[must_use]
    pub const fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Returns symmetric vertical and horizontal padding.
    #[must_use]
    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self::new(vertical, vertical, horizontal, horizontal)
    }

    /// Returns padding above and below the fold only.
    #[must_use]
    pub const fn vertical(top: f32, bottom: f32) -> Self {
        Self::new(top, bottom, 0.0, 0.0)
    }

    /// Top padding in whole pixels.
    #[must_use]
    pub fn top_px(&self, density: Density) -> f32 {
        density.round_to_px(self.top)
    }

    /// Bottom padding in whole pixels.
    #[must_use]
    pub fn bottom_px(&self, density: Density) -> f32 {
        density.round_to_px(self.bottom)
    }
}
