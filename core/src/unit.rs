//! Density-independent units.
//!
//! Paddings and other user-facing lengths are written in dp (density
//! independent pixels). A [`Density`] converts them into the physical pixels
//! used by [`crate::layout`] at layout time.

/// The host's pixel density.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Density {
    scale: f32,
}

impl Default for Density {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Density {
    /// Creates a density from the number of pixels per dp.
    #[must_use]
    pub const fn new(scale: f32) -> Self {
        Self { scale }
    }

    /// Pixels per dp.
    #[must_use]
    pub const fn scale(&self) -> f32 {
        self.scale
    }

    /// Converts dp to fractional pixels.
    #[must_use]
    pub fn to_px(&self, dp: f32) -> f32 {
        dp * self.scale
    }

    /// Converts dp to whole pixels, rounding halves toward positive infinity
    /// (`-1.5` px becomes `-1`).
    ///
    /// Infinite values stay infinite.
    #[must_use]
    pub fn round_to_px(&self, dp: f32) -> f32 {
        let px = self.to_px(dp);
        if px.is_infinite() { px } else { floor_px(px + 0.5) }
    }
}

/// Drops the fractional part of a pixel value, rounding toward zero.
///
/// NaN and values too large to carry a fraction are returned unchanged.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn trunc_px(px: f32) -> f32 {
    // Every f32 at or beyond 2^23 is already integral.
    if px.is_nan() || !(-8_388_608.0..8_388_608.0).contains(&px) {
        return px;
    }
    px as i32 as f32
}

// `f32::floor` lives in std.
fn floor_px(px: f32) -> f32 {
    let truncated = trunc_px(px);
    if truncated > px { truncated - 1.0 } else { truncated }
}
