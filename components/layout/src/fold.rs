//! Selecting the fold a column avoids.

use foldkit_core::{Density, DisplayFeature, Rect};

use crate::padding::FoldPadding;

/// The horizontal fold a column avoids, with padding already applied.
///
/// Values are in window pixels and fixed for the whole layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fold {
    exclusion: Rect,
    is_separating: bool,
}

impl Fold {
    /// Creates a fold from an exclusion rectangle that already includes any
    /// padding.
    #[must_use]
    pub const fn new(exclusion: Rect, is_separating: bool) -> Self {
        Self {
            exclusion,
            is_separating,
        }
    }

    /// Picks the first horizontal folding feature and expands it by the
    /// vertical padding.
    ///
    /// Vertical folds and non-folding features are skipped. Returns `None`
    /// when nothing qualifies, in which case the column behaves as a plain
    /// stack.
    #[must_use]
    pub fn select(features: &[DisplayFeature], padding: &FoldPadding, density: Density) -> Option<Self> {
        let Some(feature) = features
            .iter()
            .filter_map(DisplayFeature::as_folding)
            .find(|feature| feature.is_horizontal())
        else {
            tracing::trace!(features = features.len(), "no horizontal fold");
            return None;
        };

        let bounds = feature.bounds();
        let exclusion = Rect::from_ltrb(
            bounds.left(),
            bounds.top() - padding.top_px(density),
            bounds.right(),
            bounds.bottom() + padding.bottom_px(density),
        );

        tracing::debug!(
            top = exclusion.top(),
            bottom = exclusion.bottom(),
            separating = feature.is_separating(),
            "selected horizontal fold"
        );

        Some(Self::new(exclusion, feature.is_separating()))
    }

    /// The padded fold bounds in window pixels.
    #[must_use]
    pub const fn exclusion(&self) -> Rect {
        self.exclusion
    }

    /// Height of the padded fold, reserved in the column's total height.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.exclusion.height()
    }

    /// Whether children must be moved off the fold.
    #[must_use]
    pub const fn is_separating(&self) -> bool {
        self.is_separating
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use foldkit_core::{FoldOrientation, FoldingFeature};

    fn horizontal(top: f32, bottom: f32, separating: bool) -> DisplayFeature {
        FoldingFeature::new(
            Rect::from_ltrb(0.0, top, 800.0, bottom),
            FoldOrientation::Horizontal,
            separating,
        )
        .into()
    }

    #[test]
    fn test_no_features() {
        assert_eq!(Fold::select(&[], &FoldPadding::ZERO, Density::default()), None);
    }

    #[test]
    fn test_first_horizontal_fold_wins() {
        let features = vec![
            DisplayFeature::Other {
                bounds: Rect::from_ltrb(300.0, 0.0, 400.0, 30.0),
            },
            FoldingFeature::new(
                Rect::from_ltrb(390.0, 0.0, 410.0, 1600.0),
                FoldOrientation::Vertical,
                true,
            )
            .into(),
            horizontal(100.0, 120.0, true),
            horizontal(500.0, 520.0, false),
        ];

        let fold = Fold::select(&features, &FoldPadding::ZERO, Density::default()).unwrap();

        assert_eq!(fold.exclusion(), Rect::from_ltrb(0.0, 100.0, 800.0, 120.0));
        assert_eq!(fold.height(), 20.0);
        assert!(fold.is_separating());
    }

    #[test]
    fn test_vertical_fold_only() {
        let features = vec![DisplayFeature::Folding(FoldingFeature::new(
            Rect::from_ltrb(390.0, 0.0, 410.0, 1600.0),
            FoldOrientation::Vertical,
            true,
        ))];

        assert_eq!(Fold::select(&features, &FoldPadding::ZERO, Density::default()), None);
    }

    #[test]
    fn test_padding_widens_exclusion() {
        let features = vec![horizontal(100.0, 120.0, true)];

        let fold = Fold::select(&features, &FoldPadding::new(10.0, 10.0, 50.0, 50.0), Density::default())
            .unwrap();

        // Leading and trailing padding are ignored.
        assert_eq!(fold.exclusion(), Rect::from_ltrb(0.0, 90.0, 800.0, 130.0));
        assert_eq!(fold.height(), 40.0);
    }

    #[test]
    fn test_padding_is_converted_to_pixels() {
        let features = vec![horizontal(100.0, 120.0, true)];

        let fold = Fold::select(&features, &FoldPadding::vertical(4.0, 2.0), Density::new(2.5)).unwrap();

        assert_eq!(fold.exclusion().top(), 90.0);
        assert_eq!(fold.exclusion().bottom(), 125.0);
    }
}
