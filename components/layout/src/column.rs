//! Vertical stack that keeps children off a separating fold.

use alloc::vec::Vec;
use foldkit_core::{Density, DisplayFeature, unit::trunc_px};

use crate::{Fold, FoldPadding, Layout, LayoutError, Point, ProposalSize, Rect, Size, SubView};

/// What to do when the host cannot report the column's window position at
/// placement time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MissingPosition {
    /// Fail the pass with [`LayoutError::WindowPositionUnavailable`].
    #[default]
    Fail,
    /// Place the column as if it sat at the window origin.
    AssumeOrigin,
}

/// Layout engine behind the fold-aware column.
///
/// Children are stacked top to bottom and left-aligned. When the selected
/// fold is separating, a child whose frame would overlap the fold is moved
/// down to start at the fold's bottom edge, and every later child follows it.
/// The fold's height is always added to the column's height, whether or not
/// any child needed to move.
//
// ═══════════════════════════════════════════════════════════════════════════
// INTERNAL: Layout Contract for Backend Implementers
// ═══════════════════════════════════════════════════════════════════════════
//
// Measurement: every child gets the column's own proposal, unchanged
// Width: widest child. Height: sum of children + padded fold height
// Placement: needs the column's window origin; vertical only, never clips
// Blank space left above a moved child is not redistributed
//
// ═══════════════════════════════════════════════════════════════════════════
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FoldAwareColumnLayout {
    fold: Option<Fold>,
    missing_position: MissingPosition,
}

impl FoldAwareColumnLayout {
    /// Creates the layout from the current display features.
    #[must_use]
    pub fn new(features: &[DisplayFeature], padding: &FoldPadding, density: Density) -> Self {
        Self::with_fold(Fold::select(features, padding, density))
    }

    /// Creates the layout around an already selected fold.
    #[must_use]
    pub const fn with_fold(fold: Option<Fold>) -> Self {
        Self {
            fold,
            missing_position: MissingPosition::Fail,
        }
    }

    /// Sets the policy for a missing window position.
    #[must_use]
    pub const fn missing_position(mut self, policy: MissingPosition) -> Self {
        self.missing_position = policy;
        self
    }

    /// The fold this layout avoids, if any.
    #[must_use]
    pub const fn fold(&self) -> Option<&Fold> {
        self.fold.as_ref()
    }

    /// Sizing phase: measures every child against `proposal`.
    #[must_use]
    pub fn measure(&self, proposal: ProposalSize, children: &[&dyn SubView]) -> MeasuredColumn {
        let sizes: Vec<Size> = children
            .iter()
            .map(|child| child.size_that_fits(proposal))
            .collect();

        let width = sizes
            .iter()
            .map(|size| size.width)
            .max_by(f32::total_cmp)
            .unwrap_or(0.0);
        let children_height: f32 = sizes.iter().map(|size| size.height).sum();
        let fold_height = self.fold.map_or(0.0, |fold| fold.height());

        MeasuredColumn {
            size: Size::new(width, children_height + fold_height),
            sizes,
            fold: self.fold,
            missing_position: self.missing_position,
        }
    }
}

impl Layout for FoldAwareColumnLayout {
    fn size_that_fits(&self, proposal: ProposalSize, children: &[&dyn SubView]) -> Size {
        self.measure(proposal, children).size()
    }

    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Rect> {
        let origin = bounds.origin();
        self.measure(ProposalSize::new(bounds.width(), None), children)
            .place_at(origin)
            .frames()
            .iter()
            .map(|frame| frame.translate(origin.x, origin.y))
            .collect()
    }
}

/// Result of the sizing phase, waiting for the column's window position.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasuredColumn {
    size: Size,
    sizes: Vec<Size>,
    fold: Option<Fold>,
    missing_position: MissingPosition,
}

impl MeasuredColumn {
    /// The column's size: widest child by summed heights plus fold height.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Measured size of every child, in input order.
    #[must_use]
    pub fn child_sizes(&self) -> &[Size] {
        &self.sizes
    }

    /// Placement phase.
    ///
    /// `window_origin` is the column's top-left corner in window coordinates
    /// as resolved by the host.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::WindowPositionUnavailable`] when `window_origin`
    /// is `None` and the layout was built with [`MissingPosition::Fail`].
    pub fn place(&self, window_origin: Option<Point>) -> Result<ColumnPlacement, LayoutError> {
        match (window_origin, self.missing_position) {
            (Some(origin), _) => Ok(self.place_at(origin)),
            (None, MissingPosition::AssumeOrigin) => {
                tracing::warn!("window position unavailable, placing fold-aware column at origin");
                Ok(self.place_at(Point::zero()))
            }
            (None, MissingPosition::Fail) => Err(LayoutError::WindowPositionUnavailable),
        }
    }

    /// Placement phase with a known window origin.
    #[must_use]
    pub fn place_at(&self, window_origin: Point) -> ColumnPlacement {
        let avoid = self.fold.filter(Fold::is_separating);
        let mut frames = Vec::with_capacity(self.sizes.len());
        let mut cursor = 0.0;

        for (index, size) in self.sizes.iter().enumerate() {
            if let Some(fold) = avoid {
                let candidate = Rect::new(Point::new(0.0, cursor), *size)
                    .translate(window_origin.x, window_origin.y);

                if candidate.overlaps(&fold.exclusion()) {
                    // Snapped offsets are whole pixels, truncated toward zero.
                    cursor = trunc_px(fold.exclusion().bottom() - window_origin.y);
                    tracing::debug!(child = index, y = cursor, "moved child below fold");
                }
            }

            frames.push(Rect::new(Point::new(0.0, cursor), *size));
            cursor += size.height;
        }

        ColumnPlacement {
            size: self.size,
            frames,
        }
    }
}

/// Final layout of the column: its size and every child's frame.
///
/// Frames are local to the column, so every frame's x is 0.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColumnPlacement {
    size: Size,
    frames: Vec<Rect>,
}

impl ColumnPlacement {
    /// The column's size.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Child frames in input order.
    #[must_use]
    pub fn frames(&self) -> &[Rect] {
        &self.frames
    }

    /// Child offsets in input order.
    pub fn offsets(&self) -> impl ExactSizeIterator<Item = Point> + '_ {
        self.frames.iter().map(Rect::origin)
    }

    /// Consumes the placement, returning the child frames.
    #[must_use]
    pub fn into_frames(self) -> Vec<Rect> {
        self.frames
    }
}
