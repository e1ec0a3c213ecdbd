//! The fold-aware column as an application-facing component.
//!
//! [`FoldAwareColumn`] bundles the inputs of one column (display features,
//! fold padding, a styling modifier and the children) and runs the two layout
//! phases against a [`Host`].
//!
//! ```rust
//! use foldkit::prelude::*;
//!
//! struct Block(f32);
//!
//! impl SubView for Block {
//!     fn size_that_fits(&self, _proposal: ProposalSize) -> Size {
//!         Size::new(300.0, self.0)
//!     }
//! }
//!
//! let hinge = FoldingFeature::from_bounds(Rect::from_ltrb(0.0, 100.0, 1080.0, 120.0), true);
//! let host = FixedHost::new(vec![DisplayFeature::from(hinge)]);
//!
//! let column = FoldAwareColumn::from_host(&host, [
//!     Box::new(Block(60.0)) as Box<dyn SubView>,
//!     Box::new(Block(60.0)),
//! ]);
//!
//! let layout = column.layout(&host, ProposalSize::UNSPECIFIED)?;
//! assert_eq!(layout.offsets, vec![Point::new(0.0, 0.0), Point::new(0.0, 120.0)]);
//! assert_eq!(layout.height, 140.0);
//! # Ok::<(), foldkit::Error>(())
//! ```

use std::fmt::{self, Debug};

use foldkit_core::{Density, DisplayFeatures, Point, ProposalSize, Size, SubView};
use foldkit_layout::{
    ColumnPlacement, FoldAwareColumnLayout, FoldPadding, MeasuredColumn, MissingPosition,
};

use crate::{Host, Result};

/// A vertical stack that keeps its children off a separating horizontal fold.
///
/// `M` is a styling modifier owned by the rendering layer. The column stores
/// it and hands it back through [`modifier`](Self::modifier) without looking
/// at it.
pub struct FoldAwareColumn<'a, M = ()> {
    display_features: DisplayFeatures,
    fold_padding: FoldPadding,
    missing_position: MissingPosition,
    modifier: M,
    content: Vec<Box<dyn SubView + 'a>>,
}

impl<M: Debug> Debug for FoldAwareColumn<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FoldAwareColumn")
            .field("display_features", &self.display_features)
            .field("fold_padding", &self.fold_padding)
            .field("missing_position", &self.missing_position)
            .field("modifier", &self.modifier)
            .field("children", &self.content.len())
            .finish()
    }
}

impl<'a> FoldAwareColumn<'a> {
    /// Creates a column from a display-feature snapshot and its children.
    pub fn new<C>(display_features: impl Into<DisplayFeatures>, content: C) -> Self
    where
        C: IntoIterator<Item = Box<dyn SubView + 'a>>,
    {
        Self {
            display_features: display_features.into(),
            fold_padding: FoldPadding::default(),
            missing_position: MissingPosition::default(),
            modifier: (),
            content: content.into_iter().collect(),
        }
    }

    /// Creates a column using the host's current display features.
    pub fn from_host<H, C>(host: &H, content: C) -> Self
    where
        H: Host + ?Sized,
        C: IntoIterator<Item = Box<dyn SubView + 'a>>,
    {
        Self::new(host.display_features(), content)
    }
}

impl<'a, M> FoldAwareColumn<'a, M> {
    /// Sets the padding added around the fold.
    #[must_use]
    pub fn fold_padding(mut self, padding: FoldPadding) -> Self {
        self.fold_padding = padding;
        self
    }

    /// Sets what happens when the host has no window position at placement.
    #[must_use]
    pub fn missing_position(mut self, policy: MissingPosition) -> Self {
        self.missing_position = policy;
        self
    }

    /// Replaces the styling modifier.
    #[must_use]
    pub fn with_modifier<N>(self, modifier: N) -> FoldAwareColumn<'a, N> {
        FoldAwareColumn {
            display_features: self.display_features,
            fold_padding: self.fold_padding,
            missing_position: self.missing_position,
            modifier,
            content: self.content,
        }
    }

    /// The styling modifier, untouched.
    #[must_use]
    pub const fn modifier(&self) -> &M {
        &self.modifier
    }

    /// The display features this column was built with.
    #[must_use]
    pub const fn display_features(&self) -> &DisplayFeatures {
        &self.display_features
    }

    /// The padding added around the fold.
    #[must_use]
    pub const fn padding(&self) -> &FoldPadding {
        &self.fold_padding
    }

    /// Number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Whether the column has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Builds the layout engine for the given density.
    #[must_use]
    pub fn engine(&self, density: Density) -> FoldAwareColumnLayout {
        FoldAwareColumnLayout::new(self.display_features.as_slice(), &self.fold_padding, density)
            .missing_position(self.missing_position)
    }

    /// Sizing phase.
    #[must_use]
    pub fn measure(&self, density: Density, proposal: ProposalSize) -> MeasuredColumn {
        let children: Vec<&dyn SubView> = self
            .content
            .iter()
            .map(|child| &**child as &dyn SubView)
            .collect();
        self.engine(density).measure(proposal, &children)
    }

    /// Runs both phases against `host`.
    ///
    /// The window position is read from the host only after sizing has
    /// finished.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Layout`] if the host has no window position and
    /// the column uses [`MissingPosition::Fail`].
    pub fn layout<H>(&self, host: &H, proposal: ProposalSize) -> Result<ColumnLayout>
    where
        H: Host + ?Sized,
    {
        let measured = self.measure(host.density(), proposal);
        let placement = measured.place(host.window_position())?;

        tracing::debug!(
            children = self.content.len(),
            width = placement.size().width,
            height = placement.size().height,
            "laid out fold-aware column"
        );

        Ok(placement.into())
    }
}

/// The positioned result of a fold-aware column.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColumnLayout {
    /// Width of the widest child.
    pub width: f32,
    /// Summed child heights plus the padded fold height.
    pub height: f32,
    /// Each child's offset from the column's top-left corner, in input order.
    pub offsets: Vec<Point>,
}

impl ColumnLayout {
    /// The column's size.
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl From<ColumnPlacement> for ColumnLayout {
    fn from(placement: ColumnPlacement) -> Self {
        let size = placement.size();
        Self {
            width: size.width,
            height: size.height,
            offsets: placement.offsets().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, FixedHost};
    use foldkit_core::{DisplayFeature, FoldOrientation, FoldingFeature, Rect};
    use foldkit_layout::LayoutError;

    struct Block(f32, f32);

    impl SubView for Block {
        fn size_that_fits(&self, _proposal: ProposalSize) -> Size {
            Size::new(self.0, self.1)
        }
    }

    fn blocks(heights: &[f32]) -> Vec<Box<dyn SubView>> {
        heights
            .iter()
            .map(|&h| Box::new(Block(100.0, h)) as Box<dyn SubView>)
            .collect()
    }

    fn hinge(separating: bool) -> Vec<DisplayFeature> {
        vec![DisplayFeature::Folding(FoldingFeature::new(
            Rect::from_ltrb(0.0, 100.0, 1080.0, 120.0),
            FoldOrientation::Horizontal,
            separating,
        ))]
    }

    #[test]
    fn test_modifier_passes_through() {
        #[derive(Debug, PartialEq)]
        struct Style {
            background: u32,
        }

        let column = FoldAwareColumn::new(DisplayFeatures::empty(), blocks(&[10.0]))
            .with_modifier(Style { background: 0xff00_00ff });

        assert_eq!(column.modifier(), &Style { background: 0xff00_00ff });
        assert_eq!(column.len(), 1);
    }

    #[test]
    fn test_layout_with_host() {
        let host = FixedHost::new(hinge(true)).with_window_position(Some(Point::new(0.0, 40.0)));
        let column = FoldAwareColumn::from_host(&host, blocks(&[50.0, 50.0]));

        let layout = column.layout(&host, ProposalSize::UNSPECIFIED).unwrap();

        // Second child covers 90..140 in the window and moves to 120.
        assert_eq!(layout.offsets, vec![Point::new(0.0, 0.0), Point::new(0.0, 80.0)]);
        assert_eq!(layout.size(), Size::new(100.0, 120.0));
    }

    #[test]
    fn test_padding_uses_host_density() {
        let host = FixedHost::new(hinge(true)).with_density(Density::new(2.0));
        let column = FoldAwareColumn::from_host(&host, blocks(&[85.0]))
            .fold_padding(FoldPadding::vertical(5.0, 5.0));

        let layout = column.layout(&host, ProposalSize::UNSPECIFIED).unwrap();

        // Exclusion grows to 90..130; the child (0..85) still fits above it.
        assert_eq!(layout.offsets, vec![Point::zero()]);
        assert_eq!(layout.height, 85.0 + 40.0);
    }

    #[test]
    fn test_missing_position_is_reported() {
        let host = FixedHost::new(hinge(true)).with_window_position(None);
        let column = FoldAwareColumn::from_host(&host, blocks(&[50.0]));

        let err = column.layout(&host, ProposalSize::UNSPECIFIED).unwrap_err();

        assert!(matches!(err, Error::Layout(LayoutError::WindowPositionUnavailable)));
    }

    #[test]
    fn test_missing_position_fallback() {
        let host = FixedHost::new(hinge(true)).with_window_position(None);
        let column = FoldAwareColumn::from_host(&host, blocks(&[110.0, 10.0]))
            .missing_position(MissingPosition::AssumeOrigin);

        let layout = column.layout(&host, ProposalSize::UNSPECIFIED).unwrap();

        // Placed as if the column were at the window origin.
        assert_eq!(layout.offsets, vec![Point::new(0.0, 120.0), Point::new(0.0, 230.0)]);
    }
}
