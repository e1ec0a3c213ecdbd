//! Display features reported by the host window manager.
//!
//! A display feature is a physical characteristic of the screen that content
//! may need to avoid, such as the hinge of a foldable device. The host reads
//! the current list from the platform and hands a [`DisplayFeatures`] snapshot
//! to every layout pass; layouts never observe the list changing under them.

use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::layout::Rect;

/// The direction a fold runs across the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FoldOrientation {
    /// The fold runs left to right, splitting the screen into top and bottom.
    Horizontal,
    /// The fold runs top to bottom, splitting the screen into left and right.
    Vertical,
}

/// A physical fold or hinge.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FoldingFeature {
    bounds: Rect,
    orientation: FoldOrientation,
    is_separating: bool,
}

impl FoldingFeature {
    /// Creates a folding feature with an explicit orientation.
    #[must_use]
    pub const fn new(bounds: Rect, orientation: FoldOrientation, is_separating: bool) -> Self {
        Self {
            bounds,
            orientation,
            is_separating,
        }
    }

    /// Creates a folding feature whose orientation follows its bounds.
    ///
    /// A fold wider than it is tall is horizontal. A square or zero-area fold
    /// (a flat hinge reported as a line) is treated as vertical unless it is
    /// strictly wider.
    #[must_use]
    pub fn from_bounds(bounds: Rect, is_separating: bool) -> Self {
        let orientation = if bounds.width() > bounds.height() {
            FoldOrientation::Horizontal
        } else {
            FoldOrientation::Vertical
        };
        Self::new(bounds, orientation, is_separating)
    }

    /// The fold's bounds in window pixels.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The fold's orientation.
    #[must_use]
    pub const fn orientation(&self) -> FoldOrientation {
        self.orientation
    }

    /// Whether content must not be drawn continuously across the fold.
    #[must_use]
    pub const fn is_separating(&self) -> bool {
        self.is_separating
    }

    /// Shortcut for `orientation() == FoldOrientation::Horizontal`.
    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        self.orientation == FoldOrientation::Horizontal
    }
}

/// A single physical characteristic of the display.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum DisplayFeature {
    /// A fold or hinge.
    Folding(FoldingFeature),
    /// Any other feature, such as a camera cutout.
    Other {
        /// Bounds of the feature in window pixels.
        bounds: Rect,
    },
}

impl DisplayFeature {
    /// Bounds of the feature in window pixels.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        match self {
            Self::Folding(fold) => fold.bounds(),
            Self::Other { bounds } => *bounds,
        }
    }

    /// Returns the folding feature if this is one.
    #[must_use]
    pub const fn as_folding(&self) -> Option<&FoldingFeature> {
        match self {
            Self::Folding(fold) => Some(fold),
            Self::Other { .. } => None,
        }
    }
}

impl From<FoldingFeature> for DisplayFeature {
    fn from(value: FoldingFeature) -> Self {
        Self::Folding(value)
    }
}

/// An immutable snapshot of the display features active for one layout pass.
///
/// Cloning is cheap. When the device configuration changes the host builds a
/// new snapshot instead of editing the old one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplayFeatures(Arc<[DisplayFeature]>);

impl DisplayFeatures {
    /// A snapshot with no features.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The features in the order the host reported them.
    #[must_use]
    pub fn as_slice(&self) -> &[DisplayFeature] {
        &self.0
    }

    /// Number of features in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the snapshot has no features.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the features in reported order.
    pub fn iter(&self) -> core::slice::Iter<'_, DisplayFeature> {
        self.0.iter()
    }
}

impl From<Vec<DisplayFeature>> for DisplayFeatures {
    fn from(value: Vec<DisplayFeature>) -> Self {
        Self(value.into())
    }
}

impl From<&[DisplayFeature]> for DisplayFeatures {
    fn from(value: &[DisplayFeature]) -> Self {
        Self(value.into())
    }
}

impl FromIterator<DisplayFeature> for DisplayFeatures {
    fn from_iter<T: IntoIterator<Item = DisplayFeature>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a DisplayFeatures {
    type Item = &'a DisplayFeature;
    type IntoIter = core::slice::Iter<'a, DisplayFeature>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl AsRef<[DisplayFeature]> for DisplayFeatures {
    fn as_ref(&self) -> &[DisplayFeature] {
        self.as_slice()
    }
}
