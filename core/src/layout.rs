//! Geometry types and the two-phase layout protocol.
//!
//! # Pixels
//!
//! Unlike dp values (see [`crate::unit`]), every value in this module is a
//! **physical pixel**. Display features are reported by the window manager in
//! pixels, so the fold-aware layouts compare child frames against them without
//! any further conversion.
//!
//! # Two-Phase Layout
//!
//! 1. **Sizing** ([`Layout::size_that_fits`]): measure children against the
//!    incoming [`ProposalSize`] and report the container's size.
//! 2. **Placement** ([`Layout::place`]): given the container's resolved frame,
//!    return a frame for every child.
//!
//! The container's position in the window is only known between the two
//! phases. Layouts that need it must read it from the `bounds` passed to
//! `place`, never from the sizing phase.

use core::fmt::Debug;

use alloc::vec::Vec;

// ============================================================================
// SubView Trait - Child Proxy
// ============================================================================

/// A measurable child of a layout container.
///
/// Measuring is pure: calling [`size_that_fits`](Self::size_that_fits) twice
/// with the same proposal must return the same size.
pub trait SubView {
    /// Query the child's size for a given proposal.
    ///
    /// - `ProposalSize::new(None, None)` - ideal/intrinsic size
    /// - `ProposalSize::new(Some(200.0), None)` - constrained width
    fn size_that_fits(&self, proposal: ProposalSize) -> Size;
}

impl<T: SubView + ?Sized> SubView for &T {
    fn size_that_fits(&self, proposal: ProposalSize) -> Size {
        (**self).size_that_fits(proposal)
    }
}

impl<T: SubView + ?Sized> SubView for alloc::boxed::Box<T> {
    fn size_that_fits(&self, proposal: ProposalSize) -> Size {
        (**self).size_that_fits(proposal)
    }
}

// ============================================================================
// Layout Trait - Container Layout
// ============================================================================

/// A layout algorithm for arranging child views.
pub trait Layout: Debug {
    /// Calculate the size this layout wants given a proposal.
    ///
    /// # Arguments
    ///
    /// * `proposal` - The size proposed by the parent
    /// * `children` - References to child proxies for size queries
    fn size_that_fits(&self, proposal: ProposalSize, children: &[&dyn SubView]) -> Size;

    /// Place children within the given bounds.
    ///
    /// `bounds` is the container's frame in window coordinates, resolved by
    /// the host after sizing. The returned rects use the same space.
    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Rect>;
}

// ============================================================================
// Geometry Types
// ============================================================================

/// Axis-aligned rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    origin: Point,
    size: Size,
}

impl Rect {
    /// Creates a new [`Rect`] with the provided `origin` and `size`.
    #[must_use]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Creates a rectangle from origin (0, 0) with the given size.
    #[must_use]
    pub const fn from_size(size: Size) -> Self {
        Self {
            origin: Point::zero(),
            size,
        }
    }

    /// Creates a rectangle from its four edges.
    #[must_use]
    pub fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            origin: Point::new(left, top),
            size: Size::new(right - left, bottom - top),
        }
    }

    /// Returns the rectangle's origin (top-left corner).
    #[must_use]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// Returns the rectangle's size.
    #[must_use]
    pub const fn size(&self) -> &Size {
        &self.size
    }

    /// Returns the rectangle's x-coordinate (left edge).
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.origin.x
    }

    /// Returns the rectangle's y-coordinate (top edge).
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.origin.y
    }

    /// Returns the rectangle's width.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.size.width
    }

    /// Returns the rectangle's height.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.size.height
    }

    /// Returns the left edge.
    #[must_use]
    pub const fn left(&self) -> f32 {
        self.origin.x
    }

    /// Returns the top edge.
    #[must_use]
    pub const fn top(&self) -> f32 {
        self.origin.y
    }

    /// Returns the right edge.
    #[must_use]
    pub const fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    /// Returns the bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Returns the same rectangle moved by `dx` and `dy`.
    #[must_use]
    pub const fn translate(&self, dx: f32, dy: f32) -> Self {
        Self {
            origin: Point::new(self.origin.x + dx, self.origin.y + dy),
            size: self.size,
        }
    }

    /// Returns true if the two rectangles share any interior area.
    ///
    /// Rectangles that only touch along an edge do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.right() > other.left()
            && other.right() > self.left()
            && self.bottom() > other.top()
            && other.bottom() > self.top()
    }
}

// ============================================================================
// Size
// ============================================================================

/// Two-dimensional size expressed in pixels.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// The width in pixels.
    pub width: f32,
    /// The height in pixels.
    pub height: f32,
}

impl Size {
    /// Constructs a [`Size`] with the given `width` and `height`.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Creates a [`Size`] with zero width and height.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }
}

// ============================================================================
// Point
// ============================================================================

/// A coordinate in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// The x-coordinate in pixels.
    pub x: f32,
    /// The y-coordinate in pixels.
    pub y: f32,
}

impl Point {
    /// Constructs a [`Point`] at the given `x` and `y`.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a [`Point`] at the origin (0, 0).
    #[must_use]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

// ============================================================================
// ProposalSize
// ============================================================================

/// A size proposal from parent to child during layout negotiation.
///
/// Each dimension can be:
/// - `None` - "Tell me your ideal size" (unspecified)
/// - `Some(value)` - "I suggest you use this size"
///
/// Children are free to return any size; the proposal is just a suggestion.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ProposalSize {
    /// Width proposal: `None` = unspecified, `Some(f32)` = suggested width
    pub width: Option<f32>,
    /// Height proposal: `None` = unspecified, `Some(f32)` = suggested height
    pub height: Option<f32>,
}

impl ProposalSize {
    /// Creates a [`ProposalSize`] from optional width and height.
    #[must_use]
    pub fn new(width: impl Into<Option<f32>>, height: impl Into<Option<f32>>) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
        }
    }

    /// Unspecified proposal - asks for ideal/intrinsic size.
    pub const UNSPECIFIED: Self = Self {
        width: None,
        height: None,
    };

    /// Returns the width or a default value if unspecified.
    #[must_use]
    pub fn width_or(&self, default: f32) -> f32 {
        self.width.unwrap_or(default)
    }
}

// ============================================================================
// Tests
// ============================================================================
