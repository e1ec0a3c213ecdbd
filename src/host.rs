//! What the hosting platform supplies to a fold-aware layout.
//!
//! The host owns everything that depends on the device: the display features
//! reported by the window manager, the screen density, and where the column
//! ended up in the window after its parent laid it out. The layout code only
//! ever sees snapshots of these values.

use foldkit_core::{Density, DisplayFeatures, Point};

/// The platform side of a fold-aware layout pass.
pub trait Host {
    /// The display features active right now.
    ///
    /// Called once per layout pass. Implementations should refresh their
    /// snapshot whenever the device configuration changes.
    fn display_features(&self) -> DisplayFeatures;

    /// Pixel density used to convert dp padding to pixels.
    fn density(&self) -> Density;

    /// The column's top-left corner in window coordinates, if the host has
    /// resolved it.
    fn window_position(&self) -> Option<Point>;
}

impl<H: Host + ?Sized> Host for &H {
    fn display_features(&self) -> DisplayFeatures {
        (**self).display_features()
    }

    fn density(&self) -> Density {
        (**self).density()
    }

    fn window_position(&self) -> Option<Point> {
        (**self).window_position()
    }
}

/// A host with fixed values, for tests, previews and headless rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixedHost {
    features: DisplayFeatures,
    density: Density,
    window_position: Option<Point>,
}

impl FixedHost {
    /// Creates a host at density 1.0 with the column at the window origin.
    #[must_use]
    pub fn new(features: impl Into<DisplayFeatures>) -> Self {
        Self {
            features: features.into(),
            density: Density::default(),
            window_position: Some(Point::zero()),
        }
    }

    /// Sets the density.
    #[must_use]
    pub fn with_density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    /// Sets the column's window position; `None` simulates a host that has
    /// not resolved it yet.
    #[must_use]
    pub fn with_window_position(mut self, position: Option<Point>) -> Self {
        self.window_position = position;
        self
    }
}

impl Host for FixedHost {
    fn display_features(&self) -> DisplayFeatures {
        self.features.clone()
    }

    fn density(&self) -> Density {
        self.density
    }

    fn window_position(&self) -> Option<Point> {
        self.window_position
    }
}
