//! Density-independent pixels.
//!
//! [`Dp`] is a virtual pixel unit that scales with the display density, so a
//! cell specified as `Dp(48.0)` is roughly the same physical size on any
//! screen. Conversion to physical pixels goes through the global
//! [`SCALE_FACTOR`].

use std::sync::OnceLock;

use parking_lot::RwLock;

use crate::px::Px;

/// Global scale factor for dp-to-pixel conversion.
///
/// Typically initialized once at startup from the host window's pixel
/// density. A scale factor of 2.0 means 1 dp = 2 physical pixels. Unset reads
/// fall back to 1.0.
pub static SCALE_FACTOR: OnceLock<RwLock<f64>> = OnceLock::new();

fn scale_factor() -> f64 {
    SCALE_FACTOR.get().map(|lock| *lock.read()).unwrap_or(1.0)
}

/// Sets the global scale factor, initializing it on first call.
pub fn set_scale_factor(factor: f64) {
    let lock = SCALE_FACTOR.get_or_init(|| RwLock::new(factor));
    *lock.write() = factor;
}

/// A density-independent pixel value.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dp(pub f64);

impl Dp {
    /// Creates a new `Dp` value.
    pub const fn new(value: f64) -> Self {
        Dp(value)
    }

    /// Converts to physical pixels as `f64`.
    pub fn to_pixels_f64(&self) -> f64 {
        self.0 * scale_factor()
    }

    /// Converts to physical pixels as `f32`.
    pub fn to_pixels_f32(&self) -> f32 {
        self.to_pixels_f64() as f32
    }

    /// Creates a `Dp` from a physical pixel value.
    pub fn from_pixels_f64(value: f64) -> Self {
        Dp(value / scale_factor())
    }

    /// Converts to a [`Px`] value.
    pub fn to_px(&self) -> Px {
        Px::saturating_from_f32(self.to_pixels_f32())
    }
}

impl From<f64> for Dp {
    fn from(value: f64) -> Self {
        Dp::new(value)
    }
}

impl From<Px> for Dp {
    fn from(px: Px) -> Self {
        px.to_dp()
    }
}
