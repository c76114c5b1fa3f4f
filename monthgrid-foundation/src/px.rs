//! Physical pixel coordinate types.
//!
//! [`Px`] is a single physical-pixel value backed by an `i32`, so negative
//! coordinates (scrolled-out content, offsets) are representable.
//! [`PxPosition`] and [`PxSize`] are the 2D position and size built from it.
//! Origin is top-left, x grows right, y grows down.

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::dp::Dp;

/// A physical pixel coordinate value.
///
/// Supports plain and saturating arithmetic, and conversion to/from
/// density-independent pixels ([`Dp`]) through the global scale factor.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Px(pub i32);

impl Px {
    /// Zero pixels.
    pub const ZERO: Self = Self(0);

    /// The maximum representable pixel value.
    pub const MAX: Self = Self(i32::MAX);

    /// Creates a new `Px` from an `i32`. Negative values are allowed.
    pub const fn new(value: i32) -> Self {
        Px(value)
    }

    /// Returns the raw `i32` value.
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Converts a [`Dp`] value to physical pixels using the current scale
    /// factor.
    pub fn from_dp(dp: Dp) -> Self {
        Px(dp.to_pixels_f64() as i32)
    }

    /// Converts this value to [`Dp`] using the current scale factor.
    pub fn to_dp(self) -> Dp {
        Dp::from_pixels_f64(self.0 as f64)
    }

    /// Converts this value to `f32`.
    pub fn to_f32(self) -> f32 {
        self.0 as f32
    }

    /// Creates a `Px` from an `f32`, saturating at the `i32` bounds.
    pub fn saturating_from_f32(value: f32) -> Self {
        if value >= i32::MAX as f32 {
            Px(i32::MAX)
        } else if value <= i32::MIN as f32 {
            Px(i32::MIN)
        } else {
            Px(value as i32)
        }
    }

    /// Saturating addition.
    pub fn saturating_add(self, other: Self) -> Self {
        Px(self.0.saturating_add(other.0))
    }

    /// Saturating subtraction.
    pub fn saturating_sub(self, other: Self) -> Self {
        Px(self.0.saturating_sub(other.0))
    }

    /// Absolute value, as a non-negative `i32`.
    pub fn abs(self) -> i32 {
        self.0.saturating_abs()
    }

    /// The larger of two values.
    pub fn max(self, other: Self) -> Self {
        Px(self.0.max(other.0))
    }

    /// The smaller of two values.
    pub fn min(self, other: Self) -> Self {
        Px(self.0.min(other.0))
    }
}

impl Add for Px {
    type Output = Px;

    fn add(self, rhs: Self) -> Self::Output {
        Px(self.0 + rhs.0)
    }
}

impl Sub for Px {
    type Output = Px;

    fn sub(self, rhs: Self) -> Self::Output {
        Px(self.0 - rhs.0)
    }
}

impl Mul<i32> for Px {
    type Output = Px;

    fn mul(self, rhs: i32) -> Self::Output {
        Px(self.0 * rhs)
    }
}

impl Div<i32> for Px {
    type Output = Px;

    fn div(self, rhs: i32) -> Self::Output {
        Px(self.0 / rhs)
    }
}

impl Neg for Px {
    type Output = Px;

    fn neg(self) -> Self::Output {
        Px(-self.0)
    }
}

impl AddAssign for Px {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Px {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl From<i32> for Px {
    fn from(value: i32) -> Self {
        Px(value)
    }
}

impl From<Dp> for Px {
    fn from(dp: Dp) -> Self {
        Px::from_dp(dp)
    }
}

/// A 2D position in physical pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PxPosition {
    /// Horizontal coordinate.
    pub x: Px,
    /// Vertical coordinate.
    pub y: Px,
}

impl PxPosition {
    /// The origin position.
    pub const ZERO: Self = Self {
        x: Px::ZERO,
        y: Px::ZERO,
    };

    /// Creates a new position.
    pub const fn new(x: Px, y: Px) -> Self {
        Self { x, y }
    }

    /// Returns this position shifted by the given deltas.
    pub fn offset(self, dx: Px, dy: Px) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl Add for PxPosition {
    type Output = PxPosition;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for PxPosition {
    type Output = PxPosition;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl From<[i32; 2]> for PxPosition {
    fn from(value: [i32; 2]) -> Self {
        Self {
            x: Px(value[0]),
            y: Px(value[1]),
        }
    }
}

impl From<PxPosition> for [i32; 2] {
    fn from(value: PxPosition) -> Self {
        [value.x.0, value.y.0]
    }
}

/// A 2D size in physical pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PxSize {
    /// Horizontal extent.
    pub width: Px,
    /// Vertical extent.
    pub height: Px,
}

impl PxSize {
    /// An empty size.
    pub const ZERO: Self = Self {
        width: Px::ZERO,
        height: Px::ZERO,
    };

    /// Creates a new size.
    pub const fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_creation() {
        let px = Px::new(42);
        assert_eq!(px.raw(), 42);

        let px_neg = Px::new(-10);
        assert_eq!(px_neg.raw(), -10);
    }

    #[test]
    fn test_px_arithmetic() {
        let a = Px(10);
        let b = Px(5);

        assert_eq!(a + b, Px(15));
        assert_eq!(a - b, Px(5));
        assert_eq!(a * 2, Px(20));
        assert_eq!(a / 2, Px(5));
        assert_eq!(-a, Px(-10));
    }

    #[test]
    fn test_px_saturating_arithmetic() {
        let max = Px(i32::MAX);
        let min = Px(i32::MIN);
        assert_eq!(max.saturating_add(Px(1)), max);
        assert_eq!(min.saturating_sub(Px(1)), min);
    }

    #[test]
    fn test_saturating_from_f32() {
        assert_eq!(Px::saturating_from_f32(f32::MAX), Px(i32::MAX));
        assert_eq!(Px::saturating_from_f32(f32::MIN), Px(i32::MIN));
        assert_eq!(Px::saturating_from_f32(100.5), Px(100));
    }

    #[test]
    fn test_px_position() {
        let pos = PxPosition::new(Px(10), Px(-5));
        assert_eq!(pos.offset(Px(2), Px(3)), PxPosition::new(Px(12), Px(-2)));
        assert_eq!(
            pos + PxPosition::new(Px(1), Px(1)),
            PxPosition::new(Px(11), Px(-4))
        );
    }

    #[test]
    fn test_px_position_conversions() {
        let raw: [i32; 2] = [10, -5];
        let pos: PxPosition = raw.into();
        let back: [i32; 2] = pos.into();
        assert_eq!(raw, back);
    }
}
