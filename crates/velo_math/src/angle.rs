//! Different units for angles.

use crate::consts::{FRAC_1_PI, PI};
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use std::ops::{Add, Div, Mul, Sub};

/// Represents an angle.
pub trait Angle: Copy {
    /// Creates a zero angle.
    fn zero() -> Self;

    /// Returns the angle as degrees.
    fn as_degrees(self) -> Degrees;

    /// Returns the angle as radians.
    fn as_radians(self) -> Radians;

    /// Returns the value of the angle in degrees.
    fn degrees(self) -> f64;

    /// Returns the value of the angle in radians.
    fn radians(self) -> f64;
}

// An angle in degrees.
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Zeroable, Pod)]
pub struct Degrees(pub f64);

// An angle in radians.
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Zeroable, Pod)]
pub struct Radians(pub f64);

impl Degrees {
    fn value(self) -> f64 {
        self.0
    }
}

impl Radians {
    fn value(self) -> f64 {
        self.0
    }
}

impl Angle for Degrees {
    fn zero() -> Self {
        Self(0.0)
    }

    fn as_degrees(self) -> Degrees {
        self
    }

    fn as_radians(self) -> Radians {
        Radians::from(self)
    }

    fn degrees(self) -> f64 {
        self.value()
    }

    fn radians(self) -> f64 {
        Radians::from(self).value()
    }
}

impl Angle for Radians {
    fn zero() -> Self {
        Self(0.0)
    }

    fn as_degrees(self) -> Degrees {
        Degrees::from(self)
    }

    fn as_radians(self) -> Radians {
        self
    }

    fn degrees(self) -> f64 {
        Degrees::from(self).value()
    }

    fn radians(self) -> f64 {
        self.value()
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Self(radians_to_degrees(rad.value()))
    }
}

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Self(degrees_to_radians(deg.value()))
    }
}

impl Add for Degrees {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.value() + rhs.value())
    }
}

impl Add for Radians {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.value() + rhs.value())
    }
}

impl Sub for Degrees {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.value() - rhs.value())
    }
}

impl Sub for Radians {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.value() - rhs.value())
    }
}

impl Mul<f64> for Degrees {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self(self.value() * rhs)
    }
}

impl Mul<f64> for Radians {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self(self.value() * rhs)
    }
}

impl Div<f64> for Degrees {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self(self.value() / rhs)
    }
}

impl Div<f64> for Radians {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self(self.value() / rhs)
    }
}

impl AbsDiffEq for Degrees {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.value(), &other.value(), epsilon)
    }
}

impl AbsDiffEq for Radians {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.value(), &other.value(), epsilon)
    }
}

impl RelativeEq for Degrees {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        f64::relative_eq(&self.value(), &other.value(), epsilon, max_relative)
    }
}

impl RelativeEq for Radians {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        f64::relative_eq(&self.value(), &other.value(), epsilon, max_relative)
    }
}

pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * (180.0 * FRAC_1_PI)
}

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn degrees_to_radians_for_special_angles_work() {
        assert_abs_diff_eq!(Degrees(0.0).radians(), 0.0);

        assert_abs_diff_eq!(Degrees(90.0).radians(), PI / 2.0);
        assert_abs_diff_eq!(Degrees(180.0).radians(), PI);
        assert_abs_diff_eq!(Degrees(360.0).radians(), 2.0 * PI);

        assert_abs_diff_eq!(Degrees(-90.0).radians(), -PI / 2.0);
        assert_abs_diff_eq!(Degrees(-180.0).radians(), -PI);
    }

    #[test]
    fn radians_to_degrees_for_special_angles_work() {
        assert_abs_diff_eq!(Radians(0.0).degrees(), 0.0);

        assert_abs_diff_eq!(Radians(PI / 2.0).degrees(), 90.0);
        assert_abs_diff_eq!(Radians(PI).degrees(), 180.0);
        assert_abs_diff_eq!(Radians(2.0 * PI).degrees(), 360.0);

        assert_abs_diff_eq!(Radians(-PI / 2.0).degrees(), -90.0);
        assert_abs_diff_eq!(Radians(-PI).degrees(), -180.0);
    }

    #[test]
    fn angle_ops_work() {
        assert_abs_diff_eq!(Degrees(42.0) + Degrees(30.0), Degrees(72.0));
        assert_abs_diff_eq!(Degrees(42.0) - Degrees(30.0), Degrees(12.0));
        assert_abs_diff_eq!(Degrees(42.0) * 2.5, Degrees(105.0));
        assert_abs_diff_eq!(Degrees(42.0) / 4.0, Degrees(10.5));

        assert_abs_diff_eq!(Radians(1.5) + Radians(0.5), Radians(2.0));
        assert_abs_diff_eq!(Radians(1.5) - Radians(0.5), Radians(1.0));
        assert_abs_diff_eq!(Radians(1.5) * 2.0, Radians(3.0));
        assert_abs_diff_eq!(Radians(1.5) / 3.0, Radians(0.5));
    }

    #[test]
    fn conversions_round_trip() {
        assert_abs_diff_eq!(
            Degrees(57.3).as_radians().as_degrees(),
            Degrees(57.3),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            Radians(0.77).as_degrees().as_radians(),
            Radians(0.77),
            epsilon = 1e-12
        );
    }
}
