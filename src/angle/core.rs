//! Core angle type for spatial calculations.
//!
//! This module provides [`Angle`], the angular measurement type used by every
//! rotation generator in the library. Angles are stored internally as radians
//! (`f64`) but can be constructed from and converted to degrees.
//!
//! # Design Rationale
//!
//! **Why radians internally?** All trigonometric functions in Rust operate on
//! radians. Storing radians avoids repeated conversions during calculations;
//! the degree-based constructor and accessor provide an ergonomic API for
//! human-readable values.
//!
//! **Why a type instead of a bare `f64` plus a units flag?** The units tag is
//! consumed exactly once, at construction. Once you hold an `Angle`, there is
//! no flag left to misinterpret — a unit mix-up becomes a compile error rather
//! than a silently wrong matrix.
//!
//! # Quick Start
//!
//! ```
//! use spatial_core::{Angle, AngleUnits};
//!
//! let a = Angle::from_degrees(90.0);
//! let b = Angle::from_radians(1.5707963267948966);
//! let c = Angle::new(90.0, AngleUnits::Degrees);
//!
//! assert!((a.radians() - b.radians()).abs() < 1e-12);
//! assert!((a.degrees() - c.degrees()).abs() < 1e-12);
//!
//! // Trigonometry without conversion bookkeeping
//! let (s, _c) = a.sin_cos();
//! assert!((s - 1.0).abs() < 1e-12);
//! ```

use super::units::AngleUnits;
use crate::constants::{DEG_TO_RAD, HALF_PI, PI, RAD_TO_DEG};

/// An angular measurement stored as radians.
///
/// `Angle` carries the scalar input of every rotation generator in this
/// library. The degrees/radians distinction lives entirely in the
/// constructors; the stored value is always radians.
///
/// Note: `Eq` and `Ord` are not implemented because f64 can be NaN.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Angle {
    radians: f64,
}

impl Angle {
    /// The zero angle.
    pub const ZERO: Self = Self { radians: 0.0 };

    /// Half a turn (180 degrees).
    pub const PI: Self = Self { radians: PI };

    /// A quarter turn (90 degrees).
    pub const HALF_PI: Self = Self { radians: HALF_PI };

    /// Creates an angle from a value in radians.
    #[inline]
    pub fn from_radians(radians: f64) -> Self {
        Self { radians }
    }

    /// Creates an angle from a value in degrees.
    #[inline]
    pub fn from_degrees(degrees: f64) -> Self {
        Self {
            radians: degrees * DEG_TO_RAD,
        }
    }

    /// Creates an angle from a value interpreted in the given units.
    ///
    /// This is the entry point for callers that carry a runtime units
    /// selector; the selector is consumed here and never stored.
    ///
    /// ```
    /// use spatial_core::{Angle, AngleUnits};
    ///
    /// let a = Angle::new(180.0, AngleUnits::Degrees);
    /// let b = Angle::new(std::f64::consts::PI, AngleUnits::Radians);
    /// assert!((a.radians() - b.radians()).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn new(value: f64, units: AngleUnits) -> Self {
        match units {
            AngleUnits::Radians => Self::from_radians(value),
            AngleUnits::Degrees => Self::from_degrees(value),
        }
    }

    /// Returns the angle in radians.
    #[inline]
    pub fn radians(&self) -> f64 {
        self.radians
    }

    /// Returns the angle in degrees.
    #[inline]
    pub fn degrees(&self) -> f64 {
        self.radians * RAD_TO_DEG
    }

    /// Returns the angle expressed in the given units.
    #[inline]
    pub fn value_in(&self, units: AngleUnits) -> f64 {
        match units {
            AngleUnits::Radians => self.radians(),
            AngleUnits::Degrees => self.degrees(),
        }
    }

    /// Returns the sine of the angle.
    #[inline]
    pub fn sin(&self) -> f64 {
        self.radians.sin()
    }

    /// Returns the cosine of the angle.
    #[inline]
    pub fn cos(&self) -> f64 {
        self.radians.cos()
    }

    /// Returns `(sin, cos)` of the angle in one call.
    #[inline]
    pub fn sin_cos(&self) -> (f64, f64) {
        self.radians.sin_cos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::QUARTER_PI;

    #[test]
    fn test_from_degrees() {
        let a = Angle::from_degrees(180.0);
        assert!((a.radians() - PI).abs() < 1e-15);
    }

    #[test]
    fn test_degrees_roundtrip() {
        let a = Angle::from_degrees(73.25);
        assert!((a.degrees() - 73.25).abs() < 1e-12);
    }

    #[test]
    fn test_new_with_units() {
        let deg = Angle::new(90.0, AngleUnits::Degrees);
        let rad = Angle::new(HALF_PI, AngleUnits::Radians);
        assert!((deg.radians() - rad.radians()).abs() < 1e-15);
    }

    #[test]
    fn test_value_in() {
        let a = Angle::from_degrees(45.0);
        assert!((a.value_in(AngleUnits::Degrees) - 45.0).abs() < 1e-12);
        assert!((a.value_in(AngleUnits::Radians) - QUARTER_PI).abs() < 1e-15);
    }

    #[test]
    fn test_sin_cos() {
        let a = Angle::from_radians(0.3);
        let (s, c) = a.sin_cos();
        assert_eq!(s, 0.3f64.sin());
        assert_eq!(c, 0.3f64.cos());
    }

    #[test]
    fn test_constants() {
        assert_eq!(Angle::ZERO.radians(), 0.0);
        assert!((Angle::PI.degrees() - 180.0).abs() < 1e-12);
        assert!((Angle::HALF_PI.degrees() - 90.0).abs() < 1e-12);
    }
}
