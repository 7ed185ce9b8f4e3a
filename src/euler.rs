//! Roll-pitch-yaw conversions.
//!
//! The top layer of the library: between a rotation matrix (or the rotation
//! part of a homogeneous transform) and the three sequential rotation angles
//! that generate it.
//!
//! # Composition Order
//!
//! A roll-pitch-yaw triple only names a rotation once the composition order
//! is fixed. [`AxisOrder::Xyz`] (the default) composes
//! `rotx(roll) * roty(pitch) * rotz(yaw)`; [`AxisOrder::Zyx`] composes
//! `rotz(roll) * roty(pitch) * rotx(yaw)`. The extraction in [`tr2rpy`]
//! inverts the matching composition.
//!
//! # Gimbal Lock
//!
//! When the pitch axis aligns the other two axes (pitch at +/-90 degrees), a
//! whole family of (roll, yaw) pairs maps to the same orientation and the
//! decomposition is no longer unique. This is not an error: [`tr2rpy`]
//! detects the singular configuration and resolves it by the fixed
//! convention `roll = 0`, folding the indeterminacy into yaw. The recovered
//! triple always reproduces the input orientation even when it differs from
//! the triple that generated it.
//!
//! The extraction formulas, including the signs of the zyx branch and the
//! singularity resolution, are a compatibility surface: downstream consumers
//! depend on exactly these conventions, so they must not be re-derived.
//!
//! ```
//! use spatial_core::{rpy2t, tr2rpy, AxisOrder, Rpy};
//!
//! let rpy = Rpy::from_radians(0.1, 0.2, 0.3);
//! let recovered = tr2rpy(&rpy2t(rpy, AxisOrder::Xyz), AxisOrder::Xyz);
//! assert!((recovered.roll.radians() - 0.1).abs() < 1e-12);
//! assert!((recovered.pitch.radians() - 0.2).abs() < 1e-12);
//! assert!((recovered.yaw.radians() - 0.3).abs() < 1e-12);
//! ```

use crate::angle::Angle;
use crate::axes::AxisOrder;
use crate::constants::SINGULARITY_EPS;
use crate::matrix::{HomogeneousMatrix4, RotationMatrix3};
use crate::rotations::{rotx, roty, rotz};
use std::fmt;

/// An ordered roll-pitch-yaw triple.
///
/// The fields are plain [`Angle`]s; express the triple in whichever unit the
/// caller needs through the `Angle` accessors, or all at once with
/// [`to_radians`](Self::to_radians)/[`to_degrees`](Self::to_degrees).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rpy {
    pub roll: Angle,
    pub pitch: Angle,
    pub yaw: Angle,
}

impl Rpy {
    /// Creates a triple from three angles.
    pub fn new(roll: Angle, pitch: Angle, yaw: Angle) -> Self {
        Self { roll, pitch, yaw }
    }

    /// Creates a triple from three values in radians.
    pub fn from_radians(roll: f64, pitch: f64, yaw: f64) -> Self {
        Self::new(
            Angle::from_radians(roll),
            Angle::from_radians(pitch),
            Angle::from_radians(yaw),
        )
    }

    /// Creates a triple from three values in degrees.
    ///
    /// Each angle is converted element-wise, the degree analogue of the
    /// radian constructor.
    pub fn from_degrees(roll: f64, pitch: f64, yaw: f64) -> Self {
        Self::new(
            Angle::from_degrees(roll),
            Angle::from_degrees(pitch),
            Angle::from_degrees(yaw),
        )
    }

    /// Returns `[roll, pitch, yaw]` in radians.
    pub fn to_radians(&self) -> [f64; 3] {
        [
            self.roll.radians(),
            self.pitch.radians(),
            self.yaw.radians(),
        ]
    }

    /// Returns `[roll, pitch, yaw]` in degrees.
    pub fn to_degrees(&self) -> [f64; 3] {
        [
            self.roll.degrees(),
            self.pitch.degrees(),
            self.yaw.degrees(),
        ]
    }
}

impl fmt::Display for Rpy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rpy({:.9}, {:.9}, {:.9})",
            self.roll.radians(),
            self.pitch.radians(),
            self.yaw.radians()
        )
    }
}

/// Source of a 3x3 rotation for [`tr2rpy`].
///
/// Implemented by [`RotationMatrix3`] (the matrix itself) and
/// [`HomogeneousMatrix4`] (its rotation block, translation ignored) — the
/// two orders the extraction accepts.
pub trait RotationSource {
    /// Returns the rotation matrix the roll-pitch-yaw triple is extracted
    /// from.
    fn rotation_matrix(&self) -> RotationMatrix3;
}

impl RotationSource for RotationMatrix3 {
    fn rotation_matrix(&self) -> RotationMatrix3 {
        *self
    }
}

impl RotationSource for HomogeneousMatrix4 {
    fn rotation_matrix(&self) -> RotationMatrix3 {
        self.rotation()
    }
}

/// Composes a roll-pitch-yaw triple into a rotation matrix.
///
/// `Xyz` order: `rotx(roll) * roty(pitch) * rotz(yaw)`.
/// `Zyx` order: `rotz(roll) * roty(pitch) * rotx(yaw)`.
///
/// ```
/// use spatial_core::{rpy2r, AxisOrder, Rpy};
///
/// let r = rpy2r(Rpy::from_radians(0.0, 0.0, 0.0), AxisOrder::Xyz);
/// assert!(r.max_difference(&spatial_core::RotationMatrix3::identity()) < 1e-15);
/// ```
pub fn rpy2r(rpy: Rpy, order: AxisOrder) -> RotationMatrix3 {
    match order {
        AxisOrder::Xyz => rotx(rpy.roll) * roty(rpy.pitch) * rotz(rpy.yaw),
        AxisOrder::Zyx => rotz(rpy.roll) * roty(rpy.pitch) * rotx(rpy.yaw),
    }
}

/// Composes a roll-pitch-yaw triple into a homogeneous transform:
/// `r2t(rpy2r(...))`.
pub fn rpy2t(rpy: Rpy, order: AxisOrder) -> HomogeneousMatrix4 {
    HomogeneousMatrix4::from_parts(rpy2r(rpy, order), [0.0, 0.0, 0.0])
}

/// The analytical Jacobian mapping roll-pitch-yaw rates to angular velocity
/// (xyz convention).
///
/// ```text
/// J = | 1      0            sin(pitch)          |
///     | 0  cos(roll)  -cos(pitch)*sin(roll)     |
///     | 0  sin(roll)   cos(pitch)*cos(roll)     |
/// ```
///
/// The closed form depends on roll and pitch only; yaw does not enter.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RpyJacobian {
    elements: [[f64; 3]; 3],
}

impl RpyJacobian {
    /// Returns the element at the specified row and column.
    ///
    /// Indices are 0-based. Panics if `row >= 3` or `col >= 3`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.elements[row][col]
    }

    /// Returns a reference to the underlying 3x3 array.
    pub fn elements(&self) -> &[[f64; 3]; 3] {
        &self.elements
    }

    /// Maps roll-pitch-yaw rates to angular velocity: `J * rates`.
    pub fn apply_to_rates(&self, rates: [f64; 3]) -> [f64; 3] {
        [
            self.elements[0][0] * rates[0]
                + self.elements[0][1] * rates[1]
                + self.elements[0][2] * rates[2],
            self.elements[1][0] * rates[0]
                + self.elements[1][1] * rates[1]
                + self.elements[1][2] * rates[2],
            self.elements[2][0] * rates[0]
                + self.elements[2][1] * rates[1]
                + self.elements[2][2] * rates[2],
        ]
    }
}

impl std::ops::Index<(usize, usize)> for RpyJacobian {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.elements[row][col]
    }
}

impl fmt::Display for RpyJacobian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RpyJacobian:")?;
        for row in &self.elements {
            writeln!(f, "  [{:12.9} {:12.9} {:12.9}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

/// Builds the analytical Jacobian for a roll-pitch-yaw triple (xyz
/// convention). See [`RpyJacobian`] for the closed form.
///
/// ```
/// use spatial_core::{rpy2jac, Rpy};
///
/// let j = rpy2jac(Rpy::from_radians(0.0, 0.0, 0.0));
/// assert_eq!(j.get(0, 0), 1.0);
/// assert_eq!(j.get(1, 1), 1.0);
/// assert_eq!(j.get(2, 2), 1.0);
/// ```
pub fn rpy2jac(rpy: Rpy) -> RpyJacobian {
    let (sr, cr) = rpy.roll.sin_cos();
    let (sp, cp) = rpy.pitch.sin_cos();

    RpyJacobian {
        elements: [[1.0, 0.0, sp], [0.0, cr, -cp * sr], [0.0, sr, cp * cr]],
    }
}

/// Extracts a roll-pitch-yaw triple from a rotation matrix or the rotation
/// block of a homogeneous transform.
///
/// Inverse of [`rpy2r`]/[`rpy2t`] for the same [`AxisOrder`]. At a
/// gimbal-lock singularity the decomposition is resolved by the fixed
/// `roll = 0` convention (see the module docs); everywhere else the
/// round trip recovers the generating triple.
///
/// ```
/// use spatial_core::{rpy2r, tr2rpy, AxisOrder, Rpy};
///
/// let r = rpy2r(Rpy::from_radians(0.1, 0.2, 0.3), AxisOrder::Zyx);
/// let rpy = tr2rpy(&r, AxisOrder::Zyx);
/// assert!((rpy.pitch.radians() - 0.2).abs() < 1e-12);
/// ```
pub fn tr2rpy<M: RotationSource>(matrix: &M, order: AxisOrder) -> Rpy {
    let r = matrix.rotation_matrix();
    let e = r.elements();

    let (roll, pitch, yaw) = match order {
        AxisOrder::Xyz => {
            if e[1][2].abs() < SINGULARITY_EPS && e[2][2].abs() < SINGULARITY_EPS {
                // Gimbal lock: fold roll into yaw
                let roll = 0.0;
                let pitch = libm::atan2(e[0][2], e[2][2]);
                let yaw = libm::atan2(e[1][0], e[1][1]);
                (roll, pitch, yaw)
            } else {
                let roll = libm::atan2(-e[1][2], e[2][2]);
                let (sr, cr) = roll.sin_cos();
                let pitch = libm::atan2(e[0][2], cr * e[2][2] - sr * e[1][2]);
                let yaw = libm::atan2(-e[0][1], e[0][0]);
                (roll, pitch, yaw)
            }
        }
        AxisOrder::Zyx => {
            if e[0][0].abs() < SINGULARITY_EPS && e[1][0].abs() < SINGULARITY_EPS {
                // Gimbal lock: fold roll into yaw
                let roll = 0.0;
                let pitch = libm::atan2(-e[2][0], e[0][0]);
                let yaw = libm::atan2(-e[1][2], e[1][1]);
                (roll, pitch, yaw)
            } else {
                let roll = libm::atan2(e[1][0], e[0][0]);
                let (sr, cr) = roll.sin_cos();
                let pitch = libm::atan2(-e[2][0], cr * e[0][0] + sr * e[1][0]);
                let yaw = libm::atan2(
                    sr * e[0][2] - cr * e[1][2],
                    cr * e[1][1] - sr * e[0][1],
                );
                (roll, pitch, yaw)
            }
        }
    };

    Rpy::from_radians(roll, pitch, yaw)
}

/// Element-wise [`tr2rpy`] over an ordered sequence of matrices.
///
/// The output has the same length and order as the input.
pub fn tr2rpy_seq<M: RotationSource>(matrices: &[M], order: AxisOrder) -> Vec<Rpy> {
    matrices.iter().map(|m| tr2rpy(m, order)).collect()
}
