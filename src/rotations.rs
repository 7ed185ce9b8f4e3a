//! Primitive rotation generators.
//!
//! The leaf layer of the library: closed-form single-axis rotation matrices.
//! Everything else ([`trotx`](crate::transforms::trotx),
//! [`rpy2r`](crate::euler::rpy2r), ...) is built on these four generators.
//!
//! All rotations are active and right-handed: a positive angle rotates a
//! vector counterclockwise when looking from the positive axis toward the
//! origin. Units are carried by [`Angle`]; pass
//! `Angle::from_degrees(..)` for degree input and `Angle::from_radians(..)`
//! (the library default) otherwise.
//!
//! ```
//! use spatial_core::{rotx, Angle};
//!
//! // rotx(90 deg) maps +Y onto +Z
//! let m = rotx(Angle::from_degrees(90.0));
//! let v = m.apply_to_vector([0.0, 1.0, 0.0]);
//! assert!(v[1].abs() < 1e-15);
//! assert!((v[2] - 1.0).abs() < 1e-15);
//! ```

use crate::angle::Angle;
use crate::axes::Axis;
use crate::matrix::{RotationMatrix2, RotationMatrix3};

/// Planar rotation by `theta`: counterclockwise in the plane.
///
/// ```text
/// rot2(theta) = | cos(theta)  -sin(theta) |
///               | sin(theta)   cos(theta) |
/// ```
///
/// ```
/// use spatial_core::{rot2, Angle};
///
/// let m = rot2(Angle::from_radians(0.3));
/// assert!((m.get(0, 0) - 0.9553).abs() < 1e-4);
/// assert!((m.get(1, 0) - 0.2955).abs() < 1e-4);
/// ```
pub fn rot2(theta: Angle) -> RotationMatrix2 {
    let (s, c) = theta.sin_cos();

    let mut m = RotationMatrix2::identity();
    m.set(0, 0, c);
    m.set(0, 1, -s);
    m.set(1, 0, s);
    m.set(1, 1, c);
    m
}

/// Rotation about the X axis by `theta`.
///
/// ```text
/// rotx(theta) = | 1      0           0      |
///               | 0  cos(theta) -sin(theta) |
///               | 0  sin(theta)  cos(theta) |
/// ```
pub fn rotx(theta: Angle) -> RotationMatrix3 {
    let (s, c) = theta.sin_cos();

    let mut m = RotationMatrix3::identity();
    m.set(1, 1, c);
    m.set(1, 2, -s);
    m.set(2, 1, s);
    m.set(2, 2, c);
    m
}

/// Rotation about the Y axis by `theta`.
///
/// ```text
/// roty(theta) = |  cos(theta)  0  sin(theta) |
///               |      0       1      0      |
///               | -sin(theta)  0  cos(theta) |
/// ```
pub fn roty(theta: Angle) -> RotationMatrix3 {
    let (s, c) = theta.sin_cos();

    let mut m = RotationMatrix3::identity();
    m.set(0, 0, c);
    m.set(0, 2, s);
    m.set(2, 0, -s);
    m.set(2, 2, c);
    m
}

/// Rotation about the Z axis by `theta`.
///
/// ```text
/// rotz(theta) = | cos(theta) -sin(theta)  0 |
///               | sin(theta)  cos(theta)  0 |
///               |     0           0       1 |
/// ```
pub fn rotz(theta: Angle) -> RotationMatrix3 {
    let (s, c) = theta.sin_cos();

    let mut m = RotationMatrix3::identity();
    m.set(0, 0, c);
    m.set(0, 1, -s);
    m.set(1, 0, s);
    m.set(1, 1, c);
    m
}

/// Rotation about the named axis by `theta`.
///
/// Dispatches over the closed [`Axis`] set; callers starting from a string
/// selector go through `Axis::from_str`, which is where
/// [`InvalidAxis`](crate::SpatialError::InvalidAxis) surfaces.
///
/// ```
/// use spatial_core::{rot_axis, rotz, Angle, Axis};
///
/// let theta = Angle::from_radians(0.7);
/// assert_eq!(rot_axis(Axis::Z, theta), rotz(theta));
/// assert!("w".parse::<Axis>().is_err());
/// ```
pub fn rot_axis(axis: Axis, theta: Angle) -> RotationMatrix3 {
    match axis {
        Axis::X => rotx(theta),
        Axis::Y => roty(theta),
        Axis::Z => rotz(theta),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::HALF_PI;

    const ANGLES: [f64; 7] = [0.0, 0.1, -0.4, 1.0, HALF_PI, 3.0, -2.5];

    #[test]
    fn test_rot2_concrete() {
        let m = rot2(Angle::from_radians(0.3));
        assert!((m.get(0, 0) - 0.9553).abs() < 1e-4);
        assert!((m.get(0, 1) + 0.2955).abs() < 1e-4);
        assert!((m.get(1, 0) - 0.2955).abs() < 1e-4);
        assert!((m.get(1, 1) - 0.9553).abs() < 1e-4);
    }

    #[test]
    fn test_rotx_quarter_turn() {
        let m = rotx(Angle::from_radians(HALF_PI));
        let expected =
            RotationMatrix3::from_array([[1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]]);
        assert!(m.max_difference(&expected) < 1e-9);
    }

    #[test]
    fn test_zero_angle_is_identity() {
        assert!(rotx(Angle::ZERO).max_difference(&RotationMatrix3::identity()) < 1e-15);
        assert!(roty(Angle::ZERO).max_difference(&RotationMatrix3::identity()) < 1e-15);
        assert!(rotz(Angle::ZERO).max_difference(&RotationMatrix3::identity()) < 1e-15);
        assert!(rot2(Angle::ZERO).max_difference(&RotationMatrix2::identity()) < 1e-15);
    }

    #[test]
    fn test_generators_are_orthonormal() {
        for &theta in &ANGLES {
            let a = Angle::from_radians(theta);
            assert!(rotx(a).is_rotation_matrix(1e-9), "rotx({})", theta);
            assert!(roty(a).is_rotation_matrix(1e-9), "roty({})", theta);
            assert!(rotz(a).is_rotation_matrix(1e-9), "rotz({})", theta);
            assert!(rot2(a).is_rotation_matrix(1e-9), "rot2({})", theta);
        }
    }

    #[test]
    fn test_degrees_radians_equivalence() {
        for &theta in &ANGLES {
            let from_rad = rotx(Angle::from_radians(theta));
            let from_deg = rotx(Angle::from_degrees(theta.to_degrees()));
            assert!(from_rad.max_difference(&from_deg) < 1e-9);
        }
    }

    #[test]
    fn test_active_convention() {
        // rotz(+90 deg) takes [1,0,0] to [0,1,0]
        let v = rotz(Angle::from_degrees(90.0)).apply_to_vector([1.0, 0.0, 0.0]);
        assert!(v[0].abs() < 1e-15);
        assert!((v[1] - 1.0).abs() < 1e-15);

        // roty(+90 deg) takes [0,0,1] to [1,0,0]
        let v = roty(Angle::from_degrees(90.0)).apply_to_vector([0.0, 0.0, 1.0]);
        assert!((v[0] - 1.0).abs() < 1e-15);
        assert!(v[2].abs() < 1e-15);
    }

    #[test]
    fn test_rot_axis_dispatch() {
        let theta = Angle::from_radians(0.7);
        assert_eq!(rot_axis(Axis::X, theta), rotx(theta));
        assert_eq!(rot_axis(Axis::Y, theta), roty(theta));
        assert_eq!(rot_axis(Axis::Z, theta), rotz(theta));
    }
}
