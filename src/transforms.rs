//! The homogeneous-transform layer.
//!
//! Lifts between rotation matrices and homogeneous transforms, the
//! single-axis transform generators, and the planar pose constructors.
//! Everything here is a thin closed-form composition over the primitive
//! generators in [`rotations`](crate::rotations) and the matrix types in
//! [`matrix`](crate::matrix).
//!
//! The shape-polymorphic pair [`r2t`]/[`t2r`] works on the closed
//! [`Rotation`]/[`Transform`] enums so that one operation covers both the
//! planar and the spatial order, and each has a `_seq` form that maps an
//! ordered slice element-wise, preserving order and count.

use crate::angle::Angle;
use crate::matrix::{HomogeneousMatrix3, HomogeneousMatrix4, Rotation, Transform};
use crate::rotations::{rot2, rotx, roty, rotz};

/// Lifts a rotation matrix to a homogeneous transform with zero translation.
///
/// An order-2 rotation becomes an order-3 transform; an order-3 rotation
/// becomes an order-4 transform. Both concrete rotation types convert into
/// [`Rotation`], so generators can be passed directly:
///
/// ```
/// use spatial_core::{r2t, rotx, Angle};
///
/// let t = r2t(rotx(Angle::from_radians(0.1)));
/// let t = t.as_spatial().unwrap();
/// assert_eq!(t.translation(), [0.0, 0.0, 0.0]);
/// assert_eq!(t.get(3, 3), 1.0);
/// ```
pub fn r2t(rotation: impl Into<Rotation>) -> Transform {
    match rotation.into() {
        Rotation::Planar(r) => {
            Transform::Planar(HomogeneousMatrix3::from_parts(r, [0.0, 0.0]))
        }
        Rotation::Spatial(r) => {
            Transform::Spatial(HomogeneousMatrix4::from_parts(r, [0.0, 0.0, 0.0]))
        }
    }
}

/// Element-wise [`r2t`] over an ordered sequence of rotations.
///
/// The output has the same length and order as the input.
pub fn r2t_seq(rotations: &[Rotation]) -> Vec<Transform> {
    rotations.iter().map(|r| r2t(*r)).collect()
}

/// Extracts the rotation part of a homogeneous transform.
///
/// The leading block of an order-3 transform is returned as an order-2
/// rotation, of an order-4 transform as an order-3 rotation. Translation is
/// ignored and orthonormality of the block is not validated.
///
/// ```
/// use spatial_core::{r2t, t2r, roty, Angle, Rotation};
///
/// let r = roty(Angle::from_radians(0.4));
/// let back = t2r(r2t(r));
/// assert_eq!(back, Rotation::Spatial(r));
/// ```
pub fn t2r(transform: impl Into<Transform>) -> Rotation {
    match transform.into() {
        Transform::Planar(t) => Rotation::Planar(t.rotation()),
        Transform::Spatial(t) => Rotation::Spatial(t.rotation()),
    }
}

/// Element-wise [`t2r`] over an ordered sequence of transforms.
///
/// The output has the same length and order as the input.
pub fn t2r_seq(transforms: &[Transform]) -> Vec<Rotation> {
    transforms.iter().map(|t| t2r(*t)).collect()
}

/// Planar rotation by `theta` as a homogeneous transform: `r2t(rot2(theta))`.
pub fn trot2(theta: Angle) -> HomogeneousMatrix3 {
    HomogeneousMatrix3::from_parts(rot2(theta), [0.0, 0.0])
}

/// Rotation about the X axis as a homogeneous transform: `r2t(rotx(theta))`.
pub fn trotx(theta: Angle) -> HomogeneousMatrix4 {
    HomogeneousMatrix4::from_parts(rotx(theta), [0.0, 0.0, 0.0])
}

/// Rotation about the Y axis as a homogeneous transform: `r2t(roty(theta))`.
pub fn troty(theta: Angle) -> HomogeneousMatrix4 {
    HomogeneousMatrix4::from_parts(roty(theta), [0.0, 0.0, 0.0])
}

/// Rotation about the Z axis as a homogeneous transform: `r2t(rotz(theta))`.
pub fn trotz(theta: Angle) -> HomogeneousMatrix4 {
    HomogeneousMatrix4::from_parts(rotz(theta), [0.0, 0.0, 0.0])
}

/// Builds the planar pose `[[cos, -sin, x], [sin, cos, y], [0, 0, 1]]`.
///
/// For a pure translation pass `Angle::ZERO` for `theta`.
///
/// ```
/// use spatial_core::{se2, Angle};
///
/// let pose = se2(1.0, 2.0, Angle::from_radians(0.3));
/// assert_eq!(pose.translation(), [1.0, 2.0]);
/// assert!((pose.get(0, 0) - 0.9553).abs() < 1e-4);
/// ```
pub fn se2(x: f64, y: f64, theta: Angle) -> HomogeneousMatrix3 {
    HomogeneousMatrix3::from_parts(rot2(theta), [x, y])
}

/// Lifts a planar transform to a spatial one.
///
/// The 2D rotation and translation are preserved, the third axis is the
/// identity: zero z-translation and no coupling between the plane and z.
///
/// ```
/// use spatial_core::{se2, se3, Angle};
///
/// let t = se3(&se2(1.0, 2.0, Angle::from_radians(0.3)));
/// assert_eq!(t.translation(), [1.0, 2.0, 0.0]);
/// assert_eq!(t.get(2, 2), 1.0);
/// ```
pub fn se3(transform: &HomogeneousMatrix3) -> HomogeneousMatrix4 {
    let r = transform.rotation();
    let t = transform.translation();

    let mut elements = *HomogeneousMatrix4::identity().elements();
    for i in 0..2 {
        for j in 0..2 {
            elements[i][j] = r.get(i, j);
        }
        elements[i][3] = t[i];
    }
    HomogeneousMatrix4::from_array(elements)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_r2t_planar_blocks() {
        let r = rot2(Angle::from_radians(0.3));
        let t = r2t(r);
        let t = t.as_planar().unwrap();
        assert_eq!(t.rotation(), r);
        assert_eq!(t.translation(), [0.0, 0.0]);
        assert_eq!(t.get(2, 2), 1.0);
    }

    #[test]
    fn test_r2t_spatial_blocks() {
        let r = rotx(Angle::from_radians(0.3));
        let t = r2t(r);
        let t = t.as_spatial().unwrap();
        assert_eq!(t.rotation(), r);
        assert_eq!(t.translation(), [0.0, 0.0, 0.0]);
        for col in 0..3 {
            assert_eq!(t.get(3, col), 0.0);
        }
        assert_eq!(t.get(3, 3), 1.0);
    }

    #[test]
    fn test_t2r_roundtrip() {
        let r = rotz(Angle::from_radians(1.2));
        assert_eq!(t2r(r2t(r)), Rotation::Spatial(r));

        let r2 = rot2(Angle::from_radians(-0.8));
        assert_eq!(t2r(r2t(r2)), Rotation::Planar(r2));
    }

    #[test]
    fn test_t2r_ignores_translation() {
        let pose = se2(5.0, -7.0, Angle::from_radians(0.3));
        let r = t2r(pose);
        assert_eq!(r.as_planar().unwrap(), &rot2(Angle::from_radians(0.3)));
    }

    #[test]
    fn test_seq_forms_preserve_order() {
        let rotations: Vec<Rotation> = (0..5)
            .map(|i| Rotation::Spatial(rotz(Angle::from_radians(0.1 * i as f64))))
            .collect();

        let lifted = r2t_seq(&rotations);
        assert_eq!(lifted.len(), rotations.len());
        for (t, r) in lifted.iter().zip(&rotations) {
            assert_eq!(*t, r2t(*r));
        }

        let back = t2r_seq(&lifted);
        assert_eq!(back, rotations);
    }

    #[test]
    fn test_trot_matches_lifted_generators() {
        let theta = Angle::from_radians(0.6);
        assert_eq!(Transform::Planar(trot2(theta)), r2t(rot2(theta)));
        assert_eq!(Transform::Spatial(trotx(theta)), r2t(rotx(theta)));
        assert_eq!(Transform::Spatial(troty(theta)), r2t(roty(theta)));
        assert_eq!(Transform::Spatial(trotz(theta)), r2t(rotz(theta)));
    }

    #[test]
    fn test_se2_concrete() {
        let pose = se2(1.0, 2.0, Angle::from_radians(0.3));
        assert!((pose.get(0, 0) - 0.9553).abs() < 1e-4);
        assert!((pose.get(0, 1) + 0.2955).abs() < 1e-4);
        assert!((pose.get(1, 0) - 0.2955).abs() < 1e-4);
        assert_eq!(pose.translation(), [1.0, 2.0]);
    }

    #[test]
    fn test_se3_lifts_se2() {
        let t = se3(&se2(1.0, 2.0, Angle::from_radians(0.3)));
        let expected = HomogeneousMatrix4::from_array([
            [0.9553, -0.2955, 0.0, 1.0],
            [0.2955, 0.9553, 0.0, 2.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        assert!(t.max_difference(&expected) < 1e-4);
    }

    #[test]
    fn test_se3_identity_third_axis() {
        let t = se3(&se2(0.0, 0.0, Angle::from_radians(1.1)));
        assert_eq!(t.get(2, 2), 1.0);
        assert_eq!(t.get(2, 3), 0.0);
        assert_eq!(t.get(0, 2), 0.0);
        assert_eq!(t.get(1, 2), 0.0);
        assert!(t.rotation().is_rotation_matrix(1e-12));
    }
}
