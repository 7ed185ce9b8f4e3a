//! Fixed-shape matrix types for rotations and homogeneous transforms.
//!
//! The four concrete types ([`RotationMatrix2`], [`RotationMatrix3`],
//! [`HomogeneousMatrix3`], [`HomogeneousMatrix4`]) carry their dimensions in
//! the type, so shape errors in typed code are compile errors. The closed
//! enums [`Rotation`] and [`Transform`] cover the operations that genuinely
//! accept either order ([`r2t`](crate::transforms::r2t),
//! [`t2r`](crate::transforms::t2r)), and their `from_rows` constructors form
//! the dynamic boundary where
//! [`InvalidShape`](crate::SpatialError::InvalidShape) surfaces for
//! runtime-shaped input.

pub mod homogeneous3;
pub mod homogeneous4;
pub mod rotation2;
pub mod rotation3;

pub use homogeneous3::HomogeneousMatrix3;
pub use homogeneous4::HomogeneousMatrix4;
pub use rotation2::RotationMatrix2;
pub use rotation3::RotationMatrix3;

use crate::errors::{SpatialError, SpatialResult};

/// A rotation matrix of either supported order: 2x2 planar or 3x3 spatial.
///
/// This is the argument and result type of the shape-polymorphic operations.
/// Both concrete rotation types convert into it with `From`/`Into`:
///
/// ```
/// use spatial_core::{rot2, Angle, Rotation};
///
/// let r: Rotation = rot2(Angle::from_radians(0.3)).into();
/// assert_eq!(r.order(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rotation {
    /// A 2x2 planar rotation.
    Planar(RotationMatrix2),
    /// A 3x3 spatial rotation.
    Spatial(RotationMatrix3),
}

impl Rotation {
    /// Builds a rotation from dynamically shaped row-major input.
    ///
    /// Accepts a square matrix of order 2 or 3; any other shape is
    /// [`InvalidShape`](SpatialError::InvalidShape). Orthonormality is not
    /// validated.
    ///
    /// ```
    /// use spatial_core::Rotation;
    ///
    /// let r = Rotation::from_rows(&[vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
    /// assert_eq!(r.order(), 2);
    ///
    /// let five = vec![vec![0.0; 5]; 5];
    /// assert!(Rotation::from_rows(&five).is_err());
    /// ```
    pub fn from_rows(rows: &[Vec<f64>]) -> SpatialResult<Self> {
        const EXPECTED: &str = "a 2x2 or 3x3 rotation matrix";
        let (n, cols) = square_order(rows, EXPECTED)?;

        match n {
            2 => {
                let mut m = RotationMatrix2::identity();
                for i in 0..2 {
                    for j in 0..2 {
                        m.set(i, j, rows[i][j]);
                    }
                }
                Ok(Self::Planar(m))
            }
            3 => {
                let mut m = RotationMatrix3::identity();
                for i in 0..3 {
                    for j in 0..3 {
                        m.set(i, j, rows[i][j]);
                    }
                }
                Ok(Self::Spatial(m))
            }
            _ => Err(SpatialError::invalid_shape(n, cols, EXPECTED)),
        }
    }

    /// Returns the matrix order: 2 for planar, 3 for spatial.
    pub fn order(&self) -> usize {
        match self {
            Self::Planar(_) => 2,
            Self::Spatial(_) => 3,
        }
    }

    /// Returns the planar rotation, if this is one.
    pub fn as_planar(&self) -> Option<&RotationMatrix2> {
        match self {
            Self::Planar(m) => Some(m),
            Self::Spatial(_) => None,
        }
    }

    /// Returns the spatial rotation, if this is one.
    pub fn as_spatial(&self) -> Option<&RotationMatrix3> {
        match self {
            Self::Planar(_) => None,
            Self::Spatial(m) => Some(m),
        }
    }
}

impl From<RotationMatrix2> for Rotation {
    fn from(m: RotationMatrix2) -> Self {
        Self::Planar(m)
    }
}

impl From<RotationMatrix3> for Rotation {
    fn from(m: RotationMatrix3) -> Self {
        Self::Spatial(m)
    }
}

/// A homogeneous transform of either supported order: 3x3 planar or 4x4
/// spatial.
///
/// ```
/// use spatial_core::{se2, Angle, Transform};
///
/// let t: Transform = se2(1.0, 2.0, Angle::ZERO).into();
/// assert_eq!(t.order(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Transform {
    /// A 3x3 planar homogeneous transform.
    Planar(HomogeneousMatrix3),
    /// A 4x4 spatial homogeneous transform.
    Spatial(HomogeneousMatrix4),
}

impl Transform {
    /// Builds a homogeneous transform from dynamically shaped row-major
    /// input.
    ///
    /// Accepts a square matrix of order 3 or 4; any other shape is
    /// [`InvalidShape`](SpatialError::InvalidShape). The block structure
    /// (bottom row, orthonormal rotation part) is not validated.
    pub fn from_rows(rows: &[Vec<f64>]) -> SpatialResult<Self> {
        const EXPECTED: &str = "a 3x3 or 4x4 homogeneous transform";
        let (n, cols) = square_order(rows, EXPECTED)?;

        match n {
            3 => {
                let mut m = [[0.0; 3]; 3];
                for (dst, src) in m.iter_mut().zip(rows) {
                    dst.copy_from_slice(src);
                }
                Ok(Self::Planar(HomogeneousMatrix3::from_array(m)))
            }
            4 => {
                let mut m = [[0.0; 4]; 4];
                for (dst, src) in m.iter_mut().zip(rows) {
                    dst.copy_from_slice(src);
                }
                Ok(Self::Spatial(HomogeneousMatrix4::from_array(m)))
            }
            _ => Err(SpatialError::invalid_shape(n, cols, EXPECTED)),
        }
    }

    /// Returns the matrix order: 3 for planar, 4 for spatial.
    pub fn order(&self) -> usize {
        match self {
            Self::Planar(_) => 3,
            Self::Spatial(_) => 4,
        }
    }

    /// Returns the planar transform, if this is one.
    pub fn as_planar(&self) -> Option<&HomogeneousMatrix3> {
        match self {
            Self::Planar(m) => Some(m),
            Self::Spatial(_) => None,
        }
    }

    /// Returns the spatial transform, if this is one.
    pub fn as_spatial(&self) -> Option<&HomogeneousMatrix4> {
        match self {
            Self::Planar(_) => None,
            Self::Spatial(m) => Some(m),
        }
    }
}

impl From<HomogeneousMatrix3> for Transform {
    fn from(m: HomogeneousMatrix3) -> Self {
        Self::Planar(m)
    }
}

impl From<HomogeneousMatrix4> for Transform {
    fn from(m: HomogeneousMatrix4) -> Self {
        Self::Spatial(m)
    }
}

/// Validates that `rows` is square and returns `(order, cols)`.
///
/// Ragged input reports the length of the first offending row.
fn square_order(rows: &[Vec<f64>], expected: &'static str) -> SpatialResult<(usize, usize)> {
    let n = rows.len();
    for row in rows {
        if row.len() != n {
            return Err(SpatialError::invalid_shape(n, row.len(), expected));
        }
    }
    Ok((n, n))
}
