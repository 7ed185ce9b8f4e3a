//! 3x3 homogeneous transforms for planar rigid-body motion.

use super::rotation2::RotationMatrix2;
use std::fmt;

/// A 3x3 homogeneous transform: planar rotation plus translation.
///
/// Block structure `[[R, t], [0, 1]]` where `R` is a
/// [`RotationMatrix2`] and `t` a 2D translation column. The bottom row is
/// always `[0, 0, 1]`, which lets rigid planar motions compose by plain
/// matrix multiplication.
///
/// Values are normally produced by [`se2`](crate::transforms::se2),
/// [`trot2`](crate::transforms::trot2), or [`r2t`](crate::transforms::r2t):
///
/// ```
/// use spatial_core::{se2, Angle};
///
/// let pose = se2(1.0, 2.0, Angle::from_radians(0.3));
/// assert_eq!(pose.translation(), [1.0, 2.0]);
/// assert_eq!(pose.get(2, 2), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HomogeneousMatrix3 {
    elements: [[f64; 3]; 3],
}

impl HomogeneousMatrix3 {
    /// Creates the identity transform: no rotation, zero translation.
    pub fn identity() -> Self {
        Self {
            elements: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Creates a transform from a 3x3 row-major array of elements.
    ///
    /// This does not validate the block structure; the bottom row is the
    /// caller's responsibility. Prefer [`from_parts`](Self::from_parts),
    /// which constructs it correctly.
    pub fn from_array(elements: [[f64; 3]; 3]) -> Self {
        Self { elements }
    }

    /// Builds the transform `[[R, t], [0, 1]]` from a rotation and a
    /// translation.
    pub fn from_parts(rotation: RotationMatrix2, translation: [f64; 2]) -> Self {
        let mut m = Self::identity();
        for i in 0..2 {
            for j in 0..2 {
                m.elements[i][j] = rotation.get(i, j);
            }
            m.elements[i][2] = translation[i];
        }
        m
    }

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

    /// Extracts the leading 2x2 rotation block.
    ///
    /// The block is returned as-is, without validating orthonormality.
    pub fn rotation(&self) -> RotationMatrix2 {
        RotationMatrix2::from_array([
            [self.elements[0][0], self.elements[0][1]],
            [self.elements[1][0], self.elements[1][1]],
        ])
    }

    /// Extracts the translation column `[x, y]`.
    pub fn translation(&self) -> [f64; 2] {
        [self.elements[0][2], self.elements[1][2]]
    }

    /// Multiplies this transform by another, returning the product.
    ///
    /// Composition of rigid motions: `other` acts first, then `self`. Also
    /// available as the `*` operator.
    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = [[0.0; 3]; 3];

        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                for k in 0..3 {
                    *cell += self.elements[i][k] * other.elements[k][j];
                }
            }
        }

        Self::from_array(result)
    }

    /// Returns the rigid inverse `[[R^T, -R^T t], [0, 1]]`.
    ///
    /// Exact for transforms whose rotation block is orthonormal; much
    /// cheaper and more stable than a general matrix inverse.
    pub fn inverse(&self) -> Self {
        let rt = self.rotation().transpose();
        let t = self.translation();
        let back = rt.apply_to_vector(t);
        Self::from_parts(rt, [-back[0], -back[1]])
    }

    /// Applies this transform to a planar point: `R * p + t`.
    pub fn transform_point(&self, point: [f64; 2]) -> [f64; 2] {
        [
            self.elements[0][0] * point[0] + self.elements[0][1] * point[1] + self.elements[0][2],
            self.elements[1][0] * point[0] + self.elements[1][1] * point[1] + self.elements[1][2],
        ]
    }

    /// Returns the maximum absolute difference between corresponding
    /// elements.
    pub fn max_difference(&self, other: &Self) -> f64 {
        let mut max_diff: f64 = 0.0;

        for i in 0..3 {
            for j in 0..3 {
                max_diff = max_diff.max((self.elements[i][j] - other.elements[i][j]).abs());
            }
        }

        max_diff
    }
}

impl std::ops::Mul for HomogeneousMatrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl std::ops::Index<(usize, usize)> for HomogeneousMatrix3 {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.elements[row][col]
    }
}

impl fmt::Display for HomogeneousMatrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "HomogeneousMatrix3:")?;
        for row in &self.elements {
            writeln!(f, "  [{:12.9} {:12.9} {:12.9}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}
