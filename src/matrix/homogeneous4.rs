//! 4x4 homogeneous transforms for spatial rigid-body motion.

use super::rotation3::RotationMatrix3;
use std::fmt;

/// A 4x4 homogeneous transform: spatial rotation plus translation.
///
/// Block structure `[[R, t], [0, 1]]` where `R` is a
/// [`RotationMatrix3`] and `t` a 3D translation column. The bottom row is
/// always `[0, 0, 0, 1]`, which lets rigid spatial motions compose by plain
/// matrix multiplication.
///
/// Values are normally produced by [`r2t`](crate::transforms::r2t),
/// [`trotx`](crate::transforms::trotx) and friends,
/// [`se3`](crate::transforms::se3), or [`rpy2t`](crate::euler::rpy2t):
///
/// ```
/// use spatial_core::{trotx, Angle};
///
/// let t = trotx(Angle::from_degrees(90.0));
/// assert_eq!(t.translation(), [0.0, 0.0, 0.0]);
/// assert_eq!(t.get(3, 3), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HomogeneousMatrix4 {
    elements: [[f64; 4]; 4],
}

impl HomogeneousMatrix4 {
    /// Creates the identity transform: no rotation, zero translation.
    pub fn identity() -> Self {
        Self {
            elements: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Creates a transform from a 4x4 row-major array of elements.
    ///
    /// This does not validate the block structure; the bottom row is the
    /// caller's responsibility. Prefer [`from_parts`](Self::from_parts),
    /// which constructs it correctly.
    pub fn from_array(elements: [[f64; 4]; 4]) -> Self {
        Self { elements }
    }

    /// Builds the transform `[[R, t], [0, 1]]` from a rotation and a
    /// translation.
    pub fn from_parts(rotation: RotationMatrix3, translation: [f64; 3]) -> Self {
        let mut m = Self::identity();
        for i in 0..3 {
            for j in 0..3 {
                m.elements[i][j] = rotation.get(i, j);
            }
            m.elements[i][3] = translation[i];
        }
        m
    }

    /// Returns the element at the specified row and column.
    ///
    /// Indices are 0-based. Panics if `row >= 4` or `col >= 4`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.elements[row][col]
    }

    /// Returns a reference to the underlying 4x4 array.
    pub fn elements(&self) -> &[[f64; 4]; 4] {
        &self.elements
    }

    /// Extracts the leading 3x3 rotation block.
    ///
    /// The block is returned as-is, without validating orthonormality.
    pub fn rotation(&self) -> RotationMatrix3 {
        RotationMatrix3::from_array([
            [self.elements[0][0], self.elements[0][1], self.elements[0][2]],
            [self.elements[1][0], self.elements[1][1], self.elements[1][2]],
            [self.elements[2][0], self.elements[2][1], self.elements[2][2]],
        ])
    }

    /// Extracts the translation column `[x, y, z]`.
    pub fn translation(&self) -> [f64; 3] {
        [self.elements[0][3], self.elements[1][3], self.elements[2][3]]
    }

    /// Multiplies this transform by another, returning the product.
    ///
    /// Composition of rigid motions: `other` acts first, then `self`. Also
    /// available as the `*` operator.
    pub fn multiply(&self, other: &Self) -> Self {
        let mut result = [[0.0; 4]; 4];

        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                for k in 0..4 {
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
        Self::from_parts(rt, [-back[0], -back[1], -back[2]])
    }

    /// Applies this transform to a spatial point: `R * p + t`.
    pub fn transform_point(&self, point: [f64; 3]) -> [f64; 3] {
        let rotated = self.rotation().apply_to_vector(point);
        let t = self.translation();
        [rotated[0] + t[0], rotated[1] + t[1], rotated[2] + t[2]]
    }

    /// Returns the maximum absolute difference between corresponding
    /// elements.
    pub fn max_difference(&self, other: &Self) -> f64 {
        let mut max_diff: f64 = 0.0;

        for i in 0..4 {
            for j in 0..4 {
                max_diff = max_diff.max((self.elements[i][j] - other.elements[i][j]).abs());
            }
        }

        max_diff
    }
}

impl std::ops::Mul for HomogeneousMatrix4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl std::ops::Mul<&HomogeneousMatrix4> for &HomogeneousMatrix4 {
    type Output = HomogeneousMatrix4;

    fn mul(self, rhs: &HomogeneousMatrix4) -> HomogeneousMatrix4 {
        self.multiply(rhs)
    }
}

impl std::ops::Index<(usize, usize)> for HomogeneousMatrix4 {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.elements[row][col]
    }
}

impl fmt::Display for HomogeneousMatrix4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "HomogeneousMatrix4:")?;
        for row in &self.elements {
            writeln!(
                f,
                "  [{:12.9} {:12.9} {:12.9} {:12.9}]",
                row[0], row[1], row[2], row[3]
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quarter_turn_z() -> RotationMatrix3 {
        RotationMatrix3::from_array([[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]])
    }

    #[test]
    fn test_identity() {
        let m = HomogeneousMatrix4::identity();
        assert_eq!(m.rotation(), RotationMatrix3::identity());
        assert_eq!(m.translation(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_from_parts_blocks() {
        let m = HomogeneousMatrix4::from_parts(quarter_turn_z(), [1.0, 2.0, 3.0]);
        assert_eq!(m.rotation(), quarter_turn_z());
        assert_eq!(m.translation(), [1.0, 2.0, 3.0]);
        // Fixed bottom row
        for col in 0..3 {
            assert_eq!(m.get(3, col), 0.0);
        }
        assert_eq!(m.get(3, 3), 1.0);
    }

    #[test]
    fn test_transform_point() {
        let m = HomogeneousMatrix4::from_parts(quarter_turn_z(), [0.0, 0.0, 5.0]);
        let p = m.transform_point([1.0, 0.0, 0.0]);
        assert!(p[0].abs() < 1e-15);
        assert!((p[1] - 1.0).abs() < 1e-15);
        assert!((p[2] - 5.0).abs() < 1e-15);
    }

    #[test]
    fn test_inverse_roundtrip() {
        let m = HomogeneousMatrix4::from_parts(quarter_turn_z(), [3.0, -2.0, 1.0]);
        let product = m.multiply(&m.inverse());
        assert!(product.max_difference(&HomogeneousMatrix4::identity()) < 1e-14);
    }

    #[test]
    fn test_mul_operator() {
        let a = HomogeneousMatrix4::from_parts(RotationMatrix3::identity(), [1.0, 0.0, 0.0]);
        let b = HomogeneousMatrix4::from_parts(RotationMatrix3::identity(), [0.0, 2.0, 0.0]);
        assert_eq!((a * b).translation(), [1.0, 2.0, 0.0]);
        assert_eq!((&a * &b).translation(), [1.0, 2.0, 0.0]);
    }

    #[test]
    fn test_display() {
        let s = format!("{}", HomogeneousMatrix4::identity());
        assert!(s.contains("HomogeneousMatrix4:"));
    }
}
