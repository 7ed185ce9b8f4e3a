//! Error types for spatial-transform construction.
//!
//! This module provides a unified error type [`SpatialError`] covering the
//! failure modes of this library: a units, axis, or axis-order selector that
//! does not name a member of its closed set, and a dynamically supplied
//! matrix whose shape matches none of the fixed shapes an operation accepts.
//!
//! All of these are programmer-usage errors raised synchronously at value
//! construction time. There is no retry, no recovery, and no partial result:
//! a function either returns a fully formed value or one of these errors.
//! Floating-point edge cases such as gimbal lock are handled by documented
//! singularity branches in [`tr2rpy`](crate::euler::tr2rpy), never by an error.
//!
//! # Usage
//!
//! Fallible functions return [`SpatialResult<T>`], which is
//! `Result<T, SpatialError>`. Use the constructor methods for consistent
//! error creation:
//!
//! ```
//! use spatial_core::{SpatialError, SpatialResult};
//!
//! fn parse_units(s: &str) -> SpatialResult<f64> {
//!     match s {
//!         "radians" => Ok(1.0),
//!         "degrees" => Ok(std::f64::consts::PI / 180.0),
//!         other => Err(SpatialError::invalid_units(other)),
//!     }
//! }
//! ```

use thiserror::Error;

/// Unified error type for spatial-transform operations.
///
/// Covers selector validation (units, axis, axis order) and dynamic matrix
/// shape validation. Use the constructor methods
/// ([`invalid_units`](Self::invalid_units), [`invalid_shape`](Self::invalid_shape),
/// etc.) for consistent error creation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpatialError {
    /// Angle-units selector is not `radians` or `degrees`.
    #[error("Invalid angle units '{value}': expected 'radians' or 'degrees'")]
    InvalidUnits { value: String },

    /// Rotation-axis selector is not `x`, `y`, or `z`.
    #[error("Invalid rotation axis '{value}': expected 'x', 'y', or 'z'")]
    InvalidAxis { value: String },

    /// Axis-order selector is not `xyz` or `zyx`.
    #[error("Invalid axis order '{value}': expected 'xyz' or 'zyx'")]
    InvalidAxisOrder { value: String },

    /// Matrix input does not match one of the fixed shapes the operation accepts.
    #[error("Invalid matrix shape {rows}x{cols}: expected {expected}")]
    InvalidShape {
        rows: usize,
        cols: usize,
        expected: &'static str,
    },
}

/// Convenience alias for `Result<T, SpatialError>`.
pub type SpatialResult<T> = Result<T, SpatialError>;

impl SpatialError {
    /// Creates an [`InvalidUnits`](Self::InvalidUnits) error.
    pub fn invalid_units(value: &str) -> Self {
        Self::InvalidUnits {
            value: value.to_string(),
        }
    }

    /// Creates an [`InvalidAxis`](Self::InvalidAxis) error.
    pub fn invalid_axis(value: &str) -> Self {
        Self::InvalidAxis {
            value: value.to_string(),
        }
    }

    /// Creates an [`InvalidAxisOrder`](Self::InvalidAxisOrder) error.
    pub fn invalid_axis_order(value: &str) -> Self {
        Self::InvalidAxisOrder {
            value: value.to_string(),
        }
    }

    /// Creates an [`InvalidShape`](Self::InvalidShape) error.
    ///
    /// `expected` names the shapes the operation accepts, e.g.
    /// `"a 3x3 or 4x4 homogeneous transform"`.
    pub fn invalid_shape(rows: usize, cols: usize, expected: &'static str) -> Self {
        Self::InvalidShape {
            rows,
            cols,
            expected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_units_message() {
        let err = SpatialError::invalid_units("furlongs");
        assert_eq!(
            err.to_string(),
            "Invalid angle units 'furlongs': expected 'radians' or 'degrees'"
        );
    }

    #[test]
    fn test_invalid_axis_message() {
        let err = SpatialError::invalid_axis("w");
        assert!(err.to_string().contains("'w'"));
        assert!(err.to_string().contains("'x', 'y', or 'z'"));
    }

    #[test]
    fn test_invalid_axis_order_message() {
        let err = SpatialError::invalid_axis_order("yzx");
        assert!(err.to_string().contains("'yzx'"));
        assert!(err.to_string().contains("'xyz' or 'zyx'"));
    }

    #[test]
    fn test_invalid_shape_message() {
        let err = SpatialError::invalid_shape(5, 5, "a 2x2 or 3x3 rotation matrix");
        assert_eq!(
            err.to_string(),
            "Invalid matrix shape 5x5: expected a 2x2 or 3x3 rotation matrix"
        );
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<SpatialError>();
        _assert_sync::<SpatialError>();
    }
}
