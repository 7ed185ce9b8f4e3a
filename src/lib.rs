//! # spatial-core
//!
//! Closed-form spatial transforms for robotics and kinematics: 2D/3D
//! rotation matrices, homogeneous transforms, and roll-pitch-yaw
//! conversions.
//!
//! Every function is a pure mapping from numeric inputs to a fixed-shape
//! matrix or angle triple. There is no state, no I/O, and no shared mutable
//! data; everything here is safe to call concurrently from any number of
//! threads.
//!
//! The library is organized in three layers, each depending only on the
//! previous:
//!
//! - **Primitive rotation generators** ([`rotations`]): [`rot2`], [`rotx`],
//!   [`roty`], [`rotz`].
//! - **Homogeneous-transform layer** ([`transforms`]): [`r2t`], [`t2r`],
//!   [`trot2`], [`trotx`]/[`troty`]/[`trotz`], [`se2`], [`se3`].
//! - **Euler-angle conversion layer** ([`euler`]): [`rpy2r`], [`rpy2t`],
//!   [`rpy2jac`], [`tr2rpy`].
//!
//! # Quick Start
//!
//! ```
//! use spatial_core::{rotx, rpy2t, se2, se3, tr2rpy, Angle, AxisOrder, Rpy};
//!
//! // A rotation of 30 degrees about X
//! let r = rotx(Angle::from_degrees(30.0));
//! assert!(r.is_rotation_matrix(1e-12));
//!
//! // A planar pose lifted into 3D
//! let t = se3(&se2(1.0, 2.0, Angle::from_radians(0.3)));
//! assert_eq!(t.translation(), [1.0, 2.0, 0.0]);
//!
//! // Roll-pitch-yaw round trip
//! let rpy = Rpy::from_radians(0.1, 0.2, 0.3);
//! let recovered = tr2rpy(&rpy2t(rpy, AxisOrder::Xyz), AxisOrder::Xyz);
//! assert!((recovered.yaw.radians() - 0.3).abs() < 1e-12);
//! ```
//!
//! # Units and Selectors
//!
//! Angles enter through the [`Angle`] type, which resolves the
//! radians/degrees distinction at construction (radians is the library
//! default). The selectors [`AngleUnits`], [`Axis`], and [`AxisOrder`] are
//! closed enums; code that starts from strings parses them with `FromStr`,
//! and an unknown selector is rejected there as the matching
//! [`SpatialError`] variant. Dynamically shaped matrix input enters through
//! [`Rotation::from_rows`] / [`Transform::from_rows`], which reject
//! unsupported shapes as [`SpatialError::InvalidShape`].

pub mod angle;
pub mod axes;
pub mod constants;
pub mod errors;
pub mod euler;
pub mod matrix;
pub mod rotations;
pub mod transforms;

pub use angle::{Angle, AngleUnits};
pub use axes::{Axis, AxisOrder};
pub use errors::{SpatialError, SpatialResult};

pub use matrix::{
    HomogeneousMatrix3, HomogeneousMatrix4, Rotation, RotationMatrix2, RotationMatrix3, Transform,
};

pub use euler::{rpy2jac, rpy2r, rpy2t, tr2rpy, tr2rpy_seq, RotationSource, Rpy, RpyJacobian};
pub use rotations::{rot2, rot_axis, rotx, roty, rotz};
pub use transforms::{r2t, r2t_seq, se2, se3, t2r, t2r_seq, trot2, trotx, troty, trotz};
