//! Angles and the units selector.

pub mod core;
mod ops;
#[cfg(feature = "serde")]
mod serde_;
pub mod units;

pub use self::core::Angle;
pub use units::AngleUnits;
