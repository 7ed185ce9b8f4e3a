//! Axis and axis-order selectors.
//!
//! Both selectors are closed sets: a rotation axis is one of x, y, z, and a
//! roll-pitch-yaw composition order is one of xyz, zyx. Holding them as enums
//! makes an invalid selector unrepresentable in typed code; the string
//! boundary ([`FromStr`]) is where
//! [`InvalidAxis`](crate::SpatialError::InvalidAxis) and
//! [`InvalidAxisOrder`](crate::SpatialError::InvalidAxisOrder) surface.

use crate::errors::SpatialError;
use std::fmt;
use std::str::FromStr;

/// One of the three coordinate axes of a right-handed 3D frame.
///
/// ```
/// use spatial_core::Axis;
///
/// assert_eq!("z".parse::<Axis>().unwrap(), Axis::Z);
/// assert!("w".parse::<Axis>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    X,
    Y,
    Z,
}

impl FromStr for Axis {
    type Err = SpatialError;

    /// Parses `"x"`, `"y"`, or `"z"`, ASCII case-insensitive. Anything else
    /// is [`InvalidAxis`](SpatialError::InvalidAxis).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            "z" => Ok(Self::Z),
            _ => Err(SpatialError::invalid_axis(s)),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
            Self::Z => write!(f, "z"),
        }
    }
}

/// Composition order of a roll-pitch-yaw triple.
///
/// The order names the sequence of primitive rotation axes multiplied
/// together by [`rpy2r`](crate::euler::rpy2r): `Xyz` composes
/// `Rx(roll) * Ry(pitch) * Rz(yaw)`, `Zyx` composes
/// `Rz(roll) * Ry(pitch) * Rx(yaw)`. The default is `Xyz`.
///
/// ```
/// use spatial_core::AxisOrder;
///
/// assert_eq!(AxisOrder::default(), AxisOrder::Xyz);
/// assert_eq!("zyx".parse::<AxisOrder>().unwrap(), AxisOrder::Zyx);
/// assert!("yzx".parse::<AxisOrder>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxisOrder {
    /// x-y-z composition, the default.
    #[default]
    Xyz,
    /// z-y-x composition.
    Zyx,
}

impl FromStr for AxisOrder {
    type Err = SpatialError;

    /// Parses `"xyz"` or `"zyx"`, ASCII case-insensitive. Anything else is
    /// [`InvalidAxisOrder`](SpatialError::InvalidAxisOrder).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "xyz" => Ok(Self::Xyz),
            "zyx" => Ok(Self::Zyx),
            _ => Err(SpatialError::invalid_axis_order(s)),
        }
    }
}

impl fmt::Display for AxisOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Xyz => write!(f, "xyz"),
            Self::Zyx => write!(f, "zyx"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_axis() {
        assert_eq!("x".parse::<Axis>().unwrap(), Axis::X);
        assert_eq!("Y".parse::<Axis>().unwrap(), Axis::Y);
        assert_eq!("z".parse::<Axis>().unwrap(), Axis::Z);
    }

    #[test]
    fn test_parse_axis_invalid() {
        let err = "w".parse::<Axis>().unwrap_err();
        assert_eq!(
            err,
            SpatialError::InvalidAxis {
                value: "w".to_string()
            }
        );
    }

    #[test]
    fn test_parse_axis_order() {
        assert_eq!("xyz".parse::<AxisOrder>().unwrap(), AxisOrder::Xyz);
        assert_eq!("ZYX".parse::<AxisOrder>().unwrap(), AxisOrder::Zyx);
    }

    #[test]
    fn test_parse_axis_order_invalid() {
        let err = "yzx".parse::<AxisOrder>().unwrap_err();
        assert_eq!(
            err,
            SpatialError::InvalidAxisOrder {
                value: "yzx".to_string()
            }
        );
    }

    #[test]
    fn test_default_order_is_xyz() {
        assert_eq!(AxisOrder::default(), AxisOrder::Xyz);
    }

    #[test]
    fn test_display() {
        assert_eq!(Axis::X.to_string(), "x");
        assert_eq!(AxisOrder::Zyx.to_string(), "zyx");
    }
}
