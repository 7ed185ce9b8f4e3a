//! The angle-units selector.
//!
//! [`AngleUnits`] is a closed two-member set: every angle entering the
//! library is either radians or degrees. Holding the selector as an enum
//! makes an invalid units value unrepresentable in typed code; the string
//! boundary ([`FromStr`]) is where
//! [`InvalidUnits`](crate::SpatialError::InvalidUnits) surfaces for callers
//! that start from text (configuration values, generated bindings, tooling).

use crate::errors::SpatialError;
use std::fmt;
use std::str::FromStr;

/// Interpretation of a raw angular value: radians or degrees.
///
/// The default is radians, matching the convention of every function in this
/// library.
///
/// ```
/// use spatial_core::AngleUnits;
///
/// assert_eq!(AngleUnits::default(), AngleUnits::Radians);
/// assert_eq!("degrees".parse::<AngleUnits>().unwrap(), AngleUnits::Degrees);
/// assert!("gradians".parse::<AngleUnits>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AngleUnits {
    /// Radians, the default throughout the library.
    #[default]
    Radians,
    /// Degrees; converted to radians at [`Angle`](crate::Angle) construction.
    Degrees,
}

impl FromStr for AngleUnits {
    type Err = SpatialError;

    /// Parses `"rad"`/`"radians"` or `"deg"`/`"degrees"`, ASCII
    /// case-insensitive. Anything else is
    /// [`InvalidUnits`](SpatialError::InvalidUnits).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rad" | "radians" => Ok(Self::Radians),
            "deg" | "degrees" => Ok(Self::Degrees),
            _ => Err(SpatialError::invalid_units(s)),
        }
    }
}

impl fmt::Display for AngleUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Radians => write!(f, "radians"),
            Self::Degrees => write!(f, "degrees"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_radians() {
        assert_eq!("rad".parse::<AngleUnits>().unwrap(), AngleUnits::Radians);
        assert_eq!(
            "Radians".parse::<AngleUnits>().unwrap(),
            AngleUnits::Radians
        );
    }

    #[test]
    fn test_parse_degrees() {
        assert_eq!("deg".parse::<AngleUnits>().unwrap(), AngleUnits::Degrees);
        assert_eq!(
            "DEGREES".parse::<AngleUnits>().unwrap(),
            AngleUnits::Degrees
        );
    }

    #[test]
    fn test_parse_invalid() {
        let err = "foo".parse::<AngleUnits>().unwrap_err();
        assert_eq!(
            err,
            SpatialError::InvalidUnits {
                value: "foo".to_string()
            }
        );
    }

    #[test]
    fn test_default_is_radians() {
        assert_eq!(AngleUnits::default(), AngleUnits::Radians);
    }

    #[test]
    fn test_display() {
        assert_eq!(AngleUnits::Radians.to_string(), "radians");
        assert_eq!(AngleUnits::Degrees.to_string(), "degrees");
    }
}
