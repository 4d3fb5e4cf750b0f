use crate::{layout::OrientationKind, Parity, Point};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Everything needed to describe a [Layout](crate::Layout), in a form that can
/// be loaded from a file or sent over the wire. A config isn't usable for any
/// math until it's been turned into a layout with
/// [Layout::from_config](crate::Layout::from_config), which validates it.
///
/// Missing fields fall back to [LayoutConfig::default].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LayoutConfig {
    /// Whether hexes are drawn with a point or a flat side on top. This also
    /// decides whether offset grids shove rows (pointy) or columns (flat).
    pub orientation: OrientationKind,

    /// Which rows/columns are shoved in offset grids
    pub parity: Parity,

    /// Distance from the center of a hex to any of its corners, in pixels.
    /// The two components can differ to squash or stretch the hexes. Both
    /// must be finite and non-zero, since pixel->hex conversion divides by
    /// them.
    #[validate(custom = "validate_size")]
    pub size: Point,

    /// Pixel position of the center of hex `(0, 0, 0)`
    #[validate(custom = "validate_origin")]
    pub origin: Point,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            orientation: OrientationKind::Pointy,
            parity: Parity::Even,
            size: Point::new(1.0, 1.0),
            origin: Point::ORIGIN,
        }
    }
}

fn validate_size(size: &Point) -> Result<(), ValidationError> {
    if size.is_finite() && size.x != 0.0 && size.y != 0.0 {
        Ok(())
    } else {
        Err(ValidationError::new("size_degenerate"))
    }
}

fn validate_origin(origin: &Point) -> Result<(), ValidationError> {
    if origin.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("origin_not_finite"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(LayoutConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_size() {
        assert!(validate_size(&Point::new(10.0, -3.0)).is_ok());
        assert!(validate_size(&Point::new(0.0, 1.0)).is_err());
        assert!(validate_size(&Point::new(1.0, -0.0)).is_err());
        assert!(validate_size(&Point::new(f64::NAN, 1.0)).is_err());
        assert!(validate_size(&Point::new(1.0, f64::INFINITY)).is_err());
    }

    #[test]
    fn test_validate_origin() {
        assert!(validate_origin(&Point::new(-400.0, 0.0)).is_ok());
        assert!(validate_origin(&Point::new(f64::NEG_INFINITY, 0.0)).is_err());
    }
}
