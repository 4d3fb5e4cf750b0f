//! Error types for hex coordinate operations. Every fallible operation in this
//! crate validates its input immediately and returns one of these, so a bad
//! coordinate can never silently flow into later math.

use std::borrow::Borrow;
use thiserror::Error;
use validator::ValidationErrors;

/// Result type alias using [HexError] as the error type.
pub type Result<T> = std::result::Result<T, HexError>;

/// Sum of three cube components, widened so it can't overflow
pub(crate) fn plane_sum(
    q: impl Borrow<i32>,
    r: impl Borrow<i32>,
    s: impl Borrow<i32>,
) -> i64 {
    i64::from(*q.borrow()) + i64::from(*r.borrow()) + i64::from(*s.borrow())
}

/// Everything that can go wrong while building or converting hex coordinates.
#[derive(Debug, Error)]
pub enum HexError {
    /// A cube coordinate was constructed off the plane `q + r + s = 0`.
    #[error(
        "Invalid hex ({q}, {r}, {s}); must be on the plane q+r+s=0, \
        but sum is {}",
        plane_sum(.q, .r, .s)
    )]
    InvariantViolation { q: i32, r: i32, s: i32 },

    /// A fractional hex whose nearest cell doesn't fit in `i32` components.
    /// Also covers NaN, which has no nearest cell at all.
    #[error("No hex representable near ({q}, {r}, {s})")]
    Unrepresentable { q: f64, r: f64, s: f64 },

    /// A direction or corner index outside `[0, 6)`.
    #[error("{what} index {index} out of range, must be in [0, 6)")]
    OutOfRange { what: &'static str, index: usize },

    /// A value for a closed two-valued discriminant (parity, orientation) that
    /// isn't one of the two allowed values.
    #[error("Invalid {what} value {value}")]
    InvalidArgument { what: &'static str, value: i32 },

    /// A layout dimension that can't be used for pixel math, e.g. a size of
    /// zero (which we would later divide by) or a non-finite origin.
    #[error("Degenerate layout {what} ({x}, {y})")]
    NumericDegeneracy { what: &'static str, x: f64, y: f64 },

    /// A [LayoutConfig](crate::LayoutConfig) failed validation.
    #[error("Invalid layout config: {0}")]
    InvalidConfig(#[from] ValidationErrors),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invariant_message() {
        let err = HexError::InvariantViolation { q: 1, r: 1, s: 0 };
        let message = err.to_string();
        assert!(message.contains("(1, 1, 0)"), "{}", message);
        assert!(message.contains("sum is 2"), "{}", message);
    }

    #[test]
    fn test_invariant_message_extremes() {
        let err = HexError::InvariantViolation {
            q: i32::MAX,
            r: i32::MAX,
            s: 2,
        };
        assert!(err.to_string().ends_with("sum is 4294967296"));
    }

    #[test]
    fn test_out_of_range_message() {
        let err = HexError::OutOfRange {
            what: "direction",
            index: 6,
        };
        assert_eq!(
            err.to_string(),
            "direction index 6 out of range, must be in [0, 6)"
        );
    }
}
