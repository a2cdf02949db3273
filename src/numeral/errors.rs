// ============================================================================
// Numeral Errors
// Error types for roman numeral conversion
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur while converting a roman numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RomanError {
    /// Unrecognized symbol, or a half symbol (V, L, D) used more than once
    InvalidNumeral,
    /// Value outside the bounds of a checked `RangePolicy`
    OutOfRange { value: u64, min: u64, max: u64 },
}

impl fmt::Display for RomanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RomanError::InvalidNumeral => write!(f, "invalid roman numeral"),
            RomanError::OutOfRange { value, min, max } => write!(
                f,
                "roman numeral out of range: {} is outside {}..={}",
                value, min, max
            ),
        }
    }
}

impl std::error::Error for RomanError {}

/// Result type alias for numeral conversions
pub type RomanResult<T> = Result<T, RomanError>;
