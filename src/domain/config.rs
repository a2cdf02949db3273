// ============================================================================
// Converter Configuration
// Range policy and validation settings for the converter
// ============================================================================

use crate::numeral::{RomanError, RomanResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Smallest value expressible in classical notation
pub const CONVENTIONAL_MIN: u64 = 1;

/// Largest value expressible without overlined symbols (MMMCMXCIX)
pub const CONVENTIONAL_MAX: u64 = 3999;

// ============================================================================
// Range Policy
// ============================================================================

/// Whether converted values are checked against a numeric range.
///
/// The scan itself enforces no bounds: `"MMMM"` is 4000 and `""` is 0.
/// A checked policy rejects such values with `RomanError::OutOfRange`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RangePolicy {
    /// Any value the scan produces is accepted
    #[default]
    Unchecked,

    /// Values must lie in 1..=3999
    Conventional,

    /// Values must lie in min..=max
    Bounded { min: u64, max: u64 },
}

impl RangePolicy {
    /// Inclusive bounds, or `None` when unchecked.
    pub fn bounds(&self) -> Option<(u64, u64)> {
        match *self {
            RangePolicy::Unchecked => None,
            RangePolicy::Conventional => Some((CONVENTIONAL_MIN, CONVENTIONAL_MAX)),
            RangePolicy::Bounded { min, max } => Some((min, max)),
        }
    }

    /// Pass `value` through, or reject it if it falls outside the bounds.
    #[inline]
    pub fn check(&self, value: u64) -> RomanResult<u64> {
        match self.bounds() {
            Some((min, max)) if value < min || value > max => {
                Err(RomanError::OutOfRange { value, min, max })
            }
            _ => Ok(value),
        }
    }
}

// ============================================================================
// Complete Converter Configuration
// ============================================================================

/// Configuration for a `Converter`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConverterConfig {
    /// Range check applied after a successful scan
    pub range_policy: RangePolicy,
}

impl ConverterConfig {
    /// Create the permissive default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Conventional 1..=3999 range enforcement
    pub fn strict() -> Self {
        Self::new().with_range_policy(RangePolicy::Conventional)
    }

    /// Builder method: Set the range policy
    pub fn with_range_policy(mut self, range_policy: RangePolicy) -> Self {
        self.range_policy = range_policy;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if let RangePolicy::Bounded { min, max } = self.range_policy {
            if min > max {
                return Err(format!(
                    "Range minimum {} must not exceed maximum {}",
                    min, max
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unchecked() {
        let config = ConverterConfig::new();
        assert_eq!(config.range_policy, RangePolicy::Unchecked);
        assert!(config.validate().is_ok());
        assert_eq!(config.range_policy.check(0), Ok(0));
        assert_eq!(config.range_policy.check(1_000_000), Ok(1_000_000));
    }

    #[test]
    fn test_conventional_bounds() {
        let policy = ConverterConfig::strict().range_policy;
        assert_eq!(policy.bounds(), Some((1, 3999)));
        assert_eq!(policy.check(1), Ok(1));
        assert_eq!(policy.check(3999), Ok(3999));
        assert_eq!(
            policy.check(0),
            Err(RomanError::OutOfRange {
                value: 0,
                min: 1,
                max: 3999
            })
        );
        assert_eq!(
            policy.check(4000),
            Err(RomanError::OutOfRange {
                value: 4000,
                min: 1,
                max: 3999
            })
        );
    }

    #[test]
    fn test_bounded_policy() {
        let config =
            ConverterConfig::new().with_range_policy(RangePolicy::Bounded { min: 10, max: 20 });
        assert!(config.validate().is_ok());
        assert!(config.range_policy.check(9).is_err());
        assert_eq!(config.range_policy.check(15), Ok(15));
        assert!(config.range_policy.check(21).is_err());
    }

    #[test]
    fn test_validation() {
        let config =
            ConverterConfig::new().with_range_policy(RangePolicy::Bounded { min: 20, max: 10 });
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_serde_roundtrip() {
        let config = ConverterConfig::strict();
        let json = serde_json::to_string(&config).unwrap();
        let back: ConverterConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
