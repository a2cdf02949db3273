// ============================================================================
// Roman Numeral Value Object
// ============================================================================

use crate::engine::roman_to_decimal;
use crate::numeral::{RomanError, RomanResult};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A validated roman numeral together with its decimal value.
///
/// Only obtainable through parsing, so every instance passed the same rules
/// as [`roman_to_decimal`].
///
/// ```
/// use roman_numeral::domain::RomanNumeral;
///
/// let year: RomanNumeral = "MCMXCVIII".parse().unwrap();
/// assert_eq!(year.value(), 1998);
/// assert_eq!(year.to_string(), "MCMXCVIII");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RomanNumeral {
    text: Box<str>,
    value: u64,
}

impl RomanNumeral {
    /// Parse and validate `roman`.
    ///
    /// # Errors
    /// Returns `InvalidNumeral` under the same conditions as [`roman_to_decimal`].
    pub fn parse(roman: &str) -> RomanResult<Self> {
        let value = roman_to_decimal(roman)?;
        Ok(Self {
            text: roman.into(),
            value,
        })
    }

    #[inline]
    pub fn value(&self) -> u64 {
        self.value
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// True for the empty numeral, whose value is 0
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl FromStr for RomanNumeral {
    type Err = RomanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for RomanNumeral {
    type Error = RomanError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<RomanNumeral> for u64 {
    fn from(numeral: RomanNumeral) -> Self {
        numeral.value
    }
}

impl AsRef<str> for RomanNumeral {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl PartialOrd for RomanNumeral {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// By value first; "IIII" and "IV" are equal in value but remain distinct
impl Ord for RomanNumeral {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value
            .cmp(&other.value)
            .then_with(|| self.text.cmp(&other.text))
    }
}

impl fmt::Display for RomanNumeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

// ============================================================================
// Serde (as the numeral text, validated on the way in)
// ============================================================================

#[cfg(feature = "serde")]
impl Serialize for RomanNumeral {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for RomanNumeral {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        RomanNumeral::parse(&text).map_err(serde::de::Error::custom)
    }
}
