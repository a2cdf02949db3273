// ============================================================================
// Roman Numeral Converter
// Right-to-left additive/subtractive scan with half symbol validation
// ============================================================================

use crate::domain::ConverterConfig;
use crate::interfaces::{ConversionEvent, EventHandler, NoOpEventHandler};
use crate::numeral::{HalfSymbolTracker, RomanError, RomanResult, Symbol};
use std::sync::Arc;

/// Convert an uppercase roman numeral to its decimal value.
///
/// Two rules are applied while scanning from the last symbol to the first:
/// 1. Values are added, except a symbol smaller than its right neighbour is
///    subtracted (`IV` is 4, `VI` is 6).
/// 2. The half symbols V, L and D may appear at most once.
///
/// I, X, C and M may repeat freely, so `"IIII"` is 4. No upper bound is
/// enforced; use a `Converter` with a checked `RangePolicy` for that.
///
/// An empty string is 0, not an error.
///
/// # Errors
/// Returns `InvalidNumeral` on any byte outside `IVXLCDM` or on a repeated
/// half symbol.
///
/// # Example
/// ```
/// use roman_numeral::roman_to_decimal;
///
/// assert_eq!(roman_to_decimal("MMXXIV"), Ok(2024));
/// assert!(roman_to_decimal("XVV").is_err());
/// ```
pub fn roman_to_decimal(roman: &str) -> RomanResult<u64> {
    let bytes = roman.as_bytes();
    let Some((&last, rest)) = bytes.split_last() else {
        return Ok(0);
    };

    let mut half_symbols = HalfSymbolTracker::new();

    let last = Symbol::from_byte(last).ok_or(RomanError::InvalidNumeral)?;
    half_symbols.check(last)?;

    // The last numeral has no right neighbour and is always added
    let mut sum = last.value();
    let mut next = last;

    for &byte in rest.iter().rev() {
        let current = Symbol::from_byte(byte).ok_or(RomanError::InvalidNumeral)?;
        half_symbols.check(current)?;

        // Never underflows: each symbol outweighs all smaller ones combined
        if current.value() < next.value() {
            sum -= current.value();
        } else {
            sum += current.value();
        }
        next = current;
    }

    Ok(sum)
}

/// Configurable converter.
///
/// Applies the configured `RangePolicy` after the scan and reports every
/// outcome to its `EventHandler`. Holds no mutable state, so one instance can
/// be shared across threads.
pub struct Converter {
    config: ConverterConfig,
    event_handler: Arc<dyn EventHandler>,
}

impl Converter {
    pub fn new(config: ConverterConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            config,
            event_handler,
        }
    }

    /// Converter with the given configuration and no event reporting
    pub fn with_config(config: ConverterConfig) -> Self {
        Self::new(config, Arc::new(NoOpEventHandler))
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Convert `roman`, then apply the range policy.
    ///
    /// # Errors
    /// `InvalidNumeral` as for [`roman_to_decimal`]; `OutOfRange` when the
    /// value violates a checked range policy.
    pub fn convert(&self, roman: &str) -> RomanResult<u64> {
        let _span = tracing::trace_span!("convert", len = roman.len()).entered();

        let result =
            roman_to_decimal(roman).and_then(|value| self.config.range_policy.check(value));

        let event = match result {
            Ok(value) => ConversionEvent::Converted {
                input: roman.to_string(),
                value,
            },
            Err(error) => ConversionEvent::Rejected {
                input: roman.to_string(),
                error,
            },
        };
        self.event_handler.on_event(event);

        result
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::with_config(ConverterConfig::default())
    }
}

impl std::fmt::Debug for Converter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Converter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
