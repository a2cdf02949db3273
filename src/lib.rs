// ============================================================================
// Roman Numeral Library
// Roman numeral to decimal conversion with classical notation validation
// ============================================================================

//! # Roman Numeral
//!
//! Converts uppercase roman numerals to decimal integers.
//!
//! ## Rules
//!
//! - **Additive/subtractive**: values are added, except a symbol smaller than
//!   its right neighbour is subtracted (`IX` is 9, `XI` is 11)
//! - **Half symbols**: V, L and D may appear at most once per numeral
//! - **Permissive repetition**: I, X, C and M may repeat freely (`IIII` is 4)
//! - **Empty input** is 0, not an error
//! - **Range**: unchecked by default; opt into 1..=3999 with `RangePolicy`
//!
//! ## Example
//!
//! ```rust
//! use roman_numeral::prelude::*;
//! use std::sync::Arc;
//!
//! // One-off conversion
//! assert_eq!(roman_to_decimal("MMXXIV"), Ok(2024));
//! assert_eq!(roman_to_decimal("MDD"), Err(RomanError::InvalidNumeral));
//!
//! // Converter enforcing the conventional range, logging each outcome
//! let converter = ConverterBuilder::new()
//!     .conventional_range()
//!     .event_handler(Arc::new(LoggingEventHandler))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(converter.convert("MMMCMXCIX"), Ok(3999));
//! assert!(converter.convert("MMMM").is_err());
//!
//! // Validated value object
//! let numeral: RomanNumeral = "XLIX".parse().unwrap();
//! assert_eq!(numeral.value(), 49);
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeral;

pub use engine::roman_to_decimal;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{ConverterConfig, RangePolicy, RomanNumeral};
    pub use crate::engine::{create_from_config, roman_to_decimal, Converter, ConverterBuilder};
    pub use crate::interfaces::{
        ConversionEvent, EventHandler, LoggingEventHandler, NoOpEventHandler,
    };
    pub use crate::numeral::{RomanError, RomanResult, Symbol};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct CountingHandler {
        converted: Mutex<u64>,
        rejected: Mutex<u64>,
    }

    impl EventHandler for CountingHandler {
        fn on_event(&self, event: ConversionEvent) {
            match event {
                ConversionEvent::Converted { .. } => *self.converted.lock().unwrap() += 1,
                ConversionEvent::Rejected { .. } => *self.rejected.lock().unwrap() += 1,
            }
        }
    }

    #[test]
    fn test_end_to_end_conversion() {
        let handler = Arc::new(CountingHandler::default());
        let converter = ConverterBuilder::new()
            .conventional_range()
            .event_handler(handler.clone())
            .build()
            .unwrap();

        let inputs = ["MCMXCVIII", "MMXVIII", "XCV", "A", "XVV", "MMMM", ""];
        let results: Vec<_> = inputs.iter().map(|s| converter.convert(s)).collect();

        assert_eq!(results[0], Ok(1998));
        assert_eq!(results[1], Ok(2018));
        assert_eq!(results[2], Ok(95));
        assert_eq!(results[3], Err(RomanError::InvalidNumeral));
        assert_eq!(results[4], Err(RomanError::InvalidNumeral));
        assert!(matches!(
            results[5],
            Err(RomanError::OutOfRange { value: 4000, .. })
        ));
        assert!(matches!(
            results[6],
            Err(RomanError::OutOfRange { value: 0, .. })
        ));

        assert_eq!(*handler.converted.lock().unwrap(), 3);
        assert_eq!(*handler.rejected.lock().unwrap(), 4);
    }

    #[test]
    fn test_value_object_agrees_with_converter() {
        let converter = Converter::default();
        for roman in ["", "I", "XIV", "MMMXLV", "IIII"] {
            let numeral: RomanNumeral = roman.parse().unwrap();
            assert_eq!(converter.convert(roman), Ok(numeral.value()));
        }
    }

    #[test]
    fn test_repeated_calls_are_deterministic() {
        let converter = Converter::default();
        for _ in 0..3 {
            assert_eq!(converter.convert("CLL"), Err(RomanError::InvalidNumeral));
            assert_eq!(converter.convert("XLV"), Ok(45));
        }
    }
}
