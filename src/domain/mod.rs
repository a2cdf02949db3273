// ============================================================================
// Domain Models Module
// Contains the converter configuration and value objects
// ============================================================================

pub mod config;
pub mod numeral;

pub use config::{ConverterConfig, RangePolicy, CONVENTIONAL_MAX, CONVENTIONAL_MIN};
pub use numeral::RomanNumeral;
