// ============================================================================
// Engine Module
// Contains the conversion scan and the configurable converter
// ============================================================================

mod converter;

pub mod factory;

pub use converter::{roman_to_decimal, Converter};
pub use factory::{create_from_config, ConverterBuilder};
