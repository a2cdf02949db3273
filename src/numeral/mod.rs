// ============================================================================
// Numeral Module
// Symbol table, scan state and error types for roman numerals
// ============================================================================
//
// This module provides:
// - Symbol: the seven roman symbols and their fixed decimal values
// - HalfSymbolTracker: per-conversion record of V, L and D already seen
// - RomanError: error types for conversion
//
// Design principles:
// - Symbol table is a compile-time constant (enum discriminants)
// - Scan state is created per call and never shared
// - All validation returns Result (no panics)

mod errors;
mod half_symbols;
mod symbol;

pub use errors::{RomanError, RomanResult};
pub use half_symbols::HalfSymbolTracker;
pub use symbol::Symbol;
