// ============================================================================
// Roman Symbols
// The fixed symbol-value table of classical roman notation
// ============================================================================

use super::errors::RomanError;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the seven roman numeral symbols.
///
/// The discriminant is the symbol's decimal value, so the table lives in the
/// type itself and is a compile-time constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u16)]
pub enum Symbol {
    I = 1,
    V = 5,
    X = 10,
    L = 50,
    C = 100,
    D = 500,
    M = 1000,
}

impl Symbol {
    /// All symbols in ascending order of value
    pub const ALL: [Symbol; 7] = [
        Symbol::I,
        Symbol::V,
        Symbol::X,
        Symbol::L,
        Symbol::C,
        Symbol::D,
        Symbol::M,
    ];

    /// Look up an ASCII byte. Only uppercase symbols are recognized.
    #[inline]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'I' => Some(Symbol::I),
            b'V' => Some(Symbol::V),
            b'X' => Some(Symbol::X),
            b'L' => Some(Symbol::L),
            b'C' => Some(Symbol::C),
            b'D' => Some(Symbol::D),
            b'M' => Some(Symbol::M),
            _ => None,
        }
    }

    /// Decimal value of the symbol.
    #[inline]
    pub const fn value(self) -> u64 {
        self as u64
    }

    /// True for V, L and D, which may appear at most once per numeral.
    #[inline]
    pub const fn is_half(self) -> bool {
        matches!(self, Symbol::V | Symbol::L | Symbol::D)
    }

    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Symbol::I => 'I',
            Symbol::V => 'V',
            Symbol::X => 'X',
            Symbol::L => 'L',
            Symbol::C => 'C',
            Symbol::D => 'D',
            Symbol::M => 'M',
        }
    }
}

impl TryFrom<char> for Symbol {
    type Error = RomanError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if !c.is_ascii() {
            return Err(RomanError::InvalidNumeral);
        }
        Symbol::from_byte(c as u8).ok_or(RomanError::InvalidNumeral)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
