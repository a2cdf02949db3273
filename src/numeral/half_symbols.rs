// ============================================================================
// Half Symbol Tracker
// Per-scan record of the half symbols (V, L, D) already seen
// ============================================================================

use super::errors::{RomanError, RomanResult};
use super::symbol::Symbol;
use arrayvec::ArrayVec;

/// Scan state for a single conversion.
///
/// Holds at most one entry per half symbol, so three slots always suffice and
/// the tracker never allocates. Create a fresh tracker for every conversion.
#[derive(Debug, Default)]
pub struct HalfSymbolTracker {
    seen: ArrayVec<Symbol, 3>,
}

impl HalfSymbolTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `symbol` if it is a half symbol.
    ///
    /// # Errors
    /// Returns `InvalidNumeral` if the half symbol was already recorded.
    #[inline]
    pub fn check(&mut self, symbol: Symbol) -> RomanResult<()> {
        if !symbol.is_half() {
            return Ok(());
        }

        if self.seen.contains(&symbol) {
            return Err(RomanError::InvalidNumeral);
        }

        // Only V, L and D reach this point, each at most once
        self.seen.push(symbol);
        Ok(())
    }

    /// Number of distinct half symbols seen so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    pub fn contains(&self, symbol: Symbol) -> bool {
        self.seen.contains(&symbol)
    }
}
