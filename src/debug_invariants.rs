//! Invariant checks for databases and projected views.
//!
//! The miner assumes sorted, duplicate-free itemsets and cut points that lie
//! inside their owning sequence. Violations would not crash the search; they
//! would silently produce wrong supports, so debug builds check them eagerly.

use crate::mining_error::MiningError;

/// Validation hook for structures the miner trusts without re-checking.
pub trait DebugInvariants {
    /// Validate invariants and return the first violation found.
    fn validate_invariants(&self) -> Result<(), MiningError>;

    /// Panic on the first violation when invariant checking is compiled in.
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "invariant violation");
    }
}

/// Runs a fallible check and panics with context when invariant checking is
/// enabled (`debug_assertions`, `strict-invariants` or `check-invariants`).
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}
