//! Common bound aliases used across the model and the miners.
//!
//! These traits have blanket impls, so any type satisfying the underlying
//! bounds implements them automatically. They only shorten `where` clauses.

/// Canonical bound set for symbols stored in itemsets.
///
/// - `Copy` so itemsets and views can hand symbols out by value
/// - `Eq + Hash` for the extension-pair and period-key maps
/// - `Ord` because itemsets are kept ascending and i-extensions only grow upward
/// - `Debug` for invariant messages and trace logging
pub trait SymbolLike: Copy + Eq + std::hash::Hash + Ord + std::fmt::Debug {}
impl<T> SymbolLike for T where T: Copy + Eq + std::hash::Hash + Ord + std::fmt::Debug {}
