//! MiningError: Unified error type for seq-sieve public APIs
//!
//! Structural conditions inside the search (a projection running past the end
//! of a sequence, an empty period) are not errors; they surface as `None`
//! and simply stop a branch. This type covers the conditions a caller can act
//! on: a bad database, a bad threshold, or a sink that failed to write.

use thiserror::Error;

/// Unified error type for seq-sieve operations.
#[derive(Debug, Error)]
pub enum MiningError {
    /// Two sequences in one database carry the same id.
    #[error("Database error: sequence id {0} appears more than once")]
    DuplicateSequenceId(u32),
    /// A sequence was stored without any itemset.
    #[error("Database error: sequence {0} has no itemsets")]
    EmptySequence(u32),
    /// A stored itemset is empty, unsorted or holds a duplicate symbol.
    #[error("Database error: itemset {itemset} of sequence {sequence} is not strictly ascending")]
    MalformedItemset { sequence: u32, itemset: usize },
    /// A relative minimum support was NaN or outside `[0, 1]`.
    #[error("Configuration error: relative minimum support {0} is not in [0, 1]")]
    InvalidMinSupport(f64),
    /// A pseudo-sequence cut point lies outside its owning sequence.
    #[error("Projection error: view over {owner} starts past its end at ({itemset}, {item})")]
    InvalidCut {
        owner: usize,
        itemset: usize,
        item: usize,
    },
    /// The pattern sink failed to write.
    #[error("Sink error: {0}")]
    Io(#[from] std::io::Error),
}
