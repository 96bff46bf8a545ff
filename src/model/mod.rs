//! Symbols, itemsets, sequences, databases and patterns.

pub mod bounds;
pub mod database;
pub mod hashing;
pub mod itemset;
pub mod pattern;
pub mod sequence;

pub use bounds::SymbolLike;
pub use database::SequenceDatabase;
pub use itemset::Itemset;
pub use pattern::{SequentialPattern, SupportSet};
pub use sequence::{Sequence, SequenceId};
