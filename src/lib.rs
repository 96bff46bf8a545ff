#![cfg_attr(docsrs, feature(doc_cfg))]
//! # seq-sieve
//!
//! seq-sieve mines sequential patterns from databases of itemset sequences.
//! It enumerates frequent patterns by depth-first pattern growth over
//! pseudo-projected databases, and can restrict the output to closed or
//! maximal patterns with bidirectional extension checks and backscan
//! pruning, so the non-closed part of the search space is never listed.
//!
//! ## Features
//! - Zero-copy [`PseudoSequence`](projection::PseudoSequence) views into one
//!   shared arena of sequences
//! - Frequent, closed and maximal modes behind one [`mine`](algs::mine) call
//! - Exact support sets on every reported pattern
//! - Pluggable [`PatternSink`](output::PatternSink)s: in memory or streamed text
//! - Post-hoc closed, maximal and generator filters
//! - Optional rayon-parallel search (`rayon` feature)
//!
//! ## Determinism
//!
//! Extensions are explored in hash-map order. Enable `deterministic-order`
//! for a reproducible emission order, or sort a
//! [`MemorySink`](output::MemorySink) with `sort_canonical`.
//!
//! ## Usage
//!
//! ```rust
//! use seq_sieve::prelude::*;
//!
//! let db = SequenceDatabase::from_nested(vec![
//!     vec![vec![1u32], vec![1, 2, 3], vec![1, 3]],
//!     vec![vec![1], vec![3], vec![2, 3]],
//! ]);
//! let cfg = MinerConfig::new(MinSupport::Relative(1.0)).kind(PatternKind::Closed);
//! let mut sink = MemorySink::new();
//! mine(&db, &cfg, &mut sink).unwrap();
//! assert!(sink.iter().all(|p| p.support() == 2));
//! ```

pub mod algs;
pub mod debug_invariants;
pub mod mining_error;
pub mod model;
pub mod output;
pub mod projection;
pub mod stats;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::config::{MinSupport, MinerConfig, PatternKind};
    pub use crate::algs::growth::mine;
    #[cfg(feature = "rayon")]
    pub use crate::algs::parallel::mine_parallel;
    pub use crate::algs::postfilter::{retain_closed, retain_generators, retain_maximal};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::mining_error::MiningError;
    pub use crate::model::{
        Itemset, Sequence, SequenceDatabase, SequenceId, SequentialPattern, SupportSet,
        SymbolLike,
    };
    pub use crate::output::{MemorySink, PatternSink, WriterSink};
    pub use crate::stats::MiningStats;
}
