//! Pattern sinks: where discovered patterns go.
//!
//! The miners call [`PatternSink::save_pattern`] per pattern and, once the
//! run is over, [`PatternSink::finish`]. Batch producers can hand over a slice
//! through [`PatternSink::save_patterns`]. A failing sink aborts the run; the miner
//! keeps no state that would need rolling back.

pub mod memory;
pub mod writer;

pub use memory::MemorySink;
pub use writer::{WriterSink, render_pattern};

use crate::mining_error::MiningError;
use crate::model::pattern::SequentialPattern;

/// Receiver of mined patterns.
pub trait PatternSink<K> {
    /// Accepts one pattern together with its support set.
    fn save_pattern(&mut self, pattern: &SequentialPattern<K>) -> Result<(), MiningError>;

    fn save_patterns(&mut self, patterns: &[SequentialPattern<K>]) -> Result<(), MiningError> {
        for p in patterns {
            self.save_pattern(p)?;
        }
        Ok(())
    }

    /// Called once after the last pattern.
    fn finish(&mut self) -> Result<(), MiningError> {
        Ok(())
    }
}

impl<K, S: PatternSink<K> + ?Sized> PatternSink<K> for Box<S> {
    fn save_pattern(&mut self, pattern: &SequentialPattern<K>) -> Result<(), MiningError> {
        (**self).save_pattern(pattern)
    }

    fn save_patterns(&mut self, patterns: &[SequentialPattern<K>]) -> Result<(), MiningError> {
        (**self).save_patterns(patterns)
    }

    fn finish(&mut self) -> Result<(), MiningError> {
        (**self).finish()
    }
}
