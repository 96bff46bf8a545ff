//! Run statistics: pattern counters, pruning counters and a memory sampler.
//!
//! The sampler does not measure the heap. It tracks an estimate of the bytes
//! held by live projected databases, which is what grows with the search
//! depth, and keeps the peak for reporting. Nothing is ever evicted.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::algs::config::PatternKind;

/// Estimated bytes of live projected databases, with the peak seen so far.
#[derive(Debug, Default)]
pub struct MemorySampler {
    current: AtomicUsize,
    peak: AtomicUsize,
}

impl MemorySampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&self, bytes: usize) {
        let now = self.current.fetch_add(bytes, Ordering::Relaxed) + bytes;
        self.peak.fetch_max(now, Ordering::Relaxed);
    }

    pub fn deallocate(&self, bytes: usize) {
        self.current.fetch_sub(bytes, Ordering::Relaxed);
    }

    pub fn current_usage(&self) -> usize {
        self.current.load(Ordering::Relaxed)
    }

    pub fn peak_usage(&self) -> usize {
        self.peak.load(Ordering::Relaxed)
    }
}

/// Accounts `bytes` against a sampler for as long as the guard lives.
pub struct MemoryGuard<'a> {
    sampler: &'a MemorySampler,
    bytes: usize,
}

impl<'a> MemoryGuard<'a> {
    pub fn new(sampler: &'a MemorySampler, bytes: usize) -> Self {
        sampler.allocate(bytes);
        Self { sampler, bytes }
    }
}

impl Drop for MemoryGuard<'_> {
    fn drop(&mut self) {
        self.sampler.deallocate(self.bytes);
    }
}

/// Bytes held by a search node with `views` projected views and `owners`
/// supporting sequences.
pub fn estimate_node_size(views: usize, owners: usize) -> usize {
    views * std::mem::size_of::<crate::projection::PseudoSequence>()
        + owners * std::mem::size_of::<usize>()
}

/// Counters shared by every worker of a run.
#[derive(Debug, Default)]
pub struct SearchCounters {
    pub frequent: AtomicUsize,
    pub emitted: AtomicUsize,
    pub pruned: AtomicUsize,
}

impl SearchCounters {
    pub(crate) fn bump(counter: &AtomicUsize) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    fn load(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::Relaxed)
    }
}

/// Read-only summary of a finished run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiningStats {
    pub kind: PatternKind,
    /// Absolute minimum support the run used.
    pub min_support: usize,
    pub database_size: usize,
    /// Frequent patterns generated by the search, whether reported or not.
    pub frequent_patterns: usize,
    /// Patterns handed to the sink.
    pub emitted_patterns: usize,
    /// Subtrees skipped by backscan pruning.
    pub pruned_subtrees: usize,
    /// Peak estimated bytes of live projected databases.
    pub peak_memory_bytes: usize,
    pub elapsed: Duration,
}

impl MiningStats {
    pub(crate) fn collect(
        kind: PatternKind,
        min_support: usize,
        database_size: usize,
        counters: &SearchCounters,
        memory: &MemorySampler,
        elapsed: Duration,
    ) -> Self {
        Self {
            kind,
            min_support,
            database_size,
            frequent_patterns: SearchCounters::load(&counters.frequent),
            emitted_patterns: SearchCounters::load(&counters.emitted),
            pruned_subtrees: SearchCounters::load(&counters.pruned),
            peak_memory_bytes: memory.peak_usage(),
            elapsed,
        }
    }
}

impl fmt::Display for MiningStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {:?} sequential pattern mining ===", self.kind)?;
        writeln!(
            f,
            " minsup: {} of {} sequences",
            self.min_support, self.database_size
        )?;
        writeln!(f, " frequent patterns generated: {}", self.frequent_patterns)?;
        writeln!(f, " patterns emitted: {}", self.emitted_patterns)?;
        writeln!(f, " subtrees pruned by backscan: {}", self.pruned_subtrees)?;
        writeln!(
            f,
            " peak projected-database memory: {:.3} KiB",
            self.peak_memory_bytes as f64 / 1024.0
        )?;
        write!(f, " elapsed: {} ms", self.elapsed.as_millis())
    }
}
