//! Parallel mining: first-level subtrees are independent and run on rayon.
//!
//! Workers share the prepared arena read-only, the counters and memory
//! sampler through atomics, and the caller's sink behind a mutex. The set of
//! reported patterns equals that of [`mine`](crate::algs::growth::mine); the
//! order they reach the sink does not.

use std::time::Instant;

use parking_lot::Mutex;
use rayon::prelude::*;

use crate::algs::config::MinerConfig;
use crate::algs::growth::{PreparedDatabase, Search};
use crate::mining_error::MiningError;
use crate::model::bounds::SymbolLike;
use crate::model::database::SequenceDatabase;
use crate::model::pattern::SequentialPattern;
use crate::output::PatternSink;
use crate::stats::{MemorySampler, MiningStats, SearchCounters};

/// Per-worker handle forwarding to a sink shared by all workers.
struct SharedSink<'a, 'b, S> {
    inner: &'a Mutex<&'b mut S>,
}

impl<K, S: PatternSink<K>> PatternSink<K> for SharedSink<'_, '_, S> {
    fn save_pattern(&mut self, pattern: &SequentialPattern<K>) -> Result<(), MiningError> {
        self.inner.lock().save_pattern(pattern)
    }

    fn save_patterns(&mut self, patterns: &[SequentialPattern<K>]) -> Result<(), MiningError> {
        self.inner.lock().save_patterns(patterns)
    }
}

/// Same as [`mine`](crate::algs::growth::mine), with one rayon task per
/// frequent symbol. The first sink error aborts the run.
pub fn mine_parallel<K, S>(
    database: &SequenceDatabase<K>,
    config: &MinerConfig,
    sink: &mut S,
) -> Result<MiningStats, MiningError>
where
    K: SymbolLike + Send + Sync,
    S: PatternSink<K> + Send,
{
    let started = Instant::now();
    database.validate_for_mining()?;
    let min_support = config.min_support.resolve(database.size())?;
    let prepared = PreparedDatabase::new(database, min_support);
    let counters = SearchCounters::default();
    let memory = MemorySampler::new();

    {
        let shared = Mutex::new(&mut *sink);
        prepared
            .roots
            .par_iter()
            .try_for_each(|(symbol, owners)| {
                let mut local = SharedSink { inner: &shared };
                Search::new(&prepared, config, &counters, &memory, &mut local)
                    .visit_root(*symbol, owners)
            })?;
    }
    sink.finish()?;

    let stats = MiningStats::collect(
        config.kind,
        min_support,
        database.size(),
        &counters,
        &memory,
        started.elapsed(),
    );
    log::debug!("parallel run on {} threads\n{stats}", rayon::current_num_threads());
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algs::config::{MinSupport, PatternKind};
    use crate::algs::growth::mine;
    use crate::output::MemorySink;

    #[test]
    fn matches_sequential_run() {
        let db = SequenceDatabase::from_nested(vec![
            vec![vec![1u32, 2], vec![3], vec![1, 2], vec![4]],
            vec![vec![1], vec![3], vec![2, 4]],
            vec![vec![2], vec![1, 2], vec![3, 4]],
            vec![vec![1, 2], vec![4]],
        ]);
        for kind in [PatternKind::Frequent, PatternKind::Closed, PatternKind::Maximal] {
            let cfg = MinerConfig::new(MinSupport::Absolute(2)).kind(kind);
            let mut seq = MemorySink::new();
            let mut par = MemorySink::new();
            let a = mine(&db, &cfg, &mut seq).unwrap();
            let b = mine_parallel(&db, &cfg, &mut par).unwrap();
            seq.sort_canonical();
            par.sort_canonical();
            assert_eq!(seq.into_patterns(), par.into_patterns());
            assert_eq!(a.emitted_patterns, b.emitted_patterns);
        }
    }
}
