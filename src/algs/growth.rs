//! Depth-first pattern growth over pseudo-projected databases.
//!
//! The search starts from the frequent single symbols and grows a pattern one
//! symbol at a time, recursing into every frequent extension. Each node keeps
//! the arena indices of its supporting sequences (`owners`) and the non-empty
//! projected views of them (`views`); a sequence whose projection is empty
//! still supports the pattern, it just cannot support any extension.
//!
//! In closed and maximal mode every node runs through a small state machine:
//!
//! ```text
//! Generated ─ backscan hit ──────────────────────────> PrunedBeforeExpansion
//!     │
//!     └─ expand ─ forward or backward extension ─────> Suppressed
//!                  └ otherwise ──────────────────────> EmittedClosed / EmittedMaximal
//! ```

use std::time::Instant;

use crate::algs::closure::{backscan_prunable, has_backward_extension};
use crate::algs::config::{MinerConfig, PatternKind};
use crate::mining_error::MiningError;
use crate::model::bounds::SymbolLike;
use crate::model::database::SequenceDatabase;
use crate::model::hashing::FastMap;
use crate::model::pattern::{SequentialPattern, SupportSet};
use crate::model::sequence::Sequence;
use crate::output::PatternSink;
use crate::projection::pairs::{ExtensionKey, build_projected_database, frequent_extension_pairs};
use crate::projection::pseudo::PseudoSequence;
use crate::stats::{MemoryGuard, MemorySampler, MiningStats, SearchCounters, estimate_node_size};

/// What happened to a generated pattern.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PatternState {
    /// Frequent, not yet examined.
    Generated,
    /// Skipped together with its subtree by backscan pruning.
    PrunedBeforeExpansion,
    /// Children explored; emission not yet decided.
    Expanded,
    /// Reported in frequent mode.
    EmittedFrequent,
    EmittedClosed,
    EmittedMaximal,
    /// Has an extension that rules it out; not reported.
    Suppressed,
}

/// Database after the initial pass: infrequent symbols removed and the
/// frequent ones listed with their supporting arena indices.
#[derive(Clone, Debug)]
pub(crate) struct PreparedDatabase<K> {
    pub(crate) arena: Vec<Sequence<K>>,
    /// Frequent symbols, ascending, with the sequences containing them.
    pub(crate) roots: Vec<(K, Vec<usize>)>,
    pub(crate) min_support: usize,
}

impl<K: SymbolLike> PreparedDatabase<K> {
    pub(crate) fn new(database: &SequenceDatabase<K>, min_support: usize) -> Self {
        let occurrences = database.symbol_occurrences();
        let frequent: FastMap<K, Vec<usize>> = occurrences
            .into_iter()
            .filter(|(_, owners)| owners.len() >= min_support)
            .collect();

        // Sequences left empty stay in the arena so indices keep matching
        // the occurrence lists; no root ever refers to them.
        let arena = database
            .sequences()
            .iter()
            .map(|seq| {
                let mut seq = seq.clone();
                seq.retain_symbols(|s| frequent.contains_key(&s));
                seq
            })
            .collect();

        let mut roots: Vec<(K, Vec<usize>)> = frequent.into_iter().collect();
        roots.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        log::debug!(
            "initial pass: {} frequent symbols at minsup {}",
            roots.len(),
            min_support
        );
        Self {
            arena,
            roots,
            min_support,
        }
    }
}

/// One search node: supporting sequences and their non-empty projections.
struct Node {
    owners: Vec<usize>,
    views: Vec<PseudoSequence>,
}

/// Recursive miner state shared by every node of one subtree walk.
pub(crate) struct Search<'a, K, S> {
    arena: &'a [Sequence<K>],
    min_support: usize,
    max_len: usize,
    kind: PatternKind,
    counters: &'a SearchCounters,
    memory: &'a MemorySampler,
    sink: &'a mut S,
}

impl<'a, K, S> Search<'a, K, S>
where
    K: SymbolLike,
    S: PatternSink<K>,
{
    pub(crate) fn new(
        prepared: &'a PreparedDatabase<K>,
        config: &MinerConfig,
        counters: &'a SearchCounters,
        memory: &'a MemorySampler,
        sink: &'a mut S,
    ) -> Self {
        Self {
            arena: &prepared.arena,
            min_support: prepared.min_support,
            max_len: config.length_cap(),
            kind: config.effective_kind(),
            counters,
            memory,
            sink,
        }
    }

    /// Mines every pattern starting with the single symbol `symbol`.
    pub(crate) fn visit_root(&mut self, symbol: K, owners: &[usize]) -> Result<(), MiningError> {
        let key = ExtensionKey::new(symbol, false);
        let full: Vec<PseudoSequence> = owners.iter().map(|&o| PseudoSequence::new(o)).collect();
        let positions: Vec<usize> = (0..full.len()).collect();
        let views = build_projected_database(self.arena, &full, &positions, key, None);
        let support = self.support_of(owners);
        let pattern = SequentialPattern::empty(SupportSet::new()).extended(symbol, false, support);
        self.visit(
            pattern,
            Node {
                owners: owners.to_vec(),
                views,
            },
        )
    }

    fn support_of(&self, owners: &[usize]) -> SupportSet {
        owners.iter().map(|&o| self.arena[o].id()).collect()
    }

    fn emit(&mut self, pattern: &SequentialPattern<K>) -> Result<(), MiningError> {
        self.sink.save_pattern(pattern)?;
        SearchCounters::bump(&self.counters.emitted);
        Ok(())
    }

    fn visit(&mut self, pattern: SequentialPattern<K>, node: Node) -> Result<(), MiningError> {
        let _guard = MemoryGuard::new(
            self.memory,
            estimate_node_size(node.views.len(), node.owners.len()),
        );
        SearchCounters::bump(&self.counters.frequent);
        log::trace!("{pattern:?} -> {:?}", PatternState::Generated);
        #[cfg(any(
            debug_assertions,
            feature = "strict-invariants",
            feature = "check-invariants"
        ))]
        for view in &node.views {
            crate::debug_invariants!(view.validate(self.arena), "projected view");
        }

        let state = match self.kind {
            PatternKind::Frequent => {
                self.emit(&pattern)?;
                if pattern.item_count() < self.max_len {
                    self.expand(&pattern, &node)?;
                }
                PatternState::EmittedFrequent
            }
            PatternKind::Closed | PatternKind::Maximal => {
                if backscan_prunable(self.arena, &node.owners, pattern.itemsets()) {
                    SearchCounters::bump(&self.counters.pruned);
                    PatternState::PrunedBeforeExpansion
                } else {
                    let best = self.expand(&pattern, &node)?;
                    log::trace!("{pattern:?} -> {:?}", PatternState::Expanded);
                    let (forward, threshold) = match self.kind {
                        PatternKind::Closed => (best == pattern.support(), pattern.support()),
                        _ => (best >= self.min_support, self.min_support),
                    };
                    if forward
                        || has_backward_extension(
                            self.arena,
                            &node.owners,
                            pattern.itemsets(),
                            threshold,
                        )
                    {
                        PatternState::Suppressed
                    } else {
                        self.emit(&pattern)?;
                        if self.kind == PatternKind::Closed {
                            PatternState::EmittedClosed
                        } else {
                            PatternState::EmittedMaximal
                        }
                    }
                }
            }
        };
        log::trace!("{pattern:?} -> {state:?}");
        Ok(())
    }

    /// Recurses into every frequent one-symbol extension of `pattern` and
    /// returns the largest extension support seen (0 when there is none).
    ///
    /// Past the length cap the extensions are still counted, so the closure
    /// test stays exact, but not explored.
    fn expand(
        &mut self,
        pattern: &SequentialPattern<K>,
        node: &Node,
    ) -> Result<usize, MiningError> {
        let last = pattern.last_itemset();
        let pairs = frequent_extension_pairs(self.arena, &node.views, last);
        let grow = pattern.item_count() < self.max_len;
        let mut best = 0;
        for (key, positions) in pairs {
            if positions.len() < self.min_support {
                continue;
            }
            best = best.max(positions.len());
            if !grow {
                continue;
            }
            let owners: Vec<usize> = positions.iter().map(|&p| node.views[p].owner()).collect();
            let views = build_projected_database(self.arena, &node.views, &positions, key, last);
            let child = pattern.extended(key.symbol, key.postfix, self.support_of(&owners));
            self.visit(child, Node { owners, views })?;
        }
        Ok(best)
    }
}

/// Mines `database` and streams the requested patterns into `sink`.
///
/// Every reported pattern carries its exact support set. Patterns reach the
/// sink in depth-first order; sort a [`MemorySink`](crate::output::MemorySink)
/// with `sort_canonical` when a stable order is needed.
///
/// ```rust
/// use seq_sieve::prelude::*;
///
/// let db = SequenceDatabase::from_nested(vec![
///     vec![vec![1u32], vec![3], vec![5]],
///     vec![vec![1], vec![2, 3], vec![5]],
///     vec![vec![1], vec![4]],
/// ]);
/// let mut sink = MemorySink::new();
/// let stats = mine(&db, &MinerConfig::new(MinSupport::Absolute(2)), &mut sink).unwrap();
/// assert!(sink.find(vec![vec![1], vec![3], vec![5]]).is_some());
/// assert_eq!(stats.emitted_patterns, sink.len());
/// ```
pub fn mine<K, S>(
    database: &SequenceDatabase<K>,
    config: &MinerConfig,
    sink: &mut S,
) -> Result<MiningStats, MiningError>
where
    K: SymbolLike,
    S: PatternSink<K>,
{
    let started = Instant::now();
    database.validate_for_mining()?;
    let min_support = config.min_support.resolve(database.size())?;
    let prepared = PreparedDatabase::new(database, min_support);
    let counters = SearchCounters::default();
    let memory = MemorySampler::new();

    {
        let mut search = Search::new(&prepared, config, &counters, &memory, sink);
        for (symbol, owners) in &prepared.roots {
            search.visit_root(*symbol, owners)?;
        }
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
    log::debug!("{stats}");
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algs::config::MinSupport;
    use crate::output::MemorySink;

    fn run(db: &SequenceDatabase<u32>, config: MinerConfig) -> (MemorySink<u32>, MiningStats) {
        let mut sink = MemorySink::new();
        let stats = mine(db, &config, &mut sink).unwrap();
        sink.sort_canonical();
        (sink, stats)
    }

    fn three() -> SequenceDatabase<u32> {
        SequenceDatabase::from_nested(vec![
            vec![vec![1], vec![3], vec![5]],
            vec![vec![1], vec![2, 3], vec![5]],
            vec![vec![1], vec![4]],
        ])
    }

    #[test]
    fn infrequent_symbols_are_stripped() {
        let prepared = PreparedDatabase::new(&three(), 2);
        let symbols: Vec<u32> = prepared.roots.iter().map(|r| r.0).collect();
        assert_eq!(symbols, vec![1, 3, 5]);
        assert_eq!(prepared.arena[2].item_count(), 1);
        assert_eq!(prepared.arena[1].item_count(), 3);
    }

    #[test]
    fn frequent_mode_lists_every_pattern() {
        let cfg = MinerConfig::new(MinSupport::Absolute(2)).kind(PatternKind::Frequent);
        let (sink, stats) = run(&three(), cfg);
        // (1) (3) (5) (1)(3) (1)(5) (3)(5) (1)(3)(5)
        assert_eq!(sink.len(), 7);
        assert_eq!(stats.frequent_patterns, 7);
        assert_eq!(stats.pruned_subtrees, 0);
        assert_eq!(sink.find(vec![vec![1]]).map(|p| p.support()), Some(3));
    }

    #[test]
    fn closed_mode_keeps_only_closed() {
        let cfg = MinerConfig::new(MinSupport::Absolute(2));
        let (sink, stats) = run(&three(), cfg);
        assert_eq!(sink.len(), 2);
        assert!(sink.find(vec![vec![1]]).is_some());
        assert!(sink.find(vec![vec![1], vec![3], vec![5]]).is_some());
        assert!(sink.find(vec![vec![1], vec![3]]).is_none());
        assert_eq!(stats.emitted_patterns, 2);
    }

    #[test]
    fn maximal_mode_keeps_longest() {
        let cfg = MinerConfig::new(MinSupport::Absolute(2)).kind(PatternKind::Maximal);
        let (sink, _) = run(&three(), cfg);
        let got: Vec<String> = sink.iter().map(|p| format!("{p:?}")).collect();
        assert_eq!(got, vec!["<(1) (3) (5)> #SUP 2"]);
    }

    #[test]
    fn itemset_extension_through_later_itemset() {
        // The first 1 of s0 is alone; (1,2) only appears later.
        let db = SequenceDatabase::from_nested(vec![
            vec![vec![1], vec![1, 2]],
            vec![vec![1, 2]],
        ]);
        let cfg = MinerConfig::new(MinSupport::Absolute(2)).kind(PatternKind::Frequent);
        let (sink, _) = run(&db, cfg);
        assert_eq!(sink.find(vec![vec![1, 2]]).map(|p| p.support()), Some(2));
    }

    #[test]
    fn length_cap_limits_output_not_closure() {
        // <(1)> is not closed because <(1)(2)> has the same support, even
        // though the cap hides <(1)(2)>.
        let db =
            SequenceDatabase::from_nested(vec![vec![vec![1], vec![2]], vec![vec![1], vec![2]]]);
        let cfg = MinerConfig::new(MinSupport::Absolute(2)).max_pattern_length(Some(1));
        let (sink, _) = run(&db, cfg);
        assert!(sink.is_empty());
        let cfg = MinerConfig::new(MinSupport::Absolute(2))
            .kind(PatternKind::Frequent)
            .max_pattern_length(Some(1));
        let (sink, _) = run(&db, cfg);
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn empty_database_yields_nothing() {
        let db = SequenceDatabase::<u32>::new();
        let (sink, stats) = run(&db, MinerConfig::default());
        assert!(sink.is_empty());
        assert_eq!(stats.database_size, 0);
        assert_eq!(stats.frequent_patterns, 0);
    }
}
