//! Filters applied to an already-mined pattern set.
//!
//! Quadratic in the number of patterns. They turn an exhaustive frequent run
//! into its closed, maximal or generator subset, which is how the pruned
//! searches are cross-checked.

use crate::algs::containment::strictly_contains;
use crate::model::bounds::SymbolLike;
use crate::model::pattern::SequentialPattern;

fn retain_unless<K, F>(
    patterns: Vec<SequentialPattern<K>>,
    mut beaten: F,
) -> Vec<SequentialPattern<K>>
where
    K: SymbolLike,
    F: FnMut(&SequentialPattern<K>, &SequentialPattern<K>) -> bool,
{
    let keep: Vec<bool> = patterns
        .iter()
        .map(|p| !patterns.iter().any(|q| beaten(p, q)))
        .collect();
    patterns
        .into_iter()
        .zip(keep)
        .filter_map(|(p, k)| k.then_some(p))
        .collect()
}

/// Keeps the patterns with no proper superpattern of equal support.
pub fn retain_closed<K: SymbolLike>(
    patterns: Vec<SequentialPattern<K>>,
) -> Vec<SequentialPattern<K>> {
    retain_unless(patterns, |p, q| {
        q.support() == p.support() && strictly_contains(q, p)
    })
}

/// Keeps the patterns with no proper superpattern in the set.
pub fn retain_maximal<K: SymbolLike>(
    patterns: Vec<SequentialPattern<K>>,
) -> Vec<SequentialPattern<K>> {
    retain_unless(patterns, |p, q| strictly_contains(q, p))
}

/// Keeps the generators: patterns with no proper subpattern of equal support.
///
/// The empty pattern counts as a subpattern supported by the whole database,
/// so a pattern present in all `database_size` sequences is never a
/// generator.
pub fn retain_generators<K: SymbolLike>(
    patterns: Vec<SequentialPattern<K>>,
    database_size: usize,
) -> Vec<SequentialPattern<K>> {
    let patterns: Vec<_> = patterns
        .into_iter()
        .filter(|p| p.support() != database_size)
        .collect();
    retain_unless(patterns, |p, q| {
        q.support() == p.support() && strictly_contains(p, q)
    })
}
