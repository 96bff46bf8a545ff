//! Closure and maximality tests over *periods* of the supporting sequences.
//!
//! A pattern `P = P_0 .. P_{n-1}` can gain one symbol in three ways: a new
//! itemset after `P_{n-1}` or a larger symbol in `P_{n-1}` (forward
//! extensions, answered by the growth recursion), a new itemset before some
//! `P_j`, or a symbol added inside some `P_j` (backward extensions, answered
//! here). Backward extensions are found without re-projecting: for every
//! supporting sequence we compute where `P` can sit (its *landmarks*) and
//! read candidate symbols off the gaps (*periods*) between them.
//!
//! Landmarks are itemset positions:
//! - `first_end[j]`: first itemset after the leftmost instance of `P_0..P_{j-1}`
//! - `last_in_last[j]`: start of the rightmost instance of `P_j..P_{n-1}`
//! - `last_in_first[j]`: walking back from the leftmost instance of `P`, the
//!   last itemset holding `P_j` before `last_in_first[j + 1]`
//!
//! A symbol lies in the *maximum period* of slot `j` iff inserting it there
//! keeps the pattern inside that sequence. The *semi-maximum period* stops at
//! `last_in_first` instead of `last_in_last`; a symbol present in it for every
//! supporting sequence is present in the maximum period of every descendant
//! as well, so the descendants can never be closed and the whole subtree is
//! skipped (backscan pruning).

use crate::model::bounds::SymbolLike;
use crate::model::hashing::{FastMap, FastSet};
use crate::model::itemset::{Itemset, sorted_contains_all};
use crate::model::sequence::Sequence;
use crate::projection::pseudo::{Cut, PseudoSequence};

/// Where a candidate symbol would be inserted into the pattern.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    /// As a new itemset just before pattern itemset `j`.
    Before(usize),
    /// Into pattern itemset `j`.
    Within(usize),
}

/// A symbol occurrence tagged with its insertion slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PeriodKey<K> {
    pub slot: Slot,
    pub symbol: K,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PeriodKind {
    /// Bounded by the last-in-last landmarks; decides closure.
    Maximum,
    /// Bounded by the last-in-first landmarks; decides backscan pruning.
    SemiMaximum,
}

/// Positions of a pattern inside one sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Landmarks {
    /// `n + 1` entries, `first_end[0] == 0`.
    pub first_end: Vec<usize>,
    /// `n + 1` entries, `last_in_last[n] == sequence length`.
    pub last_in_last: Vec<usize>,
    /// `n` entries.
    pub last_in_first: Vec<usize>,
}

fn holds<K: SymbolLike>(seq: &Sequence<K>, p: usize, set: &Itemset<K>) -> bool {
    sorted_contains_all(seq.itemsets()[p].as_slice(), set.as_slice())
}

impl Landmarks {
    /// Landmarks of `pattern` in `seq`, or `None` if the pattern does not
    /// occur in it.
    pub fn compute<K: SymbolLike>(seq: &Sequence<K>, pattern: &[Itemset<K>]) -> Option<Self> {
        let n = pattern.len();
        let len = seq.len();

        let mut first_end = Vec::with_capacity(n + 1);
        first_end.push(0);
        let mut pos = 0;
        for set in pattern {
            let p = (pos..len).find(|&p| holds(seq, p, set))?;
            pos = p + 1;
            first_end.push(pos);
        }

        let mut last_in_last = vec![len; n + 1];
        let mut bound = len;
        for k in (0..n).rev() {
            let p = (0..bound).rev().find(|&p| holds(seq, p, &pattern[k]))?;
            last_in_last[k] = p;
            bound = p;
        }

        let mut last_in_first = vec![0; n];
        if n > 0 {
            last_in_first[n - 1] = first_end[n] - 1;
            for k in (0..n - 1).rev() {
                let p = (0..last_in_first[k + 1])
                    .rev()
                    .find(|&p| holds(seq, p, &pattern[k]))?;
                last_in_first[k] = p;
            }
        }

        Some(Self {
            first_end,
            last_in_last,
            last_in_first,
        })
    }
}

/// Period views of `pattern` in `arena[owner]`, one per slot that has a
/// non-empty period.
pub fn periods<K: SymbolLike>(
    arena: &[Sequence<K>],
    owner: usize,
    pattern: &[Itemset<K>],
    kind: PeriodKind,
) -> Vec<(Slot, PseudoSequence)> {
    let Some(lm) = Landmarks::compute(&arena[owner], pattern) else {
        return Vec::new();
    };
    let n = pattern.len();
    let bound = |j: usize| match kind {
        PeriodKind::Maximum => lm.last_in_last[j],
        PeriodKind::SemiMaximum => lm.last_in_first[j],
    };
    let trim = |lo: usize, hi: Option<usize>| {
        PseudoSequence::trim_to_period(
            arena,
            owner,
            Some(Cut::at_itemset(lo)),
            hi.map(Cut::at_itemset),
        )
    };

    let mut out = Vec::with_capacity(2 * n);
    for j in 0..n {
        if let Some(view) = trim(lm.first_end[j], Some(bound(j))) {
            out.push((Slot::Before(j), view));
        }
        let hi = if j + 1 < n {
            Some(bound(j + 1))
        } else if kind == PeriodKind::Maximum {
            None
        } else {
            // Descendants may grow the last itemset, so its semi period
            // has no stable right bound.
            continue;
        };
        if let Some(view) = trim(lm.first_end[j], hi) {
            out.push((Slot::Within(j), view));
        }
    }
    out
}

/// Distinct tagged symbol occurrences in the periods of one sequence.
fn period_keys<K: SymbolLike>(
    arena: &[Sequence<K>],
    owner: usize,
    pattern: &[Itemset<K>],
    kind: PeriodKind,
) -> FastSet<PeriodKey<K>> {
    let n = pattern.len();
    let mut keys = FastSet::default();
    for (slot, view) in periods(arena, owner, pattern, kind) {
        match slot {
            Slot::Before(_) => {
                for (_, symbol) in view.items(arena) {
                    keys.insert(PeriodKey { slot, symbol });
                }
            }
            Slot::Within(j) => {
                let target = &pattern[j];
                // Larger symbols in the last itemset are forward extensions.
                let ceiling = if j + 1 == n { target.last() } else { None };
                for i in 0..view.size(arena) {
                    let symbols = view.itemset_at(arena, i);
                    if !sorted_contains_all(symbols, target.as_slice()) {
                        continue;
                    }
                    for &symbol in symbols {
                        if target.contains(symbol) || ceiling.is_some_and(|c| symbol > c) {
                            continue;
                        }
                        keys.insert(PeriodKey { slot, symbol });
                    }
                }
            }
        }
    }
    keys
}

/// `true` when some tagged symbol occurs in the periods of at least
/// `threshold` of the sequences `owners`.
///
/// Counting stops as soon as a key reaches the threshold, and gives up as
/// soon as no key, old or new, can still reach it with the sequences left.
pub fn scan_periods<K: SymbolLike>(
    arena: &[Sequence<K>],
    owners: &[usize],
    pattern: &[Itemset<K>],
    kind: PeriodKind,
    threshold: usize,
) -> bool {
    let total = owners.len();
    if pattern.is_empty() || threshold == 0 || total < threshold {
        return false;
    }
    let mut counts: FastMap<PeriodKey<K>, usize> = FastMap::default();
    for (k, &owner) in owners.iter().enumerate() {
        let remaining = total - k - 1;
        for key in period_keys(arena, owner, pattern, kind) {
            let count = match counts.get_mut(&key) {
                Some(c) => {
                    *c += 1;
                    *c
                }
                None if 1 + remaining >= threshold => {
                    counts.insert(key, 1);
                    1
                }
                None => continue,
            };
            if count >= threshold {
                return true;
            }
        }
        counts.retain(|_, c| *c + remaining >= threshold);
        if counts.is_empty() && remaining < threshold {
            return false;
        }
    }
    false
}

/// Backward-extension test: is there a one-symbol insertion before or inside
/// the pattern's itemsets supported by at least `threshold` of `owners`?
///
/// Closed mining passes `owners.len()` (equal support); maximal mining
/// passes the minimum support (any frequent superpattern).
pub fn has_backward_extension<K: SymbolLike>(
    arena: &[Sequence<K>],
    owners: &[usize],
    pattern: &[Itemset<K>],
    threshold: usize,
) -> bool {
    scan_periods(arena, owners, pattern, PeriodKind::Maximum, threshold)
}

/// Backscan test: can the subtree rooted at this pattern be skipped?
pub fn backscan_prunable<K: SymbolLike>(
    arena: &[Sequence<K>],
    owners: &[usize],
    pattern: &[Itemset<K>],
) -> bool {
    scan_periods(arena, owners, pattern, PeriodKind::SemiMaximum, owners.len())
}
