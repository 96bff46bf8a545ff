//! Extension-pair discovery and projected-database construction.
//!
//! A projected database holds at most one view per supporting sequence: the
//! suffix that follows the *first* (leftmost greedy) instance of the prefix.
//! Together with the prefix's last itemset this is enough to find every
//! one-symbol extension:
//!
//! - symbols of the postfix itemset extend the last itemset;
//! - symbols of a later itemset that contains the whole last itemset, and are
//!   greater than its greatest symbol, also extend the last itemset;
//! - every symbol of a non-postfix itemset starts a new itemset.

use crate::model::bounds::SymbolLike;
use crate::model::hashing::FastMap;
use crate::model::itemset::{Itemset, sorted_contains_all};
use crate::model::sequence::Sequence;
use crate::projection::pseudo::PseudoSequence;

/// A candidate one-symbol extension.
///
/// `postfix == true` appends `symbol` to the prefix's last itemset; `false`
/// starts a new itemset with it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExtensionKey<K> {
    pub symbol: K,
    pub postfix: bool,
}

impl<K> ExtensionKey<K> {
    pub const fn new(symbol: K, postfix: bool) -> Self {
        Self { symbol, postfix }
    }
}

/// Extension keys mapped to the positions (into the projected database) of
/// the views supporting them. Positions are ascending and unique, so the
/// list length is the key's absolute support.
pub type ExtensionPairs<K> = FastMap<ExtensionKey<K>, Vec<usize>>;

fn record<K: SymbolLike>(pairs: &mut ExtensionPairs<K>, key: ExtensionKey<K>, pos: usize) {
    let list = pairs.entry(key).or_default();
    if list.last() != Some(&pos) {
        list.push(pos);
    }
}

/// `true` when relative itemset `i` of `view` may host an extension of the
/// prefix's last itemset: it is either the postfix remainder of the matched
/// itemset or a later full itemset containing all of `last`.
fn hosts_last_itemset<K: SymbolLike>(
    arena: &[Sequence<K>],
    view: &PseudoSequence,
    i: usize,
    last: Option<&Itemset<K>>,
) -> bool {
    if view.is_postfix(i) {
        return true;
    }
    match last {
        Some(last) if !last.is_empty() => {
            sorted_contains_all(view.itemset_at(arena, i), last.as_slice())
        }
        _ => false,
    }
}

/// Counts every one-symbol extension of a prefix whose last itemset is
/// `last` over the projected database `db`.
///
/// Supports are sets: a symbol seen several times in one view counts once.
pub fn frequent_extension_pairs<K: SymbolLike>(
    arena: &[Sequence<K>],
    db: &[PseudoSequence],
    last: Option<&Itemset<K>>,
) -> ExtensionPairs<K> {
    let mut pairs: ExtensionPairs<K> = FastMap::default();
    let greatest = last.and_then(Itemset::last);
    for (pos, view) in db.iter().enumerate() {
        for i in 0..view.size(arena) {
            let symbols = view.itemset_at(arena, i);
            if view.is_postfix(i) {
                for &s in symbols {
                    record(&mut pairs, ExtensionKey::new(s, true), pos);
                }
                continue;
            }
            for &s in symbols {
                record(&mut pairs, ExtensionKey::new(s, false), pos);
            }
            if let Some(greatest) = greatest {
                if hosts_last_itemset(arena, view, i, last) {
                    for &s in symbols.iter().filter(|&&s| s > greatest) {
                        record(&mut pairs, ExtensionKey::new(s, true), pos);
                    }
                }
            }
        }
    }
    pairs
}

/// Earliest match of `key` in `view`, as `(relative itemset, item index)`.
pub fn locate<K: SymbolLike>(
    arena: &[Sequence<K>],
    view: &PseudoSequence,
    key: ExtensionKey<K>,
    last: Option<&Itemset<K>>,
) -> Option<(usize, usize)> {
    (0..view.size(arena)).find_map(|i| {
        let eligible = if key.postfix {
            hosts_last_itemset(arena, view, i, last)
        } else {
            !view.is_postfix(i)
        };
        if !eligible {
            return None;
        }
        view.index_of(arena, i, key.symbol).map(|j| (i, j))
    })
}

/// Projects each view at `positions` past the earliest match of `key`.
///
/// Views that match but leave nothing behind are dropped; their sequences
/// still support the extension, which is why callers keep the support owners
/// separately.
pub fn build_projected_database<K: SymbolLike>(
    arena: &[Sequence<K>],
    db: &[PseudoSequence],
    positions: &[usize],
    key: ExtensionKey<K>,
    last: Option<&Itemset<K>>,
) -> Vec<PseudoSequence> {
    positions
        .iter()
        .filter_map(|&pos| {
            let view = &db[pos];
            let (i, j) = locate(arena, view, key, last)?;
            view.project(arena, i, j + 1)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> Vec<Sequence<u32>> {
        vec![
            Sequence::from_nested(0, vec![vec![1, 2], vec![3], vec![4, 5]]),
            Sequence::from_nested(1, vec![vec![1], vec![3], vec![5]]),
            Sequence::from_nested(2, vec![vec![1, 2], vec![3, 5]]),
        ]
    }

    fn support(pairs: &ExtensionPairs<u32>, symbol: u32, postfix: bool) -> usize {
        pairs
            .get(&ExtensionKey::new(symbol, postfix))
            .map_or(0, Vec::len)
    }

    #[test]
    fn root_pairs_are_new_itemsets() {
        let a = arena();
        let db: Vec<_> = (0..a.len()).map(PseudoSequence::new).collect();
        let pairs = frequent_extension_pairs(&a, &db, None);
        assert_eq!(support(&pairs, 1, false), 3);
        assert_eq!(support(&pairs, 2, false), 2);
        assert_eq!(support(&pairs, 4, false), 1);
        assert_eq!(support(&pairs, 2, true), 0);
    }

    #[test]
    fn postfix_and_containing_itemsets_extend_last() {
        let a = vec![Sequence::from_nested(0, vec![vec![1], vec![1, 2], vec![3]])];
        let last = Itemset::from([1]);
        let db = build_projected_database(
            &a,
            &[PseudoSequence::new(0)],
            &[0],
            ExtensionKey::new(1, false),
            None,
        );
        assert_eq!(db.len(), 1);
        let pairs = frequent_extension_pairs(&a, &db, Some(&last));
        // (1,2) occurs in the second itemset even though the first match of 1
        // sits in an itemset without 2.
        assert_eq!(support(&pairs, 2, true), 1);
        assert_eq!(support(&pairs, 2, false), 1);
        assert_eq!(support(&pairs, 3, true), 0);

        let grown = Itemset::from([1, 2]);
        let key = ExtensionKey::new(2, true);
        let child = build_projected_database(&a, &db, &[0], key, Some(&last));
        assert_eq!(child.len(), 1);
        assert_eq!(child[0].to_itemsets(&a), vec![Itemset::from([3])]);
        let pairs = frequent_extension_pairs(&a, &child, Some(&grown));
        assert_eq!(support(&pairs, 3, false), 1);
    }

    #[test]
    fn projection_of_absent_symbol_is_empty() {
        let a = arena();
        let db: Vec<_> = (0..a.len()).map(PseudoSequence::new).collect();
        let projected =
            build_projected_database(&a, &db, &[0, 1, 2], ExtensionKey::new(9, false), None);
        assert!(projected.is_empty());
        let again =
            build_projected_database(&a, &projected, &[], ExtensionKey::new(1, false), None);
        assert!(again.is_empty());
    }

    #[test]
    fn matches_exhausting_a_sequence_are_dropped() {
        let a = arena();
        let db: Vec<_> = (0..a.len()).map(PseudoSequence::new).collect();
        let projected =
            build_projected_database(&a, &db, &[0, 1, 2], ExtensionKey::new(5, false), None);
        // s2 ends with (3,5): nothing remains after 5.
        assert_eq!(projected.len(), 0);
        let projected =
            build_projected_database(&a, &db, &[0, 1, 2], ExtensionKey::new(3, false), None);
        assert_eq!(projected.len(), 3);
        assert!(projected[2].is_postfix(0));
    }
}
