//! Subsequence containment between itemset sequences.

use crate::model::bounds::SymbolLike;
use crate::model::itemset::{Itemset, sorted_contains_all};
use crate::model::pattern::SequentialPattern;

/// `true` when `small` embeds into `big`: each itemset of `small` is a subset
/// of a distinct itemset of `big`, in order.
///
/// Greedy leftmost matching is exact for this relation.
pub fn contains_itemsets<K: SymbolLike>(big: &[Itemset<K>], small: &[Itemset<K>]) -> bool {
    let mut cursor = 0;
    for (k, needle) in small.iter().enumerate() {
        let mut found = false;
        while cursor < big.len() {
            if big.len() - cursor < small.len() - k {
                return false;
            }
            let hit = sorted_contains_all(big[cursor].as_slice(), needle.as_slice());
            cursor += 1;
            if hit {
                found = true;
                break;
            }
        }
        if !found {
            return false;
        }
    }
    true
}

/// `true` when `small` is a proper subpattern of `big`.
pub fn strictly_contains<K: SymbolLike>(
    big: &SequentialPattern<K>,
    small: &SequentialPattern<K>,
) -> bool {
    big.item_count() > small.item_count() && contains_itemsets(big.itemsets(), small.itemsets())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(nested: Vec<Vec<u32>>) -> SequentialPattern<u32> {
        SequentialPattern::from_nested(nested, [])
    }

    #[test]
    fn itemsets_must_map_to_distinct_positions() {
        assert!(strictly_contains(&p(vec![vec![1], vec![1]]), &p(vec![vec![1]])));
        assert!(!contains_itemsets(
            p(vec![vec![1, 2]]).itemsets(),
            p(vec![vec![1], vec![2]]).itemsets()
        ));
        assert!(contains_itemsets(
            p(vec![vec![1, 2], vec![3], vec![2, 4]]).itemsets(),
            p(vec![vec![2], vec![4]]).itemsets()
        ));
    }

    #[test]
    fn equal_patterns_are_not_strict() {
        let a = p(vec![vec![1, 2], vec![3]]);
        assert!(contains_itemsets(a.itemsets(), a.itemsets()));
        assert!(!strictly_contains(&a, &a));
    }

    #[test]
    fn order_matters() {
        assert!(!strictly_contains(
            &p(vec![vec![3], vec![1], vec![4]]),
            &p(vec![vec![1], vec![3]])
        ));
        assert!(strictly_contains(&p(vec![vec![1, 5], vec![3]]), &p(vec![vec![1], vec![3]])));
    }
}
