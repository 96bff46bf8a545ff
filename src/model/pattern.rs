//! `SequentialPattern`: a mined itemset-sequence together with its support set.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::bounds::SymbolLike;
use crate::model::itemset::Itemset;
use crate::model::sequence::SequenceId;

/// Ids of the sequences a pattern occurs in.
pub type SupportSet = BTreeSet<SequenceId>;

/// A pattern's own itemsets (owned copies, never views) and its support set.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequentialPattern<K> {
    itemsets: Vec<Itemset<K>>,
    support: SupportSet,
}

impl<K: SymbolLike> SequentialPattern<K> {
    /// Builds a pattern; empty itemsets are dropped and the rest sorted.
    pub fn new(itemsets: impl IntoIterator<Item = Itemset<K>>, support: SupportSet) -> Self {
        let itemsets = itemsets
            .into_iter()
            .filter(|s| !s.is_empty())
            .map(Itemset::sorted)
            .collect();
        Self { itemsets, support }
    }

    /// Builds a pattern from nested symbol lists.
    pub fn from_nested<I, J>(nested: I, support: impl IntoIterator<Item = SequenceId>) -> Self
    where
        I: IntoIterator<Item = J>,
        J: IntoIterator<Item = K>,
    {
        Self::new(
            nested.into_iter().map(|s| s.into_iter().collect()),
            support.into_iter().collect(),
        )
    }

    /// The empty pattern, supported by every sequence in `support`.
    pub fn empty(support: SupportSet) -> Self {
        Self {
            itemsets: Vec::new(),
            support,
        }
    }

    /// Copies this pattern with `symbol` appended, either into the last
    /// itemset (`postfix`) or as a new itemset, and gives the copy `support`.
    pub fn extended(&self, symbol: K, postfix: bool, support: SupportSet) -> Self {
        let mut itemsets = self.itemsets.clone();
        match itemsets.last_mut() {
            Some(last) if postfix => {
                debug_assert!(last.last().is_none_or(|m| m < symbol));
                last.insert(symbol);
            }
            _ => itemsets.push(Itemset::singleton(symbol)),
        }
        Self { itemsets, support }
    }

    pub fn itemsets(&self) -> &[Itemset<K>] {
        &self.itemsets
    }

    pub fn last_itemset(&self) -> Option<&Itemset<K>> {
        self.itemsets.last()
    }

    /// Number of itemsets.
    pub fn len(&self) -> usize {
        self.itemsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.itemsets.is_empty()
    }

    /// Flattened symbol count; the unit of the maximum-length cutoff.
    pub fn item_count(&self) -> usize {
        self.itemsets.iter().map(Itemset::len).sum()
    }

    /// Absolute support.
    pub fn support(&self) -> usize {
        self.support.len()
    }

    pub fn support_set(&self) -> &SupportSet {
        &self.support
    }

    /// Flattened symbols in pattern order.
    pub fn symbols(&self) -> impl Iterator<Item = K> + '_ {
        self.itemsets.iter().flat_map(Itemset::iter)
    }
}

impl<K: fmt::Debug> fmt::Debug for SequentialPattern<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<")?;
        for (i, set) in self.itemsets.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{set:?}")?;
        }
        write!(f, "> #SUP {}", self.support.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_copies_itemsets() {
        let base = SequentialPattern::from_nested(vec![vec![1]], [0, 1, 2]);
        let s = base.extended(3, false, [0, 1].into_iter().collect());
        let i = base.extended(2, true, [0].into_iter().collect());
        assert_eq!(format!("{base:?}"), "<(1)> #SUP 3");
        assert_eq!(format!("{s:?}"), "<(1) (3)> #SUP 2");
        assert_eq!(format!("{i:?}"), "<(1,2)> #SUP 1");
        assert_eq!(s.item_count(), 2);
        assert_eq!(i.len(), 1);
    }

    #[test]
    fn extending_empty_starts_an_itemset() {
        let root = SequentialPattern::<u8>::empty([0, 1].into_iter().collect());
        let p = root.extended(5, true, [1].into_iter().collect());
        assert_eq!(p.len(), 1);
        assert_eq!(p.support(), 1);
        assert_eq!(p.symbols().collect::<Vec<_>>(), vec![5]);
    }
}
