//! `Itemset`: a duplicate-free run of symbols occurring at one position.
//!
//! Insertion order is preserved and re-inserting an existing symbol is a
//! silent no-op. Itemsets stored in a [`SequenceDatabase`] and itemsets built
//! by the miners are ascending; the growth engine relies on that order when
//! it looks for symbols that may extend the last itemset of a pattern.
//!
//! [`SequenceDatabase`]: crate::model::database::SequenceDatabase

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::bounds::SymbolLike;

/// Ordered, duplicate-free collection of symbols.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Itemset<K> {
    items: Vec<K>,
}

impl<K> Default for Itemset<K> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<K: SymbolLike> Itemset<K> {
    /// Creates an empty itemset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an itemset holding a single symbol.
    pub fn singleton(symbol: K) -> Self {
        Self {
            items: vec![symbol],
        }
    }

    /// Appends `symbol` unless it is already present.
    ///
    /// Returns `true` when the symbol was added.
    pub fn insert(&mut self, symbol: K) -> bool {
        if self.items.contains(&symbol) {
            return false;
        }
        self.items.push(symbol);
        true
    }

    /// Sorts the symbols ascending.
    pub fn sort(&mut self) {
        self.items.sort_unstable();
    }

    /// Returns an ascending copy.
    pub fn sorted(mut self) -> Self {
        self.sort();
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[K] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = K> + '_ {
        self.items.iter().copied()
    }

    pub fn contains(&self, symbol: K) -> bool {
        self.items.contains(&symbol)
    }

    /// Greatest symbol, assuming ascending order.
    pub fn last(&self) -> Option<K> {
        self.items.last().copied()
    }

    /// Keeps only the symbols for which `keep` returns `true`.
    pub fn retain(&mut self, mut keep: impl FnMut(K) -> bool) {
        self.items.retain(|&s| keep(s));
    }

    /// `true` when the symbols are strictly ascending (sorted, no duplicates).
    pub fn is_strictly_ascending(&self) -> bool {
        self.items.windows(2).all(|w| w[0] < w[1])
    }

    /// `true` when every symbol of `other` also occurs here.
    ///
    /// Order inside an itemset carries no meaning for containment.
    pub fn is_superset_of(&self, other: &Itemset<K>) -> bool {
        other.items.iter().all(|s| self.items.contains(s))
    }
}

impl<K: SymbolLike> FromIterator<K> for Itemset<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = Itemset::new();
        for s in iter {
            set.insert(s);
        }
        set
    }
}

impl<K: SymbolLike> From<Vec<K>> for Itemset<K> {
    fn from(items: Vec<K>) -> Self {
        items.into_iter().collect()
    }
}

impl<K: SymbolLike, const N: usize> From<[K; N]> for Itemset<K> {
    fn from(items: [K; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<K: fmt::Debug> fmt::Debug for Itemset<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, s) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{s:?}")?;
        }
        f.write_str(")")
    }
}

/// `true` when the ascending slice `haystack` contains every symbol of the
/// ascending slice `needle`.
pub(crate) fn sorted_contains_all<K: Ord>(haystack: &[K], needle: &[K]) -> bool {
    let mut h = haystack.iter();
    'outer: for n in needle {
        for x in h.by_ref() {
            match x.cmp(n) {
                std::cmp::Ordering::Less => continue,
                std::cmp::Ordering::Equal => continue 'outer,
                std::cmp::Ordering::Greater => return false,
            }
        }
        return false;
    }
    true
}
