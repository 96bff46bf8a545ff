//! `Sequence`: an ordered list of itemsets tagged with a database-unique id.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::bounds::SymbolLike;
use crate::model::itemset::Itemset;

/// Identifier of a sequence, unique within one [`SequenceDatabase`].
///
/// [`SequenceDatabase`]: crate::model::database::SequenceDatabase
pub type SequenceId = u32;

/// Ordered itemsets plus an id.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence<K> {
    id: SequenceId,
    itemsets: Vec<Itemset<K>>,
}

impl<K: SymbolLike> Sequence<K> {
    /// Builds a sequence, dropping empty itemsets and sorting the others.
    pub fn new(id: SequenceId, itemsets: impl IntoIterator<Item = Itemset<K>>) -> Self {
        let itemsets = itemsets
            .into_iter()
            .filter(|s| !s.is_empty())
            .map(Itemset::sorted)
            .collect();
        Self { id, itemsets }
    }

    /// Builds a sequence from nested symbol lists, e.g. `[[1, 2], [3]]`.
    pub fn from_nested<I, J>(id: SequenceId, nested: I) -> Self
    where
        I: IntoIterator<Item = J>,
        J: IntoIterator<Item = K>,
    {
        Self::new(id, nested.into_iter().map(|s| s.into_iter().collect()))
    }

    pub fn id(&self) -> SequenceId {
        self.id
    }

    /// Number of itemsets.
    pub fn len(&self) -> usize {
        self.itemsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.itemsets.is_empty()
    }

    /// Total number of symbol occurrences.
    pub fn item_count(&self) -> usize {
        self.itemsets.iter().map(Itemset::len).sum()
    }

    pub fn itemsets(&self) -> &[Itemset<K>] {
        &self.itemsets
    }

    pub fn itemset(&self, i: usize) -> Option<&Itemset<K>> {
        self.itemsets.get(i)
    }

    /// Removes every symbol rejected by `keep`, then drops itemsets left empty.
    pub fn retain_symbols(&mut self, mut keep: impl FnMut(K) -> bool) {
        for set in &mut self.itemsets {
            set.retain(&mut keep);
        }
        self.itemsets.retain(|s| !s.is_empty());
    }
}

impl<K: fmt::Debug> fmt::Debug for Sequence<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s{}: <", self.id)?;
        for (i, set) in self.itemsets.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{set:?}")?;
        }
        f.write_str(">")
    }
}
