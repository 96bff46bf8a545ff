//! `SequenceDatabase`: the already-parsed input of a mining run.

use serde::{Deserialize, Serialize};

use crate::debug_invariants::DebugInvariants;
use crate::mining_error::MiningError;
use crate::model::bounds::SymbolLike;
use crate::model::hashing::{FastMap, FastSet};
use crate::model::sequence::{Sequence, SequenceId};

/// Ordered collection of sequences with unique ids.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SequenceDatabase<K> {
    sequences: Vec<Sequence<K>>,
}

impl<K> Default for SequenceDatabase<K> {
    fn default() -> Self {
        Self {
            sequences: Vec::new(),
        }
    }
}

impl<K: SymbolLike> SequenceDatabase<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a database from nested lists; sequence `i` gets id `i`.
    ///
    /// ```rust
    /// # use seq_sieve::model::database::SequenceDatabase;
    /// let db = SequenceDatabase::from_nested(vec![
    ///     vec![vec![1, 2], vec![3]],
    ///     vec![vec![1], vec![3]],
    /// ]);
    /// assert_eq!(db.size(), 2);
    /// ```
    pub fn from_nested<I, J, L>(nested: I) -> Self
    where
        I: IntoIterator<Item = J>,
        J: IntoIterator<Item = L>,
        L: IntoIterator<Item = K>,
    {
        let sequences = nested
            .into_iter()
            .enumerate()
            .map(|(i, seq)| Sequence::from_nested(i as SequenceId, seq))
            .collect();
        Self { sequences }
    }

    /// Appends a sequence, rejecting an id already present.
    pub fn push(&mut self, sequence: Sequence<K>) -> Result<(), MiningError> {
        if self.sequences.iter().any(|s| s.id() == sequence.id()) {
            return Err(MiningError::DuplicateSequenceId(sequence.id()));
        }
        self.sequences.push(sequence);
        Ok(())
    }

    /// Number of sequences; the denominator of relative support.
    pub fn size(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    pub fn sequences(&self) -> &[Sequence<K>] {
        &self.sequences
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sequence<K>> {
        self.sequences.iter()
    }

    /// Looks a sequence up by id.
    pub fn get(&self, id: SequenceId) -> Option<&Sequence<K>> {
        self.sequences.iter().find(|s| s.id() == id)
    }

    /// Number of distinct symbols.
    pub fn symbol_count(&self) -> usize {
        self.sequences
            .iter()
            .flat_map(|s| s.itemsets())
            .flat_map(|set| set.iter())
            .collect::<FastSet<K>>()
            .len()
    }

    /// Length in itemsets of the longest sequence.
    pub fn max_sequence_len(&self) -> usize {
        self.sequences.iter().map(Sequence::len).max().unwrap_or(0)
    }

    /// For every symbol, the indices (into [`sequences`](Self::sequences)) of
    /// the sequences containing it, ascending and without repeats.
    pub fn symbol_occurrences(&self) -> FastMap<K, Vec<usize>> {
        let mut occ: FastMap<K, Vec<usize>> = FastMap::default();
        for (idx, seq) in self.sequences.iter().enumerate() {
            for set in seq.itemsets() {
                for s in set.iter() {
                    let list = occ.entry(s).or_default();
                    if list.last() != Some(&idx) {
                        list.push(idx);
                    }
                }
            }
        }
        occ
    }
}

impl<K: SymbolLike> FromIterator<Sequence<K>> for SequenceDatabase<K> {
    /// Collects sequences as given. Duplicate ids are not checked here; the
    /// miners reject them through [`validate_for_mining`](Self::validate_for_mining).
    fn from_iter<I: IntoIterator<Item = Sequence<K>>>(iter: I) -> Self {
        Self {
            sequences: iter.into_iter().collect(),
        }
    }
}

impl<K: SymbolLike> SequenceDatabase<K> {
    /// Checks what a mining run relies on: unique ids and strictly ascending,
    /// non-empty itemsets. Empty sequences are accepted; they count towards
    /// the database size but support nothing.
    pub fn validate_for_mining(&self) -> Result<(), MiningError> {
        self.check(true)
    }

    fn check(&self, allow_empty: bool) -> Result<(), MiningError> {
        let mut seen: FastSet<SequenceId> = FastSet::default();
        for seq in &self.sequences {
            if !seen.insert(seq.id()) {
                return Err(MiningError::DuplicateSequenceId(seq.id()));
            }
            if seq.is_empty() && !allow_empty {
                return Err(MiningError::EmptySequence(seq.id()));
            }
            for (i, set) in seq.itemsets().iter().enumerate() {
                if set.is_empty() || !set.is_strictly_ascending() {
                    return Err(MiningError::MalformedItemset {
                        sequence: seq.id(),
                        itemset: i,
                    });
                }
            }
        }
        Ok(())
    }
}

impl<K: SymbolLike> DebugInvariants for SequenceDatabase<K> {
    fn validate_invariants(&self) -> Result<(), MiningError> {
        self.check(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::itemset::Itemset;

    fn sample() -> SequenceDatabase<u32> {
        SequenceDatabase::from_nested(vec![
            vec![vec![1, 2], vec![3], vec![4, 5]],
            vec![vec![1], vec![3], vec![5]],
            vec![vec![1, 2], vec![3, 5]],
        ])
    }

    #[test]
    fn counts_and_lookup() {
        let db = sample();
        assert_eq!(db.size(), 3);
        assert_eq!(db.symbol_count(), 5);
        assert_eq!(db.max_sequence_len(), 3);
        assert_eq!(db.get(1).map(Sequence::len), Some(3));
        assert!(db.get(9).is_none());
        assert!(db.validate_invariants().is_ok());
    }

    #[test]
    fn occurrences_are_per_sequence() {
        let db = SequenceDatabase::from_nested(vec![vec![vec![1], vec![1, 2]], vec![vec![2]]]);
        let occ = db.symbol_occurrences();
        assert_eq!(occ[&1], vec![0]);
        assert_eq!(occ[&2], vec![0, 1]);
    }

    #[test]
    fn duplicate_id_rejected() {
        let mut db = sample();
        let err = db
            .push(Sequence::from_nested(2, vec![vec![9]]))
            .unwrap_err();
        assert!(matches!(err, MiningError::DuplicateSequenceId(2)));
    }

    #[test]
    fn collected_duplicates_fail_validation() {
        let db: SequenceDatabase<u32> = vec![
            Sequence::from_nested(0, vec![vec![1]]),
            Sequence::from_nested(0, vec![vec![2]]),
        ]
        .into_iter()
        .collect();
        assert!(matches!(
            db.validate_invariants(),
            Err(MiningError::DuplicateSequenceId(0))
        ));
    }

    #[test]
    fn empty_sequence_is_minable_but_not_canonical() {
        let mut db = sample();
        db.push(Sequence::new(5, Vec::<Itemset<u32>>::new())).unwrap();
        assert!(db.validate_for_mining().is_ok());
        assert!(matches!(
            db.validate_invariants(),
            Err(MiningError::EmptySequence(5))
        ));
    }

    #[test]
    fn empty_database() {
        let db = SequenceDatabase::<u32>::new();
        assert_eq!(db.size(), 0);
        assert_eq!(db.max_sequence_len(), 0);
        assert!(db.symbol_occurrences().is_empty());
    }
}
