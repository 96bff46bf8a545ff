//! In-memory sink grouping patterns by itemset count.

use crate::mining_error::MiningError;
use crate::model::bounds::SymbolLike;
use crate::model::pattern::SequentialPattern;
use crate::output::PatternSink;

/// Patterns kept in memory, `levels[n - 1]` holding the patterns made of `n`
/// itemsets.
#[derive(Clone, Debug)]
pub struct MemorySink<K> {
    levels: Vec<Vec<SequentialPattern<K>>>,
    count: usize,
}

impl<K> Default for MemorySink<K> {
    fn default() -> Self {
        Self {
            levels: Vec::new(),
            count: 0,
        }
    }
}

impl<K: SymbolLike> MemorySink<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `pattern` in its level; empty patterns are ignored.
    pub fn add(&mut self, pattern: SequentialPattern<K>) {
        let n = pattern.len();
        if n == 0 {
            return;
        }
        while self.levels.len() < n {
            self.levels.push(Vec::new());
        }
        self.levels[n - 1].push(pattern);
        self.count += 1;
    }

    /// Total number of stored patterns.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Patterns made of exactly `itemsets` itemsets.
    pub fn level(&self, itemsets: usize) -> &[SequentialPattern<K>] {
        itemsets
            .checked_sub(1)
            .and_then(|i| self.levels.get(i))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Largest itemset count stored.
    pub fn max_level(&self) -> usize {
        self.levels.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SequentialPattern<K>> {
        self.levels.iter().flatten()
    }

    /// Finds a stored pattern equal in itemsets to `nested`.
    pub fn find<I, J>(&self, nested: I) -> Option<&SequentialPattern<K>>
    where
        I: IntoIterator<Item = J>,
        J: IntoIterator<Item = K>,
    {
        let target = SequentialPattern::from_nested(nested, []);
        self.level(target.len())
            .iter()
            .find(|p| p.itemsets() == target.itemsets())
    }

    /// Sorts every level by itemsets so output no longer depends on the
    /// order extensions were explored in.
    pub fn sort_canonical(&mut self) {
        for level in &mut self.levels {
            level.sort_by(|a, b| a.itemsets().cmp(b.itemsets()));
        }
    }

    pub fn into_patterns(self) -> Vec<SequentialPattern<K>> {
        self.levels.into_iter().flatten().collect()
    }
}

impl<K: SymbolLike> PatternSink<K> for MemorySink<K> {
    fn save_pattern(&mut self, pattern: &SequentialPattern<K>) -> Result<(), MiningError> {
        self.add(pattern.clone());
        Ok(())
    }
}

impl<K: SymbolLike> FromIterator<SequentialPattern<K>> for MemorySink<K> {
    fn from_iter<I: IntoIterator<Item = SequentialPattern<K>>>(iter: I) -> Self {
        let mut sink = MemorySink::new();
        for p in iter {
            sink.add(p);
        }
        sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouped_by_itemset_count() {
        let mut sink = MemorySink::new();
        sink.save_pattern(&SequentialPattern::from_nested(vec![vec![1, 2]], [0]))
            .unwrap();
        sink.save_pattern(&SequentialPattern::from_nested(vec![vec![3], vec![1]], [0, 1]))
            .unwrap();
        sink.save_pattern(&SequentialPattern::from_nested(vec![vec![1], vec![1]], [1]))
            .unwrap();
        assert_eq!(sink.len(), 3);
        assert_eq!(sink.max_level(), 2);
        assert_eq!(sink.level(1).len(), 1);
        assert_eq!(sink.level(2).len(), 2);
        assert!(sink.level(0).is_empty());
        assert!(sink.level(7).is_empty());

        sink.sort_canonical();
        assert_eq!(format!("{:?}", sink.level(2)[0]), "<(1) (1)> #SUP 1");
        assert_eq!(sink.find(vec![vec![3], vec![1]]).map(|p| p.support()), Some(2));
        assert!(sink.find(vec![vec![3]]).is_none());
    }

    #[test]
    fn empty_pattern_is_not_stored() {
        let mut sink = MemorySink::<u8>::new();
        sink.add(SequentialPattern::empty(Default::default()));
        assert!(sink.is_empty());
        assert!(sink.into_patterns().is_empty());
    }
}
