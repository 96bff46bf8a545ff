//! `PseudoSequence`: zero-copy views into an arena of immutable sequences.
//!
//! A view is a small `Copy` value naming its owner by arena index plus the cut
//! points where it begins and, for bounded views, where it ends. Projection
//! and trimming only ever compute new cut points; symbol data is never copied.
//!
//! Relative itemset `0` of a view whose `first_item != 0` is *postfix*: it is
//! the right-hand remainder of an itemset whose left part was already matched,
//! so any symbol found there extends the pattern's last itemset. The last
//! itemset of a bounded view is *cut at right* when the view stops before the
//! end of the owning itemset.

use crate::mining_error::MiningError;
use crate::model::bounds::SymbolLike;
use crate::model::itemset::Itemset;
use crate::model::sequence::Sequence;

/// An absolute position `(itemset, item)` inside an owning sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cut {
    pub itemset: usize,
    pub item: usize,
}

impl Cut {
    pub const fn new(itemset: usize, item: usize) -> Self {
        Self { itemset, item }
    }

    /// Cut at the first item of `itemset`.
    pub const fn at_itemset(itemset: usize) -> Self {
        Self { itemset, item: 0 }
    }
}

/// Read-only view over one arena sequence.
///
/// `end`, when present, is normalised so that `end.itemset` is the last
/// itemset included and `end.item` (always `> 0`) the exclusive item bound
/// inside it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PseudoSequence {
    owner: usize,
    first_itemset: usize,
    first_item: usize,
    end: Option<Cut>,
}

static_assertions::assert_impl_all!(PseudoSequence: Copy, Send, Sync);

impl PseudoSequence {
    /// Full view over `arena[owner]`.
    pub const fn new(owner: usize) -> Self {
        Self {
            owner,
            first_itemset: 0,
            first_item: 0,
            end: None,
        }
    }

    /// Arena index of the owning sequence.
    pub const fn owner(&self) -> usize {
        self.owner
    }

    /// Absolute position of the view's first symbol.
    pub const fn start(&self) -> Cut {
        Cut::new(self.first_itemset, self.first_item)
    }

    pub const fn is_bounded(&self) -> bool {
        self.end.is_some()
    }

    /// Absolute itemset index of relative itemset `i`.
    pub const fn absolute_itemset(&self, i: usize) -> usize {
        self.first_itemset + i
    }

    fn sequence<'a, K>(&self, arena: &'a [Sequence<K>]) -> &'a Sequence<K> {
        &arena[self.owner]
    }

    /// Number of itemsets in the view.
    pub fn size<K: SymbolLike>(&self, arena: &[Sequence<K>]) -> usize {
        match self.end {
            Some(end) => end.itemset + 1 - self.first_itemset,
            None => self.sequence(arena).len().saturating_sub(self.first_itemset),
        }
    }

    pub fn is_empty<K: SymbolLike>(&self, arena: &[Sequence<K>]) -> bool {
        self.size(arena) == 0
    }

    /// Symbols of relative itemset `i`, with the left cut (first itemset)
    /// and right cut (last itemset of a bounded view) applied.
    pub fn itemset_at<'a, K: SymbolLike>(&self, arena: &'a [Sequence<K>], i: usize) -> &'a [K] {
        let abs = self.first_itemset + i;
        let full = self.sequence(arena).itemsets()[abs].as_slice();
        let hi = match self.end {
            Some(end) if end.itemset == abs => end.item.min(full.len()),
            _ => full.len(),
        };
        let lo = if i == 0 { self.first_item.min(hi) } else { 0 };
        &full[lo..hi]
    }

    pub fn size_of_itemset_at<K: SymbolLike>(&self, arena: &[Sequence<K>], i: usize) -> usize {
        self.itemset_at(arena, i).len()
    }

    /// Symbol `j` of relative itemset `i`.
    pub fn item_at<K: SymbolLike>(&self, arena: &[Sequence<K>], i: usize, j: usize) -> K {
        self.itemset_at(arena, i)[j]
    }

    /// `true` when relative itemset `i` continues an itemset cut at the left.
    pub const fn is_postfix(&self, i: usize) -> bool {
        i == 0 && self.first_item != 0
    }

    /// `true` when relative itemset `i` is the last of a bounded view and
    /// stops before the end of its owning itemset.
    pub fn is_cut_at_right<K: SymbolLike>(&self, arena: &[Sequence<K>], i: usize) -> bool {
        match self.end {
            Some(end) => {
                let abs = self.first_itemset + i;
                abs == end.itemset && end.item < self.sequence(arena).itemsets()[abs].len()
            }
            None => false,
        }
    }

    /// Position of `symbol` within relative itemset `i`.
    ///
    /// Itemsets are ascending, so the scan stops at the first larger symbol.
    pub fn index_of<K: SymbolLike>(
        &self,
        arena: &[Sequence<K>],
        i: usize,
        symbol: K,
    ) -> Option<usize> {
        for (j, &s) in self.itemset_at(arena, i).iter().enumerate() {
            if s == symbol {
                return Some(j);
            }
            if s > symbol {
                return None;
            }
        }
        None
    }

    /// View starting right after relative item `item_exclusive - 1` of
    /// relative itemset `i`.
    ///
    /// When `item_exclusive` equals the itemset's size the new view starts at
    /// the next itemset. Returns `None` when nothing would remain.
    pub fn project<K: SymbolLike>(
        &self,
        arena: &[Sequence<K>],
        i: usize,
        item_exclusive: usize,
    ) -> Option<Self> {
        let abs = self.first_itemset + i;
        let (first_itemset, first_item) = if item_exclusive >= self.size_of_itemset_at(arena, i) {
            (abs + 1, 0)
        } else {
            let offset = if i == 0 { self.first_item } else { 0 };
            (abs, offset + item_exclusive)
        };
        let remains = match self.end {
            Some(end) => {
                first_itemset < end.itemset
                    || (first_itemset == end.itemset && first_item < end.item)
            }
            None => first_itemset < self.sequence(arena).len(),
        };
        remains.then_some(Self {
            owner: self.owner,
            first_itemset,
            first_item,
            end: self.end,
        })
    }

    /// Bounded view over `arena[owner]` from `start` (inclusive, default the
    /// beginning) to `end` (exclusive, default the end of the sequence).
    ///
    /// Returns `None` when the region is inverted or empty.
    pub fn trim_to_period<K: SymbolLike>(
        arena: &[Sequence<K>],
        owner: usize,
        start: Option<Cut>,
        end: Option<Cut>,
    ) -> Option<Self> {
        let seq = &arena[owner];
        let len = seq.len();
        let itemset_len = |i: usize| seq.itemsets()[i].len();

        let mut first = start.unwrap_or(Cut::at_itemset(0));
        if first.itemset < len && first.item >= itemset_len(first.itemset) {
            first = Cut::at_itemset(first.itemset + 1);
        }
        if first.itemset >= len {
            return None;
        }

        // Normalise the exclusive end to (last included itemset, item bound > 0).
        let last = match end {
            None => None,
            Some(e) if e.itemset >= len => None,
            Some(e) if e.item == 0 => {
                if e.itemset == 0 {
                    return None;
                }
                Some(Cut::new(e.itemset - 1, itemset_len(e.itemset - 1)))
            }
            Some(e) => Some(Cut::new(e.itemset, e.item.min(itemset_len(e.itemset)))),
        };
        if let Some(last) = last {
            if first.itemset > last.itemset
                || (first.itemset == last.itemset && first.item >= last.item)
            {
                return None;
            }
        }
        Some(Self {
            owner,
            first_itemset: first.itemset,
            first_item: first.item,
            end: last,
        })
    }

    /// Every `(relative itemset, symbol)` in the view, in order.
    pub fn items<'a, K: SymbolLike>(
        &'a self,
        arena: &'a [Sequence<K>],
    ) -> impl Iterator<Item = (usize, K)> + 'a {
        (0..self.size(arena))
            .flat_map(move |i| self.itemset_at(arena, i).iter().map(move |&s| (i, s)))
    }

    /// Copies the viewed symbols out; meant for tests and diagnostics.
    pub fn to_itemsets<K: SymbolLike>(&self, arena: &[Sequence<K>]) -> Vec<Itemset<K>> {
        (0..self.size(arena))
            .map(|i| self.itemset_at(arena, i).iter().copied().collect())
            .collect()
    }

    /// Checks that the cut points lie inside the owner.
    pub fn validate<K: SymbolLike>(&self, arena: &[Sequence<K>]) -> Result<(), MiningError> {
        let invalid = MiningError::InvalidCut {
            owner: self.owner,
            itemset: self.first_itemset,
            item: self.first_item,
        };
        let Some(seq) = arena.get(self.owner) else {
            return Err(invalid);
        };
        let Some(first) = seq.itemset(self.first_itemset) else {
            return Err(invalid);
        };
        if self.first_item >= first.len() {
            return Err(invalid);
        }
        if let Some(end) = self.end {
            let fits = seq
                .itemset(end.itemset)
                .is_some_and(|set| end.item > 0 && end.item <= set.len());
            let ordered = end.itemset > self.first_itemset
                || (end.itemset == self.first_itemset && end.item > self.first_item);
            if !fits || !ordered {
                return Err(invalid);
            }
        }
        Ok(())
    }
}
