#![allow(dead_code)]
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use seq_sieve::algs::containment::contains_itemsets;
use seq_sieve::prelude::*;

/// Build a database from nested symbol lists; ids are 0, 1, 2, ...
pub fn db(nested: Vec<Vec<Vec<u32>>>) -> SequenceDatabase<u32> {
    SequenceDatabase::from_nested(nested)
}

/// Mine into memory and return the patterns in canonical order.
pub fn run(db: &SequenceDatabase<u32>, cfg: &MinerConfig) -> Vec<SequentialPattern<u32>> {
    let mut sink = MemorySink::new();
    mine(db, cfg, &mut sink).unwrap();
    sink.sort_canonical();
    sink.into_patterns()
}

/// Ids of the sequences containing `pattern`, by brute force.
pub fn naive_support(db: &SequenceDatabase<u32>, pattern: &SequentialPattern<u32>) -> SupportSet {
    db.iter()
        .filter(|s| contains_itemsets(s.itemsets(), pattern.itemsets()))
        .map(|s| s.id())
        .collect()
}

/// `<(1) (3)> #SUP 2` renderings, sorted: order-agnostic comparison key.
pub fn rendered(patterns: &[SequentialPattern<u32>]) -> Vec<String> {
    let mut out: Vec<String> = patterns.iter().map(|p| format!("{p:?}")).collect();
    out.sort();
    out
}

/// Random database of `n` sequences over symbols `0..alphabet`.
pub fn random_db(seed: u64, n: usize, max_len: usize, alphabet: u32) -> SequenceDatabase<u32> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let nested = (0..n)
        .map(|_| {
            let len = rng.gen_range(1..=max_len);
            (0..len)
                .map(|_| {
                    let size = rng.gen_range(1..=2);
                    (0..size).map(|_| rng.gen_range(0..alphabet)).collect::<Vec<u32>>()
                })
                .collect::<Vec<_>>()
        })
        .collect();
    db(nested)
}
