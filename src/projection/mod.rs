//! Pseudo-projection: zero-copy views and the projected databases built from them.

pub mod pairs;
pub mod pseudo;

pub use pairs::{ExtensionKey, ExtensionPairs, build_projected_database, frequent_extension_pairs};
pub use pseudo::{Cut, PseudoSequence};

#[cfg(test)]
mod tests;
