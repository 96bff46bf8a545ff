//! Mining algorithms: the pattern-growth search, closure tests and filters.

pub mod closure;
pub mod config;
pub mod containment;
pub mod growth;
#[cfg(feature = "rayon")]
pub mod parallel;
pub mod postfilter;

pub use config::{MinSupport, MinerConfig, PatternKind};
pub use growth::{PatternState, mine};
#[cfg(feature = "rayon")]
pub use parallel::mine_parallel;
