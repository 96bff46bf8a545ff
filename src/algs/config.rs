//! Run configuration for the pattern-growth miners.

use serde::{Deserialize, Serialize};

use crate::mining_error::MiningError;

/// Which patterns a run reports.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternKind {
    /// Every frequent pattern (plain PrefixSpan enumeration).
    Frequent,
    /// Frequent patterns without a proper superpattern of equal support.
    Closed,
    /// Frequent patterns without any frequent proper superpattern.
    Maximal,
}

/// Minimum support, either as a fraction of the database or as a count.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum MinSupport {
    Relative(f64),
    Absolute(usize),
}

impl MinSupport {
    /// Absolute sequence count for a database of `database_size` sequences.
    ///
    /// `Relative(r)` becomes `ceil(r * size)`. A threshold that resolves to
    /// zero is clamped to one rather than rejected; only a relative value
    /// that is NaN or outside `[0, 1]` is an error.
    pub fn resolve(self, database_size: usize) -> Result<usize, MiningError> {
        let count = match self {
            MinSupport::Relative(r) => {
                if !(0.0..=1.0).contains(&r) {
                    return Err(MiningError::InvalidMinSupport(r));
                }
                (r * database_size as f64).ceil() as usize
            }
            MinSupport::Absolute(n) => n,
        };
        if count == 0 {
            log::warn!("minimum support {self:?} resolves to 0 sequences; clamped to 1");
        }
        Ok(count.max(1))
    }
}

/// Options for one mining run.
///
/// ```rust
/// # use seq_sieve::algs::config::{MinerConfig, MinSupport, PatternKind};
/// let cfg = MinerConfig::new(MinSupport::Relative(0.5))
///     .kind(PatternKind::Maximal)
///     .max_pattern_length(Some(4));
/// assert_eq!(cfg.max_pattern_length, Some(4));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MinerConfig {
    pub min_support: MinSupport,
    pub kind: PatternKind,
    /// Longest pattern reported, counted in symbols (not itemsets).
    pub max_pattern_length: Option<usize>,
    /// Closure tests and backscan pruning. When off, closed and maximal runs
    /// enumerate every frequent pattern instead; filter the result with
    /// [`postfilter`](crate::algs::postfilter) to recover the same set.
    pub pruning: bool,
}

impl Default for MinerConfig {
    fn default() -> Self {
        Self {
            min_support: MinSupport::Relative(0.5),
            kind: PatternKind::Closed,
            max_pattern_length: None,
            pruning: true,
        }
    }
}

impl MinerConfig {
    pub fn new(min_support: MinSupport) -> Self {
        Self {
            min_support,
            ..Self::default()
        }
    }

    pub fn kind(mut self, kind: PatternKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn max_pattern_length(mut self, max: Option<usize>) -> Self {
        self.max_pattern_length = max;
        self
    }

    pub fn pruning(mut self, on: bool) -> Self {
        self.pruning = on;
        self
    }

    /// Effective length cutoff; `Some(0)` is clamped to one symbol.
    pub(crate) fn length_cap(&self) -> usize {
        match self.max_pattern_length {
            Some(0) => {
                log::warn!("max_pattern_length 0 clamped to 1");
                1
            }
            Some(n) => n,
            None => usize::MAX,
        }
    }

    /// The kind actually searched for: without pruning, closed and maximal
    /// runs fall back to exhaustive enumeration.
    pub(crate) fn effective_kind(&self) -> PatternKind {
        if self.pruning {
            self.kind
        } else {
            PatternKind::Frequent
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_support_rounds_up() {
        assert_eq!(MinSupport::Relative(0.66).resolve(3).unwrap(), 2);
        assert_eq!(MinSupport::Relative(0.5).resolve(4).unwrap(), 2);
        assert_eq!(MinSupport::Relative(0.51).resolve(4).unwrap(), 3);
        assert_eq!(MinSupport::Relative(1.0).resolve(7).unwrap(), 7);
    }

    #[test]
    fn vacuous_threshold_is_clamped() {
        assert_eq!(MinSupport::Relative(0.0).resolve(10).unwrap(), 1);
        assert_eq!(MinSupport::Relative(0.5).resolve(0).unwrap(), 1);
        assert_eq!(MinSupport::Absolute(0).resolve(5).unwrap(), 1);
    }

    #[test]
    fn out_of_range_relative_is_rejected() {
        assert!(matches!(
            MinSupport::Relative(1.5).resolve(3),
            Err(MiningError::InvalidMinSupport(_))
        ));
        assert!(MinSupport::Relative(f64::NAN).resolve(3).is_err());
        assert!(MinSupport::Relative(-0.1).resolve(3).is_err());
    }

    #[test]
    fn length_cap_and_kind() {
        let cfg = MinerConfig::default().max_pattern_length(Some(0));
        assert_eq!(cfg.length_cap(), 1);
        assert_eq!(MinerConfig::default().length_cap(), usize::MAX);
        let cfg = MinerConfig::default().pruning(false);
        assert_eq!(cfg.effective_kind(), PatternKind::Frequent);
    }

    #[test]
    fn config_serde_round_trip() {
        let cfg = MinerConfig::new(MinSupport::Absolute(3)).kind(PatternKind::Maximal);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: MinerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
