use crate::heuristic::Heuristic;

/// Tuning knobs for [`PathFinder`](crate::PathFinder).
///
/// The default is the plain search: Euclidean heuristic, no expansion cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SearchConfig {
    /// Estimate used for the h-cost.
    pub heuristic: Heuristic,
    /// Stop with [`PathResult::ExpansionLimit`](crate::PathResult::ExpansionLimit)
    /// once this many cells have been expanded. `None` searches until the
    /// open set is exhausted.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `heuristic` for the h-cost.
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Cap the number of expansions.
    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }
}
