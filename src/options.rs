use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Length given to roads whose length attribute is missing
pub const DEFAULT_ROAD_LENGTH: f64 = 1.0;

/// Per-query limits. Both are off by default: a search runs until the
/// target is finalized or the frontier is exhausted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    pub max_expansions: Option<usize>,
    pub timeout_ms: Option<u64>,
}

impl SearchOptions {
    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = Some(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));
        self
    }

    /// Stop predicate for `dijkstra_with` / `a_star_with`.
    /// The deadline clock starts when the guard is built.
    pub fn guard(&self) -> impl FnMut(usize) -> bool + use<> {
        let max_expansions = self.max_expansions;
        let deadline = self
            .timeout_ms
            .and_then(|ms| Instant::now().checked_add(Duration::from_millis(ms)));

        move |visited| {
            max_expansions.is_some_and(|max| visited >= max)
                || deadline.is_some_and(|deadline| Instant::now() >= deadline)
        }
    }
}

/// Settings for building a road network
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub default_length: f64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            default_length: DEFAULT_ROAD_LENGTH,
        }
    }
}
