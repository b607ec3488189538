//! Engine configuration, fixed for the lifetime of a [`SearchEngine`](crate::SearchEngine).

use std::time::Duration;

/// Default wall-clock budget per move.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(2);

/// Default iterative-deepening ceiling, in plies.
pub const DEFAULT_MAX_DEPTH: u8 = 8;

/// Search limits and ordering options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Wall-clock budget for one `choose_move` call.
    pub time_limit: Duration,
    /// Deepest iteration attempted.
    pub max_depth: u8,
    /// Seed each iteration's move ordering with the previous iteration's
    /// principal variation instead of the root move list.
    pub reuse_pv_ordering: bool,
}

impl EngineConfig {
    /// Create a config with the given limits and static move ordering.
    pub fn new(time_limit: Duration, max_depth: u8) -> Self {
        Self {
            time_limit,
            max_depth,
            reuse_pv_ordering: false,
        }
    }

    /// Enable or disable principal-variation move ordering.
    pub fn with_pv_ordering(mut self, enabled: bool) -> Self {
        self.reuse_pv_ordering = enabled;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_LIMIT, DEFAULT_MAX_DEPTH)
    }
}
