//! Time-bounded search for dropfour.

pub mod config;
pub mod search;

pub use config::{DEFAULT_MAX_DEPTH, DEFAULT_TIME_LIMIT, EngineConfig};
pub use search::control::SearchControl;
pub use search::negamax::{Aborted, INF, WIN_SCORE};
pub use search::{SearchEngine, SearchStats};
