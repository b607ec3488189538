//! Search control: the wall-clock deadline.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Decides when a search must stop.
///
/// Checked at the top of every node. The clock starts when the control is
/// created. Once the limit has been exceeded the control latches, so every
/// frame unwinding afterwards sees the stop without re-reading the clock.
pub struct SearchControl {
    start: Instant,
    limit: Option<Duration>,
    stopped: Cell<bool>,
}

impl SearchControl {
    /// Create control with no time limit. Only the depth ceiling ends the search.
    pub fn new_infinite() -> Self {
        Self {
            start: Instant::now(),
            limit: None,
            stopped: Cell::new(false),
        }
    }

    /// Create control that stops once `limit` has elapsed.
    pub fn new_timed(limit: Duration) -> Self {
        Self {
            start: Instant::now(),
            limit: Some(limit),
            stopped: Cell::new(false),
        }
    }

    /// Check whether the search should abort immediately.
    ///
    /// Returns `true` once elapsed time strictly exceeds the limit, and on
    /// every call after that.
    pub fn should_stop(&self) -> bool {
        if self.stopped.get() {
            return true;
        }

        if let Some(limit) = self.limit
            && self.elapsed() > limit
        {
            self.stopped.set(true);
            return true;
        }

        false
    }

    /// Return `true` if the deadline has already tripped.
    pub fn is_stopped(&self) -> bool {
        self.stopped.get()
    }

    /// Elapsed time since the control was created.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
