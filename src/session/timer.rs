//! Advisory turn timer.
//!
//! Running over the limit is reported, never enforced.

use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug)]
pub struct TurnTimer {
    limit: Duration,
    started: Instant,
}

impl TurnTimer {
    /// Start timing now.
    #[must_use]
    pub fn start(limit: Duration) -> Self {
        Self::start_at(limit, Instant::now())
    }

    #[must_use]
    pub fn start_at(limit: Duration, started: Instant) -> Self {
        Self { limit, started }
    }

    pub fn restart(&mut self) {
        self.started = Instant::now();
    }

    #[must_use]
    pub fn limit(&self) -> Duration {
        self.limit
    }

    #[must_use]
    pub fn elapsed_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started)
    }

    /// Strictly more than the limit has passed by `now`.
    #[must_use]
    pub fn is_overdue_at(&self, now: Instant) -> bool {
        self.elapsed_at(now) > self.limit
    }

    #[must_use]
    pub fn is_overdue(&self) -> bool {
        self.is_overdue_at(Instant::now())
    }
}
