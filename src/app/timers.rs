//! Polled wall-clock timers for the session loop.

use std::time::{Duration, Instant};

/// Fires when `period` has elapsed since it last fired. A zero period never
/// fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodicTimer {
    period: Duration,
    next_due: Option<Instant>,
}

impl PeriodicTimer {
    pub fn new(period: Duration, now: Instant) -> Self {
        Self {
            period,
            next_due: (!period.is_zero()).then(|| now + period),
        }
    }

    pub fn disabled() -> Self {
        Self {
            period: Duration::ZERO,
            next_due: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.next_due
    }

    /// True at most once per call. The next boundary is the first one
    /// strictly after `now`, so missed boundaries are not replayed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now < due {
            return false;
        }
        let behind = now.duration_since(due);
        let periods = behind.as_nanos() / self.period.as_nanos() + 1;
        let skip = u32::try_from(periods).unwrap_or(u32::MAX);
        self.next_due = Some(due + self.period.saturating_mul(skip));
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/timers.rs"]
mod tests;
