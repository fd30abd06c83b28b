use std::time::{Duration, Instant};

pub const DEFAULT_TICK_INTERVAL_MS: u64 = 3000;

/// Decides when the next simulation tick is due.
///
/// Time is always passed in, so callers can step ticks without waiting on a
/// real clock. A late poll fires a single tick and the next one is scheduled a
/// full period after that poll.
#[derive(Clone, Debug)]
pub struct TickScheduler {
    period: Duration,
    next_due: Instant,
}

impl TickScheduler {
    /// First tick is due one period after `now`.
    pub fn new(period: Duration, now: Instant) -> Self {
        Self {
            period,
            next_due: now + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Returns true when a tick should run at `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now >= self.next_due {
            self.next_due = now + self.period;
            true
        } else {
            false
        }
    }

    pub fn time_until_next(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
            Instant::now(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_per_period() {
        let start = Instant::now();
        let period = Duration::from_millis(3000);
        let mut scheduler = TickScheduler::new(period, start);

        assert!(!scheduler.poll(start));
        assert!(!scheduler.poll(start + Duration::from_millis(2999)));
        assert!(scheduler.poll(start + period));
        assert!(!scheduler.poll(start + period));
        assert_eq!(scheduler.time_until_next(start + period), period);
        assert!(scheduler.poll(start + period * 2));
    }

    #[test]
    fn test_late_poll_does_not_burst() {
        let start = Instant::now();
        let period = Duration::from_millis(100);
        let mut scheduler = TickScheduler::new(period, start);

        let late = start + Duration::from_millis(1000);
        assert!(scheduler.poll(late));
        assert!(!scheduler.poll(late));
        assert_eq!(scheduler.time_until_next(late), period);
        assert_eq!(scheduler.time_until_next(late + period * 2), Duration::ZERO);
    }
}
