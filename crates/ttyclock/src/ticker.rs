use std::time::{Duration, Instant};

/// Counts whole periods of monotonic time.
///
/// The control loop wakes on key presses as well as on its poll timeout, so
/// the countdown asks the ticker how many seconds actually passed instead of
/// assuming one per iteration.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    last: Instant,
}

impl Ticker {
    pub fn new(period: Duration, start: Instant) -> Self {
        Self {
            period,
            last: start,
        }
    }

    pub fn every_second(start: Instant) -> Self {
        Self::new(Duration::from_secs(1), start)
    }

    /// Number of periods completed since the last call that returned
    /// non-zero. The remainder carries over.
    pub fn due(&mut self, now: Instant) -> u32 {
        let elapsed = now.saturating_duration_since(self.last);
        if self.period.is_zero() {
            return 0;
        }
        let ticks =
            u32::try_from(elapsed.as_nanos() / self.period.as_nanos()).unwrap_or(u32::MAX);
        if ticks > 0 {
            self.last += self.period * ticks;
        }
        ticks
    }

    /// Time left until the next tick completes.
    pub fn remaining(&self, now: Instant) -> Duration {
        let elapsed = now.saturating_duration_since(self.last);
        self.period.saturating_sub(elapsed)
    }
}
