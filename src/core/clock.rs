//! Fixed-rate tick scheduling for the host loop.

use std::time::{Duration, Instant};

/// Tracks the deadline of the next simulation tick.
///
/// Exactly one tick fires per deadline. A host that falls behind does not get
/// a burst of catch-up ticks; the schedule restarts from the moment the late
/// tick was taken.
#[derive(Debug, Clone)]
pub struct TickClock {
    interval: Duration,
    next_tick: Instant,
}

impl TickClock {
    pub fn new(tick_rate: u32, now: Instant) -> Self {
        let interval = Duration::from_secs(1) / tick_rate.max(1);
        Self {
            interval,
            next_tick: now + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// How long the host may wait for input before the next tick is due.
    pub fn time_until_tick(&self, now: Instant) -> Duration {
        self.next_tick.saturating_duration_since(now)
    }

    /// Consume the current deadline if it has passed.
    pub fn take_tick(&mut self, now: Instant) -> bool {
        if now < self.next_tick {
            return false;
        }
        let on_schedule = self.next_tick + self.interval;
        self.next_tick = if on_schedule > now {
            on_schedule
        } else {
            now + self.interval
        };
        true
    }
}
