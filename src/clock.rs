//! Tick pacing
//!
//! Turns elapsed wall time into whole simulation ticks. The host feeds
//! `advance` from its frame callback; suspension drops any partial tick,
//! so time spent paused never turns into catch-up movement.

use std::time::Duration;

use crate::consts::MAX_TICKS_PER_ADVANCE;

/// Fixed-interval tick source, created suspended
#[derive(Debug, Clone)]
pub struct TickClock {
    interval: Duration,
    accumulator: Duration,
    running: bool,
}

impl TickClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulator: Duration::ZERO,
            running: false,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Swap the tick interval. Any partial tick is discarded, so the old
    /// cadence can never release another tick after the swap.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
        self.accumulator = Duration::ZERO;
    }

    /// Start releasing ticks
    pub fn resume(&mut self) {
        self.running = true;
    }

    /// Stop releasing ticks and drop any partial tick
    pub fn suspend(&mut self) {
        self.running = false;
        self.accumulator = Duration::ZERO;
    }

    /// Feed elapsed real time; returns the number of ticks now due,
    /// capped at `MAX_TICKS_PER_ADVANCE` per call
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if !self.running || self.interval.is_zero() {
            return 0;
        }
        self.accumulator += elapsed;

        let mut due = 0;
        while self.accumulator >= self.interval && due < MAX_TICKS_PER_ADVANCE {
            self.accumulator -= self.interval;
            due += 1;
        }
        // A stall longer than the cap is dropped, not queued
        if due == MAX_TICKS_PER_ADVANCE {
            self.accumulator = Duration::ZERO;
        }
        due
    }
}
