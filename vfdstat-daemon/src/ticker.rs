//! Wall-clock tick pacing
//!
//! Ticks fall on fixed deadlines `period` apart, so the time a tick spends
//! querying providers and writing to the panel comes out of the following
//! sleep. A tick that overruns its slot skips the missed boundaries and the
//! schedule restarts from now.

use std::thread;
use std::time::{Duration, Instant};

use log::debug;

use vfdstat_core::scheduler::Ticker;

#[derive(Debug)]
pub struct IntervalTicker {
    period: Duration,
    next: Instant,
}

impl IntervalTicker {
    /// First boundary is one `period` from now
    pub fn new(period: Duration) -> Self {
        Self::starting_at(Instant::now(), period)
    }

    fn starting_at(start: Instant, period: Duration) -> Self {
        Self {
            period,
            next: start + period,
        }
    }

    /// Sleep owed at `now`, advancing the deadline
    fn advance(&mut self, now: Instant) -> Option<Duration> {
        match self.next.checked_duration_since(now) {
            Some(wait) => {
                self.next += self.period;
                Some(wait)
            }
            None => {
                debug!(
                    "tick overran by {:?}, resyncing",
                    now.duration_since(self.next)
                );
                self.next = now + self.period;
                None
            }
        }
    }
}

impl Ticker for IntervalTicker {
    fn wait_next(&mut self) {
        if let Some(wait) = self.advance(Instant::now()) {
            thread::sleep(wait);
        }
    }
}
