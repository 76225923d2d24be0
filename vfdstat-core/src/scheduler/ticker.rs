//! Tick pacing
//!
//! A [`Ticker`] decides how long the scheduler sleeps between ticks. Targets
//! without a clock use [`DelayTicker`], a fixed sleep after each tick's work;
//! hosts with a monotonic clock can hold a deadline instead so the cadence
//! does not drift by the time spent drawing.

use embedded_hal::delay::DelayNs;

/// Source of tick boundaries
pub trait Ticker {
    /// Block until the next tick is due
    fn wait_next(&mut self);
}

/// Fixed sleep of `period_ms` after every tick
#[derive(Debug)]
pub struct DelayTicker<T> {
    delay: T,
    period_ms: u32,
}

impl<T: DelayNs> DelayTicker<T> {
    pub fn new(delay: T, period_ms: u32) -> Self {
        Self { delay, period_ms }
    }
}

impl<T: DelayNs> Ticker for DelayTicker<T> {
    fn wait_next(&mut self) {
        self.delay.delay_ms(self.period_ms);
    }
}
