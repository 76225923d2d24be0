//! Mode rotation scheduler
//!
//! Cycles through a fixed list of display modes, giving each a fixed tick
//! budget before moving on.

pub mod executor;
pub mod rotation;
pub mod ticker;

pub use executor::{Phase, Scheduler, DEFAULT_TICK_MS};
pub use rotation::Rotation;
pub use ticker::{DelayTicker, Ticker};
