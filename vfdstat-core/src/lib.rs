//! Board-agnostic core logic for the VFD status rotation
//!
//! This crate contains all application logic that does not depend on a
//! specific serial port or data source:
//!
//! - Display and data-provider traits
//! - Display plugins (host name, clock, mail summary, now playing)
//! - Mode rotation scheduler
//! - Rotation configuration types

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod plugin;
pub mod scheduler;
pub mod traits;

#[cfg(test)]
pub(crate) mod mock;

pub use vfdstat_protocol as protocol;
