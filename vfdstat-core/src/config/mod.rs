//! Configuration types
//!
//! Board-agnostic rotation settings. The host binary loads them from TOML.

pub mod types;

pub use types::*;
