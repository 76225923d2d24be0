//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in vfdstat-core:
//!
//! - [`vfd::Vfd`]: serial VFD protocol driver over any
//!   [`vfdstat_hal::UartTx`], enforcing per-command settle delays

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod vfd;

pub use vfd::{Vfd, VfdConfig, VfdError};
