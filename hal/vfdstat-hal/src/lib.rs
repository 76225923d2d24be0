//! vfdstat Hardware Abstraction Layer
//!
//! This crate defines the transport traits the display driver is written
//! against. A platform crate implements them for a concrete serial port, and
//! tests implement them with recording mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  vfdstat-drivers (Vfd protocol driver)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  vfdstat-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ vfdstat-hal-  │
//!             │    linux      │
//!             └───────────────┘
//! ```
//!
//! Delays are not abstracted here: the driver uses
//! [`embedded_hal::delay::DelayNs`](https://docs.rs/embedded-hal) directly.

#![no_std]
#![deny(unsafe_code)]

pub mod uart;

pub use uart::{DataBits, Parity, StopBits, UartConfig, UartTx};
