//! Linux implementation of vfdstat-hal traits
//!
//! Targets any serial device node the kernel exposes (`/dev/ttyUSB0`,
//! `/dev/ttyU0`, ...). Delays come from `linux-embedded-hal`.

#![deny(unsafe_code)]

pub mod uart;

pub use linux_embedded_hal::Delay;
pub use uart::SerialUart;
