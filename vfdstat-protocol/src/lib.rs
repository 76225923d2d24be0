//! Serial VFD Command Protocol
//!
//! The display is a dumb character-cell device on a serial line. Every byte
//! it receives is either a printable ASCII character, placed at the cursor,
//! or one of a handful of single-byte control commands:
//!
//! ```text
//! ┌─────────────────┬────────┬──────────────┐
//! │ COMMAND         │ OPCODE │ SETTLE DELAY │
//! ├─────────────────┼────────┼──────────────┤
//! │ Clear           │ 0x0E   │ 900 µs       │
//! │ CursorHome (FF) │ 0x0C   │ 200 µs       │
//! │ CarriageReturn  │ 0x0D   │ 200 µs       │
//! │ LineFeed        │ 0x0A   │ 900 µs       │
//! │ CursorOff       │ 0x16   │ 200 µs       │
//! │ SetFont         │ 0x19   │ 200 µs       │
//! └─────────────────┴────────┴──────────────┘
//! ```
//!
//! After a command byte the device needs its settle delay before it will
//! accept the next command. Text bytes have no mandated delay.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod command;
pub mod geometry;
pub mod text;

pub use command::Command;
pub use geometry::{Geometry, GeometryError, MAX_CELLS};
pub use text::{encode_char, fit, truncate, DisplayText, REPLACEMENT};
