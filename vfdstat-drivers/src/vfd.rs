//! Serial VFD driver
//!
//! Owns the serial transport and a delay source. Text goes out one byte per
//! character; each command byte is drained to the wire and followed by its
//! settle delay before control returns, so back-to-back commands can never
//! outrun the device.
//!
//! # Timing
//!
//! ```text
//! write_command(Clear)    write_command(CursorHome)   write_text("hi")
//! ──[0x0E]──drain──900µs──[0x0C]──drain──200µs────────[h][i]──
//! ```

use core::fmt;

use embedded_hal::delay::DelayNs;
use log::trace;

use vfdstat_core::traits::CharDisplay;
use vfdstat_hal::UartTx;
use vfdstat_protocol::{encode_char, Command, Geometry};

/// Driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VfdConfig {
    /// Panel geometry
    pub geometry: Geometry,
    /// Pause after each text byte (0 = none); some panels drop characters
    /// at full line rate
    pub char_delay_us: u32,
}

impl Default for VfdConfig {
    fn default() -> Self {
        Self {
            geometry: Geometry::REFERENCE,
            char_delay_us: 0,
        }
    }
}

/// Write failure on the display link
///
/// Never retried; callers treat it as fatal.
#[derive(Debug)]
pub enum VfdError<E> {
    /// A command byte could not be written or drained
    Command { command: Command, source: E },
    /// A text byte could not be written; `after` is the last command that
    /// reached the device
    Text {
        after: Option<Command>,
        source: E,
    },
}

impl<E> VfdError<E> {
    /// Most recent command attempted before the failure
    pub fn last_command(&self) -> Option<Command> {
        match self {
            VfdError::Command { command, .. } => Some(*command),
            VfdError::Text { after, .. } => *after,
        }
    }

    /// Underlying transport error
    pub fn transport(&self) -> &E {
        match self {
            VfdError::Command { source, .. } | VfdError::Text { source, .. } => source,
        }
    }
}

impl<E: fmt::Display> fmt::Display for VfdError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VfdError::Command { command, source } => {
                write!(f, "writing command {} failed: {}", command, source)
            }
            VfdError::Text {
                after: Some(command),
                source,
            } => write!(f, "writing text after {} failed: {}", command, source),
            VfdError::Text { after: None, source } => {
                write!(f, "writing text failed: {}", source)
            }
        }
    }
}

impl<E> core::error::Error for VfdError<E>
where
    E: core::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(self.transport())
    }
}

/// Serial VFD
pub struct Vfd<U, D> {
    uart: U,
    delay: D,
    config: VfdConfig,
    last_command: Option<Command>,
}

impl<U, D> Vfd<U, D>
where
    U: UartTx,
    D: DelayNs,
{
    pub fn new(uart: U, delay: D, config: VfdConfig) -> Self {
        Self {
            uart,
            delay,
            config,
            last_command: None,
        }
    }

    /// Write `text` at the cursor, one single-byte write per character
    pub fn write_text(&mut self, text: &str) -> Result<(), VfdError<U::Error>> {
        for c in text.chars() {
            let byte = [encode_char(c)];
            if let Err(source) = self.uart.write_blocking(&byte) {
                return Err(VfdError::Text {
                    after: self.last_command,
                    source,
                });
            }
            if self.config.char_delay_us > 0 {
                self.delay.delay_us(self.config.char_delay_us);
            }
        }
        Ok(())
    }

    /// Write a command byte and wait out its settle delay
    pub fn write_command(&mut self, command: Command) -> Result<(), VfdError<U::Error>> {
        trace!("vfd <- {}", command);

        let wrap = |source| VfdError::Command { command, source };
        self.uart.write_blocking(&[command.opcode()]).map_err(wrap)?;
        // Settle time counts from when the byte has left the port
        self.uart.flush().map_err(wrap)?;

        self.last_command = Some(command);
        self.delay.delay_us(command.settle_us());
        Ok(())
    }

    /// Last command that reached the device
    pub fn last_command(&self) -> Option<Command> {
        self.last_command
    }

    pub fn config(&self) -> &VfdConfig {
        &self.config
    }

    /// Give back the transport and delay
    pub fn release(self) -> (U, D) {
        (self.uart, self.delay)
    }
}

impl<U, D> CharDisplay for Vfd<U, D>
where
    U: UartTx,
    D: DelayNs,
{
    type Error = VfdError<U::Error>;

    fn geometry(&self) -> Geometry {
        self.config.geometry
    }

    fn write_text(&mut self, text: &str) -> Result<(), Self::Error> {
        Vfd::write_text(self, text)
    }

    fn write_command(&mut self, command: Command) -> Result<(), Self::Error> {
        Vfd::write_command(self, command)
    }
}
