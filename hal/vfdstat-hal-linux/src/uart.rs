//! Serial TTY transmitter
//!
//! Wraps [`linux_embedded_hal::Serial`] and exposes it as a blocking
//! [`UartTx`]. `flush` waits for the kernel to drain the output queue, so a
//! caller that delays after flushing is timing from the wire, not from the
//! buffer.

use std::io::{self, Write};
use std::time::Duration;

use linux_embedded_hal::Serial;
use log::debug;

use vfdstat_hal::{DataBits, Parity, StopBits, UartConfig, UartTx};

/// Serial device opened for writing
pub struct SerialUart {
    serial: Serial,
}

impl SerialUart {
    /// Open `path` and apply the line settings in `config`
    pub fn open(path: &str, config: &UartConfig) -> Result<Self, serialport::Error> {
        let port = serialport::new(path, config.baudrate)
            .data_bits(data_bits(config.data_bits))
            .parity(parity(config.parity))
            .stop_bits(stop_bits(config.stop_bits))
            .flow_control(serialport::FlowControl::None)
            .timeout(Duration::from_millis(config.read_timeout_ms as u64))
            .open_native()?;

        debug!(
            "opened {} at {} baud ({:?}/{:?}/{:?})",
            path, config.baudrate, config.data_bits, config.parity, config.stop_bits
        );

        Ok(Self {
            serial: Serial(port),
        })
    }
}

impl UartTx for SerialUart {
    type Error = io::Error;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), io::Error> {
        self.serial.0.write_all(data)
    }

    fn flush(&mut self) -> Result<(), io::Error> {
        self.serial.0.flush()
    }
}

fn data_bits(bits: DataBits) -> serialport::DataBits {
    match bits {
        DataBits::Seven => serialport::DataBits::Seven,
        DataBits::Eight => serialport::DataBits::Eight,
    }
}

fn parity(parity: Parity) -> serialport::Parity {
    match parity {
        Parity::None => serialport::Parity::None,
        Parity::Even => serialport::Parity::Even,
        Parity::Odd => serialport::Parity::Odd,
    }
}

fn stop_bits(bits: StopBits) -> serialport::StopBits {
    match bits {
        StopBits::One => serialport::StopBits::One,
        StopBits::Two => serialport::StopBits::Two,
    }
}
