//! Daemon errors
//!
//! All of these are fatal: `main` logs them and exits non-zero.

use std::io;

use thiserror::Error;

use vfdstat_core::config::ConfigError;
use vfdstat_drivers::VfdError;
use vfdstat_protocol::Command;

use crate::config::LoadError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] LoadError),
    #[error("invalid rotation: {0}")]
    Rotation(#[from] ConfigError),
    #[error("cannot open display on {port}: {source}")]
    DeviceOpen {
        port: String,
        #[source]
        source: serialport::Error,
    },
    #[error("display write failed: {0}")]
    DeviceWrite(#[from] VfdError<io::Error>),
}

impl AppError {
    /// Last command sent to the display before a write failure
    pub fn last_command(&self) -> Option<Command> {
        match self {
            AppError::DeviceWrite(e) => e.last_command(),
            _ => None,
        }
    }
}
