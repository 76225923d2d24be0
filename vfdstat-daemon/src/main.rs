//! vfdstat daemon
//!
//! Opens the serial VFD, then cycles through the configured display modes
//! forever, one tick every `tick_ms` of wall-clock time:
//!
//! ```text
//! config ──► SerialUart ──► Vfd ──┐
//!                                 ├──► Scheduler::run_with (never returns Ok)
//! config ──► HostProviders ───────┘
//! ```
//!
//! Usage: `vfdstat [CONFIG]` (or `VFDSTAT_CONFIG=...`). Log level comes from
//! `RUST_LOG`, default `info`.

mod config;
mod error;
mod providers;
mod ticker;

use std::convert::Infallible;
use std::env;
use std::process::ExitCode;
use std::time::Duration;

use log::{error, info};

use vfdstat_core::scheduler::Scheduler;
use vfdstat_drivers::Vfd;
use vfdstat_hal_linux::{Delay, SerialUart};

use crate::config::{config_path, CONFIG_ENV};
use crate::error::AppError;
use crate::providers::HostProviders;
use crate::ticker::IntervalTicker;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(never) => match never {},
        Err(e) => {
            error!("{}", e);
            if let Some(command) = e.last_command() {
                error!("last command sent: {}", command);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<Infallible, AppError> {
    info!("vfdstat {} starting", env!("CARGO_PKG_VERSION"));

    let path = config_path(env::args_os().nth(1), env::var_os(CONFIG_ENV));
    let settings = config::load(path.as_deref(), env::var("USER").ok())?;

    let uart = SerialUart::open(&settings.port, &settings.uart).map_err(|source| {
        AppError::DeviceOpen {
            port: settings.port.clone(),
            source,
        }
    })?;
    info!(
        "Display on {} at {} baud",
        settings.port, settings.uart.baudrate
    );

    let vfd = Vfd::new(uart, Delay, settings.vfd);
    let providers = HostProviders::from_settings(&settings);
    let mut scheduler = Scheduler::new(vfd, providers, settings.rotation.clone())?;

    info!("Rotation running, {} ms per tick", settings.tick_ms);
    let mut ticker = IntervalTicker::new(Duration::from_millis(settings.tick_ms.into()));
    let never = scheduler.run_with(&mut ticker)?;
    match never {}
}
