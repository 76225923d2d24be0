//! Configuration loading
//!
//! Reads the TOML file (when there is one), then resolves it against the
//! environment into the typed settings the rest of the daemon uses.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, info};
use thiserror::Error;

use vfdstat_core::config::{ConfigError, RotationConfig};
use vfdstat_core::plugin::PluginKind;
use vfdstat_drivers::VfdConfig;
use vfdstat_hal::UartConfig;
use vfdstat_protocol::{Geometry, GeometryError};

use super::toml::{parse_config, FileConfig};

/// Spool directory holding per-user mailboxes
pub const MAIL_SPOOL: &str = "/var/mail";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration: {0}")]
    Parse(#[from] ::toml::de::Error),
    #[error("unknown display mode `{0}`")]
    UnknownMode(String),
    #[error("invalid display size: {0}")]
    Geometry(#[from] GeometryError),
    #[error("invalid rotation: {0}")]
    Rotation(#[from] ConfigError),
    #[error("mail mode needs a user; set [mail] user or $USER")]
    NoUser,
}

/// Player query settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSettings {
    pub command: String,
    pub timeout: Duration,
}

/// Everything the daemon needs to start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Serial device node
    pub port: String,
    pub uart: UartConfig,
    pub vfd: VfdConfig,
    pub rotation: RotationConfig,
    pub tick_ms: u32,
    /// Fixed mailbox path; `None` means the spool file of whichever user
    /// the mail mode asks about
    pub mailbox: Option<PathBuf>,
    pub player: PlayerSettings,
}

/// Load settings from `path`, or from built-in defaults when there is none
pub fn load(path: Option<&Path>, env_user: Option<String>) -> Result<Settings, LoadError> {
    let file = match path {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            parse_config(&text)?
        }
        None => {
            info!("No configuration file, using defaults");
            FileConfig::default()
        }
    };

    let settings = resolve(file, env_user)?;
    log_settings_summary(&settings);
    Ok(settings)
}

/// Turn a parsed file into validated settings
pub fn resolve(file: FileConfig, env_user: Option<String>) -> Result<Settings, LoadError> {
    let modes = file
        .rotation
        .modes
        .iter()
        .map(|name| {
            name.parse::<PluginKind>()
                .map_err(|_| LoadError::UnknownMode(name.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let geometry = Geometry::new(file.display.rows, file.display.cols)?;

    let user = file.mail.user.or(env_user).unwrap_or_default();
    if user.is_empty() && modes.contains(&PluginKind::MailSummary) {
        return Err(LoadError::NoUser);
    }

    let rotation = RotationConfig::new(&modes, file.rotation.mode_duration_ticks, &user)?;

    let uart = UartConfig {
        read_timeout_ms: file.serial.read_timeout_ms,
        ..UartConfig::with_baudrate(file.serial.baud)
    };

    Ok(Settings {
        port: file.serial.port,
        uart,
        vfd: VfdConfig {
            geometry,
            char_delay_us: file.serial.char_delay_us,
        },
        rotation,
        tick_ms: file.rotation.tick_ms,
        mailbox: file.mail.mailbox,
        player: PlayerSettings {
            command: file.player.command,
            timeout: Duration::from_millis(file.player.timeout_ms),
        },
    })
}

/// Mailbox file for `user` when none is configured
pub fn spool_mailbox(user: &str) -> PathBuf {
    Path::new(MAIL_SPOOL).join(user)
}

fn log_settings_summary(settings: &Settings) {
    info!("Configuration loaded");
    debug!("  display on {} at {} baud", settings.port, settings.uart.baudrate);
    debug!(
        "  {}x{} cells",
        settings.vfd.geometry.rows(),
        settings.vfd.geometry.cols()
    );
    debug!(
        "  {} modes, {} ticks each, {} ms per tick",
        settings.rotation.modes.len(),
        settings.rotation.mode_duration_ticks,
        settings.tick_ms
    );
}
