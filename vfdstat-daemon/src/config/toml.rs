//! TOML configuration file format
//!
//! Every section and every key is optional; anything left out takes the
//! reference value.
//!
//! ```toml
//! [serial]
//! port = "/dev/ttyU0"
//! baud = 38400
//!
//! [rotation]
//! modes = ["hostname", "clock", "mail"]
//! mode_duration_ticks = 5
//! ```

use std::path::PathBuf;

use serde::Deserialize;

use vfdstat_core::config::DEFAULT_MODE_DURATION_TICKS;
use vfdstat_core::scheduler::DEFAULT_TICK_MS;
use vfdstat_protocol::Geometry;

/// Default serial device
pub const DEFAULT_PORT: &str = "/dev/ttyU0";

/// Default player control command
pub const DEFAULT_PLAYER_COMMAND: &str = "mpc";

/// Default limit on one player query
pub const DEFAULT_PLAYER_TIMEOUT_MS: u64 = 2000;

/// Whole configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub serial: SerialSection,
    pub display: DisplaySection,
    pub rotation: RotationSection,
    pub mail: MailSection,
    pub player: PlayerSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SerialSection {
    pub port: String,
    pub baud: u32,
    pub read_timeout_ms: u32,
    /// Pause after each text byte
    pub char_delay_us: u32,
}

impl Default for SerialSection {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT.to_string(),
            baud: 38_400,
            read_timeout_ms: 1000,
            char_delay_us: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplaySection {
    pub rows: u8,
    pub cols: u8,
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            rows: Geometry::REFERENCE.rows(),
            cols: Geometry::REFERENCE.cols(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RotationSection {
    /// Mode names, checked when the configuration is resolved
    pub modes: Vec<String>,
    pub mode_duration_ticks: u16,
    pub tick_ms: u32,
}

impl Default for RotationSection {
    fn default() -> Self {
        Self {
            modes: vec!["hostname".into(), "clock".into(), "mail".into()],
            mode_duration_ticks: DEFAULT_MODE_DURATION_TICKS,
            tick_ms: DEFAULT_TICK_MS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MailSection {
    /// Defaults to `$USER`
    pub user: Option<String>,
    /// Defaults to `/var/mail/<user>`
    pub mailbox: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlayerSection {
    pub command: String,
    pub timeout_ms: u64,
}

impl Default for PlayerSection {
    fn default() -> Self {
        Self {
            command: DEFAULT_PLAYER_COMMAND.to_string(),
            timeout_ms: DEFAULT_PLAYER_TIMEOUT_MS,
        }
    }
}

/// Parse a configuration file
pub fn parse_config(text: &str) -> Result<FileConfig, ::toml::de::Error> {
    ::toml::from_str(text)
}
