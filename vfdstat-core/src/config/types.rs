//! Configuration type definitions

use heapless::{String, Vec};

use crate::plugin::PluginKind;

/// Maximum modes in a rotation
pub const MAX_MODES: usize = 8;

/// Maximum user name length
pub const MAX_USER_LEN: usize = 32;

/// Reference per-mode duration in ticks
pub const DEFAULT_MODE_DURATION_TICKS: u16 = 5;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Rotation has no modes
    NoModes,
    /// Rotation has more than [`MAX_MODES`] modes
    TooManyModes,
    /// A mode must last at least one tick
    ZeroDuration,
    /// User name longer than [`MAX_USER_LEN`]
    UserTooLong,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::NoModes => f.write_str("rotation needs at least one mode"),
            ConfigError::TooManyModes => write!(f, "rotation is limited to {} modes", MAX_MODES),
            ConfigError::ZeroDuration => f.write_str("mode duration must be at least one tick"),
            ConfigError::UserTooLong => {
                write!(f, "user name is limited to {} bytes", MAX_USER_LEN)
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// Mode rotation configuration
///
/// Fixed at startup; the rotation is never reconfigured while running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationConfig {
    /// Modes in display order
    pub modes: Vec<PluginKind, MAX_MODES>,
    /// Ticks each mode stays on screen
    pub mode_duration_ticks: u16,
    /// Mailbox owner shown by the mail summary
    pub user: String<MAX_USER_LEN>,
}

impl Default for RotationConfig {
    fn default() -> Self {
        let mut modes = Vec::new();
        for kind in [PluginKind::Hostname, PluginKind::Clock, PluginKind::MailSummary] {
            let _ = modes.push(kind);
        }
        Self {
            modes,
            mode_duration_ticks: DEFAULT_MODE_DURATION_TICKS,
            user: String::new(),
        }
    }
}

impl RotationConfig {
    /// Build and validate a rotation
    pub fn new(
        modes: &[PluginKind],
        mode_duration_ticks: u16,
        user: &str,
    ) -> Result<Self, ConfigError> {
        let modes = Vec::from_slice(modes).map_err(|_| ConfigError::TooManyModes)?;

        let mut user_buf = String::new();
        user_buf
            .push_str(user)
            .map_err(|_| ConfigError::UserTooLong)?;

        let config = Self {
            modes,
            mode_duration_ticks,
            user: user_buf,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check invariants the scheduler relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.modes.is_empty() {
            return Err(ConfigError::NoModes);
        }
        if self.mode_duration_ticks == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        Ok(())
    }
}
