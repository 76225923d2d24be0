//! Configuration loading and parsing
//!
//! The file path comes from the first command-line argument, else from
//! `VFDSTAT_CONFIG`; with neither, built-in defaults apply.

pub mod loader;
pub mod toml;

use std::ffi::OsString;
use std::path::PathBuf;

pub use loader::{load, resolve, spool_mailbox, LoadError, PlayerSettings, Settings};
pub use self::toml::{parse_config, FileConfig};

/// Environment variable naming the configuration file
pub const CONFIG_ENV: &str = "VFDSTAT_CONFIG";

/// Pick the configuration file from the CLI argument or the environment
pub fn config_path(arg: Option<OsString>, env: Option<OsString>) -> Option<PathBuf> {
    arg.or(env)
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
}
