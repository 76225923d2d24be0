//! Host name lookup

use std::fs;
use std::process::Command;

use log::debug;

use vfdstat_core::traits::{provider_text, ProviderError, ProviderText};

/// Kernel's view of the node name
const PROC_HOSTNAME: &str = "/proc/sys/kernel/hostname";

/// Read the host name, falling back to the `hostname` command
pub fn host_name() -> Result<ProviderText, ProviderError> {
    if let Some(name) = fs::read_to_string(PROC_HOSTNAME)
        .ok()
        .as_deref()
        .and_then(clean)
    {
        return Ok(provider_text(name));
    }
    debug!("{} unreadable, asking `hostname`", PROC_HOSTNAME);

    let output = Command::new("hostname")
        .output()
        .map_err(|_| ProviderError::Unavailable)?;
    if !output.status.success() {
        return Err(ProviderError::Unavailable);
    }
    let raw = String::from_utf8(output.stdout).map_err(|_| ProviderError::InvalidData)?;
    clean(&raw)
        .map(provider_text)
        .ok_or(ProviderError::InvalidData)
}

/// Trim surrounding whitespace; `None` when nothing is left
fn clean(raw: &str) -> Option<&str> {
    let name = raw.trim();
    (!name.is_empty()).then_some(name)
}
