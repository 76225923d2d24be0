//! Host name mode

use log::warn;
use vfdstat_protocol::DisplayText;

use super::compose;
use crate::traits::{CharDisplay, CharDisplayExt, Providers};

/// Shown when the host name cannot be resolved
pub const HOSTNAME_UNAVAILABLE: &str = "hostname unavailable";

/// Writes the host name once; static afterwards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hostname {
    shown: DisplayText,
}

impl Hostname {
    pub fn render<D, P>(display: &mut D, providers: &mut P) -> Result<Self, D::Error>
    where
        D: CharDisplay,
        P: Providers,
    {
        let shown = match providers.host_name() {
            Ok(name) => compose(&[name.as_str()]),
            Err(e) => {
                warn!("host name provider failed: {}", e);
                compose(&[HOSTNAME_UNAVAILABLE])
            }
        };

        display.write_fitted(&shown, 0)?;
        display.line_feed()?;
        Ok(Self { shown })
    }

    /// Text that was written
    pub fn shown(&self) -> &str {
        &self.shown
    }
}
