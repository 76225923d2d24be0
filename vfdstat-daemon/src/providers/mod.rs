//! Host data providers
//!
//! Backs the core [`Providers`] trait with the local system: kernel host
//! name, local time zone clock, mbox spool and the `mpc` player client.

pub mod clock;
pub mod hostname;
pub mod mailbox;
pub mod mpd;

use jiff::Zoned;

use vfdstat_core::traits::{PlayerState, ProviderError, ProviderText, Providers, TrackMetadata};

use crate::config::Settings;

pub use mailbox::Mailbox;
pub use mpd::Mpc;

/// Providers reading from the machine the daemon runs on
#[derive(Debug, Clone)]
pub struct HostProviders {
    mailbox: Mailbox,
    player: Mpc,
}

impl HostProviders {
    pub fn new(mailbox: Mailbox, player: Mpc) -> Self {
        Self { mailbox, player }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            Mailbox::new(settings.mailbox.clone()),
            Mpc::new(&settings.player),
        )
    }
}

impl Providers for HostProviders {
    fn host_name(&mut self) -> Result<ProviderText, ProviderError> {
        hostname::host_name()
    }

    fn mailbox_count(&mut self, user: &str) -> Result<u32, ProviderError> {
        self.mailbox.count(user)
    }

    fn player_state(&mut self) -> Result<PlayerState, ProviderError> {
        self.player.state()
    }

    fn track_metadata(&mut self) -> Result<TrackMetadata, ProviderError> {
        self.player.track()
    }

    fn current_date(&mut self) -> Result<ProviderText, ProviderError> {
        Ok(clock::format_date(&Zoned::now()))
    }

    fn current_time(&mut self) -> Result<ProviderText, ProviderError> {
        Ok(clock::format_time(&Zoned::now()))
    }
}
