//! Data provider trait
//!
//! Everything a plugin shows comes from a provider: the host name, the
//! mailbox, the music player and the wall clock. Providers are swappable and
//! may fail; plugins absorb every [`ProviderError`] into a fallback render.

use heapless::String;
use vfdstat_protocol::MAX_CELLS;

/// Maximum length of a provider string in bytes; a full screen of
/// four-byte characters
pub const MAX_PROVIDER_TEXT: usize = MAX_CELLS * 4;

/// Text returned by a provider
pub type ProviderText = String<MAX_PROVIDER_TEXT>;

/// Errors reported by data providers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderError {
    /// Source not reachable (daemon down, command missing)
    Unavailable,
    /// Mailbox file could not be opened
    MailboxOpen,
    /// Source answered with data that could not be parsed
    InvalidData,
    /// Answer did not fit the provider buffer
    Overflow,
}

impl core::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            ProviderError::Unavailable => "source unavailable",
            ProviderError::MailboxOpen => "mailbox cannot be opened",
            ProviderError::InvalidData => "unusable data",
            ProviderError::Overflow => "answer too long",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for ProviderError {}

/// Music player state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerState {
    Playing,
    Paused,
    #[default]
    Stopped,
}

impl PlayerState {
    /// Status symbol drawn in front of the track text
    pub const fn symbol(self) -> &'static str {
        match self {
            PlayerState::Playing => "> ",
            PlayerState::Paused => "= ",
            PlayerState::Stopped => "# ",
        }
    }

    /// Cells taken by [`PlayerState::symbol`]
    pub const fn symbol_width(self) -> usize {
        self.symbol().len()
    }
}

/// Artist and title of the current track
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackMetadata {
    pub artist: ProviderText,
    pub title: ProviderText,
}

impl TrackMetadata {
    pub fn new(artist: &str, title: &str) -> Self {
        Self {
            artist: provider_text(artist),
            title: provider_text(title),
        }
    }

    /// True when neither field carries anything printable
    pub fn is_empty(&self) -> bool {
        self.artist.trim().is_empty() && self.title.trim().is_empty()
    }
}

/// Copy `s` into a provider buffer, dropping whatever does not fit
pub fn provider_text(s: &str) -> ProviderText {
    let mut out = ProviderText::new();
    for c in s.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

/// Source of everything the plugins display
///
/// Calls are synchronous and unbounded; implementations that talk to
/// slow sources must bound their own latency.
pub trait Providers {
    /// Network name of this host
    fn host_name(&mut self) -> Result<ProviderText, ProviderError>;

    /// Number of messages in `user`'s mailbox
    fn mailbox_count(&mut self, user: &str) -> Result<u32, ProviderError>;

    /// Whether the music player is playing, paused or stopped
    fn player_state(&mut self) -> Result<PlayerState, ProviderError>;

    /// Metadata of the current track
    fn track_metadata(&mut self) -> Result<TrackMetadata, ProviderError>;

    /// Current date, already formatted for display
    fn current_date(&mut self) -> Result<ProviderText, ProviderError>;

    /// Current time of day, already formatted for display
    fn current_time(&mut self) -> Result<ProviderText, ProviderError>;
}
