//! Display plugins
//!
//! A plugin is one display mode. It renders a full frame once when the mode
//! is entered, then gets one `step` per tick until its tick budget runs out:
//!
//! ```text
//! initialize ──► step (Continue) × N ──► step (Done)
//!   full frame     partial refresh         no output
//! ```
//!
//! Variants form a closed set and are dispatched statically.

pub mod clock;
pub mod hostname;
pub mod mail;
pub mod now_playing;

use core::str::FromStr;

use vfdstat_protocol::{encode_char, DisplayText};

use crate::traits::{CharDisplay, Providers};

pub use clock::Clock;
pub use hostname::Hostname;
pub use mail::MailSummary;
pub use now_playing::NowPlaying;

/// Identifier of a display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluginKind {
    Hostname,
    Clock,
    MailSummary,
    NowPlaying,
}

impl PluginKind {
    pub const ALL: [PluginKind; 4] = [
        PluginKind::Hostname,
        PluginKind::Clock,
        PluginKind::MailSummary,
        PluginKind::NowPlaying,
    ];

    /// Name used in configuration files and logs
    pub const fn name(self) -> &'static str {
        match self {
            PluginKind::Hostname => "hostname",
            PluginKind::Clock => "clock",
            PluginKind::MailSummary => "mail_summary",
            PluginKind::NowPlaying => "now_playing",
        }
    }
}

impl core::fmt::Display for PluginKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognised mode name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownPlugin;

impl core::fmt::Display for UnknownPlugin {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("unknown display mode")
    }
}

impl core::error::Error for UnknownPlugin {}

impl FromStr for PluginKind {
    type Err = UnknownPlugin;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mail" => Ok(PluginKind::MailSummary),
            _ => PluginKind::ALL
                .into_iter()
                .find(|kind| kind.name() == s)
                .ok_or(UnknownPlugin),
        }
    }
}

/// Outcome of one plugin step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// Budget left; sleep until the next tick
    Continue,
    /// Budget exhausted; switch to the next mode
    Done,
}

/// Render state of the active plugin
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plugin {
    Hostname(Hostname),
    Clock(Clock),
    MailSummary(MailSummary),
    NowPlaying(NowPlaying),
}

impl Plugin {
    /// Render the full frame for `kind`
    pub fn render<D, P>(
        kind: PluginKind,
        display: &mut D,
        providers: &mut P,
        user: &str,
    ) -> Result<Self, D::Error>
    where
        D: CharDisplay,
        P: Providers,
    {
        let plugin = match kind {
            PluginKind::Hostname => Plugin::Hostname(Hostname::render(display, providers)?),
            PluginKind::Clock => Plugin::Clock(Clock::render(display, providers)?),
            PluginKind::MailSummary => {
                Plugin::MailSummary(MailSummary::render(display, providers, user)?)
            }
            PluginKind::NowPlaying => {
                Plugin::NowPlaying(NowPlaying::render(display, providers)?)
            }
        };
        Ok(plugin)
    }

    /// Partial refresh for one tick; static plugins do nothing
    pub fn refresh<D, P>(&mut self, display: &mut D, providers: &mut P) -> Result<(), D::Error>
    where
        D: CharDisplay,
        P: Providers,
    {
        match self {
            Plugin::Clock(clock) => clock.refresh(display, providers),
            Plugin::Hostname(_) | Plugin::MailSummary(_) | Plugin::NowPlaying(_) => Ok(()),
        }
    }

    pub fn kind(&self) -> PluginKind {
        match self {
            Plugin::Hostname(_) => PluginKind::Hostname,
            Plugin::Clock(_) => PluginKind::Clock,
            Plugin::MailSummary(_) => PluginKind::MailSummary,
            Plugin::NowPlaying(_) => PluginKind::NowPlaying,
        }
    }
}

/// A running plugin instance: render state plus remaining tick budget
///
/// Created fresh on every mode entry and dropped when the budget is spent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginState {
    plugin: Plugin,
    remaining_ticks: u16,
}

impl PluginState {
    /// Render the full frame and arm the tick budget
    pub fn initialize<D, P>(
        kind: PluginKind,
        display: &mut D,
        providers: &mut P,
        user: &str,
        duration_ticks: u16,
    ) -> Result<Self, D::Error>
    where
        D: CharDisplay,
        P: Providers,
    {
        let plugin = Plugin::render(kind, display, providers, user)?;
        Ok(Self {
            plugin,
            remaining_ticks: duration_ticks,
        })
    }

    /// Advance one tick
    ///
    /// With a budget of N, steps 1..=N refresh and return `Continue`;
    /// step N+1 returns `Done` without touching the display.
    pub fn step<D, P>(&mut self, display: &mut D, providers: &mut P) -> Result<StepResult, D::Error>
    where
        D: CharDisplay,
        P: Providers,
    {
        if self.remaining_ticks == 0 {
            return Ok(StepResult::Done);
        }
        self.plugin.refresh(display, providers)?;
        self.remaining_ticks -= 1;
        Ok(StepResult::Continue)
    }

    pub fn remaining_ticks(&self) -> u16 {
        self.remaining_ticks
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining_ticks == 0
    }

    pub fn kind(&self) -> PluginKind {
        self.plugin.kind()
    }

    pub fn plugin(&self) -> &Plugin {
        &self.plugin
    }
}

/// Concatenate `parts` into a display buffer, encoded one byte per cell
///
/// Stops once a full screen is held.
pub(crate) fn compose(parts: &[&str]) -> DisplayText {
    let mut out = DisplayText::new();
    for c in parts.iter().flat_map(|part| part.chars()) {
        if out.push(encode_char(c) as char).is_err() {
            break;
        }
    }
    out
}
