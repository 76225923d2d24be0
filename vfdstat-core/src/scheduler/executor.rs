//! Mode rotation scheduler
//!
//! Owns the display and the providers, keeps exactly one plugin alive at a
//! time and swaps it for the next mode when its tick budget runs out.
//!
//! ```text
//! Startup ──cursor off──► enter mode 0 ──► Active ◄──┐
//!                                          │ tick    │
//!                                          ▼         │
//!                                     step plugin    │
//!                             Continue │    │ Done   │
//!                               (sleep)│    └─► clear, home,
//!                                      │        next mode ──┘
//! ```

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use log::{debug, info};

use super::rotation::Rotation;
use super::ticker::{DelayTicker, Ticker};
use crate::config::{ConfigError, RotationConfig};
use crate::plugin::{PluginKind, PluginState, StepResult};
use crate::traits::{CharDisplay, CharDisplayExt, Providers};

/// Reference tick length
pub const DEFAULT_TICK_MS: u32 = 1000;

/// Scheduler lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Cursor not yet hidden, no mode entered
    Startup,
    /// A mode is on screen
    Active,
}

/// Cooperative, single-threaded mode scheduler
#[derive(Debug)]
pub struct Scheduler<D, P> {
    display: D,
    providers: P,
    config: RotationConfig,
    rotation: Rotation,
    active: Option<PluginState>,
    phase: Phase,
    ticks_elapsed: u64,
}

impl<D, P> Scheduler<D, P>
where
    D: CharDisplay,
    P: Providers,
{
    /// Create a scheduler; nothing is written until [`Scheduler::start`]
    pub fn new(display: D, providers: P, config: RotationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rotation = Rotation::new(&config.modes)?;
        Ok(Self {
            display,
            providers,
            config,
            rotation,
            active: None,
            phase: Phase::Startup,
            ticks_elapsed: 0,
        })
    }

    /// Hide the cursor and enter the first mode
    ///
    /// Idempotent: the cursor-off command is sent once per scheduler.
    pub fn start(&mut self) -> Result<(), D::Error> {
        if self.phase != Phase::Startup {
            return Ok(());
        }
        info!(
            "Starting rotation: {} modes, {} ticks each",
            self.rotation.len(),
            self.config.mode_duration_ticks
        );
        self.display.cursor_off()?;
        self.phase = Phase::Active;
        self.enter_next_mode()
    }

    /// Clear the panel, advance the rotation and render the new mode
    fn enter_next_mode(&mut self) -> Result<(), D::Error> {
        // The outgoing plugin never outlives its mode
        self.active = None;

        self.display.clear_home()?;
        let kind = self.rotation.advance();
        debug!(
            "Entering mode {} ({}), cycle {}",
            self.rotation.current_index().unwrap_or(0),
            kind,
            self.rotation.completed_cycles()
        );

        let state = PluginState::initialize(
            kind,
            &mut self.display,
            &mut self.providers,
            &self.config.user,
            self.config.mode_duration_ticks,
        )?;
        self.active = Some(state);
        Ok(())
    }

    /// Run one tick
    ///
    /// Steps the active plugin once. When its budget is spent the next mode
    /// is entered and stepped within the same tick, so every tick ends with
    /// exactly one `Continue`.
    pub fn tick(&mut self) -> Result<(), D::Error> {
        self.start()?;

        loop {
            let Some(active) = self.active.as_mut() else {
                self.enter_next_mode()?;
                continue;
            };

            match active.step(&mut self.display, &mut self.providers)? {
                StepResult::Continue => {
                    self.ticks_elapsed += 1;
                    return Ok(());
                }
                StepResult::Done => self.enter_next_mode()?,
            }
        }
    }

    /// Tick forever, sleeping `tick_ms` between ticks
    ///
    /// Only returns when the display fails.
    pub fn run<T: DelayNs>(&mut self, delay: &mut T, tick_ms: u32) -> Result<Infallible, D::Error> {
        self.run_with(&mut DelayTicker::new(delay, tick_ms))
    }

    /// Tick forever, paced by `ticker`
    ///
    /// Only returns when the display fails.
    pub fn run_with<K: Ticker>(&mut self, ticker: &mut K) -> Result<Infallible, D::Error> {
        self.start()?;
        loop {
            self.tick()?;
            ticker.wait_next();
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Index of the mode on screen
    pub fn current_mode(&self) -> Option<usize> {
        self.rotation.current_index()
    }

    pub fn current_kind(&self) -> Option<PluginKind> {
        self.active.as_ref().map(PluginState::kind)
    }

    /// Ticks left for the mode on screen
    pub fn remaining_ticks(&self) -> Option<u16> {
        self.active.as_ref().map(PluginState::remaining_ticks)
    }

    /// Ticks completed since start
    pub fn ticks_elapsed(&self) -> u64 {
        self.ticks_elapsed
    }

    /// Mode entries since start, including the first
    pub fn mode_entries(&self) -> u64 {
        self.rotation.entries()
    }

    pub fn completed_cycles(&self) -> u64 {
        self.rotation.completed_cycles()
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn providers_mut(&mut self) -> &mut P {
        &mut self.providers
    }

    /// Tear down and hand back the display and providers
    pub fn into_parts(self) -> (D, P) {
        (self.display, self.providers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockDisplay, MockProviders};
    use crate::plugin::PluginKind::*;
    use proptest::prelude::*;
    use vfdstat_protocol::Command;

    fn scheduler(
        modes: &[PluginKind],
        duration: u16,
    ) -> Scheduler<MockDisplay, MockProviders> {
        let config = RotationConfig::new(modes, duration, "alice").unwrap();
        Scheduler::new(MockDisplay::new(), MockProviders::default(), config).unwrap()
    }

    /// Records requested sleeps (in ms) instead of sleeping
    struct RecordingDelay(std::vec::Vec<u32>);

    impl DelayNs for RecordingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.0.push(ns / 1_000_000);
        }

        fn delay_ms(&mut self, ms: u32) {
            self.0.push(ms);
        }
    }

    #[test]
    fn test_new_does_not_touch_display() {
        let s = scheduler(&[Hostname], 5);
        assert_eq!(s.phase(), Phase::Startup);
        assert!(s.display().output.is_empty());
        assert_eq!(s.current_mode(), None);
    }

    #[test]
    fn test_start_sequence() {
        let mut s = scheduler(&[Hostname, Clock], 5);
        s.start().unwrap();

        assert_eq!(s.phase(), Phase::Active);
        assert_eq!(s.current_mode(), Some(0));
        assert_eq!(s.current_kind(), Some(Hostname));
        assert_eq!(
            &s.display().commands()[..3],
            &[Command::CursorOff, Command::Clear, Command::CursorHome]
        );
    }

    #[test]
    fn test_cursor_off_sent_once() {
        let mut s = scheduler(&[Hostname, Clock, MailSummary], 2);
        s.start().unwrap();
        s.start().unwrap();
        for _ in 0..20 {
            s.tick().unwrap();
        }

        let commands = s.display().commands();
        assert_eq!(
            commands.iter().filter(|c| **c == Command::CursorOff).count(),
            1
        );
        assert_eq!(commands[0], Command::CursorOff);
    }

    #[test]
    fn test_every_mode_entry_is_framed_by_clear_home() {
        let mut s = scheduler(&[Hostname, Clock, MailSummary, NowPlaying], 1);
        for _ in 0..12 {
            s.tick().unwrap();
        }

        let commands = s.display().commands();
        let clears: std::vec::Vec<usize> = commands
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Command::Clear)
            .map(|(i, _)| i)
            .collect();

        assert_eq!(clears.len() as u64, s.mode_entries());
        for i in clears {
            assert_eq!(commands[i + 1], Command::CursorHome);
        }
    }

    #[test]
    fn test_tick_implicitly_starts() {
        let mut s = scheduler(&[Clock], 3);
        s.tick().unwrap();
        assert_eq!(s.phase(), Phase::Active);
        assert_eq!(s.ticks_elapsed(), 1);
        assert_eq!(s.remaining_ticks(), Some(2));
    }

    #[test]
    fn test_seventeen_ticks_scenario() {
        let mut s = scheduler(&[Hostname, Clock, MailSummary], 5);
        s.start().unwrap();
        for _ in 0..17 {
            s.tick().unwrap();
        }

        assert_eq!(s.ticks_elapsed(), 17);
        assert_eq!(s.current_mode(), Some(0));
        assert_eq!(s.current_kind(), Some(Hostname));
        // two ticks into the second Hostname cycle
        assert_eq!(s.remaining_ticks(), Some(3));
        assert_eq!(s.mode_entries(), 4);
        assert_eq!(s.completed_cycles(), 1);
    }

    #[test]
    fn test_each_mode_gets_its_budget() {
        let mut s = scheduler(&[Hostname, Clock], 3);
        let mut shown = std::vec::Vec::new();
        for _ in 0..12 {
            s.tick().unwrap();
            shown.push(s.current_kind().unwrap());
        }

        assert_eq!(
            shown,
            vec![
                Hostname, Hostname, Hostname, Clock, Clock, Clock, Hostname, Hostname,
                Hostname, Clock, Clock, Clock
            ]
        );
    }

    #[test]
    fn test_clock_refreshes_every_tick() {
        let mut s = scheduler(&[Clock], 4);
        for _ in 0..4 {
            s.tick().unwrap();
        }
        let crs = s
            .display()
            .commands()
            .into_iter()
            .filter(|c| *c == Command::CarriageReturn)
            .count();
        assert_eq!(crs, 4);
    }

    #[test]
    fn test_plugins_are_fresh_each_entry() {
        let mut s = scheduler(&[MailSummary], 1);
        s.tick().unwrap();
        s.providers_mut().mail = Ok(7);
        s.tick().unwrap();

        let (display, providers) = s.into_parts();
        assert_eq!(providers.mail_queries.len(), 2);
        assert_eq!(
            display.lines(),
            vec!["Mail: alice".to_string(), "7 messages".to_string()]
        );
    }

    #[test]
    fn test_provider_failure_does_not_stall_rotation() {
        let config = RotationConfig::new(&[Hostname, MailSummary, NowPlaying], 1, "alice").unwrap();
        let providers = MockProviders {
            host: Err(crate::traits::ProviderError::Unavailable),
            mail: Err(crate::traits::ProviderError::MailboxOpen),
            player: Err(crate::traits::ProviderError::Unavailable),
            ..MockProviders::default()
        };
        let mut s = Scheduler::new(MockDisplay::new(), providers, config).unwrap();

        let mut seen = std::vec::Vec::new();
        for _ in 0..6 {
            s.tick().unwrap();
            seen.push(s.current_kind().unwrap());
        }
        assert_eq!(
            seen,
            vec![Hostname, MailSummary, NowPlaying, Hostname, MailSummary, NowPlaying]
        );
    }

    #[test]
    fn test_display_failure_stops_scheduler() {
        let config = RotationConfig::default();
        let mut s = Scheduler::new(MockDisplay::failing_after(4), MockProviders::default(), config)
            .unwrap();

        let mut failed = false;
        for _ in 0..10 {
            if s.tick().is_err() {
                failed = true;
                break;
            }
        }
        assert!(failed);
    }

    #[test]
    fn test_run_sleeps_between_ticks_and_returns_error() {
        let config = RotationConfig::new(&[Hostname], 2, "alice").unwrap();
        // cursor off, clear, home, text, lf = 5 writes, then the next entry fails
        let mut s =
            Scheduler::new(MockDisplay::failing_after(5), MockProviders::default(), config)
                .unwrap();
        let mut delay = RecordingDelay(std::vec::Vec::new());

        assert!(s.run(&mut delay, DEFAULT_TICK_MS).is_err());
        assert_eq!(delay.0, vec![1000, 1000]);
        assert_eq!(s.ticks_elapsed(), 2);
    }

    struct CountingTicker(u32);

    impl Ticker for CountingTicker {
        fn wait_next(&mut self) {
            self.0 += 1;
        }
    }

    #[test]
    fn test_run_with_waits_once_per_completed_tick() {
        let config = RotationConfig::new(&[Hostname], 2, "alice").unwrap();
        let mut s =
            Scheduler::new(MockDisplay::failing_after(5), MockProviders::default(), config)
                .unwrap();
        let mut ticker = CountingTicker(0);

        assert!(s.run_with(&mut ticker).is_err());
        assert_eq!(ticker.0, 2);
        assert_eq!(s.ticks_elapsed(), 2);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = RotationConfig {
            mode_duration_ticks: 0,
            ..RotationConfig::default()
        };
        assert!(matches!(
            Scheduler::new(MockDisplay::new(), MockProviders::default(), config),
            Err(ConfigError::ZeroDuration)
        ));
    }

    proptest! {
        #[test]
        fn prop_mode_follows_entries(
            count in 1usize..=4,
            duration in 1u16..6,
            ticks in 1u64..80,
        ) {
            let modes: std::vec::Vec<PluginKind> = PluginKind::ALL[..count].to_vec();
            let mut s = scheduler(&modes, duration);
            for _ in 0..ticks {
                s.tick().unwrap();
            }

            let per_mode = duration as u64;
            let entries = (ticks - 1) / per_mode + 1;
            prop_assert_eq!(s.mode_entries(), entries);
            prop_assert_eq!(s.current_mode(), Some(((entries - 1) % count as u64) as usize));
            prop_assert_eq!(
                s.remaining_ticks(),
                Some(duration - (((ticks - 1) % per_mode) as u16 + 1))
            );
        }
    }
}
