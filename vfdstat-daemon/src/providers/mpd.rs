//! Music player state through the `mpc` client
//!
//! Each query runs the client as a child process. The child is polled
//! against a deadline and killed when it overruns, so a hung player daemon
//! costs one timeout instead of stalling the rotation.

use std::io::Read;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, warn};

use vfdstat_core::traits::{PlayerState, ProviderError, TrackMetadata};

use crate::config::PlayerSettings;

/// Interval between checks on a running query
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Track line format: artist and title separated by a tab
const TRACK_FORMAT: &str = "%artist%\t%title%";

/// `mpc` wrapper
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mpc {
    /// Program followed by fixed leading arguments (e.g. `mpc -h host`)
    command: Vec<String>,
    timeout: Duration,
}

impl Mpc {
    pub fn new(settings: &PlayerSettings) -> Self {
        Self {
            command: settings
                .command
                .split_whitespace()
                .map(str::to_string)
                .collect(),
            timeout: settings.timeout,
        }
    }

    pub fn state(&self) -> Result<PlayerState, ProviderError> {
        self.query(&["status"]).map(|out| parse_state(&out))
    }

    pub fn track(&self) -> Result<TrackMetadata, ProviderError> {
        self.query(&["current", "-f", TRACK_FORMAT])
            .map(|out| parse_track(&out))
    }

    /// Run the client with `args` and return its standard output
    fn query(&self, args: &[&str]) -> Result<String, ProviderError> {
        let (program, leading) = self
            .command
            .split_first()
            .ok_or(ProviderError::Unavailable)?;

        // Output is a few lines; it never fills the pipe before exit
        let mut child = Command::new(program)
            .args(leading)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                warn!("cannot run {}: {}", program, e);
                ProviderError::Unavailable
            })?;

        let status = self.wait(&mut child)?;
        if !status.success() {
            warn!("{} {} exited with {}", program, args.join(" "), status);
            return Err(ProviderError::Unavailable);
        }

        let mut output = String::new();
        if let Some(mut stdout) = child.stdout.take() {
            stdout.read_to_string(&mut output).map_err(|e| {
                warn!("unreadable output from {}: {}", program, e);
                ProviderError::InvalidData
            })?;
        }
        debug!("{} {} -> {:?}", program, args.join(" "), output);
        Ok(output)
    }

    fn wait(&self, child: &mut Child) -> Result<ExitStatus, ProviderError> {
        let deadline = Instant::now() + self.timeout;
        loop {
            match child.try_wait() {
                Ok(Some(status)) => return Ok(status),
                Ok(None) if Instant::now() >= deadline => {
                    warn!("player query timed out after {:?}, killing it", self.timeout);
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(ProviderError::Unavailable);
                }
                Ok(None) => thread::sleep(POLL_INTERVAL),
                Err(e) => {
                    warn!("lost track of player query: {}", e);
                    let _ = child.kill();
                    return Err(ProviderError::Unavailable);
                }
            }
        }
    }
}

/// Player state from `mpc status`; no `[playing]`/`[paused]` line means stopped
pub fn parse_state(output: &str) -> PlayerState {
    for line in output.lines() {
        if line.starts_with("[playing]") {
            return PlayerState::Playing;
        }
        if line.starts_with("[paused]") {
            return PlayerState::Paused;
        }
    }
    PlayerState::Stopped
}

/// Artist and title from `mpc current -f "%artist%\t%title%"`
pub fn parse_track(output: &str) -> TrackMetadata {
    let line = output.lines().next().unwrap_or("");
    match line.split_once('\t') {
        Some((artist, title)) => TrackMetadata::new(artist, title),
        None => TrackMetadata::new("", line),
    }
}
