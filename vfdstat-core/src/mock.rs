//! Recording display and scripted providers for unit tests

use vfdstat_protocol::{Command, Geometry};

use crate::traits::{
    provider_text, CharDisplay, PlayerState, ProviderError, ProviderText, Providers,
    TrackMetadata,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Text(String),
    Command(Command),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

/// Display that records everything written to it
#[derive(Debug)]
pub struct MockDisplay {
    pub output: Vec<Output>,
    geometry: Geometry,
    writes: usize,
    fail_after: Option<usize>,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self {
            output: Vec::new(),
            geometry: Geometry::REFERENCE,
            writes: 0,
            fail_after: None,
        }
    }

    pub fn with_geometry(geometry: Geometry) -> Self {
        Self {
            geometry,
            ..Self::new()
        }
    }

    /// Fail every write after the first `n` succeed
    pub fn failing_after(n: usize) -> Self {
        Self {
            fail_after: Some(n),
            ..Self::new()
        }
    }

    pub fn commands(&self) -> Vec<Command> {
        self.output
            .iter()
            .filter_map(|o| match o {
                Output::Command(c) => Some(*c),
                Output::Text(_) => None,
            })
            .collect()
    }

    /// All text written, concatenated
    pub fn text(&self) -> String {
        self.output
            .iter()
            .filter_map(|o| match o {
                Output::Text(t) => Some(t.as_str()),
                Output::Command(_) => None,
            })
            .collect()
    }

    /// Screen contents since the last clear, one entry per line
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![String::new()];
        for o in &self.output {
            match o {
                Output::Text(t) => lines.last_mut().unwrap().push_str(t),
                Output::Command(Command::Clear) => lines = vec![String::new()],
                Output::Command(Command::LineFeed) => lines.push(String::new()),
                Output::Command(Command::CarriageReturn) => lines.last_mut().unwrap().clear(),
                Output::Command(_) => {}
            }
        }
        lines
    }

    fn record(&mut self, output: Output) -> Result<(), MockError> {
        if let Some(limit) = self.fail_after {
            if self.writes >= limit {
                return Err(MockError);
            }
        }
        self.writes += 1;
        self.output.push(output);
        Ok(())
    }
}

impl CharDisplay for MockDisplay {
    type Error = MockError;

    fn geometry(&self) -> Geometry {
        self.geometry
    }

    fn write_text(&mut self, text: &str) -> Result<(), MockError> {
        self.record(Output::Text(text.to_string()))
    }

    fn write_command(&mut self, command: Command) -> Result<(), MockError> {
        self.record(Output::Command(command))
    }
}

/// Providers with scripted answers
#[derive(Debug, Clone)]
pub struct MockProviders {
    pub host: Result<String, ProviderError>,
    pub mail: Result<u32, ProviderError>,
    pub player: Result<PlayerState, ProviderError>,
    pub track: Result<(String, String), ProviderError>,
    pub date: Result<String, ProviderError>,
    pub time: Result<String, ProviderError>,
    pub mail_queries: Vec<String>,
    pub metadata_queries: usize,
}

impl Default for MockProviders {
    fn default() -> Self {
        Self {
            host: Ok("vfdbox".to_string()),
            mail: Ok(0),
            player: Ok(PlayerState::Stopped),
            track: Ok((String::new(), String::new())),
            date: Ok("Monday Oct 19, 2026".to_string()),
            time: Ok("12:00:00".to_string()),
            mail_queries: Vec::new(),
            metadata_queries: 0,
        }
    }
}

impl MockProviders {
    pub fn with_host(mut self, host: &str) -> Self {
        self.host = Ok(host.to_string());
        self
    }

    pub fn with_mail(mut self, count: u32) -> Self {
        self.mail = Ok(count);
        self
    }

    pub fn with_player(mut self, state: PlayerState) -> Self {
        self.player = Ok(state);
        self
    }

    pub fn with_track(mut self, artist: &str, title: &str) -> Self {
        self.track = Ok((artist.to_string(), title.to_string()));
        self
    }

    pub fn with_date(mut self, date: &str) -> Self {
        self.date = Ok(date.to_string());
        self
    }

    pub fn with_time(mut self, time: &str) -> Self {
        self.time = Ok(time.to_string());
        self
    }
}

impl Providers for MockProviders {
    fn host_name(&mut self) -> Result<ProviderText, ProviderError> {
        self.host.as_deref().map(provider_text).map_err(|e| *e)
    }

    fn mailbox_count(&mut self, user: &str) -> Result<u32, ProviderError> {
        self.mail_queries.push(user.to_string());
        self.mail
    }

    fn player_state(&mut self) -> Result<PlayerState, ProviderError> {
        self.player
    }

    fn track_metadata(&mut self) -> Result<TrackMetadata, ProviderError> {
        self.metadata_queries += 1;
        match &self.track {
            Ok((artist, title)) => Ok(TrackMetadata::new(artist, title)),
            Err(e) => Err(*e),
        }
    }

    fn current_date(&mut self) -> Result<ProviderText, ProviderError> {
        self.date.as_deref().map(provider_text).map_err(|e| *e)
    }

    fn current_time(&mut self) -> Result<ProviderText, ProviderError> {
        self.time.as_deref().map(provider_text).map_err(|e| *e)
    }
}
