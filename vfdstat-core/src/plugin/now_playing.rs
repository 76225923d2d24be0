//! Now playing mode
//!
//! A status symbol followed by `artist - title`, cut to whatever the panel
//! has left after the symbol.

use log::{debug, warn};
use vfdstat_protocol::DisplayText;

use super::compose;
use crate::traits::{CharDisplay, CharDisplayExt, PlayerState, Providers, TrackMetadata};

/// Text shown when nothing is playing
pub const IDLE_MESSAGE: &str = "Nothing playing";

/// Separator between artist and title
pub const ARTIST_TITLE_SEPARATOR: &str = " - ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlaying {
    state: PlayerState,
    text: DisplayText,
}

impl NowPlaying {
    pub fn render<D, P>(display: &mut D, providers: &mut P) -> Result<Self, D::Error>
    where
        D: CharDisplay,
        P: Providers,
    {
        let (state, text) = Self::query(providers);

        display.write_text(state.symbol())?;
        display.write_fitted(&text, state.symbol_width())?;
        Ok(Self { state, text })
    }

    /// Resolve the state and line of text; any provider failure means idle
    fn query<P: Providers>(providers: &mut P) -> (PlayerState, DisplayText) {
        let state = match providers.player_state() {
            Ok(state) => state,
            Err(e) => {
                warn!("player state provider failed: {}", e);
                PlayerState::Stopped
            }
        };

        if state == PlayerState::Stopped {
            return (PlayerState::Stopped, compose(&[IDLE_MESSAGE]));
        }

        match providers.track_metadata() {
            Ok(meta) if !meta.is_empty() => (state, track_line(&meta)),
            Ok(_) => {
                debug!("player reports no track metadata");
                (PlayerState::Stopped, compose(&[IDLE_MESSAGE]))
            }
            Err(e) => {
                warn!("track metadata provider failed: {}", e);
                (PlayerState::Stopped, compose(&[IDLE_MESSAGE]))
            }
        }
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    /// Track text before truncation to the panel
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// `artist - title`, or just the title when the artist is blank
fn track_line(meta: &TrackMetadata) -> DisplayText {
    let artist = meta.artist.trim();
    let title = meta.title.trim();
    if artist.is_empty() {
        compose(&[title])
    } else if title.is_empty() {
        compose(&[artist])
    } else {
        compose(&[artist, ARTIST_TITLE_SEPARATOR, title])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockDisplay, MockProviders, Output};
    use crate::traits::ProviderError;

    #[test]
    fn test_stopped_shows_idle_message() {
        let mut display = MockDisplay::new();
        let mut providers = MockProviders::default().with_player(PlayerState::Stopped);

        let plugin = NowPlaying::render(&mut display, &mut providers).unwrap();

        assert_eq!(plugin.state(), PlayerState::Stopped);
        assert_eq!(display.text(), "# Nothing playing");
        assert_eq!(providers.metadata_queries, 0);
    }

    #[test]
    fn test_playing_artist_and_title() {
        let mut display = MockDisplay::new();
        let mut providers = MockProviders::default()
            .with_player(PlayerState::Playing)
            .with_track("A", "T");

        let plugin = NowPlaying::render(&mut display, &mut providers).unwrap();

        assert_eq!(plugin.text(), "A - T");
        assert_eq!(
            display.output,
            vec![Output::Text("> ".into()), Output::Text("A - T".into())]
        );
    }

    #[test]
    fn test_title_only_when_artist_empty() {
        let mut display = MockDisplay::new();
        let mut providers = MockProviders::default()
            .with_player(PlayerState::Paused)
            .with_track("", "Untitled");

        NowPlaying::render(&mut display, &mut providers).unwrap();
        assert_eq!(display.text(), "= Untitled");
    }

    #[test]
    fn test_long_track_truncated_after_symbol() {
        let mut display = MockDisplay::new();
        let title = "t".repeat(60);
        let mut providers = MockProviders::default()
            .with_player(PlayerState::Playing)
            .with_track("Artist", &title);

        NowPlaying::render(&mut display, &mut providers).unwrap();

        let shown = display.text();
        assert_eq!(shown.len(), 40);
        assert!(shown.starts_with("> Artist - ttt"));
    }

    #[test]
    fn test_player_failure_is_idle() {
        let mut display = MockDisplay::new();
        let mut providers = MockProviders {
            player: Err(ProviderError::Unavailable),
            ..MockProviders::default()
        };

        let plugin = NowPlaying::render(&mut display, &mut providers).unwrap();
        assert_eq!(plugin.state(), PlayerState::Stopped);
        assert_eq!(display.text(), "# Nothing playing");
    }

    #[test]
    fn test_metadata_failure_is_idle() {
        let mut display = MockDisplay::new();
        let mut providers = MockProviders {
            track: Err(ProviderError::InvalidData),
            ..MockProviders::default().with_player(PlayerState::Playing)
        };

        NowPlaying::render(&mut display, &mut providers).unwrap();
        assert_eq!(display.text(), "# Nothing playing");
    }

    #[test]
    fn test_blank_metadata_is_idle() {
        let mut display = MockDisplay::new();
        let mut providers = MockProviders::default()
            .with_player(PlayerState::Playing)
            .with_track(" ", "");

        NowPlaying::render(&mut display, &mut providers).unwrap();
        assert_eq!(display.text(), "# Nothing playing");
    }
}
