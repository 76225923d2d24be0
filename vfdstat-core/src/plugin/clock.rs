//! Clock mode
//!
//! The date is written once as a header; the time underneath is rewritten
//! in place on every tick with a carriage return.

use log::warn;
use vfdstat_protocol::DisplayText;

use super::compose;
use crate::traits::{CharDisplay, CharDisplayExt, Providers};

/// Header shown when the date cannot be read
pub const DATE_UNAVAILABLE: &str = "clock unavailable";

/// Time field shown when the time cannot be read
pub const TIME_UNAVAILABLE: &str = "--:--:--";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clock {
    date: DisplayText,
    time: Option<DisplayText>,
}

impl Clock {
    pub fn render<D, P>(display: &mut D, providers: &mut P) -> Result<Self, D::Error>
    where
        D: CharDisplay,
        P: Providers,
    {
        let date = match providers.current_date() {
            Ok(date) => compose(&[date.as_str()]),
            Err(e) => {
                warn!("date provider failed: {}", e);
                compose(&[DATE_UNAVAILABLE])
            }
        };

        display.write_fitted(&date, 0)?;
        display.line_feed()?;
        Ok(Self { date, time: None })
    }

    /// Rewrite the time field
    pub fn refresh<D, P>(&mut self, display: &mut D, providers: &mut P) -> Result<(), D::Error>
    where
        D: CharDisplay,
        P: Providers,
    {
        let time = match providers.current_time() {
            Ok(time) => compose(&[time.as_str()]),
            Err(e) => {
                warn!("time provider failed: {}", e);
                compose(&[TIME_UNAVAILABLE])
            }
        };

        display.carriage_return()?;
        display.write_below_header(&time)?;
        self.time = Some(time);
        Ok(())
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    /// Last time written, if any tick has run yet
    pub fn time(&self) -> Option<&str> {
        self.time.as_deref()
    }
}
