//! Mail summary mode
//!
//! ```text
//! Mail: alice
//! 3 messages
//! ```

use core::fmt::Write;

use log::warn;

use super::compose;
use crate::traits::{CharDisplay, CharDisplayExt, Providers};

/// Second line when the mailbox cannot be read
pub const MAILBOX_UNAVAILABLE: &str = "mailbox unavailable";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailSummary {
    count: Option<u32>,
}

impl MailSummary {
    pub fn render<D, P>(display: &mut D, providers: &mut P, user: &str) -> Result<Self, D::Error>
    where
        D: CharDisplay,
        P: Providers,
    {
        let header = compose(&["Mail: ", user]);
        display.write_fitted(&header, 0)?;
        display.line_feed()?;
        display.carriage_return()?;

        let count = match providers.mailbox_count(user) {
            Ok(count) => Some(count),
            Err(e) => {
                warn!("mailbox provider failed for {}: {}", user, e);
                None
            }
        };

        match count {
            Some(count) => {
                let mut line = vfdstat_protocol::DisplayText::new();
                // u32 plus suffix always fits
                let _ = write!(line, "{} messages", count);
                display.write_below_header(&line)?;
            }
            None => display.write_below_header(MAILBOX_UNAVAILABLE)?,
        }

        Ok(Self { count })
    }

    /// Message count, `None` if the mailbox could not be read
    pub fn count(&self) -> Option<u32> {
        self.count
    }
}
