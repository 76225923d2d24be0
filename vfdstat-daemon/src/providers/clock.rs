//! Local date and time

use jiff::Zoned;

use vfdstat_core::traits::{provider_text, ProviderText};

/// e.g. `Monday Oct 19, 2026`
pub const DATE_FORMAT: &str = "%A %b %d, %Y";

/// e.g. `09:05:03`
pub const TIME_FORMAT: &str = "%H:%M:%S";

pub fn format_date(now: &Zoned) -> ProviderText {
    provider_text(&now.strftime(DATE_FORMAT).to_string())
}

pub fn format_time(now: &Zoned) -> ProviderText {
    provider_text(&now.strftime(TIME_FORMAT).to_string())
}
