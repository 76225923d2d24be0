//! Text encoding and truncation
//!
//! One character occupies one cell and is sent as one byte. Anything the
//! panel cannot show (non-ASCII, control characters) becomes [`REPLACEMENT`]
//! so a stray control byte can never be mistaken for a command.

use crate::geometry::{Geometry, MAX_CELLS};

/// Byte sent in place of an unrepresentable character
pub const REPLACEMENT: u8 = b'?';

/// A full screen of encoded text; ASCII only, so bytes and cells agree
pub type DisplayText = heapless::String<MAX_CELLS>;

/// Map a character to the byte written to the display
pub fn encode_char(c: char) -> u8 {
    if c.is_ascii() && !c.is_ascii_control() {
        c as u8
    } else {
        REPLACEMENT
    }
}

/// Cut `text` to at most `max_cells` characters
///
/// Never wraps and never drops anything beyond the cut.
pub fn truncate(text: &str, max_cells: usize) -> &str {
    match text.char_indices().nth(max_cells) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Cut `text` to what fits on `geometry` after `reserved` cells
pub fn fit(text: &str, geometry: Geometry, reserved: usize) -> &str {
    truncate(text, geometry.available(reserved))
}
