//! Character display trait for the serial VFD

use vfdstat_protocol::{fit, Command, Geometry};

/// Trait for a character-cell display
///
/// The display is a dumb terminal: a stream of text bytes placed at the
/// cursor, interleaved with single-byte control commands.
pub trait CharDisplay {
    /// Error raised by the underlying link
    type Error;

    /// Fixed geometry of the panel
    fn geometry(&self) -> Geometry;

    /// Write text at the cursor, one byte per character
    fn write_text(&mut self, text: &str) -> Result<(), Self::Error>;

    /// Write a control command
    ///
    /// Must not return before the command's settle delay has elapsed.
    fn write_command(&mut self, command: Command) -> Result<(), Self::Error>;
}

/// Convenience wrappers over [`CharDisplay::write_command`]
pub trait CharDisplayExt: CharDisplay {
    fn clear(&mut self) -> Result<(), Self::Error> {
        self.write_command(Command::Clear)
    }

    fn cursor_home(&mut self) -> Result<(), Self::Error> {
        self.write_command(Command::CursorHome)
    }

    fn carriage_return(&mut self) -> Result<(), Self::Error> {
        self.write_command(Command::CarriageReturn)
    }

    fn line_feed(&mut self) -> Result<(), Self::Error> {
        self.write_command(Command::LineFeed)
    }

    fn cursor_off(&mut self) -> Result<(), Self::Error> {
        self.write_command(Command::CursorOff)
    }

    fn set_font(&mut self) -> Result<(), Self::Error> {
        self.write_command(Command::SetFont)
    }

    /// Clear the panel and park the cursor top-left
    fn clear_home(&mut self) -> Result<(), Self::Error> {
        self.clear()?;
        self.cursor_home()
    }

    /// Write text truncated to the capacity left after `reserved` cells
    fn write_fitted(&mut self, text: &str, reserved: usize) -> Result<(), Self::Error> {
        let geometry = self.geometry();
        self.write_text(fit(text, geometry, reserved))
    }

    /// Write text under a one-row header, fitted to the cells past that row
    ///
    /// On a single-row panel the header row is reused, so nothing is reserved.
    fn write_below_header(&mut self, text: &str) -> Result<(), Self::Error> {
        let geometry = self.geometry();
        let reserved = if geometry.rows() > 1 {
            geometry.cols() as usize
        } else {
            0
        };
        self.write_fitted(text, reserved)
    }
}

// Blanket implementation for all CharDisplay types
impl<T: CharDisplay + ?Sized> CharDisplayExt for T {}
