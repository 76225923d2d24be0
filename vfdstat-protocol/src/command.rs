//! Single-byte VFD control commands

// Opcodes
pub const OP_LINE_FEED: u8 = 0x0A;
pub const OP_FORM_FEED: u8 = 0x0C;
pub const OP_CARRIAGE_RETURN: u8 = 0x0D;
pub const OP_CLEAR: u8 = 0x0E;
pub const OP_CURSOR_OFF: u8 = 0x16;
pub const OP_SET_FONT: u8 = 0x19;

/// Control command understood by the display
///
/// Each command carries the minimum time the device needs after receiving
/// it before the next command byte may be sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Clear the whole display
    Clear,
    /// Form feed: move the cursor to the top-left cell
    CursorHome,
    /// Move the cursor to the start of the current line
    CarriageReturn,
    /// Move the cursor down one line
    LineFeed,
    /// Hide the cursor
    CursorOff,
    /// Select the font (device-specific)
    SetFont,
}

impl Command {
    /// Every command, in opcode table order
    pub const ALL: [Command; 6] = [
        Command::Clear,
        Command::CursorHome,
        Command::CarriageReturn,
        Command::LineFeed,
        Command::CursorOff,
        Command::SetFont,
    ];

    /// Opcode byte sent on the wire
    pub const fn opcode(self) -> u8 {
        match self {
            Command::Clear => OP_CLEAR,
            Command::CursorHome => OP_FORM_FEED,
            Command::CarriageReturn => OP_CARRIAGE_RETURN,
            Command::LineFeed => OP_LINE_FEED,
            Command::CursorOff => OP_CURSOR_OFF,
            Command::SetFont => OP_SET_FONT,
        }
    }

    /// Minimum settle delay in microseconds
    pub const fn settle_us(self) -> u32 {
        match self {
            Command::Clear | Command::LineFeed => 900,
            Command::CursorHome
            | Command::CarriageReturn
            | Command::CursorOff
            | Command::SetFont => 200,
        }
    }

    /// Look up a command by opcode
    pub fn from_opcode(opcode: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.opcode() == opcode)
    }

    /// Short mnemonic for logs
    pub const fn name(self) -> &'static str {
        match self {
            Command::Clear => "CLR",
            Command::CursorHome => "FF",
            Command::CarriageReturn => "CR",
            Command::LineFeed => "LF",
            Command::CursorOff => "DC6",
            Command::SetFont => "EM",
        }
    }
}

impl core::fmt::Display for Command {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} (0x{:02X})", self.name(), self.opcode())
    }
}
