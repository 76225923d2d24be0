//! Display geometry
//!
//! The VFD is addressed as a flat stream of character cells; the device
//! wraps to the next row on its own. Capacity checks derive from rows × cols.

/// Largest supported cell count (rows × cols)
pub const MAX_CELLS: usize = 80;

/// Reference panel: 2 rows of 20 characters
pub const REFERENCE_ROWS: u8 = 2;
pub const REFERENCE_COLS: u8 = 20;

/// Geometry validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// Zero rows or zero columns
    Empty,
    /// More cells than [`MAX_CELLS`]
    TooLarge,
}

impl core::fmt::Display for GeometryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GeometryError::Empty => f.write_str("display must have at least one row and column"),
            GeometryError::TooLarge => write!(f, "display exceeds {} cells", MAX_CELLS),
        }
    }
}

impl core::error::Error for GeometryError {}

/// Character-cell geometry of the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    rows: u8,
    cols: u8,
}

impl Default for Geometry {
    fn default() -> Self {
        Self::REFERENCE
    }
}

impl Geometry {
    /// 2×20 panel
    pub const REFERENCE: Geometry = Geometry {
        rows: REFERENCE_ROWS,
        cols: REFERENCE_COLS,
    };

    /// Create a validated geometry
    pub fn new(rows: u8, cols: u8) -> Result<Self, GeometryError> {
        if rows == 0 || cols == 0 {
            return Err(GeometryError::Empty);
        }
        if rows as usize * cols as usize > MAX_CELLS {
            return Err(GeometryError::TooLarge);
        }
        Ok(Self { rows, cols })
    }

    pub const fn rows(&self) -> u8 {
        self.rows
    }

    pub const fn cols(&self) -> u8 {
        self.cols
    }

    /// Total character cells
    pub const fn capacity(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Cells left after reserving `reserved` for a prefix
    pub const fn available(&self, reserved: usize) -> usize {
        self.capacity().saturating_sub(reserved)
    }
}
