//! Cyclic mode rotation

use heapless::Vec;

use crate::config::{ConfigError, MAX_MODES};
use crate::plugin::PluginKind;

/// Ordered, fixed list of modes and the index of the one on screen
///
/// Before the first [`Rotation::advance`] no mode is current; afterwards the
/// index is always in `0..len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotation {
    modes: Vec<PluginKind, MAX_MODES>,
    current: Option<usize>,
    entries: u64,
}

impl Rotation {
    pub fn new(modes: &[PluginKind]) -> Result<Self, ConfigError> {
        if modes.is_empty() {
            return Err(ConfigError::NoModes);
        }
        let modes = Vec::from_slice(modes).map_err(|_| ConfigError::TooManyModes)?;
        Ok(Self {
            modes,
            current: None,
            entries: 0,
        })
    }

    /// Move to the next mode, wrapping at the end, and return it
    pub fn advance(&mut self) -> PluginKind {
        let next = match self.current {
            None => 0,
            Some(index) => (index + 1) % self.modes.len(),
        };
        self.current = Some(next);
        self.entries += 1;
        self.modes[next]
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    /// Always false; a rotation is never built empty
    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }

    /// Mode entries so far, including the first
    pub fn entries(&self) -> u64 {
        self.entries
    }

    /// Full passes through the list since the first mode entry
    pub fn completed_cycles(&self) -> u64 {
        self.entries.saturating_sub(1) / self.modes.len() as u64
    }
}
