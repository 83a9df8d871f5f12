use std::fmt;

use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    X,
    O,
}

impl Marker {
    /// Get the other marker
    pub fn other(self) -> Marker {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }

    /// Convert marker to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Marker::X => Cell::X,
            Marker::O => Cell::O,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Marker::X => 'X',
            Marker::O => 'O',
        }
    }

    /// Slot of this marker in per-player arrays (X first)
    pub(crate) fn index(self) -> usize {
        match self {
            Marker::X => 0,
            Marker::O => 1,
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A named participant bound to one marker for the whole match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    marker: Marker,
}

impl Player {
    pub fn new(name: impl Into<String>, marker: Marker) -> Self {
        Player {
            name: name.into(),
            marker,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn marker(&self) -> Marker {
        self.marker
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }
}
