use core::fmt;
use serde::{Deserialize, Serialize};

/// Canonical state of a single grid cell, as stored by the engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Unexplored,
    /// Hidden mine, not swept yet
    Mine,
    /// Swept safe cell with the number of adjacent mines
    Revealed(u8),
    /// Mine that was swept
    Exploded,
}

impl Cell {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine | Self::Exploded)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Unexplored
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unexplored => f.write_str("."),
            Self::Mine => f.write_str("M"),
            Self::Revealed(count) => write!(f, "{count}"),
            Self::Exploded => f.write_str("X"),
        }
    }
}

/// What the player is allowed to see of a cell while the game is running.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewCell {
    Unknown,
    Flag,
    Revealed(u8),
    Exploded,
}

impl Default for ViewCell {
    fn default() -> Self {
        Self::Unknown
    }
}

impl ViewCell {
    /// Masks a grid cell, flags take precedence over everything else.
    pub const fn mask(cell: Cell, flagged: bool) -> Self {
        if flagged {
            return Self::Flag;
        }
        match cell {
            Cell::Unexplored | Cell::Mine => Self::Unknown,
            Cell::Revealed(count) => Self::Revealed(count),
            Cell::Exploded => Self::Exploded,
        }
    }
}

impl fmt::Display for ViewCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => f.write_str("."),
            Self::Flag => f.write_str("F"),
            Self::Revealed(count) => write!(f, "{count}"),
            Self::Exploded => f.write_str("X"),
        }
    }
}
