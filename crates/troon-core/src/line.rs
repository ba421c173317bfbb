//! Rail lines and travel direction.

use std::fmt;

/// One of the three lines of the network.
///
/// The discriminant order (green, yellow, blue) is the canonical input order:
/// route lists and spawn budgets are given in this order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Line {
    Green,
    Yellow,
    Blue,
}

impl Line {
    /// Number of lines.
    pub const COUNT: usize = 3;

    /// All lines in canonical input order.
    pub const ALL: [Line; Line::COUNT] = [Line::Green, Line::Yellow, Line::Blue];

    /// Fixed order in which line groups are printed in a report.
    pub const PRINT_ORDER: [Line; Line::COUNT] = [Line::Blue, Line::Green, Line::Yellow];

    /// Position in [`Line::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Single-letter prefix used in troon descriptors.
    #[inline]
    pub fn letter(self) -> char {
        match self {
            Line::Green  => 'g',
            Line::Yellow => 'y',
            Line::Blue   => 'b',
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Line::Green  => "green",
            Line::Yellow => "yellow",
            Line::Blue   => "blue",
        };
        f.write_str(name)
    }
}

/// Travel direction along a line's ordered station list.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// From the first listed station towards the last.
    Forward,
    /// From the last listed station towards the first.
    Backward,
}

impl Direction {
    pub const BOTH: [Direction; 2] = [Direction::Forward, Direction::Backward];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The opposite direction (terminus bounce).
    #[inline]
    pub fn reversed(self) -> Direction {
        match self {
            Direction::Forward  => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}
