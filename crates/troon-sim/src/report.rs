//! Report snapshot types.
//!
//! A [`TickReport`] is assembled fresh for every reported tick: one
//! [`LineReport`] per line in [`Line::PRINT_ORDER`], each holding the
//! line's troon descriptors sorted lexicographically.

use std::cmp::Ordering;
use std::fmt;

use troon_core::{Line, StationId, Tick, TroonId};
use troon_network::StationDirectory;

use crate::Troon;

/// Which slot of a link a troon occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Waiting in the holding area.  Marker `#`.
    Queued,
    /// Selected to depart next.  Marker `%`.
    Loading,
    /// Travelling towards the given station.  Marker `->name`.
    EnRoute(StationId),
}

impl Status {
    /// Short machine-readable name.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Queued     => "queued",
            Status::Loading    => "loading",
            Status::EnRoute(_) => "en_route",
        }
    }
}

/// One troon's placement, with its rendered descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub troon:   TroonId,
    pub line:    Line,
    /// The station the troon is at, or departed from when en route.
    pub station: StationId,
    pub status:  Status,
    /// Descriptor text, e.g. `b4-Central#` or `g0-Quay->Central`.
    pub text:    String,
}

impl ReportEntry {
    pub fn new(troon: &Troon, station: StationId, status: Status, directory: &StationDirectory) -> Self {
        let mut text = troon.descriptor(directory.name(station));
        match status {
            Status::Queued      => text.push('#'),
            Status::Loading     => text.push('%'),
            Status::EnRoute(to) => {
                text.push_str("->");
                text.push_str(directory.name(to));
            }
        }
        Self { troon: troon.id, line: troon.line, station, status, text }
    }

    /// Report order: descriptor text, then troon id.
    pub fn display_order(&self, other: &Self) -> Ordering {
        self.text
            .cmp(&other.text)
            .then(self.troon.cmp(&other.troon))
    }
}

/// All entries of one line at one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineReport {
    pub line:    Line,
    pub entries: Vec<ReportEntry>,
}

/// Snapshot of every troon in the network at the end of one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    pub tick:  Tick,
    /// In [`Line::PRINT_ORDER`].
    pub lines: Vec<LineReport>,
}

impl TickReport {
    /// All entries in print order.
    pub fn entries(&self) -> impl Iterator<Item = &ReportEntry> + '_ {
        self.lines.iter().flat_map(|l| l.entries.iter())
    }

    /// Total number of troons in the snapshot.
    pub fn len(&self) -> usize {
        self.lines.iter().map(|l| l.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The output line without its newline: `"<tick>: "` followed by every
    /// descriptor, each with a trailing space.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TickReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.tick.0)?;
        for entry in self.entries() {
            write!(f, "{} ", entry.text)?;
        }
        Ok(())
    }
}
