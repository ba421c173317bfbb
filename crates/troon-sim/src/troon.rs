//! The troon value moved between links.

use troon_core::{Direction, Line, Tick, TroonId};

/// One train instance.
///
/// A troon is a plain `Copy` value.  It is always held by exactly one link
/// slot (holding area, loading, or transiting) and is moved, never shared,
/// when it changes slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Troon {
    pub id:        TroonId,
    pub line:      Line,
    pub direction: Direction,
    /// Tick at which the current pending transition is due: departure while
    /// loading, arrival while transiting.  While waiting in a holding area
    /// the queue rank is the arrival tick stored alongside it.
    pub timer:     Tick,
}

impl Troon {
    pub fn new(id: TroonId, line: Line, direction: Direction, timer: Tick) -> Self {
        Self { id, line, direction, timer }
    }

    /// `<line-letter><id>-<station>`, e.g. `g12-Harbour`.
    pub fn descriptor(&self, station: &str) -> String {
        format!("{}{}-{}", self.line.letter(), self.id.0, station)
    }
}
