//! Simulation time model.
//!
//! Time is a monotonically increasing integer `Tick`.  Every pending troon
//! transition (arrival at the end of a segment, departure from a platform)
//! is stamped with the absolute tick at which it becomes due, so all
//! scheduling arithmetic is exact and comparisons are O(1).

use std::fmt;

use crate::{CoreError, CoreResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the tick currently being processed.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The current tick, advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.current_tick)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// `total_ticks` and `report_window` come from the scenario file;
/// `num_threads` from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Ticks to simulate.  Ticks `0..total_ticks` are processed.
    pub total_ticks: u64,

    /// Number of trailing ticks for which a full snapshot is reported.
    pub report_window: u64,

    /// Worker thread count passed to Rayon.  `None` uses Rayon's default.
    pub num_threads: Option<usize>,
}

impl SimConfig {
    pub fn new(total_ticks: u64, report_window: u64) -> Self {
        Self { total_ticks, report_window, num_threads: None }
    }

    /// The tick one past the last processed tick.
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// `true` if `tick` falls inside the trailing report window.
    #[inline]
    pub fn is_reported(&self, tick: Tick) -> bool {
        tick.0 + self.report_window >= self.total_ticks
    }

    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> CoreResult<()> {
        if self.num_threads == Some(0) {
            return Err(CoreError::Config("worker thread count must be at least 1".into()));
        }
        Ok(())
    }
}
