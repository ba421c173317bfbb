//! Simulation observer trait for progress reporting and output.

use troon_core::Tick;

use crate::TickReport;

/// Callbacks invoked by [`Simulation::run`][crate::Simulation::run] at key
/// points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: report printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl SimObserver for Printer {
///     fn on_report(&mut self, report: &TickReport) {
///         println!("{report}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before the spawn phase.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the flush phase of each tick.
    ///
    /// `spawned` is the number of troons injected this tick.
    fn on_tick_end(&mut self, _tick: Tick, _spawned: usize) {}

    /// Called for every tick inside the trailing report window, after
    /// `on_tick_end`.
    fn on_report(&mut self, _report: &TickReport) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
