//! The `Simulation` struct and its tick loop.

#[cfg(feature = "parallel")]
use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use troon_core::{Direction, Line, LinkId, SimClock, SimConfig, Tick, TroonId};
use troon_network::RailNetwork;

use crate::report::{LineReport, ReportEntry, TickReport};
use crate::{HoldingArea, Link, LinkStep, SimObserver, SimResult, Troon};

// ── Spawn points ──────────────────────────────────────────────────────────────

/// Where a line injects new troons, and how many it has left.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SpawnPoint {
    /// Spawn link per direction, indexed by [`Direction::index`].
    pub links:     [LinkId; 2],
    /// Troons still to be spawned on this line.
    pub remaining: u32,
}

// ── Census ────────────────────────────────────────────────────────────────────

/// Troon counts by slot across the whole network.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Census {
    pub queued:     usize,
    pub loading:    usize,
    pub transiting: usize,
}

impl Census {
    pub fn total(&self) -> usize {
        self.queued + self.loading + self.transiting
    }
}

// ── Simulation ────────────────────────────────────────────────────────────────

/// The simulation runner.
///
/// Owns every [`Link`] in one contiguous `Vec`, with the matching
/// [`HoldingArea`]s in a parallel `Vec` (same [`LinkId`] index).  Segment
/// hand-off goes through the network's `(from, to) → LinkId` index.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Simulation {
    /// Run length, report window, worker count.
    pub config: SimConfig,

    /// Tracks the next tick to process.
    pub clock: SimClock,

    /// Static topology: directory, routes, segments, link index.
    pub network: RailNetwork,

    /// Per-link slots, indexed by `LinkId`.
    pub links: Vec<Link>,

    /// Per-link holding areas, indexed by `LinkId`.
    pub holding: Vec<HoldingArea>,

    /// Per-line spawn state, indexed by [`Line::index`].
    pub spawns: [SpawnPoint; Line::COUNT],

    /// Id of the next troon to spawn; equals the number spawned so far.
    pub(crate) next_troon: u32,

    #[cfg(feature = "parallel")]
    pub(crate) pool: Arc<rayon::ThreadPool>,
}

impl Simulation {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary and `on_report` for each
    /// tick inside the report window.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.current_tick < self.config.end_tick() {
            self.run_one(observer)?;
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.run_one(observer)?;
        }
        Ok(())
    }

    /// Build the report for the current network state, labelled `tick`.
    pub fn report(&self, tick: Tick) -> TickReport {
        let lines = Line::PRINT_ORDER
            .into_iter()
            .map(|line| self.line_report(line))
            .collect();
        TickReport { tick, lines }
    }

    /// Count troons per slot type over the whole network.
    pub fn census(&self) -> Census {
        Census {
            queued:     self.holding.iter().map(HoldingArea::len).sum(),
            loading:    self.links.iter().filter(|l| l.loading.is_some()).count(),
            transiting: self.links.iter().filter(|l| l.transiting.is_some()).count(),
        }
    }

    /// Troons spawned so far.
    pub fn spawned(&self) -> usize {
        self.next_troon as usize
    }

    #[inline]
    pub fn link(&self, id: LinkId) -> &Link {
        &self.links[id.index()]
    }

    #[inline]
    pub fn holding_area(&self, id: LinkId) -> &HoldingArea {
        &self.holding[id.index()]
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn run_one<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        #[cfg(feature = "parallel")]
        let (spawned, report) = {
            let pool = Arc::clone(&self.pool);
            pool.install(|| self.process_tick(now))?
        };
        #[cfg(not(feature = "parallel"))]
        let (spawned, report) = self.process_tick(now)?;

        observer.on_tick_end(now, spawned);
        if let Some(report) = report {
            observer.on_report(&report);
        }
        self.clock.advance();
        Ok(())
    }

    fn process_tick(&mut self, now: Tick) -> SimResult<(usize, Option<TickReport>)> {
        // ── Phase 1: spawn ────────────────────────────────────────────────
        let spawned = self.spawn_phase(now);

        // ── Phase 2: advance (parallel, barrier on return) ────────────────
        let step = self.advance_phase(now)?;

        // ── Phase 3: flush (parallel, barrier on return) ──────────────────
        //
        // Must observe every transit set in phase 2: the headway reads
        // `transiting.timer`.
        let promoted = self.flush_phase(now);

        debug!(
            tick = now.0,
            spawned,
            arrivals = step.arrivals,
            bounces = step.bounces,
            departures = step.departures,
            promoted,
            "tick processed"
        );

        // ── Phase 4: report (trailing window only) ────────────────────────
        let report = self.config.is_reported(now).then(|| self.report(now));
        Ok((spawned, report))
    }

    /// Inject up to one troon per direction for every line with budget left.
    ///
    /// Lines go in canonical order and forward before backward, so ids are
    /// assigned identically on every run.
    fn spawn_phase(&mut self, now: Tick) -> usize {
        let mut spawned = 0;
        for (line, point) in Line::ALL.into_iter().zip(&mut self.spawns) {
            for direction in Direction::BOTH {
                if point.remaining == 0 {
                    break;
                }
                let troon = Troon::new(TroonId(self.next_troon), line, direction, now);
                self.next_troon += 1;
                self.holding[point.links[direction.index()].index()].spawn(now, troon);
                point.remaining -= 1;
                spawned += 1;
            }
        }
        spawned
    }

    fn advance_phase(&mut self, now: Tick) -> SimResult<LinkStep> {
        let holding = self.holding.as_slice();
        let network = &self.network;

        #[cfg(feature = "parallel")]
        {
            self.links
                .par_iter_mut()
                .map(|link| link.advance(now, holding, network))
                .try_reduce(LinkStep::default, |a, b| Ok(a + b))
        }

        #[cfg(not(feature = "parallel"))]
        {
            self.links
                .iter_mut()
                .try_fold(LinkStep::default(), |acc, link| {
                    link.advance(now, holding, network).map(|step| acc + step)
                })
        }
    }

    fn flush_phase(&mut self, now: Tick) -> usize {
        #[cfg(feature = "parallel")]
        {
            self.links
                .par_iter_mut()
                .zip(self.holding.par_iter_mut())
                .filter_map(|(link, area)| link.flush(now, area))
                .count()
        }

        #[cfg(not(feature = "parallel"))]
        {
            self.links
                .iter_mut()
                .zip(self.holding.iter_mut())
                .filter_map(|(link, area)| link.flush(now, area))
                .count()
        }
    }

    /// Collect and sort every entry of `line`.
    fn line_report(&self, line: Line) -> LineReport {
        let directory = &self.network.directory;

        #[cfg(feature = "parallel")]
        let mut entries: Vec<ReportEntry> = self
            .links
            .par_iter()
            .zip(self.holding.par_iter())
            .flat_map_iter(|(link, area)| link.snapshot(line, area, directory))
            .collect();
        #[cfg(feature = "parallel")]
        entries.par_sort_unstable_by(ReportEntry::display_order);

        #[cfg(not(feature = "parallel"))]
        let mut entries: Vec<ReportEntry> = self
            .links
            .iter()
            .zip(self.holding.iter())
            .flat_map(|(link, area)| link.snapshot(line, area, directory))
            .collect();
        #[cfg(not(feature = "parallel"))]
        entries.sort_unstable_by(ReportEntry::display_order);

        LineReport { line, entries }
    }
}
