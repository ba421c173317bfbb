//! `Link` — the runtime state of one directed track segment.
//!
//! A link has two single-troon slots:
//!
//! - `loading`: selected to depart next, due to start transiting at
//!   `loading.timer`;
//! - `transiting`: on the track, due to arrive at `transiting.timer`.
//!
//! Its holding area lives in a parallel `Vec<HoldingArea>` owned by the
//! [`Simulation`](crate::Simulation), indexed by the same [`LinkId`].  The
//! split lets the advance phase take `&mut Link` for every link at once
//! while still handing troons to any other link's holding area through a
//! shared reference.

use std::ops::Add;

use tracing::trace;

use troon_core::{Line, LinkId, StationId, Tick};
use troon_network::{RailNetwork, Segment, StationDirectory};

use crate::report::{ReportEntry, Status};
use crate::{HoldingArea, SimError, SimResult, Troon, Waiting};

/// Per-link counters returned by [`Link::advance`], summed for logging.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LinkStep {
    /// Transits that reached the end of the link.
    pub arrivals:   usize,
    /// Arrivals that reversed direction at a terminus.
    pub bounces:    usize,
    /// Loading troons that started transiting.
    pub departures: usize,
}

impl Add for LinkStep {
    type Output = LinkStep;
    fn add(self, rhs: LinkStep) -> LinkStep {
        LinkStep {
            arrivals:   self.arrivals + rhs.arrivals,
            bounces:    self.bounces + rhs.bounces,
            departures: self.departures + rhs.departures,
        }
    }
}

/// Runtime state of one directed segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id:         LinkId,
    pub from:       StationId,
    pub to:         StationId,
    /// Ticks spent transiting.
    pub length:     u32,
    /// Extra departure spacing, from the origin station.
    pub popularity: u32,
    pub transiting: Option<Troon>,
    pub loading:    Option<Troon>,
}

impl Link {
    /// An empty link for `segment`.
    pub fn new(id: LinkId, segment: &Segment) -> Self {
        Self {
            id,
            from:       segment.from,
            to:         segment.to,
            length:     segment.length,
            popularity: segment.popularity,
            transiting: None,
            loading:    None,
        }
    }

    /// Advance phase.
    ///
    /// 1. A transit due at `tick` arrives at `to` and is enqueued on the link
    ///    towards its line's next station.  With no next station the troon
    ///    reverses and is enqueued on the segment back to `from`.
    /// 2. A loading troon due at `tick` starts transiting, arriving at
    ///    `tick + length`.
    ///
    /// Only this link's slots and other links' holding areas are touched.
    ///
    /// # Errors
    ///
    /// [`SimError::MissingLink`] if the onward segment does not exist.  A
    /// network built by `RailNetworkBuilder` never produces this.
    pub fn advance(&mut self, tick: Tick, holding: &[HoldingArea], network: &RailNetwork) -> SimResult<LinkStep> {
        let mut step = LinkStep::default();

        if let Some(mut troon) = self.transiting.take_if(|t| t.timer == tick) {
            let next = match network.routes.next_station(troon.line, troon.direction, self.to) {
                Some(next) => next,
                None => {
                    troon.direction = troon.direction.reversed();
                    step.bounces += 1;
                    trace!(troon = troon.id.0, station = self.to.0, "terminus bounce");
                    self.from
                }
            };
            let target = network
                .link_between(self.to, next)
                .ok_or(SimError::MissingLink { from: self.to, to: next })?;
            holding[target.index()].enqueue(tick, troon);
            step.arrivals += 1;
        }

        // The flush headway keeps `loading.timer > transiting.timer`, so the
        // track is already clear whenever a loading troon falls due.
        if let Some(mut troon) = self.loading.take_if(|t| t.timer == tick) {
            debug_assert!(self.transiting.is_none(), "link {} departs onto an occupied track", self.id);
            troon.timer = tick + u64::from(self.length);
            self.transiting = Some(troon);
            step.departures += 1;
        }

        Ok(step)
    }

    /// Flush phase: if nothing is loading, promote the next waiting troon.
    ///
    /// The new departure tick is `max(tick + 1 + popularity, transit arrival)
    /// + 1`, i.e. strictly after both the popularity headway and the arrival
    /// of any troon still on the track.  Returns that tick when a troon was
    /// promoted.
    pub fn flush(&mut self, tick: Tick, holding: &mut HoldingArea) -> Option<Tick> {
        if self.loading.is_some() {
            return None;
        }
        let Waiting { mut troon, .. } = holding.pop_next()?;
        let headway = tick + 1 + u64::from(self.popularity);
        let clear = self.transiting.map_or(Tick::ZERO, |t| t.timer);
        troon.timer = headway.max(clear) + 1;
        self.loading = Some(troon);
        Some(troon.timer)
    }

    /// Report entries for every troon of `line` on this link.
    ///
    /// Reads `holding`, so must not overlap an advance or flush phase.
    pub fn snapshot(&self, line: Line, holding: &HoldingArea, directory: &StationDirectory) -> Vec<ReportEntry> {
        let mut entries: Vec<ReportEntry> = holding
            .waiting()
            .iter()
            .filter(|w| w.troon.line == line)
            .map(|w| ReportEntry::new(&w.troon, self.from, Status::Queued, directory))
            .collect();
        if let Some(troon) = self.loading.filter(|t| t.line == line) {
            entries.push(ReportEntry::new(&troon, self.from, Status::Loading, directory));
        }
        if let Some(troon) = self.transiting.filter(|t| t.line == line) {
            entries.push(ReportEntry::new(&troon, self.from, Status::EnRoute(self.to), directory));
        }
        entries
    }
}
