//! Rail network representation and builder.
//!
//! # Data layout
//!
//! Track segments live in one flat `Vec<Segment>` indexed by [`LinkId`].
//! The simulation allocates its per-link state in the same order, so a
//! `LinkId` addresses both the static segment and its runtime queue.
//!
//! Hand-off between segments needs `(from, to) → LinkId` in O(1).  A dense
//! `S × S` table wastes memory on sparse networks, so [`LinkIndex`] keeps
//! one small FxHash map of outgoing segments per origin station.

use rustc_hash::FxHashMap;
use tracing::debug;

use troon_core::{Direction, Line, LinkId, StationId};

use crate::{LineRoutes, NetworkError, NetworkResult, StationDirectory};

// ── Segment ───────────────────────────────────────────────────────────────────

/// One directed track segment between two stations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub from:       StationId,
    pub to:         StationId,
    /// Ticks needed to traverse the segment.  Always positive.
    pub length:     u32,
    /// Popularity of the origin station; extra departure spacing.
    pub popularity: u32,
}

// ── LinkIndex ─────────────────────────────────────────────────────────────────

/// `(from, to) → LinkId` lookup, one map per origin station.
#[derive(Debug, Clone, Default)]
pub struct LinkIndex {
    out: Vec<FxHashMap<StationId, LinkId>>,
}

impl LinkIndex {
    fn build(station_count: usize, segments: &[Segment]) -> Self {
        let mut out = vec![FxHashMap::default(); station_count];
        for (i, seg) in segments.iter().enumerate() {
            out[seg.from.index()].insert(seg.to, LinkId(i as u32));
        }
        Self { out }
    }

    /// The segment running from `from` to `to`, if any.
    #[inline]
    pub fn get(&self, from: StationId, to: StationId) -> Option<LinkId> {
        self.out.get(from.index())?.get(&to).copied()
    }
}

// ── RailNetwork ───────────────────────────────────────────────────────────────

/// Stations, line routes, and directed track segments.
///
/// Do not construct directly; use [`RailNetworkBuilder`], which validates
/// that every line can actually be travelled in both directions.
#[derive(Debug, Clone)]
pub struct RailNetwork {
    pub directory: StationDirectory,
    pub routes:    LineRoutes,
    /// Indexed by `LinkId`.
    pub segments:  Vec<Segment>,
    pub index:     LinkIndex,
}

impl RailNetwork {
    pub fn station_count(&self) -> usize {
        self.directory.len()
    }

    pub fn link_count(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn segment(&self, link: LinkId) -> &Segment {
        &self.segments[link.index()]
    }

    /// The link running from `from` to `to`, if any.
    #[inline]
    pub fn link_between(&self, from: StationId, to: StationId) -> Option<LinkId> {
        self.index.get(from, to)
    }

    /// The links on which new troons of `line` are spawned, indexed by
    /// [`Direction::index`].
    pub fn spawn_links(&self, line: Line) -> Option<[LinkId; 2]> {
        let points = self.routes.spawn_points(line)?;
        let forward  = self.link_between(points[Direction::Forward.index()].0, points[Direction::Forward.index()].1)?;
        let backward = self.link_between(points[Direction::Backward.index()].0, points[Direction::Backward.index()].1)?;
        Some([forward, backward])
    }
}

// ── RailNetworkBuilder ────────────────────────────────────────────────────────

/// Construct a [`RailNetwork`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use troon_core::Line;
/// use troon_network::RailNetworkBuilder;
///
/// let mut b = RailNetworkBuilder::new();
/// let a = b.add_station("A", 0).unwrap();
/// let c = b.add_station("C", 2).unwrap();
/// b.add_track(a, c, 4);
/// for line in Line::ALL {
///     b.set_route(line, vec![a, c]);
/// }
/// let net = b.build().unwrap();
/// assert_eq!(net.link_count(), 2);
/// assert_eq!(net.segment(net.link_between(c, a).unwrap()).popularity, 2);
/// ```
#[derive(Default)]
pub struct RailNetworkBuilder {
    directory:  StationDirectory,
    popularity: Vec<u32>,
    raw:        Vec<(StationId, StationId, u32)>,
    routes:     [Option<Vec<StationId>>; Line::COUNT],
}

impl RailNetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station and return its id (sequential from 0).
    pub fn add_station(&mut self, name: &str, popularity: u32) -> NetworkResult<StationId> {
        let id = self.directory.insert(name)?;
        self.popularity.push(popularity);
        Ok(id)
    }

    /// Add a **directed** segment.  A zero `length` means "no segment" and is
    /// ignored, matching the adjacency-matrix convention of the input.
    pub fn add_segment(&mut self, from: StationId, to: StationId, length: u32) {
        if length > 0 {
            self.raw.push((from, to, length));
        }
    }

    /// Convenience: add segments in both directions with the same length.
    pub fn add_track(&mut self, a: StationId, b: StationId, length: u32) {
        self.add_segment(a, b, length);
        self.add_segment(b, a, length);
    }

    /// Set the ordered station list of `line`.
    pub fn set_route(&mut self, line: Line, stations: Vec<StationId>) {
        self.routes[line.index()] = Some(stations);
    }

    pub fn directory(&self) -> &StationDirectory {
        &self.directory
    }

    /// Validate and produce the [`RailNetwork`].
    ///
    /// # Errors
    ///
    /// - [`NetworkError::StationNotFound`] for a segment or route naming an
    ///   unregistered station id.
    /// - [`NetworkError::RouteTooShort`] if a line is missing or has fewer
    ///   than two stations.
    /// - [`NetworkError::MissingSegment`] if two consecutive route stations
    ///   are not joined by segments in both directions.
    pub fn build(self) -> NetworkResult<RailNetwork> {
        let station_count = self.directory.len();
        let check = |id: StationId| {
            if self.directory.contains(id) { Ok(id) } else { Err(NetworkError::StationNotFound(id)) }
        };

        let segments = self
            .raw
            .iter()
            .map(|&(from, to, length)| {
                Ok(Segment {
                    from:       check(from)?,
                    to:         check(to)?,
                    length,
                    popularity: self.popularity[from.index()],
                })
            })
            .collect::<NetworkResult<Vec<_>>>()?;
        let index = LinkIndex::build(station_count, &segments);

        let mut routes = LineRoutes::new(station_count);
        for (line, route) in Line::ALL.into_iter().zip(self.routes) {
            let route = route.unwrap_or_default();
            if route.len() < 2 {
                return Err(NetworkError::RouteTooShort { line, got: route.len() });
            }
            for &station in &route {
                check(station)?;
            }
            for pair in route.windows(2) {
                for (from, to) in [(pair[0], pair[1]), (pair[1], pair[0])] {
                    if index.get(from, to).is_none() {
                        return Err(NetworkError::MissingSegment {
                            line,
                            from: self.directory.name(from).to_owned(),
                            to:   self.directory.name(to).to_owned(),
                        });
                    }
                }
            }
            routes.set(line, route);
        }

        debug!(
            stations = station_count,
            links = segments.len(),
            "rail network built"
        );

        Ok(RailNetwork {
            directory: self.directory,
            routes,
            segments,
            index,
        })
    }
}
