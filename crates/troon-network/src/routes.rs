//! Per-line route tables.
//!
//! Each line is an ordered list of stations.  From that list two lookup
//! tables are derived per line, one per [`Direction`]:
//!
//! ```text
//! next[Forward ][line][route[i]]   = route[i + 1]
//! next[Backward][line][route[i+1]] = route[i]
//! ```
//!
//! A station with no entry for a (line, direction) pair is a terminus for
//! troons travelling that way; they reverse there.

use troon_core::{Direction, Line, StationId};

/// The three line routes and their derived next-station tables.
#[derive(Debug, Clone)]
pub struct LineRoutes {
    stations: [Vec<StationId>; Line::COUNT],
    /// `next[direction][line][station]`.
    next:     [[Vec<Option<StationId>>; Line::COUNT]; 2],
}

impl LineRoutes {
    /// Empty routes for a network of `station_count` stations.
    pub fn new(station_count: usize) -> Self {
        let empty = || std::array::from_fn(|_| vec![None; station_count]);
        Self {
            stations: Default::default(),
            next:     [empty(), empty()],
        }
    }

    /// Replace `line`'s route with `stations` and rebuild its tables.
    ///
    /// Every id must be smaller than the `station_count` given to
    /// [`new`](Self::new).
    pub fn set(&mut self, line: Line, stations: Vec<StationId>) {
        let l = line.index();
        for table in &mut self.next {
            table[l].fill(None);
        }
        for pair in stations.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            self.next[Direction::Forward.index()][l][prev.index()]  = Some(next);
            self.next[Direction::Backward.index()][l][next.index()] = Some(prev);
        }
        self.stations[l] = stations;
    }

    /// Where a troon of `line` travelling in `direction` goes after
    /// `station`, or `None` at a terminus.
    #[inline]
    pub fn next_station(&self, line: Line, direction: Direction, station: StationId) -> Option<StationId> {
        self.next[direction.index()][line.index()]
            .get(station.index())
            .copied()
            .flatten()
    }

    /// The ordered station list of `line`.
    pub fn stations(&self, line: Line) -> &[StationId] {
        &self.stations[line.index()]
    }

    /// The first segment travelled in each direction, indexed by
    /// [`Direction::index`]: `(route[0], route[1])` forward and
    /// `(route[n-1], route[n-2])` backward.
    ///
    /// Returns `None` if the route has fewer than two stations.
    pub fn spawn_points(&self, line: Line) -> Option<[(StationId, StationId); 2]> {
        let route = self.stations(line);
        let n = route.len();
        if n < 2 {
            return None;
        }
        Some([(route[0], route[1]), (route[n - 1], route[n - 2])])
    }
}
