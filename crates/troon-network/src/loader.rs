//! Scenario file loader.
//!
//! # Input format
//!
//! ```text
//! S
//! name_0 name_1 … name_{S-1}
//! pop_0  pop_1  … pop_{S-1}
//! len_0_0 … len_0_{S-1}          ┐
//! …                              ├ S × S matrix, 0 = no segment
//! len_{S-1}_0 … len_{S-1}_{S-1}  ┘
//! <green route: station names, one line>
//! <yellow route: station names, one line>
//! <blue route: station names, one line>
//! N
//! green_troons yellow_troons blue_troons
//! report_window
//! ```
//!
//! Everything except the three routes is a whitespace-delimited token
//! stream.  Each route occupies exactly one text line; blank lines before a
//! route are skipped.  A missing trailing `report_window` defaults to the
//! number of lines.

use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use troon_core::{Line, SimConfig};

use crate::{NetworkError, NetworkResult, RailNetwork, RailNetworkBuilder};

// ── Scenario ──────────────────────────────────────────────────────────────────

/// Everything a simulation run needs from the input file.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub network:       RailNetwork,
    /// Number of ticks to simulate.
    pub total_ticks:   u64,
    /// Total troons to spawn per line, indexed by [`Line::index`].
    pub budgets:       [u32; Line::COUNT],
    /// Number of trailing ticks to report.
    pub report_window: u64,
}

impl Scenario {
    /// A [`SimConfig`] for this scenario using Rayon's default pool size.
    pub fn config(&self) -> SimConfig {
        SimConfig::new(self.total_ticks, self.report_window)
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Read and parse the scenario at `path`.
///
/// I/O failures surface as [`NetworkError::Io`] so callers can tell an
/// unreadable file apart from a malformed one.
pub fn load_scenario(path: &Path) -> NetworkResult<Scenario> {
    let text = std::fs::read_to_string(path)?;
    parse_scenario(&text)
}

/// Parse a scenario from its textual form.
pub fn parse_scenario(text: &str) -> NetworkResult<Scenario> {
    let mut scan = Scanner::new(text);

    // ── Stations ──────────────────────────────────────────────────────────
    let station_count: usize = scan.number("station count")?;
    let names: Vec<&str> = (0..station_count)
        .map(|_| scan.token("station name"))
        .collect::<NetworkResult<_>>()?;
    let popularity: Vec<u32> = (0..station_count)
        .map(|_| scan.number("station popularity"))
        .collect::<NetworkResult<_>>()?;

    let mut builder = RailNetworkBuilder::new();
    let ids = names
        .iter()
        .zip(&popularity)
        .map(|(name, &pop)| builder.add_station(name, pop))
        .collect::<NetworkResult<Vec<_>>>()?;

    // ── Length matrix ─────────────────────────────────────────────────────
    for &from in &ids {
        for &to in &ids {
            let length: u32 = scan.number("segment length")?;
            builder.add_segment(from, to, length);
        }
    }
    scan.skip_line();

    // ── Line routes ───────────────────────────────────────────────────────
    for line in Line::ALL {
        let expected = format!("{line} line route");
        let route_text = scan.route_line().ok_or(NetworkError::UnexpectedEof(expected))?;
        let route = route_text
            .split_whitespace()
            .map(|name| builder.directory().resolve(name))
            .collect::<NetworkResult<Vec<_>>>()?;
        builder.set_route(line, route);
    }

    // ── Run parameters ────────────────────────────────────────────────────
    let total_ticks: u64 = scan.number("tick count")?;
    let mut budgets = [0u32; Line::COUNT];
    for (line, budget) in Line::ALL.iter().zip(&mut budgets) {
        *budget = scan.number(&format!("{line} troon count"))?;
    }
    let report_window: u64 = if scan.at_end() {
        Line::COUNT as u64
    } else {
        scan.number("report window")?
    };

    let network = builder.build()?;
    debug!(
        stations = network.station_count(),
        links = network.link_count(),
        total_ticks,
        ?budgets,
        report_window,
        "scenario parsed"
    );

    Ok(Scenario { network, total_ticks, budgets, report_window })
}

// ── Scanner ───────────────────────────────────────────────────────────────────

/// Cursor over the input text that can read either whitespace-delimited
/// tokens or whole lines.
struct Scanner<'a> {
    text: &'a str,
    pos:  usize,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn at_end(&mut self) -> bool {
        self.skip_whitespace();
        self.pos >= self.text.len()
    }

    fn token(&mut self, expected: &str) -> NetworkResult<&'a str> {
        self.skip_whitespace();
        let rest = self.rest();
        let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
        if len == 0 {
            return Err(NetworkError::UnexpectedEof(expected.to_owned()));
        }
        self.pos += len;
        Ok(&rest[..len])
    }

    fn number<T: FromStr>(&mut self, expected: &str) -> NetworkResult<T> {
        let token = self.token(expected)?;
        token.parse().map_err(|_| NetworkError::Parse {
            expected: expected.to_owned(),
            found:    token.to_owned(),
        })
    }

    /// Discard the remainder of the current line, including its newline.
    fn skip_line(&mut self) {
        match self.rest().find('\n') {
            Some(i) => self.pos += i + 1,
            None    => self.pos = self.text.len(),
        }
    }

    /// The next non-blank line, without its terminator.
    fn route_line(&mut self) -> Option<&'a str> {
        while self.pos < self.text.len() {
            let rest = self.rest();
            let end = rest.find('\n').unwrap_or(rest.len());
            let line = rest[..end].trim_end_matches('\r');
            self.pos += (end + 1).min(rest.len());
            if !line.trim().is_empty() {
                return Some(line);
            }
        }
        None
    }
}
