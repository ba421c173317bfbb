//! Plain data row written by the CSV backend.

use serde::Serialize;

use troon_core::Tick;
use troon_network::StationDirectory;
use troon_sim::{ReportEntry, Status};

/// One troon's placement at one reported tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryRow<'a> {
    pub tick:        u64,
    pub line:        String,
    pub troon:       u32,
    pub station:     &'a str,
    /// `queued`, `loading`, or `en_route`.
    pub status:      &'static str,
    /// Next station while en route; empty otherwise.
    pub destination: &'a str,
}

impl<'a> EntryRow<'a> {
    pub const HEADER: [&'static str; 6] = ["tick", "line", "troon", "station", "status", "destination"];

    pub fn new(tick: Tick, entry: &ReportEntry, directory: &'a StationDirectory) -> Self {
        let destination = match entry.status {
            Status::EnRoute(to) => directory.name(to),
            Status::Queued | Status::Loading => "",
        };
        Self {
            tick:    tick.0,
            line:    entry.line.to_string(),
            troon:   entry.troon.0,
            station: directory.name(entry.station),
            status:  entry.status.as_str(),
            destination,
        }
    }
}
