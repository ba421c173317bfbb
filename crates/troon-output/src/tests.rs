//! Unit tests for troon-output.

use troon_core::{Line, SimConfig};
use troon_network::{RailNetwork, RailNetworkBuilder};
use troon_sim::{SimBuilder, Simulation, TickReport};

use crate::{CsvWriter, OutputError, OutputResult, ReportObserver, ReportWriter, TextWriter};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn shuttle() -> RailNetwork {
    let mut b = RailNetworkBuilder::new();
    let a = b.add_station("Quay", 0).unwrap();
    let c = b.add_station("Central", 0).unwrap();
    b.add_track(a, c, 3);
    for line in Line::ALL {
        b.set_route(line, vec![a, c]);
    }
    b.build().unwrap()
}

fn sim(total_ticks: u64, window: u64, budgets: [u32; 3]) -> Simulation {
    SimBuilder::new(SimConfig::new(total_ticks, window), shuttle())
        .budgets(budgets)
        .threads(Some(1))
        .build()
        .unwrap()
}

/// Writer that fails every call and counts how often it was asked.
#[derive(Default)]
struct Failing {
    calls: usize,
}

impl ReportWriter for Failing {
    fn write_report(&mut self, _report: &TickReport) -> OutputResult<()> {
        self.calls += 1;
        Err(OutputError::Io(std::io::Error::other("disk full")))
    }
    fn finish(&mut self) -> OutputResult<()> {
        Ok(())
    }
}

// ── Text ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod text {
    use super::*;

    #[test]
    fn one_line_per_reported_tick() {
        let mut s = sim(5, 1, [2, 0, 0]);
        let mut obs = ReportObserver::new(TextWriter::new(Vec::new()));
        s.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());
        assert_eq!(obs.reports(), 1);

        let bytes = obs.into_writer().into_inner().unwrap();
        let out = String::from_utf8(bytes).unwrap();
        assert_eq!(out, "4: g0-Quay->Central g1-Central->Quay \n");
    }

    #[test]
    fn window_covers_trailing_ticks() {
        let mut s = sim(6, 3, [0, 0, 1]);
        let mut obs = ReportObserver::new(TextWriter::new(Vec::new()));
        s.run(&mut obs).unwrap();

        let out = String::from_utf8(obs.into_writer().into_inner().unwrap()).unwrap();
        let ticks: Vec<&str> = out
            .lines()
            .map(|l| l.split(':').next().unwrap())
            .collect();
        assert_eq!(ticks, ["3", "4", "5"]);
    }

    #[test]
    fn empty_report_is_tick_prefix_only() {
        let mut s = sim(2, 1, [0, 0, 0]);
        let mut obs = ReportObserver::new(TextWriter::new(Vec::new()));
        s.run(&mut obs).unwrap();
        let out = String::from_utf8(obs.into_writer().into_inner().unwrap()).unwrap();
        assert_eq!(out, "1: \n");
    }
}

// ── CSV ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_backend {
    use super::*;

    #[test]
    fn header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.csv");

        let mut s = sim(5, 1, [2, 0, 0]);
        let csv = CsvWriter::create(&path, &s.network.directory).unwrap();
        let mut obs = ReportObserver::new(csv);
        s.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());
        drop(obs);

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let header: Vec<String> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(header, ["tick", "line", "troon", "station", "status", "destination"]);

        let rows: Vec<Vec<String>> = rdr
            .records()
            .map(|r| r.unwrap().iter().map(str::to_owned).collect())
            .collect();
        assert_eq!(
            rows,
            [
                ["4", "green", "0", "Quay", "en_route", "Central"],
                ["4", "green", "1", "Central", "en_route", "Quay"],
            ]
        );
    }

    #[test]
    fn queued_and_loading_have_no_destination() {
        let mut s = sim(10, 0, [2, 2, 2]);
        s.run_ticks(1, &mut troon_sim::NoopObserver).unwrap();
        let report = s.report(troon_core::Tick(0));

        let mut w = CsvWriter::from_writer(Vec::new(), &s.network.directory).unwrap();
        w.write_report(&report).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
        let out = String::from_utf8(w.into_inner().unwrap()).unwrap();

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[1], "0,blue,4,Quay,queued,");
        assert_eq!(lines[3], "0,green,0,Quay,loading,");
    }

    #[test]
    fn unwritable_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("trace.csv");
        let err = CsvWriter::create(&path, &shuttle().directory).err().unwrap();
        assert!(matches!(err, OutputError::Io(_)));
    }
}

// ── Composition ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod compose {
    use super::*;

    #[test]
    fn tuple_writes_both_backends() {
        let mut s = sim(5, 1, [2, 0, 0]);
        let text = TextWriter::new(Vec::new());
        let csv = CsvWriter::from_writer(Vec::new(), &s.network.directory).unwrap();
        let mut obs = ReportObserver::new((text, Some(csv)));
        s.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let (text, csv) = obs.into_writer();
        let text = String::from_utf8(text.into_inner().unwrap()).unwrap();
        let csv = String::from_utf8(csv.unwrap().into_inner().unwrap()).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert_eq!(csv.lines().count(), 3);
    }

    #[test]
    fn none_discards() {
        let mut s = sim(3, 2, [1, 1, 1]);
        let mut obs = ReportObserver::new(None::<TextWriter<Vec<u8>>>);
        s.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());
        assert_eq!(obs.reports(), 2);
    }

    #[test]
    fn first_error_is_kept_and_later_writes_still_attempted() {
        let mut s = sim(4, 3, [1, 0, 0]);
        let mut obs = ReportObserver::new((Failing::default(), TextWriter::new(Vec::new())));
        s.run(&mut obs).unwrap();

        let err = obs.take_error().unwrap();
        assert_eq!(err.to_string(), "I/O error");
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "disk full");
        assert!(obs.take_error().is_none());

        let (failing, text) = obs.into_writer();
        assert_eq!(failing.calls, 3);
        let text = String::from_utf8(text.into_inner().unwrap()).unwrap();
        assert_eq!(text.lines().count(), 3);
    }
}
