//! CSV report backend.
//!
//! Writes a header row on creation and then one row per troon descriptor:
//!
//! ```csv
//! tick,line,troon,station,status,destination
//! 9,blue,4,Central,queued,
//! 9,green,0,Quay,en_route,Central
//! ```

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;

use troon_network::StationDirectory;
use troon_sim::TickReport;

use crate::row::EntryRow;
use crate::writer::ReportWriter;
use crate::{OutputError, OutputResult};

/// Writes reports as CSV rows.
pub struct CsvWriter<W: Write = File> {
    out:       csv::Writer<W>,
    directory: StationDirectory,
    finished:  bool,
}

impl CsvWriter<File> {
    /// Create (or truncate) the file at `path` and write the header row.
    pub fn create(path: &Path, directory: &StationDirectory) -> OutputResult<Self> {
        Self::from_writer(File::create(path)?, directory)
    }
}

impl<W: Write> CsvWriter<W> {
    /// Wrap any writer and write the header row.
    pub fn from_writer(out: W, directory: &StationDirectory) -> OutputResult<Self> {
        let mut out = WriterBuilder::new().has_headers(false).from_writer(out);
        out.write_record(EntryRow::HEADER)?;
        Ok(Self {
            out,
            directory: directory.clone(),
            finished:  false,
        })
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> OutputResult<W> {
        self.out
            .into_inner()
            .map_err(|e| OutputError::Io(e.into_error()))
    }
}

impl<W: Write> ReportWriter for CsvWriter<W> {
    fn write_report(&mut self, report: &TickReport) -> OutputResult<()> {
        for entry in report.entries() {
            self.out.serialize(EntryRow::new(report.tick, entry, &self.directory))?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
