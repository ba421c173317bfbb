//! Plain-text report backend.

use std::io::{BufWriter, Write};

use troon_sim::TickReport;

use crate::OutputResult;
use crate::writer::ReportWriter;

/// Writes each report as one line: `"<tick>: "` followed by every troon
/// descriptor and a space.
pub struct TextWriter<W: Write> {
    out: BufWriter<W>,
}

impl<W: Write> TextWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out: BufWriter::new(out) }
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> OutputResult<W> {
        self.out
            .into_inner()
            .map_err(|e| e.into_error().into())
    }
}

impl<W: Write> ReportWriter for TextWriter<W> {
    fn write_report(&mut self, report: &TickReport) -> OutputResult<()> {
        writeln!(self.out, "{report}")?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.out.flush()?;
        Ok(())
    }
}
