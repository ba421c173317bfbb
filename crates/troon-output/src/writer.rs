//! The `ReportWriter` trait implemented by all backends.

use troon_sim::TickReport;

use crate::OutputResult;

/// Trait implemented by the text and CSV writers.
///
/// Errors are returned to the caller; [`ReportObserver`][crate::ReportObserver]
/// stores the first one for retrieval after the run.
pub trait ReportWriter {
    /// Write one tick's snapshot.
    fn write_report(&mut self, report: &TickReport) -> OutputResult<()>;

    /// Flush all underlying handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Write to both backends; the first error wins but both are attempted.
impl<A: ReportWriter, B: ReportWriter> ReportWriter for (A, B) {
    fn write_report(&mut self, report: &TickReport) -> OutputResult<()> {
        let first = self.0.write_report(report);
        let second = self.1.write_report(report);
        first.and(second)
    }

    fn finish(&mut self) -> OutputResult<()> {
        let first = self.0.finish();
        let second = self.1.finish();
        first.and(second)
    }
}

/// An optional backend; `None` discards everything.
impl<W: ReportWriter> ReportWriter for Option<W> {
    fn write_report(&mut self, report: &TickReport) -> OutputResult<()> {
        match self {
            Some(w) => w.write_report(report),
            None    => Ok(()),
        }
    }

    fn finish(&mut self) -> OutputResult<()> {
        match self {
            Some(w) => w.finish(),
            None    => Ok(()),
        }
    }
}
