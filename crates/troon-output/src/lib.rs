//! `troon-output` — report writers for the troon rail simulator.
//!
//! | Writer        | Output                                                  |
//! |---------------|---------------------------------------------------------|
//! | `TextWriter`  | `"<tick>: <descriptors>"`, one line per reported tick   |
//! | `CsvWriter`   | one row per descriptor, for downstream tooling          |
//!
//! All writers implement [`ReportWriter`] and are driven by
//! [`ReportObserver`], which implements `troon_sim::SimObserver`.  Tuples
//! and `Option`s of writers are writers too, so backends compose:
//!
//! ```rust,ignore
//! use troon_output::{CsvWriter, ReportObserver, TextWriter};
//!
//! let text = TextWriter::new(std::io::stdout().lock());
//! let csv  = Some(CsvWriter::create(Path::new("trace.csv"), &sim.network.directory)?);
//! let mut obs = ReportObserver::new((text, csv));
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod text;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::ReportObserver;
pub use row::EntryRow;
pub use text::TextWriter;
pub use writer::ReportWriter;
