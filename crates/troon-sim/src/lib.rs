//! `troon-sim` — the per-tick simulation engine.
//!
//! # Four-phase tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Spawn   — each line with budget left injects one troon per direction
//!               into the holding area of its terminal spawn link.
//!   ② Advance — every link (in parallel): a transit due this tick arrives
//!               and is enqueued on the next link; a loading troon due this
//!               tick starts transiting.
//!   ③ Flush   — every link (in parallel): an empty loading slot is filled
//!               from the holding area, earliest arrival first.
//!   ④ Report  — inside the trailing report window only: snapshot every
//!               link per line, sort, and hand a `TickReport` to the observer.
//! ```
//!
//! Each fan-out ends with an implicit barrier.  Within a phase no link reads
//! another link's result from the same phase; the only shared write is
//! [`HoldingArea::enqueue`], which takes a lock scoped to one push.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | Runs phases ②–④ on a Rayon pool (default on).            |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use troon_network::load_scenario;
//! use troon_sim::{NoopObserver, SimBuilder};
//!
//! let scenario = load_scenario(path)?;
//! let mut sim = SimBuilder::from_scenario(scenario).threads(Some(8)).build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod holding;
pub mod link;
pub mod observer;
pub mod report;
pub mod sim;
pub mod troon;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use holding::{HoldingArea, Waiting};
pub use link::{Link, LinkStep};
pub use observer::{NoopObserver, SimObserver};
pub use report::{LineReport, ReportEntry, Status, TickReport};
pub use sim::{Census, Simulation, SpawnPoint};
pub use troon::Troon;
