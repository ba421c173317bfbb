//! `troon-core` — foundational types for the troon rail simulator.
//!
//! This crate is a dependency of every other `troon-*` crate.  It has no
//! `troon-*` dependencies and only `thiserror` (plus optional `serde`)
//! externally.
//!
//! # What lives here
//!
//! | Module     | Contents                                            |
//! |------------|-----------------------------------------------------|
//! | [`ids`]    | `StationId`, `LinkId`, `TroonId`                    |
//! | [`time`]   | `Tick`, `SimClock`, `SimConfig`                     |
//! | [`line`]   | `Line` (green/yellow/blue), `Direction`             |
//! | [`error`]  | `CoreError`, `CoreResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod line;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{LinkId, StationId, TroonId};
pub use line::{Direction, Line};
pub use time::{SimClock, SimConfig, Tick};
