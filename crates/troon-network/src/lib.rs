//! `troon-network` — the static side of the simulation: stations, lines,
//! track segments, and the scenario file that describes them.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`directory`] | `StationDirectory` — station name ↔ id table               |
//! | [`routes`]    | `LineRoutes` — per-line station order + next-station table |
//! | [`network`]   | `RailNetwork`, `RailNetworkBuilder`, `Segment`, `LinkIndex`|
//! | [`loader`]    | `parse_scenario`, `load_scenario`, `Scenario`              |
//! | [`error`]     | `NetworkError`, `NetworkResult<T>`                         |
//!
//! Everything here is built once before the first tick and is read-only
//! while the simulation runs.

pub mod directory;
pub mod error;
pub mod loader;
pub mod network;
pub mod routes;


pub use directory::StationDirectory;
pub use error::{NetworkError, NetworkResult};
pub use loader::{Scenario, load_scenario, parse_scenario};
pub use network::{LinkIndex, RailNetwork, RailNetworkBuilder, Segment};
pub use routes::LineRoutes;
