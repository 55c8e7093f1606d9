//! `epi-core`: foundational types for the `epigraph` epidemic engine.
//!
//! This crate is a dependency of every other `epi-*` crate.  It has no
//! `epi-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `NodeId` (shared by venues and agents)                |
//! | [`time`]        | `Tick`                                                |
//! | [`health`]      | `HealthState`, `VenueKind`                            |
//! | [`config`]      | `SimConfig`, `DiseaseParams`, `RunConfig`             |
//! | [`rng`]         | `SimRng` (seeded, swappable random source)            |
//! | [`error`]       | `EpiError`, `GraphFault`, `EpiResult`                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                                                          |
//! |---------|-------------------------------------------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.  Required for config files and JSON frames. |

pub mod config;
pub mod error;
pub mod health;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{DiseaseParams, RunConfig, SimConfig};
pub use error::{EpiError, EpiResult, GraphFault};
pub use health::{HealthState, VenueKind};
pub use ids::NodeId;
pub use rng::SimRng;
pub use time::Tick;
