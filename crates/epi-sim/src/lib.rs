//! `epi-sim`: tick engine and run driver for the `epigraph` epidemic model.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`engine`]    | `advance` / `advance_with`: the pure one-tick step       |
//! | [`routing`]   | `RoutingPolicy`, `RoutingContext`, `Commute`, `StayHome`  |
//! | [`sim`]       | `Sim`: owns the snapshot, enforces `max_ticks`           |
//! | [`builder`]   | `SimBuilder`                                              |
//! | [`observer`]  | `SimObserver`, `NoopObserver`                             |
//! | [`error`]     | `SimError`, `SimResult`                                   |
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                  |
//! |-----------|---------------------------------------------------------|
//! | `fx-hash` | FxHash for the per-tick graph validation lookups.       |
//!
//! # Quick-start
//!
//! ```rust
//! use epi_core::SimConfig;
//! use epi_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default()).max_ticks(10).build().unwrap();
//! sim.run(&mut NoopObserver).unwrap();
//! assert_eq!(sim.counts().population, 42 * 9);
//! ```

pub mod builder;
pub mod engine;
pub mod error;
pub mod observer;
pub mod routing;
pub mod sim;


pub use builder::SimBuilder;
pub use engine::{advance, advance_with};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use routing::{Commute, RoutingContext, RoutingPolicy, StayHome};
pub use sim::Sim;
