//! `epi-graph`: the agent/venue graph and its builder.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`node`]      | `Node`, `Agent`, `Venue`                                     |
//! | [`edge`]      | `Edge`: "agent is currently at venue"                       |
//! | [`graph`]     | `Graph`: one immutable node/edge snapshot                   |
//! | [`counts`]    | `StateCounts`: per-health-state population totals           |
//! | [`index`]     | `GraphIndex`: validated id lookup and agent locations       |
//! | [`builder`]   | `build`: initial population from a `SimConfig`              |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                     |
//! |-----------|------------------------------------------------------------|
//! | `fx-hash` | FxHash instead of SipHash for `GraphIndex` lookups.        |
//! | `serde`   | `Serialize` on nodes/edges/counts in the render shape.     |

pub mod builder;
pub mod counts;
pub mod edge;
pub mod graph;
pub mod index;
pub mod node;


pub use builder::build;
pub use counts::StateCounts;
pub use edge::Edge;
pub use graph::Graph;
pub use index::GraphIndex;
pub use node::{Agent, Node, Venue};
