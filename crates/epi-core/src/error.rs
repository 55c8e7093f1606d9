//! Engine error type.
//!
//! The engine has exactly two failure classes: a configuration it cannot
//! build from, and a graph it cannot advance.  Neither is retried.  Sub-crates
//! wrap `EpiError` as one variant of their own enums.

use thiserror::Error;

use crate::NodeId;

/// The top-level error type shared by `build` and `advance`.
#[derive(Debug, Error, PartialEq)]
pub enum EpiError {
    /// Out-of-range or inconsistent build inputs.  No graph is produced.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A node/edge set that is inconsistent with itself, usually mixed from
    /// two different builds.  The caller must rebuild.
    #[error("invalid graph: {0}")]
    InvalidGraph(#[from] GraphFault),
}

/// The specific inconsistency behind an [`EpiError::InvalidGraph`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphFault {
    #[error("node {0} appears more than once")]
    DuplicateNode(NodeId),

    #[error("edge {from} -> {to} references a missing node")]
    DanglingEdge { from: NodeId, to: NodeId },

    #[error("edge {from} -> {to} does not join an agent to a venue")]
    NotAgentVenuePair { from: NodeId, to: NodeId },

    #[error("agent {0} has no location edge")]
    Unplaced(NodeId),

    #[error("agent {0} has more than one location edge")]
    MultiplyPlaced(NodeId),

    #[error("agent {agent} records location {recorded} but its edge points at {edge}")]
    LocationMismatch { agent: NodeId, recorded: NodeId, edge: NodeId },

    #[error("routing sent agent {agent} to {venue}, which is neither its home nor a shared venue")]
    InvalidRoute { agent: NodeId, venue: NodeId },

    #[error("agent {agent} has home {home}, which is not a house")]
    HomeNotHouse { agent: NodeId, home: NodeId },

    #[error("agent {agent} is inside house {house}, which is not its home")]
    ForeignHouse { agent: NodeId, house: NodeId },
}

/// Shorthand result type for all `epi-*` crates.
pub type EpiResult<T> = Result<T, EpiError>;
