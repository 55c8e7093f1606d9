//! Presence edges.

use epi_core::NodeId;

/// "Agent `source` is currently at venue `target`."
///
/// Edges are undirected in meaning; [`GraphIndex`](crate::GraphIndex) accepts
/// either orientation.  The builder and the engine always emit
/// agent → venue.  An edge set describes one tick only and is rebuilt every
/// tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
}

impl Edge {
    #[inline]
    pub fn new(agent: NodeId, venue: NodeId) -> Self {
        Self { source: agent, target: venue }
    }
}
