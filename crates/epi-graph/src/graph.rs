//! The `Graph` snapshot.

use epi_core::{HealthState, NodeId};

use crate::{Agent, Edge, Node, StateCounts, Venue};

/// One immutable snapshot of the simulation: every node and every presence
/// edge at a single tick.
///
/// A `Graph` is produced by [`build`](crate::build) or by the tick engine and
/// is never edited afterwards; the engine always returns a fresh one.  The
/// tick it belongs to lives in the accompanying `SimConfig`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    /// All agents in node order.
    pub fn agents(&self) -> impl Iterator<Item = &Agent> + '_ {
        self.nodes.iter().filter_map(Node::as_agent)
    }

    /// All venues in node order.
    pub fn venues(&self) -> impl Iterator<Item = &Venue> + '_ {
        self.nodes.iter().filter_map(Node::as_venue)
    }

    pub fn agent_count(&self) -> usize {
        self.agents().count()
    }

    /// Linear lookup by id.  Use [`GraphIndex`](crate::GraphIndex) for
    /// repeated lookups.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id() == id)
    }

    /// Number of agents currently in `state`.
    pub fn count(&self, state: HealthState) -> usize {
        self.agents().filter(|a| a.state == state).count()
    }

    /// Population totals per health state.
    pub fn counts(&self) -> StateCounts {
        StateCounts::from_agents(self.agents())
    }
}
