//! Validated lookup view over a [`Graph`].
//!
//! The tick engine never trusts its input.  `GraphIndex::new` checks every
//! structural invariant once, up front, and afterwards hands out infallible
//! lookups:
//!
//! - node ids are unique;
//! - every edge joins an existing agent to an existing venue (either
//!   orientation);
//! - every agent has exactly one edge, and it agrees with `Agent::location`;
//! - every agent's home is a house;
//! - an agent inside a house is inside its own home.
//!
//! Faults are reported in node order, then edge order, so the same broken
//! graph always yields the same error.
//!
//! The id tables are hash maps keyed by `NodeId` and are only ever probed,
//! never iterated, so the hasher choice (`fx-hash` feature) cannot affect
//! results.

use epi_core::{EpiResult, GraphFault, NodeId, VenueKind};

use crate::{Agent, Graph, Node};

#[cfg(feature = "fx-hash")]
type NodeMap<V> = rustc_hash::FxHashMap<NodeId, V>;
#[cfg(not(feature = "fx-hash"))]
type NodeMap<V> = std::collections::HashMap<NodeId, V>;

/// Id → node lookup plus each agent's resolved location.
pub struct GraphIndex<'g> {
    graph:     &'g Graph,
    slots:     NodeMap<usize>,
    locations: NodeMap<NodeId>,
}

impl<'g> GraphIndex<'g> {
    /// Validate `graph` and build the lookup tables.
    pub fn new(graph: &'g Graph) -> EpiResult<Self> {
        let mut slots: NodeMap<usize> =
            NodeMap::with_capacity_and_hasher(graph.nodes.len(), Default::default());
        for (slot, node) in graph.nodes.iter().enumerate() {
            if slots.insert(node.id(), slot).is_some() {
                return Err(GraphFault::DuplicateNode(node.id()).into());
            }
        }

        let mut index = Self {
            graph,
            slots,
            locations: NodeMap::with_capacity_and_hasher(graph.edges.len(), Default::default()),
        };

        for edge in &graph.edges {
            let (from, to) = (edge.source, edge.target);
            let (Some(a), Some(b)) = (index.node(from), index.node(to)) else {
                return Err(GraphFault::DanglingEdge { from, to }.into());
            };
            let (agent, venue) = match (a, b) {
                (Node::Agent(agent), Node::Venue(venue))
                | (Node::Venue(venue), Node::Agent(agent)) => (agent.id, venue.id),
                _ => return Err(GraphFault::NotAgentVenuePair { from, to }.into()),
            };
            if index.locations.insert(agent, venue).is_some() {
                return Err(GraphFault::MultiplyPlaced(agent).into());
            }
        }

        for agent in graph.agents() {
            if index.venue_kind(agent.home) != Some(VenueKind::House) {
                return Err(GraphFault::HomeNotHouse { agent: agent.id, home: agent.home }.into());
            }
            let Some(&edge) = index.locations.get(&agent.id) else {
                return Err(GraphFault::Unplaced(agent.id).into());
            };
            if edge != agent.location {
                return Err(GraphFault::LocationMismatch {
                    agent:    agent.id,
                    recorded: agent.location,
                    edge,
                }
                .into());
            }
            if edge != agent.home && index.venue_kind(edge) == Some(VenueKind::House) {
                return Err(GraphFault::ForeignHouse { agent: agent.id, house: edge }.into());
            }
        }

        Ok(index)
    }

    /// The graph this index was built over.
    #[inline]
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn node(&self, id: NodeId) -> Option<&'g Node> {
        self.slots.get(&id).map(|&slot| &self.graph.nodes[slot])
    }

    pub fn agent(&self, id: NodeId) -> Option<&'g Agent> {
        self.node(id).and_then(Node::as_agent)
    }

    /// Kind of venue `id`; `None` if `id` is an agent or unknown.
    pub fn venue_kind(&self, id: NodeId) -> Option<VenueKind> {
        self.node(id).and_then(Node::as_venue).map(|v| v.kind)
    }

    /// Where `agent` is this tick, according to its edge.
    ///
    /// Returns `None` only for ids that are not agents of this graph.
    pub fn location(&self, agent: NodeId) -> Option<NodeId> {
        self.locations.get(&agent).copied()
    }

    /// Ids of all shared venues, in node order.
    pub fn shared_venues(&self) -> Vec<NodeId> {
        self.graph
            .venues()
            .filter(|v| v.kind.is_shared())
            .map(|v| v.id)
            .collect()
    }
}
