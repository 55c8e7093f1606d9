//! Graph nodes: venues and agents.
//!
//! With the `serde` feature a node serializes to the shape renderers expect:
//!
//! ```text
//! { "id": 3,  "type": "venue", "kind": "house" }
//! { "id": 51, "type": "agent", "state": "sick" }
//! ```
//!
//! Home, location, and the illness counter are engine-internal and are not
//! part of that shape; location is conveyed by the edge set instead.

use epi_core::{HealthState, NodeId, VenueKind};

/// A location agents can occupy.  Venues carry no mutable state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Venue {
    pub id:   NodeId,
    pub kind: VenueKind,
}

/// One simulated individual.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Agent {
    pub id:    NodeId,
    pub state: HealthState,

    /// The house this agent lives in.  Never changes.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub home: NodeId,

    /// The venue the agent occupies this tick.  Mirrors the agent's edge.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub location: NodeId,

    /// Ticks spent sick so far.  Reset to 0 on infection; meaningless in any
    /// other state.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub ticks_sick: u32,
}

impl Agent {
    /// A susceptible agent standing in its own home.
    pub fn at_home(id: NodeId, home: NodeId) -> Self {
        Self {
            id,
            state: HealthState::Susceptible,
            home,
            location: home,
            ticks_sick: 0,
        }
    }

    #[inline]
    pub fn is_home(&self) -> bool {
        self.location == self.home
    }
}

/// A graph node.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum Node {
    Venue(Venue),
    Agent(Agent),
}

impl Node {
    #[inline]
    pub fn id(&self) -> NodeId {
        match self {
            Node::Venue(v) => v.id,
            Node::Agent(a) => a.id,
        }
    }

    #[inline]
    pub fn as_agent(&self) -> Option<&Agent> {
        match self {
            Node::Agent(a) => Some(a),
            Node::Venue(_) => None,
        }
    }

    #[inline]
    pub fn as_venue(&self) -> Option<&Venue> {
        match self {
            Node::Venue(v) => Some(v),
            Node::Agent(_) => None,
        }
    }

    /// Health state for agents; `None` for venues.
    #[inline]
    pub fn state(&self) -> Option<HealthState> {
        self.as_agent().map(|a| a.state)
    }
}

impl From<Agent> for Node {
    fn from(agent: Agent) -> Self {
        Node::Agent(agent)
    }
}

impl From<Venue> for Node {
    fn from(venue: Venue) -> Self {
        Node::Venue(venue)
    }
}
