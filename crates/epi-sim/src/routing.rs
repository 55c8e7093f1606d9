//! Movement policies: where each living agent goes next tick.

use rand::Rng;
use rand::seq::SliceRandom;

use epi_core::{NodeId, Tick};
use epi_graph::{Agent, GraphIndex};

/// Read-only view handed to a [`RoutingPolicy`] for every agent of a tick.
pub struct RoutingContext<'a> {
    /// The tick being advanced (the *input* tick, before the increment).
    pub tick: Tick,

    /// Every shared venue, in node order.
    pub shared_venues: &'a [NodeId],

    /// Validated lookups over the input graph.
    pub index: &'a GraphIndex<'a>,
}

/// Pluggable movement rule, evaluated once per living agent per tick.
///
/// Implementations return the agent's location for the next tick.  The
/// engine rejects any answer that is neither the agent's own home nor a
/// shared venue with `GraphFault::InvalidRoute`, so a policy can never put
/// an agent into somebody else's house.
///
/// All randomness must come from `rng`; the engine calls policies in
/// ascending node order, which keeps runs reproducible.
pub trait RoutingPolicy: Send + Sync {
    fn next_location<R: Rng + ?Sized>(
        &self,
        agent: &Agent,
        ctx:   &RoutingContext<'_>,
        rng:   &mut R,
    ) -> NodeId;
}

/// Home ↔ shared venue commute, alternating every tick.
///
/// An agent at home goes to a uniformly random shared venue; an agent out
/// at a venue goes back home.  With no shared venues configured everyone
/// stays home.
#[derive(Clone, Copy, Debug, Default)]
pub struct Commute;

impl RoutingPolicy for Commute {
    fn next_location<R: Rng + ?Sized>(
        &self,
        agent: &Agent,
        ctx:   &RoutingContext<'_>,
        rng:   &mut R,
    ) -> NodeId {
        if !agent.is_home() {
            return agent.home;
        }
        ctx.shared_venues.choose(rng).copied().unwrap_or(agent.home)
    }
}

/// Everyone stays in (or returns to) their own house.  Useful for isolation
/// scenarios and as a no-randomness baseline.
#[derive(Clone, Copy, Debug, Default)]
pub struct StayHome;

impl RoutingPolicy for StayHome {
    fn next_location<R: Rng + ?Sized>(
        &self,
        agent: &Agent,
        _ctx:  &RoutingContext<'_>,
        _rng:  &mut R,
    ) -> NodeId {
        agent.home
    }
}
