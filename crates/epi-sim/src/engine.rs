//! The tick engine: one pure step from `(config, graph)` to the next snapshot.
//!
//! # Phases
//!
//! ```text
//! advance(config, graph, rng):
//!   ⓪ Validate : GraphIndex::new; any fault aborts before anything is built.
//!   ① Transmit : group living agents by location (ascending venue id);
//!                 each susceptible agent gets one exposure draw per sick
//!                 co-occupant and is infected at most once.
//!   ② Progress : agents sick *before* this tick age by one; at
//!                 illness_duration they die with p_fatal, else recover.
//!                 Phase ① infections are applied after this step.
//!   ③ Move     : the routing policy picks every living agent's next
//!                 location, in node order.  Dead agents stay put.
//!   → fresh Graph (same node order, one edge per agent), tick + 1.
//! ```
//!
//! Every random draw happens in a fixed order (venue id, then node order), so
//! a seeded [`SimRng`](epi_core::SimRng) replays a run exactly.

use std::collections::BTreeMap;

use rand::Rng;
use tracing::debug;

use epi_core::{EpiResult, GraphFault, HealthState, NodeId, SimConfig};
use epi_graph::{Edge, Graph, GraphIndex, Node};

use crate::routing::{Commute, RoutingContext, RoutingPolicy};

/// Advance `graph` by one tick using the default [`Commute`] policy.
///
/// Returns the next snapshot and `config` with `tick + 1`; every other
/// configuration field passes through unchanged.  The inputs are never
/// modified.
///
/// # Errors
///
/// - `EpiError::InvalidGraph` if the node/edge set is inconsistent.
/// - `EpiError::InvalidConfiguration` if the disease parameters are out of
///   range.
pub fn advance<R: Rng + ?Sized>(
    config: &SimConfig,
    graph:  &Graph,
    rng:    &mut R,
) -> EpiResult<(Graph, SimConfig)> {
    advance_with(config, graph, &Commute, rng)
}

/// [`advance`] with an explicit routing policy.
///
/// Fails with `GraphFault::InvalidRoute` if `policy` sends an agent anywhere
/// other than its own home or a shared venue.
pub fn advance_with<P, R>(
    config: &SimConfig,
    graph:  &Graph,
    policy: &P,
    rng:    &mut R,
) -> EpiResult<(Graph, SimConfig)>
where
    P: RoutingPolicy,
    R: Rng + ?Sized,
{
    config.disease.validate()?;
    let index = GraphIndex::new(graph)?;
    let disease = &config.disease;

    // ── Phase 1: transmission ─────────────────────────────────────────────
    //
    // Occupancy is keyed by venue id in a BTreeMap so draws happen in the
    // same order regardless of hasher or node layout.
    let mut occupancy: BTreeMap<NodeId, Vec<usize>> = BTreeMap::new();
    for (slot, node) in graph.nodes.iter().enumerate() {
        let Some(agent) = node.as_agent() else { continue };
        if agent.state.is_alive() {
            occupancy.entry(agent.location).or_default().push(slot);
        }
    }

    let mut infected: Vec<usize> = Vec::new();
    for occupants in occupancy.values() {
        let infectious = occupants
            .iter()
            .filter(|&&slot| graph.nodes[slot].state() == Some(HealthState::Sick))
            .count();
        if infectious == 0 {
            continue;
        }
        for &slot in occupants {
            if graph.nodes[slot].state() != Some(HealthState::Susceptible) {
                continue;
            }
            if (0..infectious).any(|_| rng.gen_bool(disease.p_transmit)) {
                infected.push(slot);
            }
        }
    }

    // ── Phase 2: progression ──────────────────────────────────────────────
    let mut nodes = graph.nodes.clone();
    let mut resolved = 0usize;
    for node in nodes.iter_mut() {
        let Node::Agent(agent) = node else { continue };
        if agent.state != HealthState::Sick {
            continue;
        }
        agent.ticks_sick += 1;
        if agent.ticks_sick >= disease.illness_duration {
            agent.state = if rng.gen_bool(disease.p_fatal) {
                HealthState::Dead
            } else {
                HealthState::Recovered
            };
            resolved += 1;
        }
    }

    for &slot in &infected {
        if let Node::Agent(agent) = &mut nodes[slot] {
            agent.state = HealthState::Sick;
            agent.ticks_sick = 0;
        }
    }

    // ── Phase 3: movement ─────────────────────────────────────────────────
    let shared_venues = index.shared_venues();
    let ctx = RoutingContext {
        tick:          config.tick,
        shared_venues: &shared_venues,
        index:         &index,
    };
    for node in nodes.iter_mut() {
        let Node::Agent(agent) = node else { continue };
        if !agent.state.is_alive() {
            continue;
        }
        let next = policy.next_location(agent, &ctx, rng);
        let allowed = next == agent.home
            || index.venue_kind(next).is_some_and(|kind| kind.is_shared());
        if !allowed {
            return Err(GraphFault::InvalidRoute { agent: agent.id, venue: next }.into());
        }
        agent.location = next;
    }

    let edges: Vec<Edge> = nodes
        .iter()
        .filter_map(Node::as_agent)
        .map(|agent| Edge::new(agent.id, agent.location))
        .collect();

    let next = Graph::new(nodes, edges);
    let next_config = SimConfig { tick: config.tick.next(), ..config.clone() };

    debug!(
        tick = %next_config.tick,
        infected = infected.len(),
        resolved,
        counts = %next.counts(),
        "advanced one tick"
    );

    Ok((next, next_config))
}
