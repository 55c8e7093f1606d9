//! Initial population builder.
//!
//! # Layout
//!
//! Ids are assigned densely, in this order:
//!
//! ```text
//! houses │ bus stations │ hospitals │ supermarkets │ temples │ agents (house by house)
//! ```
//!
//! Every agent starts in its own house, with one edge pointing there.
//!
//! # Usage
//!
//! ```rust
//! use epi_core::{HealthState, SimConfig, SimRng};
//!
//! let config = SimConfig { houses: 2, agents_per_house: 3, initial_sick_agents: 1, ..SimConfig::default() };
//! let graph = epi_graph::build(&config, &mut SimRng::new(42)).unwrap();
//!
//! assert_eq!(graph.agent_count(), 6);
//! assert_eq!(graph.count(HealthState::Sick), 1);
//! ```

use rand::Rng;
use rand::seq::index;
use tracing::info;

use epi_core::{EpiResult, HealthState, NodeId, SimConfig, VenueKind};

use crate::{Agent, Edge, Graph, Node, Venue};

/// Build the initial graph for `config`.
///
/// Picks exactly `initial_sick_agents` agents uniformly without replacement
/// and marks them sick, then picks
/// [`initial_vaccinated_agents`](SimConfig::initial_vaccinated_agents) of the
/// remaining agents and marks them vaccinated.  Everyone else is susceptible.
///
/// Fails with `EpiError::InvalidConfiguration` (and builds nothing) if
/// `config` does not validate.  `config.tick` is ignored: a fresh graph always
/// belongs to whatever tick the caller pairs it with, normally zero.
pub fn build<R: Rng + ?Sized>(config: &SimConfig, rng: &mut R) -> EpiResult<Graph> {
    config.validate()?;

    // validate() guarantees node_count < u32::MAX, so these casts are lossless.
    let population = config.population() as usize;
    let mut nodes: Vec<Node> = Vec::with_capacity(config.node_count() as usize);
    let mut next_id: u32 = 0;
    let mut fresh_id = || {
        let id = NodeId(next_id);
        next_id += 1;
        id
    };

    // ── Venues ────────────────────────────────────────────────────────────
    let houses: Vec<NodeId> = (0..config.houses).map(|_| fresh_id()).collect();
    nodes.extend(houses.iter().map(|&id| Node::from(Venue { id, kind: VenueKind::House })));

    for kind in VenueKind::SHARED {
        for _ in 0..config.venue_count(kind) {
            nodes.push(Venue { id: fresh_id(), kind }.into());
        }
    }

    // ── Agents ────────────────────────────────────────────────────────────
    let mut agents: Vec<Agent> = Vec::with_capacity(population);
    for &house in &houses {
        for _ in 0..config.agents_per_house {
            agents.push(Agent::at_home(fresh_id(), house));
        }
    }

    // ── Initial health states ─────────────────────────────────────────────
    let sick = config.initial_sick_agents as usize;
    let mut healthy = vec![true; population];
    for i in index::sample(rng, population, sick) {
        agents[i].state = HealthState::Sick;
        healthy[i] = false;
    }

    let remaining: Vec<usize> = (0..population).filter(|&i| healthy[i]).collect();
    let vaccinated = config.initial_vaccinated_agents() as usize;
    for pick in index::sample(rng, remaining.len(), vaccinated) {
        agents[remaining[pick]].state = HealthState::Vaccinated;
    }

    let edges: Vec<Edge> = agents.iter().map(|a| Edge::new(a.id, a.home)).collect();
    nodes.extend(agents.into_iter().map(Node::from));

    info!(
        houses = config.houses,
        shared_venues = config.shared_venue_count(),
        population,
        sick,
        vaccinated,
        "built initial graph"
    );

    Ok(Graph::new(nodes, edges))
}
