//! Plain data row types written by output backends.

use epi_core::{HealthState, Tick};
use epi_graph::{Agent, StateCounts};

/// One agent's health state and location at a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentSnapshotRow {
    pub tick:     u64,
    pub agent_id: u32,
    pub state:    HealthState,
    /// Venue id the agent occupies.
    pub location: u32,
}

impl AgentSnapshotRow {
    pub fn new(tick: Tick, agent: &Agent) -> Self {
        Self {
            tick:     tick.0,
            agent_id: agent.id.0,
            state:    agent.state,
            location: agent.location.0,
        }
    }
}

/// Population totals for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:        u64,
    pub population:  u64,
    pub susceptible: u64,
    pub sick:        u64,
    pub recovered:   u64,
    pub dead:        u64,
    pub vaccinated:  u64,
}

impl TickSummaryRow {
    pub fn new(tick: Tick, counts: &StateCounts) -> Self {
        Self {
            tick:        tick.0,
            population:  counts.population,
            susceptible: counts.susceptible,
            sick:        counts.sick,
            recovered:   counts.recovered,
            dead:        counts.dead,
            vaccinated:  counts.vaccinated,
        }
    }
}
