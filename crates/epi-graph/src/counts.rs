//! Per-state population totals.

use std::fmt;

use epi_core::HealthState;

use crate::Agent;

/// How many agents are in each health state at one tick.
///
/// `population` always equals the sum of the five state counts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StateCounts {
    pub population:  u64,
    pub susceptible: u64,
    pub sick:        u64,
    pub recovered:   u64,
    pub dead:        u64,
    pub vaccinated:  u64,
}

impl StateCounts {
    pub fn from_agents<'a>(agents: impl IntoIterator<Item = &'a Agent>) -> Self {
        let mut counts = StateCounts::default();
        for agent in agents {
            counts.add(agent.state);
        }
        counts
    }

    pub fn add(&mut self, state: HealthState) {
        self.population += 1;
        *self.slot_mut(state) += 1;
    }

    pub fn get(&self, state: HealthState) -> u64 {
        match state {
            HealthState::Susceptible => self.susceptible,
            HealthState::Sick        => self.sick,
            HealthState::Recovered   => self.recovered,
            HealthState::Dead        => self.dead,
            HealthState::Vaccinated  => self.vaccinated,
        }
    }

    /// Agents that are not dead.
    #[inline]
    pub fn alive(&self) -> u64 {
        self.population - self.dead
    }

    fn slot_mut(&mut self, state: HealthState) -> &mut u64 {
        match state {
            HealthState::Susceptible => &mut self.susceptible,
            HealthState::Sick        => &mut self.sick,
            HealthState::Recovered   => &mut self.recovered,
            HealthState::Dead        => &mut self.dead,
            HealthState::Vaccinated  => &mut self.vaccinated,
        }
    }
}

impl fmt::Display for StateCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "population={} susceptible={} sick={} recovered={} dead={} vaccinated={}",
            self.population, self.susceptible, self.sick, self.recovered, self.dead, self.vaccinated,
        )
    }
}
