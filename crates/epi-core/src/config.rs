//! Simulation configuration.
//!
//! `SimConfig` is what the settings form produces and what the engine threads
//! through every call.  Only `tick` changes during a run; every other field is
//! fixed until the driver rebuilds the graph.
//!
//! With the `serde` feature, field names are camelCase (`agentsPerHouse`,
//! `percentageInitialVaccinatedAgents`, …) and every field is optional in a
//! config file, falling back to [`SimConfig::default`].  Unknown field names
//! are rejected.

use crate::{EpiError, EpiResult, Tick};

// ── DiseaseParams ─────────────────────────────────────────────────────────────

/// Per-contact and per-case constants of the disease model.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields, rename_all = "camelCase"))]
pub struct DiseaseParams {
    /// Probability that one sick co-occupant infects one susceptible agent
    /// during one tick.
    pub p_transmit: f64,

    /// Ticks an agent stays sick before resolving to recovered or dead.
    pub illness_duration: u32,

    /// Probability that a resolving case ends in death.
    pub p_fatal: f64,
}

impl Default for DiseaseParams {
    fn default() -> Self {
        Self {
            p_transmit:       0.05,
            illness_duration: 14,
            p_fatal:          0.03,
        }
    }
}

impl DiseaseParams {
    pub fn validate(&self) -> EpiResult<()> {
        check_probability("pTransmit", self.p_transmit)?;
        check_probability("pFatal", self.p_fatal)?;
        if self.illness_duration == 0 {
            return Err(invalid("illnessDuration must be at least 1 tick"));
        }
        Ok(())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Defaults reproduce the original village scenario: 42 houses of 9 agents,
/// one bus station, one hospital, three supermarkets, one temple, three
/// initial cases and 30 % of the population vaccinated.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields, rename_all = "camelCase"))]
pub struct SimConfig {
    /// Number of household venues.  Must be > 0.
    pub houses: u32,

    /// Residents per household.  Must be > 0.
    pub agents_per_house: u32,

    pub bus_stations: u32,
    pub hospitals:    u32,
    pub supermarkets: u32,
    pub temples:      u32,

    /// Agents seeded sick at build time.  At most the population.
    pub initial_sick_agents: u32,

    /// Share of the whole population seeded vaccinated, in percent.
    pub percentage_initial_vaccinated_agents: f64,

    /// Current step.  Zero after a build; managed by the engine afterwards.
    pub tick: Tick,

    pub disease: DiseaseParams,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            houses:                               42,
            agents_per_house:                     9,
            bus_stations:                         1,
            hospitals:                            1,
            supermarkets:                         3,
            temples:                              1,
            initial_sick_agents:                  3,
            percentage_initial_vaccinated_agents: 30.0,
            tick:                                 Tick::ZERO,
            disease:                              DiseaseParams::default(),
        }
    }
}

impl SimConfig {
    /// Total agents: `houses × agents_per_house`.
    #[inline]
    pub fn population(&self) -> u64 {
        self.houses as u64 * self.agents_per_house as u64
    }

    /// Number of shared (non-house) venues.
    #[inline]
    pub fn shared_venue_count(&self) -> u64 {
        self.bus_stations as u64
            + self.hospitals as u64
            + self.supermarkets as u64
            + self.temples as u64
    }

    /// Total graph nodes: every venue plus every agent.
    #[inline]
    pub fn node_count(&self) -> u64 {
        self.houses as u64 + self.shared_venue_count() + self.population()
    }

    /// Count configured for one venue kind.
    pub fn venue_count(&self, kind: crate::VenueKind) -> u32 {
        use crate::VenueKind::*;
        match kind {
            House       => self.houses,
            BusStation  => self.bus_stations,
            Hospital    => self.hospitals,
            Supermarket => self.supermarkets,
            Temple      => self.temples,
        }
    }

    /// Agents to vaccinate at build time:
    /// `round(percentage / 100 × population)`.
    ///
    /// `validate` rejects configs where this plus `initial_sick_agents`
    /// exceeds the population.
    pub fn initial_vaccinated_agents(&self) -> u64 {
        let wanted = (self.percentage_initial_vaccinated_agents / 100.0 * self.population() as f64).round();
        wanted.max(0.0) as u64
    }

    /// Check every build input.  Called by `epi_graph::build`; the engine
    /// does not re-validate on `advance`.
    pub fn validate(&self) -> EpiResult<()> {
        if self.houses == 0 {
            return Err(invalid("houses must be greater than 0"));
        }
        if self.agents_per_house == 0 {
            return Err(invalid("agentsPerHouse must be greater than 0"));
        }
        let population = self.population();
        if self.initial_sick_agents as u64 > population {
            return Err(invalid(format!(
                "initialSickAgents ({}) exceeds the population ({population})",
                self.initial_sick_agents,
            )));
        }
        let pct = self.percentage_initial_vaccinated_agents;
        if !pct.is_finite() || !(0.0..=100.0).contains(&pct) {
            return Err(invalid(format!(
                "percentageInitialVaccinatedAgents must be within 0–100, got {pct}"
            )));
        }
        let vaccinated = self.initial_vaccinated_agents();
        if self.initial_sick_agents as u64 + vaccinated > population {
            return Err(invalid(format!(
                "{} sick plus {vaccinated} vaccinated agents exceed the population ({population})",
                self.initial_sick_agents,
            )));
        }
        // NodeId::INVALID is reserved.
        if self.node_count() >= u32::MAX as u64 {
            return Err(invalid(format!(
                "{} nodes do not fit in the node id space",
                self.node_count()
            )));
        }
        self.disease.validate()
    }
}

fn check_probability(name: &str, p: f64) -> EpiResult<()> {
    if p.is_finite() && (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(invalid(format!("{name} must be a probability within 0–1, got {p}")))
    }
}

fn invalid(msg: impl Into<String>) -> EpiError {
    EpiError::InvalidConfiguration(msg.into())
}

// ── RunConfig ─────────────────────────────────────────────────────────────────

/// Driver settings: how long to run and how to seed it.
///
/// These never reach the engine; `advance` neither knows nor enforces
/// `max_ticks`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields, rename_all = "camelCase"))]
pub struct RunConfig {
    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,

    /// The driver stops advancing once `tick` reaches this value.
    pub max_ticks: u64,

    /// Emit a full graph snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed:                  42,
            max_ticks:             100,
            output_interval_ticks: 1,
        }
    }
}

impl RunConfig {
    /// The tick at which the run ends (exclusive upper bound for advancing).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.max_ticks)
    }
}
