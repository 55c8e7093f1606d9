//! Vaccination sweep: one independent run per vaccination percentage.
//!
//! Runs share everything except `percentageInitialVaccinatedAgents` and go
//! through Rayon's pool.  Each `Sim` owns its graph and RNG, so results do
//! not depend on scheduling.

use anyhow::Result;
use rayon::prelude::*;
use tracing::info;

use epi_core::{HealthState, RunConfig, SimConfig};
use epi_graph::StateCounts;
use epi_output::History;
use epi_sim::{RoutingPolicy, SimBuilder};

/// Outcome of one sweep run.
#[derive(Debug, Clone, Copy)]
pub struct SweepRow {
    pub percentage: f64,
    pub last:       StateCounts,
    pub peak_sick:  u64,
}

pub fn run<P>(
    base:        &SimConfig,
    run_config:  &RunConfig,
    percentages: &[f64],
    policy:      P,
) -> Result<Vec<SweepRow>>
where
    P: RoutingPolicy + Clone,
{
    info!(runs = percentages.len(), "starting vaccination sweep");
    percentages
        .par_iter()
        .map(|&percentage| -> Result<SweepRow> {
            let config = SimConfig { percentage_initial_vaccinated_agents: percentage, ..base.clone() };
            let mut sim = SimBuilder::new(config)
                .run_config(RunConfig { output_interval_ticks: 0, ..run_config.clone() })
                .policy(policy.clone())
                .build()?;
            let mut history = History::new();
            sim.run(&mut history)?;
            Ok(SweepRow {
                percentage,
                last:      sim.counts(),
                peak_sick: history.peak(HealthState::Sick).map_or(0, |(_, n)| n),
            })
        })
        .collect()
}

pub fn print_table(rows: &[SweepRow]) {
    println!(
        "{:>11} {:>10} {:>6} {:>9} {:>6} {:>10} {:>9}",
        "VACCINATED%", "POPULATION", "DEAD", "RECOVERED", "SICK", "VACCINATED", "PEAK SICK",
    );
    for row in rows {
        println!(
            "{:>11.1} {:>10} {:>6} {:>9} {:>6} {:>10} {:>9}",
            row.percentage,
            row.last.population,
            row.last.dead,
            row.last.recovered,
            row.last.sick,
            row.last.vaccinated,
            row.peak_sick,
        );
    }
}
