//! village: command-line driver for the epigraph epidemic model.
//!
//! Builds a village of houses and shared venues, seeds a few sick and some
//! vaccinated agents, and lets everyone commute between home and the shared
//! venues for `max_ticks` days.  Prints the final population table.
//!
//! ```text
//! village                                   # default village, 100 days
//! village --config village.json --out out --frames
//! village --sweep 0,50,95                   # compare vaccination rates
//! RUST_LOG=epi_sim=debug village --max-ticks 5
//! ```

mod config;
mod sweep;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use epi_core::{HealthState, RunConfig, SimConfig};
use epi_graph::StateCounts;
use epi_output::{CsvWriter, FrameWriter, History, SimOutputObserver};
use epi_sim::{Commute, RoutingPolicy, SimBuilder, StayHome};

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "village")]
#[command(about = "Agent-based epidemic on a village of houses and shared venues")]
struct Args {
    /// JSON config file (`{simulation, run}` or a bare population object)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for reproducibility (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of ticks (days) to simulate
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Snapshot interval in ticks; 0 disables per-agent snapshots
    #[arg(long)]
    interval: Option<u64>,

    /// Directory for tick_summaries.csv and agent_snapshots.csv
    #[arg(long)]
    out: Option<PathBuf>,

    /// Also write frames.jsonl (render frames) into the output directory
    #[arg(long, requires = "out")]
    frames: bool,

    /// Keep every agent at home instead of commuting
    #[arg(long)]
    stay_home: bool,

    /// Run once per vaccination percentage and print a comparison
    /// (no file output)
    #[arg(long, value_delimiter = ',', num_args = 1.., conflicts_with_all = ["out", "frames"])]
    sweep: Option<Vec<f64>>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let args = Args::parse();

    let (simulation, mut run) = match &args.config {
        Some(path) => config::load(path)?,
        None       => (SimConfig::default(), RunConfig::default()),
    };
    if let Some(seed) = args.seed {
        run.seed = seed;
    }
    if let Some(max_ticks) = args.max_ticks {
        run.max_ticks = max_ticks;
    }
    if let Some(interval) = args.interval {
        run.output_interval_ticks = interval;
    }

    println!("=== village (epigraph) ===");
    println!(
        "Houses: {} × {}  |  Shared venues: {}  |  Days: {}  |  Seed: {}",
        simulation.houses,
        simulation.agents_per_house,
        simulation.shared_venue_count(),
        run.max_ticks,
        run.seed,
    );
    println!();

    if let Some(percentages) = &args.sweep {
        let rows = if args.stay_home {
            sweep::run(&simulation, &run, percentages, StayHome)?
        } else {
            sweep::run(&simulation, &run, percentages, Commute)?
        };
        sweep::print_table(&rows);
        return Ok(());
    }

    let outputs = Outputs { dir: args.out.as_deref(), frames: args.frames };
    let (last, history) = if args.stay_home {
        run_single(simulation, run, StayHome, outputs)?
    } else {
        run_single(simulation, run, Commute, outputs)?
    };

    print_stats(&last, &history);
    Ok(())
}

// ── Single run ────────────────────────────────────────────────────────────────

#[derive(Clone, Copy)]
struct Outputs<'a> {
    dir:    Option<&'a Path>,
    frames: bool,
}

fn run_single<P: RoutingPolicy>(
    simulation: SimConfig,
    run:        RunConfig,
    policy:     P,
    outputs:    Outputs<'_>,
) -> Result<(StateCounts, History)> {
    let mut sim = SimBuilder::new(simulation)
        .run_config(run)
        .policy(policy)
        .build()?;

    let (csv, frames) = match outputs.dir {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating output directory {}", dir.display()))?;
            let csv = SimOutputObserver::new(CsvWriter::new(dir)?);
            let frames = if outputs.frames { Some(FrameWriter::create(dir)?) } else { None };
            (Some(csv), frames)
        }
        None => (None, None),
    };

    let mut observer = (History::new(), (csv, frames));
    let started = Instant::now();
    sim.run(&mut observer)?;
    info!(elapsed_ms = started.elapsed().as_millis() as u64, "simulation complete");

    let (history, (mut csv, mut frames)) = observer;
    if let Some(err) = csv.as_mut().and_then(SimOutputObserver::take_error) {
        return Err(err).context("writing CSV output");
    }
    if let Some(err) = frames.as_mut().and_then(FrameWriter::take_error) {
        return Err(err).context("writing frames.jsonl");
    }
    if let Some(dir) = outputs.dir {
        println!("Output written to {}", dir.display());
    }

    Ok((sim.counts(), history))
}

fn print_stats(last: &StateCounts, history: &History) {
    println!("{:<12} {:>8}", "POPULATION", last.population);
    println!("{:<12} {:>8}", "SUSCEPTIBLE", last.susceptible);
    println!("{:<12} {:>8}", "SICK", last.sick);
    println!("{:<12} {:>8}", "RECOVERED", last.recovered);
    println!("{:<12} {:>8}", "DEAD", last.dead);
    println!("{:<12} {:>8}", "VACCINATED", last.vaccinated);
    if let Some((tick, peak)) = history.peak(HealthState::Sick) {
        println!();
        println!("Peak sick: {peak} at {tick}");
    }
}
