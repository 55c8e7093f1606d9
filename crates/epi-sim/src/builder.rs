//! Fluent builder for constructing a [`Sim`].

use tracing::info;

use epi_core::{RunConfig, SimConfig, SimRng, Tick};
use epi_graph::build;

use crate::routing::{Commute, RoutingPolicy};
use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<P>`].
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default                         |
/// |------------------------|---------------------------------|
/// | `.seed(s)`             | 42                              |
/// | `.max_ticks(n)`        | 100                             |
/// | `.output_interval(n)`  | 1 (snapshot every tick)         |
/// | `.run_config(r)`       | `RunConfig::default()`          |
/// | `.policy(p)`           | [`Commute`]                     |
///
/// # Example
///
/// ```rust
/// use epi_core::SimConfig;
/// use epi_sim::{NoopObserver, SimBuilder, StayHome};
///
/// let config = SimConfig { houses: 3, agents_per_house: 2, initial_sick_agents: 1, ..SimConfig::default() };
/// let mut sim = SimBuilder::new(config)
///     .seed(7)
///     .max_ticks(20)
///     .policy(StayHome)
///     .build()
///     .unwrap();
/// sim.run(&mut NoopObserver).unwrap();
/// assert_eq!(sim.tick().0, 20);
/// ```
pub struct SimBuilder<P: RoutingPolicy = Commute> {
    config: SimConfig,
    run:    RunConfig,
    policy: P,
}

impl SimBuilder {
    /// Start from a population configuration with default run settings and
    /// the [`Commute`] policy.
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            run:    RunConfig::default(),
            policy: Commute,
        }
    }
}

impl<P: RoutingPolicy> SimBuilder<P> {
    /// Replace all run settings at once (e.g. from a config file).
    pub fn run_config(mut self, run: RunConfig) -> Self {
        self.run = run;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.run.seed = seed;
        self
    }

    pub fn max_ticks(mut self, max_ticks: u64) -> Self {
        self.run.max_ticks = max_ticks;
        self
    }

    /// Snapshot every `interval` ticks; 0 disables snapshots.
    pub fn output_interval(mut self, interval: u64) -> Self {
        self.run.output_interval_ticks = interval;
        self
    }

    /// Swap the movement policy.
    pub fn policy<Q: RoutingPolicy>(self, policy: Q) -> SimBuilder<Q> {
        SimBuilder {
            config: self.config,
            run:    self.run,
            policy,
        }
    }

    /// Validate, build the initial graph, and return a ready-to-run [`Sim`]
    /// at tick 0.
    pub fn build(self) -> SimResult<Sim<P>> {
        if self.run.max_ticks == 0 {
            return Err(SimError::Config("max_ticks must be at least 1".into()));
        }

        let mut rng = SimRng::new(self.run.seed);
        let graph = build(&self.config, &mut rng)?;
        info!(
            seed = self.run.seed,
            max_ticks = self.run.max_ticks,
            population = graph.agent_count(),
            "simulation ready"
        );

        Ok(Sim {
            config:     SimConfig { tick: Tick::ZERO, ..self.config },
            graph,
            run_config: self.run,
            policy:     self.policy,
            rng,
            restarts:   0,
        })
    }
}
