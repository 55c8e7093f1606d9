//! The `Sim` driver: owns the current snapshot and paces the engine.

use tracing::{info, warn};

use epi_core::{RunConfig, SimConfig, SimRng, Tick};
use epi_graph::{Graph, StateCounts, build};

use crate::engine::advance_with;
use crate::routing::{Commute, RoutingPolicy};
use crate::{SimObserver, SimResult};

/// The simulation runner.
///
/// `Sim` holds the current `(config, graph)` pair and replaces both on every
/// step with the engine's output.  It is the only place that knows about
/// `max_ticks`; [`advance`](crate::advance) itself never stops.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: RoutingPolicy = Commute> {
    /// Configuration of the current snapshot; `config.tick` is the clock.
    pub config: SimConfig,

    /// The current snapshot.  Replaced wholesale on every step.
    pub graph: Graph,

    /// Seed, tick limit, and snapshot interval.
    pub run_config: RunConfig,

    /// Movement policy handed to the engine every tick.
    pub policy: P,

    pub(crate) rng:      SimRng,
    pub(crate) restarts: u64,
}

impl<P: RoutingPolicy> Sim<P> {
    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn tick(&self) -> Tick {
        self.config.tick
    }

    /// `true` once the clock has reached `max_ticks`.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.tick() >= self.run_config.end_tick()
    }

    /// Per-state totals of the current snapshot.
    pub fn counts(&self) -> StateCounts {
        self.graph.counts()
    }

    /// How many times [`restart`](Self::restart) has been called.
    pub fn restarts(&self) -> u64 {
        self.restarts
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance one tick unless the run is already at `max_ticks`.
    ///
    /// Returns `Ok(true)` if the engine ran.  On error the current snapshot
    /// is left untouched.
    pub fn step(&mut self) -> SimResult<bool> {
        if self.is_finished() {
            warn!(tick = %self.tick(), max_ticks = self.run_config.max_ticks, "refusing to step past max_ticks");
            return Ok(false);
        }
        let (graph, config) = advance_with(&self.config, &self.graph, &self.policy, &mut self.rng)?;
        self.graph = graph;
        self.config = config;
        Ok(true)
    }

    /// Run from the current tick to `max_ticks`.
    ///
    /// Reports the starting snapshot, then calls the observer after every
    /// step.  Use [`NoopObserver`][crate::NoopObserver] if you don't need
    /// callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let start = self.tick();
        observer.on_sim_start(start, &self.graph);
        if start.is_multiple_of(self.run_config.output_interval_ticks) {
            observer.on_snapshot(start, &self.graph);
        }

        while !self.is_finished() {
            self.step()?;
            self.notify(observer);
        }

        observer.on_sim_end(self.tick());
        info!(
            from = %start,
            to = %self.tick(),
            counts = %self.counts(),
            "run finished"
        );
        Ok(())
    }

    /// Run at most `n` ticks from the current position, stopping early at
    /// `max_ticks`.  Returns how many ticks were actually advanced.
    ///
    /// Only `on_tick_end` and `on_snapshot` fire; useful for tests and
    /// incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<u64> {
        let mut advanced = 0;
        while advanced < n && !self.is_finished() {
            self.step()?;
            self.notify(observer);
            advanced += 1;
        }
        Ok(advanced)
    }

    // ── Restart ───────────────────────────────────────────────────────────

    /// Throw the current graph away and build a fresh one from `config`,
    /// back at tick 0.
    ///
    /// The new random stream is derived from the run seed and the restart
    /// count, so a restarted run is reproducible but not a replay of the
    /// first one.  If `config` is invalid nothing changes.
    pub fn restart(&mut self, config: SimConfig) -> SimResult<()> {
        let restarts = self.restarts + 1;
        let mut rng = SimRng::child(self.run_config.seed, restarts);
        let graph = build(&config, &mut rng)?;

        self.config = SimConfig { tick: Tick::ZERO, ..config };
        self.graph = graph;
        self.rng = rng;
        self.restarts = restarts;
        info!(restarts, population = self.graph.agent_count(), "simulation restarted");
        Ok(())
    }

    fn notify<O: SimObserver>(&self, observer: &mut O) {
        let now = self.tick();
        observer.on_tick_end(now, &self.counts());
        if now.is_multiple_of(self.run_config.output_interval_ticks) {
            observer.on_snapshot(now, &self.graph);
        }
    }
}
