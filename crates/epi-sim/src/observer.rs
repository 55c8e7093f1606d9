//! Simulation observer trait for progress reporting and data collection.

use epi_core::Tick;
use epi_graph::{Graph, StateCounts};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] and
/// [`Sim::run_ticks`][crate::Sim::run_ticks].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust
/// use epi_core::Tick;
/// use epi_graph::StateCounts;
/// use epi_sim::SimObserver;
///
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, counts: &StateCounts) {
///         println!("{tick}: {counts}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once before the first tick, with the snapshot the run starts
    /// from (tick 0 after a fresh build or a restart).
    fn on_sim_start(&mut self, _tick: Tick, _graph: &Graph) {}

    /// Called after every successful advance.  `tick` is the tick just
    /// produced; `counts` describes that snapshot.
    fn on_tick_end(&mut self, _tick: Tick, _counts: &StateCounts) {}

    /// Called at snapshot intervals (every `output_interval_ticks` ticks,
    /// tick 0 included).
    ///
    /// Gets the full graph so output writers can record per-agent rows or
    /// render frames without the sim knowing about any specific format.
    fn on_snapshot(&mut self, _tick: Tick, _graph: &Graph) {}

    /// Called once after the final tick.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

// ── Combinators ───────────────────────────────────────────────────────────────

/// Fan out to two observers, first `.0` then `.1`.  Nest pairs for more.
impl<A: SimObserver, B: SimObserver> SimObserver for (A, B) {
    fn on_sim_start(&mut self, tick: Tick, graph: &Graph) {
        self.0.on_sim_start(tick, graph);
        self.1.on_sim_start(tick, graph);
    }

    fn on_tick_end(&mut self, tick: Tick, counts: &StateCounts) {
        self.0.on_tick_end(tick, counts);
        self.1.on_tick_end(tick, counts);
    }

    fn on_snapshot(&mut self, tick: Tick, graph: &Graph) {
        self.0.on_snapshot(tick, graph);
        self.1.on_snapshot(tick, graph);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.0.on_sim_end(final_tick);
        self.1.on_sim_end(final_tick);
    }
}

/// An optional observer; `None` behaves like [`NoopObserver`].
impl<O: SimObserver> SimObserver for Option<O> {
    fn on_sim_start(&mut self, tick: Tick, graph: &Graph) {
        if let Some(o) = self {
            o.on_sim_start(tick, graph);
        }
    }

    fn on_tick_end(&mut self, tick: Tick, counts: &StateCounts) {
        if let Some(o) = self {
            o.on_tick_end(tick, counts);
        }
    }

    fn on_snapshot(&mut self, tick: Tick, graph: &Graph) {
        if let Some(o) = self {
            o.on_snapshot(tick, graph);
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        if let Some(o) = self {
            o.on_sim_end(final_tick);
        }
    }
}
