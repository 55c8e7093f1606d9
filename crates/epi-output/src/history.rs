//! Per-state time series of a run.

use epi_core::{HealthState, Tick};
use epi_graph::{Graph, StateCounts};
use epi_sim::SimObserver;

/// Population totals at every tick of the most recent run, oldest first.
///
/// Starting a run (`on_sim_start`) clears whatever was recorded before, so a
/// `History` reused across [`Sim::restart`](epi_sim::Sim::restart) only ever
/// holds the current run.
#[derive(Clone, Debug, Default)]
pub struct History {
    points: Vec<(Tick, StateCounts)>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn push(&mut self, tick: Tick, counts: StateCounts) {
        self.points.push((tick, counts));
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[(Tick, StateCounts)] {
        &self.points
    }

    /// The most recent totals.
    pub fn last(&self) -> Option<&StateCounts> {
        self.points.last().map(|(_, counts)| counts)
    }

    /// One value per recorded tick for `state`.
    pub fn series(&self, state: HealthState) -> Vec<u64> {
        self.points.iter().map(|(_, counts)| counts.get(state)).collect()
    }

    /// Highest count reached for `state` and the first tick it was reached.
    pub fn peak(&self, state: HealthState) -> Option<(Tick, u64)> {
        let mut best: Option<(Tick, u64)> = None;
        for &(tick, counts) in &self.points {
            let value = counts.get(state);
            if best.is_none_or(|(_, top)| value > top) {
                best = Some((tick, value));
            }
        }
        best
    }
}

impl SimObserver for History {
    fn on_sim_start(&mut self, tick: Tick, graph: &Graph) {
        self.clear();
        self.push(tick, graph.counts());
    }

    fn on_tick_end(&mut self, tick: Tick, counts: &StateCounts) {
        self.push(tick, *counts);
    }
}
