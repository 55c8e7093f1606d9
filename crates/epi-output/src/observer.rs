//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use epi_core::Tick;
use epi_graph::{Graph, StateCounts};
use epi_sim::SimObserver;

use crate::row::{AgentSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes agent snapshots and tick summaries to any
/// [`OutputWriter`] backend (CSV, SQLite).
///
/// The starting tick gets a summary row too, so a run to `max_ticks` yields
/// `max_ticks + 1` summaries.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_sim_start(&mut self, tick: Tick, graph: &Graph) {
        let result = self.writer.write_tick_summary(&TickSummaryRow::new(tick, &graph.counts()));
        self.store_err(result);
    }

    fn on_tick_end(&mut self, tick: Tick, counts: &StateCounts) {
        let result = self.writer.write_tick_summary(&TickSummaryRow::new(tick, counts));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, graph: &Graph) {
        let rows: Vec<AgentSnapshotRow> = graph
            .agents()
            .map(|agent| AgentSnapshotRow::new(tick, agent))
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
