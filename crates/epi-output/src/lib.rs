//! `epi-output`: run statistics and output writers for `epigraph`.
//!
//! | Type                   | Output                                                 |
//! |------------------------|--------------------------------------------------------|
//! | [`History`]            | in-memory per-state series (chart data)                |
//! | [`CsvWriter`]          | `agent_snapshots.csv`, `tick_summaries.csv`            |
//! | `SqliteWriter`         | `output.db` (feature `sqlite`)                         |
//! | [`FrameWriter`]        | `frames.jsonl`, one render frame per snapshot          |
//!
//! The tabular backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`]; `History` and `FrameWriter` are observers
//! themselves.  All of them implement `epi_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use epi_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod frames;
pub mod history;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use frames::{Frame, FrameWriter};
pub use history::History;
pub use observer::SimOutputObserver;
pub use row::{AgentSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
