//! JSON-lines render frames.
//!
//! One line per snapshot, in the shape a force-directed renderer consumes:
//!
//! ```text
//! {"tick":3,"nodes":[{"type":"venue","id":0,"kind":"house"},…,{"type":"agent","id":51,"state":"sick"}],"edges":[{"source":51,"target":7},…]}
//! ```
//!
//! Nodes and edges keep engine order, so two runs with the same seed produce
//! byte-identical files.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use epi_core::Tick;
use epi_graph::{Edge, Graph, Node};
use epi_sim::SimObserver;

use crate::{OutputError, OutputResult};

/// One `(tick, nodes, edges)` snapshot, borrowed from a [`Graph`].
#[derive(Debug, Serialize)]
pub struct Frame<'a> {
    pub tick:  Tick,
    pub nodes: &'a [Node],
    pub edges: &'a [Edge],
}

impl<'a> Frame<'a> {
    pub fn new(tick: Tick, graph: &'a Graph) -> Self {
        Self { tick, nodes: &graph.nodes, edges: &graph.edges }
    }
}

/// Writes every snapshot it observes as one JSON line.
///
/// Like [`SimOutputObserver`](crate::SimOutputObserver) it keeps the first
/// write error for [`take_error`](Self::take_error).
pub struct FrameWriter<W: Write> {
    out:        W,
    frames:     u64,
    last_error: Option<OutputError>,
}

impl FrameWriter<BufWriter<File>> {
    /// Create `frames.jsonl` in `dir`.
    pub fn create(dir: &Path) -> OutputResult<Self> {
        let file = File::create(dir.join("frames.jsonl"))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> FrameWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, frames: 0, last_error: None }
    }

    /// Encode one frame and terminate it with a newline.
    pub fn write_frame(&mut self, tick: Tick, graph: &Graph) -> OutputResult<()> {
        serde_json::to_writer(&mut self.out, &Frame::new(tick, graph))?;
        self.out.write_all(b"\n")?;
        self.frames += 1;
        Ok(())
    }

    /// Frames written so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn flush(&mut self) -> OutputResult<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: Write> SimObserver for FrameWriter<W> {
    fn on_snapshot(&mut self, tick: Tick, graph: &Graph) {
        let result = self.write_frame(tick, graph);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        let result = self.flush();
        self.store_err(result);
        debug!(frames = self.frames, %final_tick, "frame stream flushed");
    }
}
