//! Integration tests for epi-output.

use epi_core::{HealthState, SimConfig, Tick};
use epi_sim::{Sim, SimBuilder};
use tempfile::TempDir;

fn tmp() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

fn small_config() -> SimConfig {
    SimConfig {
        houses: 3,
        agents_per_house: 2,
        initial_sick_agents: 1,
        percentage_initial_vaccinated_agents: 0.0,
        ..SimConfig::default()
    }
}

fn sim(seed: u64, max_ticks: u64, interval: u64) -> Sim {
    SimBuilder::new(small_config())
        .seed(seed)
        .max_ticks(max_ticks)
        .output_interval(interval)
        .build()
        .unwrap()
}

// ── CSV ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use epi_graph::{Agent, StateCounts};
    use epi_core::NodeId;

    use super::*;
    use crate::csv::CsvWriter;
    use crate::observer::SimOutputObserver;
    use crate::row::{AgentSnapshotRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn read_all(path: std::path::PathBuf) -> (Vec<String>, Vec<csv::StringRecord>) {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        let headers = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        let rows = rdr.records().map(|r| r.unwrap()).collect();
        (headers, rows)
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("agent_snapshots.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let (headers, _) = read_all(dir.path().join("agent_snapshots.csv"));
        assert_eq!(headers, ["tick", "agent_id", "state", "location"]);

        let (headers, _) = read_all(dir.path().join("tick_summaries.csv"));
        assert_eq!(
            headers,
            ["tick", "population", "susceptible", "sick", "recovered", "dead", "vaccinated"]
        );
    }

    #[test]
    fn csv_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let mut agent = Agent::at_home(NodeId(9), NodeId(2));
        agent.state = HealthState::Sick;
        w.write_snapshots(&[AgentSnapshotRow::new(Tick(4), &agent)]).unwrap();

        let mut counts = StateCounts::default();
        counts.add(HealthState::Sick);
        counts.add(HealthState::Recovered);
        w.write_tick_summary(&TickSummaryRow::new(Tick(4), &counts)).unwrap();
        w.finish().unwrap();

        let (_, snaps) = read_all(dir.path().join("agent_snapshots.csv"));
        assert_eq!(snaps.len(), 1);
        assert_eq!(snaps[0].iter().collect::<Vec<_>>(), ["4", "9", "sick", "2"]);

        let (_, sums) = read_all(dir.path().join("tick_summaries.csv"));
        assert_eq!(sums[0].iter().collect::<Vec<_>>(), ["4", "2", "0", "1", "1", "0", "0"]);
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_snapshot_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[]).unwrap();
    }

    #[test]
    fn integration_csv() {
        let mut sim = sim(1, 6, 2);
        let dir = tmp();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        // Snapshots at ticks 0, 2, 4, 6 → 4 × 6 agents.
        let (_, snaps) = read_all(dir.path().join("agent_snapshots.csv"));
        assert_eq!(snaps.len(), 24);

        // One summary for the starting tick plus one per step.
        let (_, sums) = read_all(dir.path().join("tick_summaries.csv"));
        let ticks: Vec<&str> = sums.iter().map(|r| r.get(0).unwrap()).collect();
        assert_eq!(ticks, ["0", "1", "2", "3", "4", "5", "6"]);
        for row in &sums {
            assert_eq!(&row[1], "6", "population column");
        }
    }
}

// ── Frames ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod frame_tests {
    use epi_core::{NodeId, SimRng, VenueKind};
    use epi_graph::{Agent, Edge, Graph, Venue, build};
    use serde_json::{Value, json};

    use super::*;
    use crate::FrameWriter;

    fn run_to_bytes(seed: u64) -> Vec<u8> {
        let mut sim = sim(seed, 10, 1);
        let mut frames = FrameWriter::new(Vec::new());
        sim.run(&mut frames).unwrap();
        assert!(frames.take_error().is_none());
        frames.into_inner()
    }

    #[test]
    fn frame_shape() {
        let graph = Graph::new(
            vec![
                Venue { id: NodeId(0), kind: VenueKind::House }.into(),
                Agent::at_home(NodeId(1), NodeId(0)).into(),
            ],
            vec![Edge::new(NodeId(1), NodeId(0))],
        );
        let mut w = FrameWriter::new(Vec::new());
        w.write_frame(Tick(3), &graph).unwrap();
        let bytes = w.into_inner();
        assert_eq!(bytes.last(), Some(&b'\n'));

        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            value,
            json!({
                "tick": 3,
                "nodes": [
                    { "type": "venue", "id": 0, "kind": "house" },
                    { "type": "agent", "id": 1, "state": "susceptible" },
                ],
                "edges": [{ "source": 1, "target": 0 }],
            })
        );
    }

    #[test]
    fn one_line_per_snapshot() {
        let bytes = run_to_bytes(4);
        let text = String::from_utf8(bytes).unwrap();
        let ticks: Vec<u64> = text
            .lines()
            .map(|line| serde_json::from_str::<Value>(line).unwrap()["tick"].as_u64().unwrap())
            .collect();
        assert_eq!(ticks, (0..=10).collect::<Vec<_>>());
    }

    #[test]
    fn every_frame_has_one_edge_per_agent() {
        let text = String::from_utf8(run_to_bytes(6)).unwrap();
        for line in text.lines() {
            let frame: Value = serde_json::from_str(line).unwrap();
            let agents = frame["nodes"]
                .as_array()
                .unwrap()
                .iter()
                .filter(|n| n["type"] == "agent")
                .count();
            assert_eq!(agents, 6);
            assert_eq!(frame["edges"].as_array().unwrap().len(), agents);
        }
    }

    #[test]
    fn same_seed_gives_byte_identical_frames() {
        assert_eq!(run_to_bytes(2024), run_to_bytes(2024));
    }

    #[test]
    fn frames_file_created() {
        let dir = tmp();
        let config = small_config();
        let graph = build(&config, &mut SimRng::new(0)).unwrap();
        let mut w = FrameWriter::create(dir.path()).unwrap();
        w.write_frame(Tick::ZERO, &graph).unwrap();
        w.flush().unwrap();
        assert_eq!(w.frames(), 1);

        let text = std::fs::read_to_string(dir.path().join("frames.jsonl")).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}

// ── History ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod history_tests {
    use super::*;
    use crate::History;

    #[test]
    fn records_start_and_every_tick() {
        let mut sim = sim(3, 12, 0);
        let mut history = History::new();
        sim.run(&mut history).unwrap();

        assert_eq!(history.len(), 13);
        let ticks: Vec<Tick> = history.points().iter().map(|(t, _)| *t).collect();
        assert_eq!(ticks, (0..=12).map(Tick).collect::<Vec<_>>());
        assert_eq!(history.last(), Some(&sim.counts()));
        for (_, counts) in history.points() {
            assert_eq!(counts.population, 6);
        }
    }

    #[test]
    fn restart_starts_a_fresh_series() {
        let mut sim = sim(3, 5, 0);
        let mut history = History::new();
        sim.run(&mut history).unwrap();
        assert_eq!(history.len(), 6);

        sim.restart(SimConfig { houses: 4, ..small_config() }).unwrap();
        sim.run(&mut history).unwrap();
        assert_eq!(history.len(), 6);
        assert_eq!(history.points()[0].0, Tick::ZERO);
        assert_eq!(history.points()[0].1.population, 8);
    }

    #[test]
    fn series_and_peak() {
        let mut history = History::new();
        for (t, sick) in [(0, 1u64), (1, 3), (2, 3), (3, 0)] {
            let mut counts = epi_graph::StateCounts::default();
            for _ in 0..sick {
                counts.add(HealthState::Sick);
            }
            history.push(Tick(t), counts);
        }
        assert_eq!(history.series(HealthState::Sick), vec![1, 3, 3, 0]);
        assert_eq!(history.peak(HealthState::Sick), Some((Tick(1), 3)));
        assert_eq!(history.peak(HealthState::Dead), Some((Tick(0), 0)));

        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.peak(HealthState::Sick), None);
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use super::*;
    use crate::observer::SimOutputObserver;
    use crate::sqlite::SqliteWriter;

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn integration_sqlite() {
        let dir = tmp();
        let mut sim = sim(1, 4, 2);
        let mut obs = SimOutputObserver::new(SqliteWriter::new(dir.path()).unwrap());
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let snapshots: i64 = conn
            .query_row("SELECT COUNT(*) FROM agent_snapshots", [], |r| r.get(0))
            .unwrap();
        assert_eq!(snapshots, 3 * 6, "ticks 0, 2, 4 × 6 agents");

        let summaries: i64 = conn
            .query_row("SELECT COUNT(*) FROM tick_summaries", [], |r| r.get(0))
            .unwrap();
        assert_eq!(summaries, 5);

        let population: i64 = conn
            .query_row("SELECT population FROM tick_summaries WHERE tick = 4", [], |r| r.get(0))
            .unwrap();
        assert_eq!(population, 6);
    }
}
