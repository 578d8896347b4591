//! Integration tests for rdv-output.

#[cfg(test)]
mod csv_tests {
    use rdv_core::Walker;
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{EncounterRow, TimelineRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn timeline_row(run: u64, seq: u32) -> TimelineRow {
        TimelineRow {
            run,
            walker:    Walker::B,
            seq,
            node:      seq * 10,
            x:         seq as f64 * 100.0,
            y:         50.0,
            time_secs: seq as f64 * 12.5,
        }
    }

    fn headers(path: std::path::PathBuf) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("timelines.csv").exists());
        assert!(dir.path().join("encounters.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(
            headers(dir.path().join("timelines.csv")),
            ["run", "walker", "seq", "node", "x", "y", "time_secs"]
        );
        assert_eq!(
            headers(dir.path().join("encounters.csv")),
            ["run", "met", "node", "time_secs", "other_node", "other_time_secs", "distance_m", "time_diff_secs"]
        );
    }

    #[test]
    fn timeline_rows_written_in_order() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_timeline_rows(&[timeline_row(4, 0), timeline_row(4, 1), timeline_row(4, 2)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("timelines.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "4");    // run
        assert_eq!(&rows[0][1], "B");    // walker
        assert_eq!(&rows[2][2], "2");    // seq
        assert_eq!(&rows[2][3], "20");   // node
        assert_eq!(&rows[2][4], "200");  // x
        assert_eq!(&rows[2][6], "25");   // time_secs
    }

    #[test]
    fn missed_encounter_has_empty_cells() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_encounter_row(&EncounterRow::missed(7)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("encounters.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "7");
        assert_eq!(&rows[0][1], "0");
        assert!((2..8).all(|i| rows[0][i].is_empty()));
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_timeline_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_timeline_rows(&[]).unwrap();
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("does/not/exist")).is_err());
    }
}

#[cfg(test)]
mod observer_tests {
    use rdv_core::{NodeId, PlanarPoint, Timestamp, WalkingPace};
    use rdv_sim::{
        AgentParams, CheckpointMode, ScenarioPlan, ScenarioSampler, SimConfig, SimObserver,
        Simulation, TripPlan,
    };
    use rdv_spatial::{AreaPartition, DijkstraRouter, StreetNetwork, StreetNetworkBuilder};

    use crate::{CsvWriter, EncounterRow, OutputResult, OutputWriter, SimOutputObserver, TimelineRow};

    /// Plus-shaped crossing: centre 0, arms 1..=4 at 100 m.
    fn plus() -> StreetNetwork {
        let mut b = StreetNetworkBuilder::new();
        let c = b.add_node(PlanarPoint::new(0.0, 0.0));
        for (x, y) in [(100.0, 0.0), (0.0, 100.0), (-100.0, 0.0), (0.0, -100.0)] {
            let arm = b.add_node(PlanarPoint::new(x, y));
            b.add_straight_street(c, arm).unwrap();
        }
        b.build()
    }

    fn walker() -> AgentParams {
        AgentParams::new(Timestamp(0.0), WalkingPace::Custom(1.0))
    }

    /// Writer that keeps rows in memory, optionally failing every call.
    #[derive(Default)]
    struct MemWriter {
        timelines:  Vec<TimelineRow>,
        encounters: Vec<EncounterRow>,
        finished:   u32,
        fail:       bool,
    }

    impl MemWriter {
        fn check(&self) -> OutputResult<()> {
            if self.fail {
                Err(std::io::Error::other("disk full").into())
            } else {
                Ok(())
            }
        }
    }

    impl OutputWriter for MemWriter {
        fn write_timeline_rows(&mut self, rows: &[TimelineRow]) -> OutputResult<()> {
            self.check()?;
            self.timelines.extend_from_slice(rows);
            Ok(())
        }
        fn write_encounter_row(&mut self, row: &EncounterRow) -> OutputResult<()> {
            self.check()?;
            self.encounters.push(*row);
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            self.check()
        }
    }

    #[test]
    fn run_rows_carry_coordinates_and_encounter() {
        let net = plus();
        let area = AreaPartition::from_nodes(&net, [NodeId(0)]).unwrap();
        let sim = Simulation::new(&net, DijkstraRouter, SimConfig::default()).unwrap();
        let plan = ScenarioPlan::new(
            TripPlan::new(NodeId(1), NodeId(0), NodeId(3)),
            TripPlan::new(NodeId(2), NodeId(0), NodeId(4)),
        );
        let result = sim.run(&area, &plan, &walker(), &walker()).unwrap();

        let mut obs = SimOutputObserver::new(MemWriter::default(), &net);
        obs.on_run_end(3, &result);
        assert!(obs.take_error().is_none());
        let w = obs.into_writer();

        assert_eq!(w.timelines.len(), 6);
        let first = w.timelines[0];
        assert_eq!((first.run, first.seq, first.node), (3, 0, 1));
        assert_eq!((first.x, first.y), (100.0, 0.0));
        let centre_b = w.timelines[4];
        assert_eq!((centre_b.node, centre_b.time_secs), (0, 100.0));

        // Both reach the centre at t=100; no earlier pair is within 20 m.
        assert_eq!(w.encounters.len(), 1);
        let e = w.encounters[0];
        assert!(e.met);
        assert_eq!(e.node, Some(0));
        assert_eq!(e.time_secs, Some(100.0));
        assert_eq!(e.distance_m, Some(0.0));
    }

    #[test]
    fn first_write_error_is_kept() {
        let net = plus();
        let area = AreaPartition::from_nodes(&net, [NodeId(0)]).unwrap();
        let sim = Simulation::new(&net, DijkstraRouter, SimConfig::default()).unwrap();
        let sampler = ScenarioSampler::new(&area, CheckpointMode::Shared);

        let writer = MemWriter { fail: true, ..MemWriter::default() };
        let mut obs = SimOutputObserver::new(writer, &net);
        sim.run_batch(&sampler, &walker(), &walker(), 2, &mut obs).unwrap();

        let err = obs.take_error().expect("stored error");
        assert!(err.to_string().contains("disk full"));
        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_writer().finished, 1);
    }

    #[test]
    fn integration_csv() {
        let net = plus();
        let area = AreaPartition::from_nodes(&net, [NodeId(0)]).unwrap();
        let sim = Simulation::new(&net, DijkstraRouter, SimConfig::default()).unwrap();
        let sampler = ScenarioSampler::new(&area, CheckpointMode::Shared);

        let dir = tempfile::tempdir().unwrap();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap(), &net);
        let summary = sim.run_batch(&sampler, &walker(), &walker(), 4, &mut obs).unwrap();
        assert!(obs.take_error().is_none());
        drop(obs);

        let mut rdr = csv::Reader::from_path(dir.path().join("encounters.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len() as u64, summary.completed());
        let runs: Vec<&str> = rows.iter().map(|r| r.get(0).unwrap()).collect();
        assert_eq!(runs, ["0", "1", "2", "3"]);

        // Every trip is arm → centre → arm: 3 timeline rows per walker.
        let mut rdr = csv::Reader::from_path(dir.path().join("timelines.csv")).unwrap();
        assert_eq!(rdr.records().count(), 4 * 2 * 3);
    }
}
