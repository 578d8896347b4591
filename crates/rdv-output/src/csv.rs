//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `timelines.csv`
//! - `encounters.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{EncounterRow, OutputResult, TimelineRow};
use crate::writer::OutputWriter;

pub const TIMELINE_HEADER: [&str; 7] = ["run", "walker", "seq", "node", "x", "y", "time_secs"];

pub const ENCOUNTER_HEADER: [&str; 8] = [
    "run",
    "met",
    "node",
    "time_secs",
    "other_node",
    "other_time_secs",
    "distance_m",
    "time_diff_secs",
];

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    timelines:  Writer<File>,
    encounters: Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` (which must exist) and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut timelines = Writer::from_path(dir.join("timelines.csv"))?;
        timelines.write_record(TIMELINE_HEADER)?;

        let mut encounters = Writer::from_path(dir.join("encounters.csv"))?;
        encounters.write_record(ENCOUNTER_HEADER)?;

        log::debug!("writing CSV output to {}", dir.display());
        Ok(Self {
            timelines,
            encounters,
            finished: false,
        })
    }
}

fn opt<T: ToString>(v: Option<T>) -> String {
    v.map(|v| v.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_timeline_rows(&mut self, rows: &[TimelineRow]) -> OutputResult<()> {
        for row in rows {
            self.timelines.write_record(&[
                row.run.to_string(),
                row.walker.as_str().to_owned(),
                row.seq.to_string(),
                row.node.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.time_secs.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_encounter_row(&mut self, row: &EncounterRow) -> OutputResult<()> {
        self.encounters.write_record(&[
            row.run.to_string(),
            (row.met as u8).to_string(),
            opt(row.node),
            opt(row.time_secs),
            opt(row.other_node),
            opt(row.other_time_secs),
            opt(row.distance_m),
            opt(row.time_diff_secs),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.timelines.flush()?;
        self.encounters.flush()?;
        Ok(())
    }
}
