//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `readings.csv`: one row per fast tick
//! - `metrics.csv` : one row per slow tick

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{MetricsRow, OutputResult, ReadingRow};

pub const READINGS_FILE: &str = "readings.csv";
pub const METRICS_FILE:  &str = "metrics.csv";

/// Writes simulator output to two CSV files.
pub struct CsvWriter {
    readings: Writer<File>,
    metrics:  Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut readings = Writer::from_path(dir.join(READINGS_FILE))?;
        readings.write_record(["tick", "timestamp_ms", "scenario", "left", "center", "right", "down"])?;

        let mut metrics = Writer::from_path(dir.join(METRICS_FILE))?;
        metrics.write_record([
            "tick", "timestamp_ms", "step_count", "battery_level", "walking_speed", "lat", "lon",
            "distance_walked_m",
        ])?;

        Ok(Self {
            readings,
            metrics,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_readings(&mut self, rows: &[ReadingRow]) -> OutputResult<()> {
        for row in rows {
            self.readings.write_record(&[
                row.tick.to_string(),
                row.timestamp_ms.to_string(),
                row.scenario.label().to_string(),
                row.left.to_string(),
                row.center.to_string(),
                row.right.to_string(),
                row.down.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_metrics(&mut self, row: &MetricsRow) -> OutputResult<()> {
        self.metrics.write_record(&[
            row.tick.to_string(),
            row.timestamp_ms.to_string(),
            row.step_count.to_string(),
            format!("{:.1}", row.battery_level),
            format!("{:.1}", row.walking_speed),
            format!("{:.6}", row.lat),
            format!("{:.6}", row.lon),
            format!("{:.2}", row.distance_walked_m),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.readings.flush()?;
        self.metrics.flush()?;
        Ok(())
    }
}
