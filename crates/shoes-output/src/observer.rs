//! `DashboardOutputObserver<W>`: bridges `DashboardObserver` to an `OutputWriter`.

use shoes_core::Tick;
use shoes_sim::{DashboardObserver, SimulationEngine};

use crate::row::{MetricsRow, ReadingRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`DashboardObserver`] that records every reading and every metrics
/// update to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because observer hooks
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct DashboardOutputObserver<W: OutputWriter> {
    writer:     W,
    readings:   u64,
    metrics:    u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> DashboardOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            readings:   0,
            metrics:    0,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Rows handed to the writer so far: `(readings, metrics)`.
    pub fn rows_written(&self) -> (u64, u64) {
        (self.readings, self.metrics)
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
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

impl<W: OutputWriter> DashboardObserver for DashboardOutputObserver<W> {
    fn on_fast_tick(&mut self, tick: Tick, engine: &SimulationEngine) {
        let row = ReadingRow::new(tick, engine.current());
        let result = self.writer.write_readings(&[row]);
        if result.is_ok() {
            self.readings += 1;
        }
        self.store_err(result);
    }

    fn on_slow_tick(&mut self, tick: Tick, engine: &SimulationEngine) {
        let row = MetricsRow::from_engine(tick, engine);
        let result = self.writer.write_metrics(&row);
        if result.is_ok() {
            self.metrics += 1;
        }
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
