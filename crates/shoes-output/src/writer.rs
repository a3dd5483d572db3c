//! The `OutputWriter` trait implemented by file backends.

use crate::{MetricsRow, OutputResult, ReadingRow};

/// Sink for the two output streams.
///
/// Errors are returned here but swallowed-and-stored by
/// [`DashboardOutputObserver`][crate::DashboardOutputObserver], whose hooks
/// have no return value.
pub trait OutputWriter {
    /// Write a batch of sensor readings (fast cadence).
    fn write_readings(&mut self, rows: &[ReadingRow]) -> OutputResult<()>;

    /// Write one metrics row (slow cadence).
    fn write_metrics(&mut self, row: &MetricsRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
