//! `shoes-output`: presentation adapters for the smart-shoes simulator.
//!
//! Two adapters are provided, both implementing
//! `shoes_sim::DashboardObserver`:
//!
//! | Adapter                     | Output                                           |
//! |-----------------------------|--------------------------------------------------|
//! | [`DashboardOutputObserver`] | any [`OutputWriter`]; [`CsvWriter`] creates `readings.csv` + `metrics.csv` |
//! | [`TextDashboard`]           | a plain-text dashboard frame per snapshot        |
//!
//! # Usage
//!
//! ```rust,ignore
//! use shoes_output::{CsvWriter, DashboardOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = DashboardOutputObserver::new(writer);
//! sim.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod text;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::DashboardOutputObserver;
pub use row::{MetricsRow, ReadingRow};
pub use text::{TextDashboard, render};
pub use writer::OutputWriter;
