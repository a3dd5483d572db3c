//! `shoes-sim`: the smart-shoes simulation engine and its host loop.
//!
//! # Two cadences
//!
//! ```text
//! every fast tick (500 ms):
//!   ① generate_reading(now): scenario dispatch, clamp/round, history push
//! every slow tick (2000 ms, after the fast tick at the same instant):
//!   ② update_steps         : step counter
//!   ③ update_battery       : slow drain
//!   ④ update_speed         : speed from closest obstacle
//!   ⑤ update_gps           : drift driven by ④
//! ```
//!
//! The engine never reads the system clock or a global RNG: time is a
//! parameter and randomness comes from the engine's own seeded [`SimRng`].
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use shoes_core::SimConfig;
//! use shoes_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default()).build()?;
//! sim.run(&mut NoopObserver);
//! println!("{} steps", sim.engine.step_count());
//! ```
//!
//! [`SimRng`]: shoes_core::SimRng

pub mod alert;
pub mod builder;
pub mod engine;
pub mod error;
pub mod mode;
pub mod observer;
pub mod shared;
pub mod sim;
pub mod snapshot;


pub use alert::EmergencyAlert;
pub use builder::{EngineBuilder, SimBuilder};
pub use engine::SimulationEngine;
pub use error::{SimError, SimResult};
pub use mode::{OperationMode, Sensitivity, SystemStatus};
pub use observer::{DashboardObserver, NoopObserver};
pub use shared::SharedEngine;
pub use sim::Sim;
pub use snapshot::Snapshot;
