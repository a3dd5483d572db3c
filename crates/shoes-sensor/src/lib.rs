//! `shoes-sensor`: the signal side of the smart-shoes simulator.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`reading`]  | `SensorReading` (clamped, rounded), `RawSignal`, `Direction`  |
//! | [`zone`]     | `Zone` severity tiers and `Zone::classify`                    |
//! | [`scenario`] | `Scenario`: the six 8-second walking contexts and formulas    |
//! | [`history`]  | `HistoryBuffer`: bounded FIFO of recent readings              |
//!
//! Nothing here owns mutable simulation state; `shoes-sim` composes these
//! pieces into the engine.

pub mod history;
pub mod reading;
pub mod scenario;
pub mod zone;

#[cfg(test)]
mod tests;

pub use history::HistoryBuffer;
pub use reading::{Direction, RawSignal, SensorReading};
pub use scenario::Scenario;
pub use zone::Zone;
