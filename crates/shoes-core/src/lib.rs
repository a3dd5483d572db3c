//! `shoes-core`: foundational types for the smart-shoes sensor simulator.
//!
//! This crate is a dependency of every other `shoes-*` crate.  It has no
//! `shoes-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geo`]         | `GeoPoint`, `GeoBounds`, haversine distance           |
//! | [`time`]        | `SimTime`, `Tick`, `SimClock`, `SimConfig`            |
//! | [`rng`]         | `SimRng` (seedable jitter source)                     |
//! | [`error`]       | `ShoesError`, `ShoesResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ShoesError, ShoesResult};
pub use geo::{GeoBounds, GeoPoint};
pub use rng::SimRng;
pub use time::{SimClock, SimConfig, SimTime, Tick};
