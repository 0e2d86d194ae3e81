//! `pt-core` — foundational types for the `pawtrail` ambient animation.
//!
//! This crate is a dependency of every other `pt-*` crate.  It intentionally
//! has no `pt-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                 |
//! |-----------------|----------------------------------------------------------|
//! | [`ids`]         | `WalkId`, `PrintId`, `IdCounter`                         |
//! | [`geo`]         | `Point`, heading step, paw placement (geometry engine)   |
//! | [`paw`]         | `PawSlot` and the four-beat gait order                   |
//! | [`time`]        | `Millis`, `Tick`, `Clock`, `ManualClock`, `MonotonicClock` |
//! | [`viewport`]    | `ViewportSize`, `Viewport`, `SharedViewport`             |
//! | [`rng`]         | `RandomSource`, `SimRng` (seeded), `SequenceRng` (scripted) |
//! | [`config`]      | `TrailConfig`                                            |
//! | [`error`]       | `TrailError`, `TrailResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod paw;
pub mod rng;
pub mod time;
pub mod viewport;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::TrailConfig;
pub use error::{TrailError, TrailResult};
pub use geo::Point;
pub use ids::{IdCounter, PrintId, WalkId};
pub use paw::PawSlot;
pub use rng::{RandomSource, SequenceRng, SimRng};
pub use time::{Clock, ManualClock, Millis, MonotonicClock, Tick};
pub use viewport::{SharedViewport, Viewport, ViewportSize};
