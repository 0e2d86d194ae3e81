//! `pt-sim` — the simulation controller for the pawtrail animation.
//!
//! # Three drivers, one thread
//!
//! ```text
//! Sim::run_until(deadline):
//!   while the earliest pending timer is due by `deadline`:
//!     clock.wait_until(timer)            ── ManualClock jumps, MonotonicClock sleeps
//!     Frame  → tick(): advance dogs, emit due prints, cull off-screen dogs
//!              reschedule at now + frame_interval
//!     Spawn  → add one dog from a random edge
//!              reschedule at now + uniform(spawn delay range)
//!     Prune  → drop prints at or past max age
//!              reschedule at deadline + prune_interval
//! ```
//!
//! Every driver keeps at most one pending timer.  [`Sim::stop`] cancels them,
//! which is the whole of shutdown: no callback is ever left queued.  Effects
//! that already happened (spawned dogs, stamped prints) stay.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use pt_core::{ManualClock, Millis, TrailConfig, ViewportSize};
//! use pt_sim::{NoopObserver, SimBuilder};
//!
//! let clock = ManualClock::new(Millis::ZERO);
//! let mut sim = SimBuilder::new(TrailConfig::default(), clock, ViewportSize::new(1280.0, 800.0))
//!     .build()?;
//! sim.start()?;
//! sim.run_until(Millis(30_000), &mut NoopObserver);
//! sim.stop();
//! ```

pub mod builder;
pub mod driver;
pub mod error;
pub mod observer;
pub mod sim;
pub mod state;


pub use builder::SimBuilder;
pub use driver::DriverKind;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Sim, TickReport};
pub use state::TrailState;
