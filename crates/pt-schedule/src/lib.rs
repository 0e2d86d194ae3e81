//! `pt-schedule` — the deferred-execution primitive behind every driver.
//!
//! # Crate layout
//!
//! | Module          | Contents                                               |
//! |-----------------|--------------------------------------------------------|
//! | [`timer_queue`] | `TimerQueue<E>`, `TimerId`, `Timer<E>`                 |
//!
//! # Model
//!
//! A driver that wants to run later pushes an event with a deadline and gets
//! back a [`TimerId`].  The event loop repeatedly pops the earliest due
//! event, runs it, and the driver decides whether to schedule again.  Stopping
//! a driver is cancelling its one pending id: once cancelled, the event can
//! never be popped, so nothing is left dangling.

pub mod timer_queue;


pub use timer_queue::{Timer, TimerId, TimerQueue};
