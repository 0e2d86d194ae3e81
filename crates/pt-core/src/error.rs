//! Framework error type.
//!
//! The running animation has no error domain: ticking, spawning, appending
//! and pruning are total.  Errors only surface while a simulation is being
//! assembled, which is why the enum is this small.

use thiserror::Error;

/// The top-level error type for `pt-core` and a common base for sub-crates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrailError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `pt-*` crates.
pub type TrailResult<T> = Result<T, TrailError>;
