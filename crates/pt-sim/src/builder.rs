//! Fluent builder for constructing a [`Sim`].

use pt_core::{Clock, RandomSource, SimRng, TrailConfig, Viewport};
use pt_schedule::TimerQueue;

use crate::driver::DriverSlots;
use crate::{Sim, SimResult, TrailState};

/// Fluent builder for [`Sim<C, V, R>`].
///
/// # Required inputs
///
/// - [`TrailConfig`] — capacities, lifetimes, driver cadences, seed
/// - `C: Clock` — e.g. [`pt_core::ManualClock`] or [`pt_core::MonotonicClock`]
/// - `V: Viewport` — a fixed [`pt_core::ViewportSize`] or a
///   [`pt_core::SharedViewport`] the host resizes
///
/// # Optional inputs (have defaults)
///
/// | Method      | Default                          |
/// |-------------|----------------------------------|
/// | `.rng(r)`   | `SimRng::new(config.seed)`       |
pub struct SimBuilder<C: Clock, V: Viewport, R: RandomSource = SimRng> {
    config:   TrailConfig,
    clock:    C,
    viewport: V,
    rng:      R,
}

impl<C: Clock, V: Viewport> SimBuilder<C, V, SimRng> {
    /// Create a builder with all required inputs.
    pub fn new(config: TrailConfig, clock: C, viewport: V) -> Self {
        let rng = SimRng::new(config.seed);
        Self { config, clock, viewport, rng }
    }
}

impl<C: Clock, V: Viewport, R: RandomSource> SimBuilder<C, V, R> {
    /// Replace the random source (e.g. with a scripted
    /// [`pt_core::SequenceRng`] in tests).
    pub fn rng<R2: RandomSource>(self, rng: R2) -> SimBuilder<C, V, R2> {
        SimBuilder {
            config:   self.config,
            clock:    self.clock,
            viewport: self.viewport,
            rng,
        }
    }

    /// Validate the configuration and return a stopped [`Sim`].
    pub fn build(self) -> SimResult<Sim<C, V, R>> {
        self.config.validate()?;
        Ok(Sim {
            state:    TrailState::new(self.config.ledger_capacity),
            config:   self.config,
            clock:    self.clock,
            viewport: self.viewport,
            rng:      self.rng,
            timers:   TimerQueue::new(),
            drivers:  DriverSlots::default(),
        })
    }
}
