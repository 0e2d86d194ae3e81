//! The `Sim` controller and its tick algorithm.

use pt_core::{Clock, Millis, RandomSource, Tick, TrailConfig, Viewport, WalkId};
use pt_ledger::Print;
use pt_schedule::{Timer, TimerQueue};
use tracing::{debug, info, trace};

use crate::driver::DriverSlots;
use crate::{DriverKind, SimError, SimObserver, SimResult, TrailState};

/// What one frame tick did.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    /// Frame number after this tick.
    pub tick: Tick,
    pub now: Millis,
    /// Dogs advanced (the population before culling).
    pub advanced: usize,
    /// Prints stamped this tick.
    pub printed: usize,
    /// Prints pushed out of the ledger by capacity this tick.
    pub overflowed: usize,
    /// Dogs that walked out of bounds this tick.
    pub culled: Vec<WalkId>,
}

/// The animation controller.
///
/// `Sim` owns the [`TrailState`] and the three drivers that mutate it.  Create
/// via [`SimBuilder`][crate::SimBuilder]; a new `Sim` is stopped until
/// [`start`][Self::start] is called.
pub struct Sim<C: Clock, V: Viewport, R: RandomSource> {
    pub config: TrailConfig,

    /// Source of "now".  Read for aging and step gating; asked to wait by the
    /// event loop.
    pub clock: C,

    /// Read live at spawn and cull time.
    pub viewport: V,

    /// Every random draw of the animation goes through here.
    pub rng: R,

    /// Dogs, prints, and the frame counter.
    pub state: TrailState,

    pub(crate) timers:  TimerQueue<DriverKind>,
    pub(crate) drivers: DriverSlots,
}

impl<C: Clock, V: Viewport, R: RandomSource> Sim<C, V, R> {
    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// `true` while at least one driver is scheduled.
    pub fn is_running(&self) -> bool {
        self.drivers.any_active()
    }

    /// `true` if `kind` has a pending firing.
    pub fn is_driver_running(&self, kind: DriverKind) -> bool {
        self.drivers.pending(kind).is_some()
    }

    /// Start all three drivers.
    ///
    /// The spawner is due immediately, so the first dog appears on the first
    /// event-loop pass.  The frame clock first fires one frame interval from
    /// now and pruning one prune interval from now.
    pub fn start(&mut self) -> SimResult<()> {
        if self.is_running() {
            return Err(SimError::AlreadyRunning);
        }
        for kind in DriverKind::ALL {
            self.start_driver(kind);
        }
        info!(now = %self.clock.now(), "pawtrail drivers started");
        Ok(())
    }

    /// Start a single driver.  Returns `false` if it was already running.
    pub fn start_driver(&mut self, kind: DriverKind) -> bool {
        if self.is_driver_running(kind) {
            return false;
        }
        let now = self.clock.now();
        let first = match kind {
            DriverKind::Frame => now + self.config.frame_interval_ms,
            DriverKind::Spawn => now,
            DriverKind::Prune => now + self.config.prune_interval_ms,
        };
        debug!(driver = %kind, first = %first, "driver started");
        self.schedule(kind, first);
        true
    }

    /// Stop every driver.  Returns how many pending firings were cancelled.
    pub fn stop(&mut self) -> usize {
        let cancelled = DriverKind::ALL
            .into_iter()
            .filter(|&kind| self.stop_driver(kind))
            .count();
        info!(now = %self.clock.now(), cancelled, "pawtrail drivers stopped");
        cancelled
    }

    /// Stop a single driver.  Returns `false` if it was not running.
    pub fn stop_driver(&mut self, kind: DriverKind) -> bool {
        match self.drivers.slot_mut(kind).take() {
            Some(id) => self.timers.cancel(id).is_some(),
            None => false,
        }
    }

    /// Stop all drivers and hand back the final state.
    pub fn shutdown(mut self) -> TrailState {
        self.stop();
        self.state
    }

    // ── Event loop ────────────────────────────────────────────────────────

    /// Dispatch every driver firing due at or before `deadline`, in deadline
    /// order, waiting on the clock between them.  Leaves the clock at
    /// `deadline` and returns the number of firings dispatched.
    pub fn run_until<O: SimObserver>(&mut self, deadline: Millis, observer: &mut O) -> usize {
        let mut fired = 0;
        while let Some(next) = self.timers.next_deadline() {
            if next > deadline {
                break;
            }
            self.clock.wait_until(next);
            let Some(timer) = self.timers.pop_due(self.clock.now()) else {
                continue;
            };
            self.dispatch(timer, observer);
            fired += 1;
        }
        self.clock.wait_until(deadline);
        fired
    }

    /// [`run_until`][Self::run_until] `ms` milliseconds from now.
    pub fn run_for<O: SimObserver>(&mut self, ms: u64, observer: &mut O) -> usize {
        let deadline = self.clock.now() + ms;
        self.run_until(deadline, observer)
    }

    fn schedule(&mut self, kind: DriverKind, at: Millis) {
        let id = self.timers.schedule(at, kind);
        *self.drivers.slot_mut(kind) = Some(id);
    }

    fn dispatch<O: SimObserver>(&mut self, timer: Timer<DriverKind>, observer: &mut O) {
        let kind = timer.event;
        if self.drivers.pending(kind) != Some(timer.id) {
            return;
        }
        *self.drivers.slot_mut(kind) = None;

        match kind {
            DriverKind::Frame => {
                self.tick(observer);
                let next = self.clock.now() + self.config.frame_interval_ms;
                self.schedule(kind, next);
            }
            DriverKind::Spawn => {
                self.spawn(observer);
                let delay = self.config.sample_spawn_delay(&mut self.rng);
                let next = self.clock.now() + delay;
                self.schedule(kind, next);
            }
            DriverKind::Prune => {
                self.prune(observer);
                let next = timer.deadline + self.config.prune_interval_ms;
                self.schedule(kind, next);
            }
        }
    }

    // ── Driver bodies ─────────────────────────────────────────────────────

    /// One frame of the simulation clock.
    ///
    /// For every dog, in registry order:
    ///
    /// 1. advance `speed` units along its heading;
    /// 2. draw a fresh step threshold and, if the time since its last print
    ///    exceeds it, stamp a print for the next paw at the new position;
    ///
    /// then cull every dog outside the viewport margin.  The threshold is
    /// re-drawn on every tick whether or not it fires.
    pub fn tick<O: SimObserver>(&mut self, observer: &mut O) -> TickReport {
        let now = self.clock.now();
        let TrailState { agents, ledger, tick } = &mut self.state;

        let advanced = agents.len();
        let mut printed = 0;
        let mut overflowed = 0;

        for dog in agents.iter_mut() {
            dog.advance();

            let threshold = self.config.sample_step_interval(&mut self.rng);
            if !dog.step_due(now, threshold) {
                continue;
            }

            let slot = dog.take_step(now);
            let id = ledger.mint_id();
            let print = Print::stamp(
                id,
                dog.id,
                dog.position,
                dog.heading,
                dog.size,
                slot,
                now,
                &mut self.rng,
            );
            trace!(print = %id, walk = %dog.id, paw = %slot, x = print.position.x, y = print.position.y, "paw print");
            overflowed += ledger.append(print);
            printed += 1;
        }

        let culled = agents.cull_outside(self.viewport.size(), self.config.offscreen_margin);
        *tick = tick.next();
        if !culled.is_empty() {
            observer.on_evict(now, &culled);
        }

        let report = TickReport {
            tick: *tick,
            now,
            advanced,
            printed,
            overflowed,
            culled,
        };
        observer.on_tick_end(&report);
        observer.on_frame(now, &self.state);
        report
    }

    /// One firing of the spawner: add a dog from a random edge.
    pub fn spawn<O: SimObserver>(&mut self, observer: &mut O) -> WalkId {
        let now = self.clock.now();
        let viewport = self.viewport.size();
        let (edge, id) = self.state.agents.spawn(&mut self.rng, viewport, &self.config, now);
        if let Some(dog) = self.state.agents.get(id) {
            observer.on_spawn(now, edge, dog);
        }
        id
    }

    /// One firing of the pruning driver.  Returns the number of prints removed.
    pub fn prune<O: SimObserver>(&mut self, observer: &mut O) -> usize {
        let now = self.clock.now();
        let removed = self
            .state
            .ledger
            .prune_older_than(now, self.config.print_max_age_ms);
        if removed > 0 {
            debug!(
                removed,
                remaining = self.state.ledger.len(),
                fading = self.state.ledger.fading_count(now, self.config.fade_after_ms),
                "pruned expired prints"
            );
        }
        observer.on_prune(now, removed);
        removed
    }
}
