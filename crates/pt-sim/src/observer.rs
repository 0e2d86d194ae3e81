//! Observer trait for presentation and instrumentation.

use pt_agent::{Dog, SpawnEdge};
use pt_core::{Millis, WalkId};

use crate::{TickReport, TrailState};

/// Callbacks invoked by [`Sim`][crate::Sim] as drivers fire.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers get shared references only;
/// presentation is a projection and never mutates the simulation.
///
/// # Example — HUD printer
///
/// ```rust,ignore
/// struct Hud;
///
/// impl SimObserver for Hud {
///     fn on_frame(&mut self, _now: Millis, state: &TrailState) {
///         println!("{} dogs walking, {} prints", state.agent_count(), state.print_count());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called after a frame tick has advanced and culled every dog, before
    /// [`on_frame`][Self::on_frame].
    fn on_tick_end(&mut self, _report: &TickReport) {}

    /// Called once per frame with the fully updated state.  This is the
    /// snapshot a renderer should draw.
    fn on_frame(&mut self, _now: Millis, _state: &TrailState) {}

    /// Called once per tick with the dogs that walked past the viewport margin
    /// and were removed.  Not called when nothing was culled.
    fn on_evict(&mut self, _now: Millis, _culled: &[WalkId]) {}

    /// Called after the spawner has added `dog`.
    fn on_spawn(&mut self, _now: Millis, _edge: SpawnEdge, _dog: &Dog) {}

    /// Called after each pruning pass with the number of prints removed.
    fn on_prune(&mut self, _now: Millis, _removed: usize) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
