//! `FrameRecorder` — a `SimObserver` that keeps the newest render frame.

use pt_agent::{Dog, SpawnEdge};
use pt_core::{Millis, TrailConfig, WalkId};
use pt_sim::{SimObserver, TrailState};

use crate::RenderFrame;

/// Projects every published frame into a [`RenderFrame`] and tallies driver
/// activity.
///
/// Only the latest frame is kept; a host that wants history should clone it
/// out after each [`Sim::run_until`][pt_sim::Sim::run_until] call.
pub struct FrameRecorder {
    config:     TrailConfig,
    last_frame: Option<RenderFrame>,
    frames:     u64,
    spawned:    u64,
    evicted:    u64,
    pruned:     u64,
}

impl FrameRecorder {
    /// `config` supplies the fade threshold and stagger step.
    pub fn new(config: &TrailConfig) -> Self {
        Self {
            config:     config.clone(),
            last_frame: None,
            frames:     0,
            spawned:    0,
            evicted:    0,
            pruned:     0,
        }
    }

    pub fn last_frame(&self) -> Option<&RenderFrame> {
        self.last_frame.as_ref()
    }

    pub fn take_frame(&mut self) -> Option<RenderFrame> {
        self.last_frame.take()
    }

    /// Frames published so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Dogs introduced by the spawner.
    pub fn spawned(&self) -> u64 {
        self.spawned
    }

    /// Dogs culled for leaving the viewport.
    pub fn evicted(&self) -> u64 {
        self.evicted
    }

    /// Prints removed by age pruning.  Capacity eviction is not counted.
    pub fn pruned(&self) -> u64 {
        self.pruned
    }
}

impl SimObserver for FrameRecorder {
    fn on_frame(&mut self, now: Millis, state: &TrailState) {
        self.frames += 1;
        self.last_frame = Some(RenderFrame::project(state, now, &self.config));
    }

    fn on_spawn(&mut self, _now: Millis, _edge: SpawnEdge, _dog: &Dog) {
        self.spawned += 1;
    }

    fn on_evict(&mut self, _now: Millis, culled: &[WalkId]) {
        self.evicted += culled.len() as u64;
    }

    fn on_prune(&mut self, _now: Millis, removed: usize) {
        self.pruned += removed as u64;
    }
}
