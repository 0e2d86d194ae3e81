//! Driver identities and their pending-timer slots.

use pt_schedule::TimerId;

/// The three self-rescheduling drivers of the animation.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum DriverKind {
    /// Per-frame simulation clock.
    Frame,
    /// Randomized dog spawner.
    Spawn,
    /// Fixed-period print pruning.
    Prune,
}

impl DriverKind {
    pub const ALL: [DriverKind; 3] = [DriverKind::Frame, DriverKind::Spawn, DriverKind::Prune];

    pub fn as_str(self) -> &'static str {
        match self {
            DriverKind::Frame => "frame",
            DriverKind::Spawn => "spawn",
            DriverKind::Prune => "prune",
        }
    }
}

impl std::fmt::Display for DriverKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The pending timer of each driver; `None` means stopped.
#[derive(Default, Debug)]
pub(crate) struct DriverSlots {
    frame: Option<TimerId>,
    spawn: Option<TimerId>,
    prune: Option<TimerId>,
}

impl DriverSlots {
    pub(crate) fn slot_mut(&mut self, kind: DriverKind) -> &mut Option<TimerId> {
        match kind {
            DriverKind::Frame => &mut self.frame,
            DriverKind::Spawn => &mut self.spawn,
            DriverKind::Prune => &mut self.prune,
        }
    }

    pub(crate) fn pending(&self, kind: DriverKind) -> Option<TimerId> {
        match kind {
            DriverKind::Frame => self.frame,
            DriverKind::Spawn => self.spawn,
            DriverKind::Prune => self.prune,
        }
    }

    pub(crate) fn any_active(&self) -> bool {
        DriverKind::ALL.iter().any(|&k| self.pending(k).is_some())
    }
}
