//! Read-only projection of the simulation state for one frame.

use pt_core::{Millis, PawSlot, PrintId, Tick, TrailConfig, WalkId};
use pt_ledger::Print;
use pt_sim::TrailState;

/// Heading line shown above the counters.
pub const TITLE: &str = "Dogs Walking";

/// One print as the presentation layer should draw it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrintView {
    pub id:       PrintId,
    pub walk:     WalkId,
    pub x:        f64,
    pub y:        f64,
    /// Degrees, clockwise in screen space.
    pub rotation: f64,
    /// Icon edge length in pixels.
    pub size:     f64,
    pub paw:      PawSlot,
    pub fading:   bool,
    /// Stack order; later prints sit above earlier ones.
    pub z_index:  usize,
    /// Entrance animation delay.  Render-only, never fed back into state.
    pub stagger_delay_ms: u64,
}

impl PrintView {
    fn project(index: usize, print: &Print, now: Millis, config: &TrailConfig) -> Self {
        Self {
            id:       print.id,
            walk:     print.walk,
            x:        print.position.x,
            y:        print.position.y,
            rotation: print.rotation,
            size:     print.size,
            paw:      print.paw,
            fading:   print.is_fading(now, config.fade_after_ms),
            z_index:  index + 1,
            stagger_delay_ms: (index as u64).saturating_mul(config.stagger_ms),
        }
    }
}

/// Everything a renderer needs for one frame, in ledger order.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderFrame {
    pub now:         Millis,
    pub tick:        Tick,
    pub agent_count: usize,
    pub prints:      Vec<PrintView>,
}

impl RenderFrame {
    /// Snapshot `state` as seen at `now`.
    pub fn project(state: &TrailState, now: Millis, config: &TrailConfig) -> Self {
        let prints = state
            .ledger
            .iter()
            .enumerate()
            .map(|(index, print)| PrintView::project(index, print, now, config))
            .collect();
        Self {
            now,
            tick: state.tick,
            agent_count: state.agent_count(),
            prints,
        }
    }

    pub fn print_count(&self) -> usize {
        self.prints.len()
    }

    pub fn fading_count(&self) -> usize {
        self.prints.iter().filter(|p| p.fading).count()
    }

    /// The two counter lines under the title.
    pub fn hud_lines(&self) -> [String; 2] {
        [
            format!("{} dogs walking", self.agent_count),
            format!("{} paw prints on screen", self.print_count()),
        ]
    }
}
