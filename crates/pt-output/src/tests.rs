//! Unit tests for pt-output.

use pt_core::{
    ManualClock, Millis, PawSlot, Point, PrintId, SequenceRng, TrailConfig, ViewportSize, WalkId,
};
use pt_ledger::Print;
use pt_sim::{SimBuilder, TrailState};

use crate::svg::to_svg;
use crate::{FrameRecorder, PawGlyph, RenderFrame};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn print_at(id: u64, created_at: u64, paw: PawSlot) -> Print {
    Print {
        id:         PrintId(id),
        position:   Point::new(id as f64 * 10.0, 50.0),
        rotation:   30.0,
        size:       24.0,
        created_at: Millis(created_at),
        paw,
        walk:       WalkId(1),
    }
}

/// Three prints aged 16 000, 10 000 and 0 ms at `Millis(16_000)`, plus two dogs.
fn sample_state() -> TrailState {
    let mut state = TrailState::new(100);
    state.ledger.append(print_at(1, 0, PawSlot::FrontLeft));
    state.ledger.append(print_at(2, 6_000, PawSlot::BackRight));
    state.ledger.append(print_at(3, 16_000, PawSlot::FrontRight));
    state.agents.spawn_at(Point::ORIGIN, 0.0, 1.0, 1.0, Millis::ZERO);
    state.agents.spawn_at(Point::new(5.0, 5.0), 90.0, 2.0, 1.0, Millis::ZERO);
    state
}

// ── RenderFrame ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod frame {
    use super::*;

    #[test]
    fn projects_in_ledger_order() {
        let frame = RenderFrame::project(&sample_state(), Millis(16_000), &TrailConfig::default());
        let ids: Vec<u64> = frame.prints.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(frame.agent_count, 2);
        assert_eq!(frame.print_count(), 3);

        let first = &frame.prints[0];
        assert_eq!((first.x, first.y), (10.0, 50.0));
        assert_eq!(first.rotation, 30.0);
        assert_eq!(first.size, 24.0);
        assert_eq!(first.paw, PawSlot::FrontLeft);
    }

    #[test]
    fn later_prints_stack_on_top() {
        let frame = RenderFrame::project(&sample_state(), Millis(16_000), &TrailConfig::default());
        let z: Vec<usize> = frame.prints.iter().map(|p| p.z_index).collect();
        assert_eq!(z, vec![1, 2, 3]);
        let delays: Vec<u64> = frame.prints.iter().map(|p| p.stagger_delay_ms).collect();
        assert_eq!(delays, vec![0, 20, 40]);
    }

    #[test]
    fn huge_stagger_saturates() {
        let config = TrailConfig { stagger_ms: u64::MAX, ..TrailConfig::default() };
        let frame = RenderFrame::project(&sample_state(), Millis(16_000), &config);
        let delays: Vec<u64> = frame.prints.iter().map(|p| p.stagger_delay_ms).collect();
        assert_eq!(delays, vec![0, u64::MAX, u64::MAX]);
    }

    #[test]
    fn fading_follows_age() {
        let frame = RenderFrame::project(&sample_state(), Millis(16_000), &TrailConfig::default());
        let fading: Vec<bool> = frame.prints.iter().map(|p| p.fading).collect();
        // Ages 16 000, 10 000, 0.
        assert_eq!(fading, vec![true, false, false]);
        assert_eq!(frame.fading_count(), 1);

        let later = RenderFrame::project(&sample_state(), Millis(21_000), &TrailConfig::default());
        assert_eq!(later.fading_count(), 2);
    }

    #[test]
    fn hud_counts_dogs_and_prints() {
        let frame = RenderFrame::project(&sample_state(), Millis(16_000), &TrailConfig::default());
        assert_eq!(
            frame.hud_lines(),
            ["2 dogs walking".to_string(), "3 paw prints on screen".to_string()]
        );
        assert_eq!(RenderFrame::default().hud_lines()[0], "0 dogs walking");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn frame_serializes_to_json() {
        let frame = RenderFrame::project(&sample_state(), Millis(16_000), &TrailConfig::default());
        let json = serde_json::to_value(&frame).unwrap();
        assert_eq!(json["agent_count"], 2);
        assert_eq!(json["prints"][0]["paw"], "front-left");
        assert_eq!(json["prints"][0]["fading"], true);
    }
}

// ── Glyphs ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod glyph {
    use super::*;

    #[test]
    fn front_and_back_differ() {
        assert_eq!(PawGlyph::for_slot(PawSlot::FrontLeft), &PawGlyph::FRONT);
        assert_eq!(PawGlyph::for_slot(PawSlot::FrontRight), &PawGlyph::FRONT);
        assert_eq!(PawGlyph::for_slot(PawSlot::BackLeft), &PawGlyph::BACK);
        assert_eq!(PawGlyph::for_slot(PawSlot::BackRight), &PawGlyph::BACK);
        assert!(PawGlyph::BACK.pad.rx < PawGlyph::FRONT.pad.rx);
    }

    #[test]
    fn glyphs_fit_the_view_box() {
        for glyph in [PawGlyph::FRONT, PawGlyph::BACK] {
            let pad = glyph.pad;
            assert!(pad.cx - pad.rx >= 0.0 && pad.cx + pad.rx <= crate::glyph::VIEW_BOX);
            for toe in glyph.toes {
                assert!(toe.cx - toe.r >= 0.0 && toe.cx + toe.r <= crate::glyph::VIEW_BOX);
                assert!(toe.cy - toe.r >= 0.0 && toe.cy + toe.r <= crate::glyph::VIEW_BOX);
            }
        }
    }
}

// ── SVG ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod svg {
    use super::*;

    #[test]
    fn one_group_per_print_in_order() {
        let frame = RenderFrame::project(&sample_state(), Millis(16_000), &TrailConfig::default());
        let doc = to_svg(&frame, ViewportSize::new(800.0, 600.0));

        assert!(doc.starts_with("<svg "));
        assert!(doc.trim_end().ends_with("</svg>"));
        assert_eq!(doc.matches("class=\"paw-print").count(), 3);
        assert_eq!(doc.matches("fade-out").count(), 1);

        let p1 = doc.find("id=\"paw-1\"").unwrap();
        let p2 = doc.find("id=\"paw-2\"").unwrap();
        let p3 = doc.find("id=\"paw-3\"").unwrap();
        assert!(p1 < p2 && p2 < p3);
    }

    #[test]
    fn print_transform_and_glyph() {
        let frame = RenderFrame::project(&sample_state(), Millis(16_000), &TrailConfig::default());
        let doc = to_svg(&frame, ViewportSize::new(800.0, 600.0));
        assert!(doc.contains("translate(10.00 50.00) rotate(30.00) scale(1.0000) translate(-12 -12)"));
        // Two front prints, one back print.
        assert_eq!(doc.matches(r#"<ellipse cx="12" cy="16""#).count(), 2);
        assert_eq!(doc.matches(r#"<ellipse cx="12" cy="15""#).count(), 1);
        assert_eq!(doc.matches("<circle ").count(), 12);
    }

    #[test]
    fn hud_is_drawn() {
        let doc = to_svg(&RenderFrame::default(), ViewportSize::new(800.0, 600.0));
        assert!(doc.contains(">Dogs Walking</text>"));
        assert!(doc.contains(">0 dogs walking</text>"));
        assert!(doc.contains(">0 paw prints on screen</text>"));
        assert!(!doc.contains("paw-print"));
    }
}

// ── FrameRecorder ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod recorder {
    use super::*;

    #[test]
    fn records_latest_frame_and_counts() {
        let config = TrailConfig::default();
        let mut sim = SimBuilder::new(config.clone(), ManualClock::default(), ViewportSize::new(1000.0, 800.0))
            .rng(SequenceRng::new([0.3, 0.7, 0.1, 0.9, 0.5]))
            .build()
            .unwrap();
        let mut recorder = FrameRecorder::new(&config);
        assert!(recorder.last_frame().is_none());

        sim.start().unwrap();
        sim.run_until(Millis(1_000), &mut recorder);

        assert_eq!(recorder.frames(), 62);
        assert_eq!(recorder.spawned(), 1);
        let frame = recorder.last_frame().unwrap();
        assert_eq!(frame.now, Millis(992));
        assert_eq!(frame.agent_count, sim.state.agent_count());
        assert_eq!(frame.print_count(), sim.state.print_count());

        assert!(recorder.take_frame().is_some());
        assert!(recorder.last_frame().is_none());
    }

    #[test]
    fn counts_evictions_and_pruning() {
        let config = TrailConfig::default();
        let mut sim = SimBuilder::new(config.clone(), ManualClock::default(), ViewportSize::new(1000.0, 800.0))
            .build()
            .unwrap();
        sim.state.agents.spawn_at(Point::new(1099.0, 10.0), 0.0, 2.0, 1.0, Millis::ZERO);
        let mut recorder = FrameRecorder::new(&config);
        sim.tick(&mut recorder);
        assert_eq!(recorder.evicted(), 1);

        sim.state.ledger.append(print_at(1, 0, PawSlot::BackLeft));
        sim.clock.set(Millis(20_000));
        sim.prune(&mut recorder);
        assert_eq!(recorder.pruned(), 1);
    }
}
