//! Unit tests for pt-agent.

use pt_core::{Millis, PawSlot, Point, SequenceRng, TrailConfig, ViewportSize, WalkId};

use crate::{AgentRegistry, Dog, SpawnEdge, sample_dog};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn viewport() -> ViewportSize {
    ViewportSize::new(1000.0, 800.0)
}

fn walker(heading: f64, speed: f64) -> Dog {
    Dog::new(WalkId(1), Point::ORIGIN, heading, speed, 1.0, Millis(0))
}

// ── Dog ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod dog {
    use super::*;

    #[test]
    fn advance_moves_along_heading() {
        let mut dog = walker(0.0, 2.0);
        for _ in 0..5 {
            dog.advance();
        }
        assert!(dog.position.distance(Point::new(10.0, 0.0)) < 1e-9);
    }

    #[test]
    fn advance_diagonal() {
        let mut dog = walker(45.0, 2f64.sqrt());
        dog.advance();
        assert!(dog.position.distance(Point::new(1.0, 1.0)) < 1e-9);
    }

    #[test]
    fn step_gate_is_strict() {
        let dog = walker(0.0, 1.0);
        assert!(!dog.step_due(Millis(500), 500.0));
        assert!(dog.step_due(Millis(501), 500.0));
    }

    #[test]
    fn take_step_cycles_paws_and_resets_gate() {
        let mut dog = walker(0.0, 1.0);
        let paws: Vec<PawSlot> = (1..=5).map(|i| dog.take_step(Millis(i * 1_000))).collect();
        assert_eq!(
            paws,
            vec![
                PawSlot::FrontLeft,
                PawSlot::BackRight,
                PawSlot::FrontRight,
                PawSlot::BackLeft,
                PawSlot::FrontLeft,
            ]
        );
        assert_eq!(dog.step_count, 5);
        assert_eq!(dog.last_step, Millis(5_000));
        assert_eq!(dog.next_paw(), PawSlot::BackRight);
    }
}

// ── Spawn sampling ────────────────────────────────────────────────────────────

#[cfg(test)]
mod spawn {
    use super::*;

    #[test]
    fn left_edge_spawn() {
        // edge (coin < 0.5 → left), size, y, heading, speed
        let mut rng = SequenceRng::new([0.1, 0.5, 0.5, 0.5, 0.5]);
        let (edge, dog) = sample_dog(WalkId(1), &mut rng, viewport(), &TrailConfig::default(), Millis(7));
        assert_eq!(edge, SpawnEdge::Left);
        assert_eq!(dog.position, Point::new(-50.0, 400.0));
        assert!((dog.size - 1.1).abs() < 1e-9);
        assert!(dog.heading.abs() < 1e-9);
        assert!((dog.speed - 2.0).abs() < 1e-9);
        assert_eq!(dog.step_count, 0);
        assert_eq!(dog.last_step, Millis(7));
        assert_eq!(rng.draws(), 5);
    }

    #[test]
    fn top_edge_spawn() {
        let mut rng = SequenceRng::new([0.9, 0.0, 0.0, 0.0, 0.0]);
        let (edge, dog) = sample_dog(WalkId(2), &mut rng, viewport(), &TrailConfig::default(), Millis(0));
        assert_eq!(edge, SpawnEdge::Top);
        assert_eq!(dog.position, Point::new(100.0, -50.0));
        assert_eq!(dog.heading, 60.0);
        assert_eq!(dog.speed, 1.0);
        assert_eq!(dog.size, 0.8);
    }

    #[test]
    fn seeded_spawns_stay_in_ranges() {
        let mut rng = pt_core::SimRng::new(9);
        let cfg = TrailConfig::default();
        for i in 0..500 {
            let (edge, dog) = sample_dog(WalkId(i), &mut rng, viewport(), &cfg, Millis(0));
            assert!((0.8..1.4).contains(&dog.size));
            assert!((1.0..3.0).contains(&dog.speed));
            match edge {
                SpawnEdge::Left => {
                    assert_eq!(dog.position.x, -50.0);
                    assert!((100.0..700.0).contains(&dog.position.y));
                    assert!((-30.0..30.0).contains(&dog.heading));
                }
                SpawnEdge::Top => {
                    assert_eq!(dog.position.y, -50.0);
                    assert!((100.0..900.0).contains(&dog.position.x));
                    assert!((60.0..120.0).contains(&dog.heading));
                }
            }
        }
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let mut rng = SequenceRng::new([0.1, 0.5, 0.5, 0.5, 0.5]);
        let tiny = ViewportSize::new(150.0, 120.0);
        let (_, dog) = sample_dog(WalkId(1), &mut rng, tiny, &TrailConfig::default(), Millis(0));
        assert!(dog.position.y.is_finite());
    }
}

// ── Registry ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod registry {
    use super::*;

    #[test]
    fn spawn_mints_unique_ids() {
        let mut reg = AgentRegistry::new();
        let mut rng = pt_core::SimRng::new(1);
        let cfg = TrailConfig::default();
        let (_, a) = reg.spawn(&mut rng, viewport(), &cfg, Millis(0));
        let (_, b) = reg.spawn(&mut rng, viewport(), &cfg, Millis(0));
        assert_ne!(a, b);
        assert_eq!(reg.len(), 2);
        assert!(reg.get(a).is_some());
    }

    #[test]
    fn cull_drops_only_outside_margin() {
        let mut reg = AgentRegistry::new();
        let inside = reg.spawn_at(Point::new(-100.0, 10.0), 0.0, 1.0, 1.0, Millis(0));
        let left = reg.spawn_at(Point::new(-100.5, 10.0), 0.0, 1.0, 1.0, Millis(0));
        let right = reg.spawn_at(Point::new(1100.5, 10.0), 0.0, 1.0, 1.0, Millis(0));
        let top = reg.spawn_at(Point::new(10.0, -101.0), 0.0, 1.0, 1.0, Millis(0));
        let bottom = reg.spawn_at(Point::new(10.0, 901.0), 0.0, 1.0, 1.0, Millis(0));
        let edge = reg.spawn_at(Point::new(1100.0, 900.0), 0.0, 1.0, 1.0, Millis(0));

        let evicted = reg.cull_outside(viewport(), 100.0);
        assert_eq!(evicted, vec![left, right, top, bottom]);
        let left_over: Vec<WalkId> = reg.iter().map(|d| d.id).collect();
        assert_eq!(left_over, vec![inside, edge]);
    }

    #[test]
    fn cull_on_empty_registry() {
        let mut reg = AgentRegistry::new();
        assert!(reg.cull_outside(viewport(), 100.0).is_empty());
        assert!(reg.is_empty());
    }
}
