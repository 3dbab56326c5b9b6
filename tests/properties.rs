//! Property tests for particle motion and bursts.

use std::f32::consts::TAU;

use fireworks_engine::{FireworksConfig, Kind, Particle, Recorder, SpawnQueue};
use glam::Vec2;
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = f32> {
    -2000.0f32..2000.0
}

proptest! {
    #[test]
    fn trail_never_exceeds_capacity(
        sx in coord(), sy in coord(), tx in coord(), ty in coord(),
        radius in 0u32..120,
        deltas in prop::collection::vec(0.0f32..0.2, 1..200),
    ) {
        let cfg = FireworksConfig::default();
        let mut p = Particle::rocket(Vec2::new(sx, sy), Vec2::new(tx, ty), 10.0, radius as f32, cfg.trail_capacity);
        let mut q = SpawnQueue::new();
        let mut s = Recorder::new();
        for d in deltas {
            p.update(d, &cfg, &mut s, &mut q);
            prop_assert!(p.trail().len() <= cfg.trail_capacity);
        }
    }

    #[test]
    fn sparks_never_touch_the_population(
        sx in coord(), sy in coord(), tx in coord(), ty in coord(),
        steps in 1usize..400,
    ) {
        let cfg = FireworksConfig::default();
        let mut p = Particle::spark(Vec2::new(sx, sy), Vec2::new(tx, ty), 300.0, cfg.trail_capacity);
        let mut q = SpawnQueue::new();
        let mut s = Recorder::new();
        for _ in 0..steps {
            p.update(1.0 / 60.0, &cfg, &mut s, &mut q);
        }
        prop_assert!(q.is_empty());
    }

    #[test]
    fn burst_lands_on_circle(x in coord(), y in coord(), radius in 0u32..200) {
        let cfg = FireworksConfig::default();
        let at = Vec2::new(x, y);
        let r = radius as f32;
        let mut p = Particle::rocket(at, at, 77.0, r, cfg.trail_capacity);
        let mut q = SpawnQueue::new();
        p.update(0.016, &cfg, &mut Recorder::new(), &mut q);

        let k = (radius / 2) as usize;
        prop_assert_eq!(q.len(), k);
        for (i, child) in q.iter().enumerate() {
            prop_assert_eq!(child.kind(), Kind::Spark);
            let offset = child.target() - at;
            prop_assert!((offset.length() - r).abs() < 1e-2 * r.max(1.0));
            let angle = TAU * i as f32 / k as f32;
            let expected = Vec2::from_angle(angle) * r;
            prop_assert!((offset - expected).length() < 1e-2 * r.max(1.0));
        }
    }

    #[test]
    fn explodes_exactly_once(radius in 2u32..120, frames in 1usize..60, jiggle in 0.0f32..2.9) {
        let cfg = FireworksConfig::default();
        let target = Vec2::new(50.0, 50.0);
        let mut p = Particle::rocket(target + Vec2::new(jiggle, -jiggle), target, 0.0, radius as f32, cfg.trail_capacity);
        let mut q = SpawnQueue::new();
        let mut s = Recorder::new();

        let mut bursts = 0;
        for _ in 0..frames {
            let before = q.len();
            p.update(0.016, &cfg, &mut s, &mut q);
            if q.len() > before { bursts += 1; }
        }
        prop_assert_eq!(bursts, 1);
        prop_assert!(p.has_exploded());
    }

    #[test]
    fn dead_means_empty_trail_and_stays_dead(
        sx in coord(), sy in coord(), tx in coord(), ty in coord(),
        steps in 1usize..600,
    ) {
        let cfg = FireworksConfig::default();
        let mut p = Particle::spark(Vec2::new(sx, sy), Vec2::new(tx, ty), 0.0, cfg.trail_capacity);
        let mut q = SpawnQueue::new();
        let mut s = Recorder::new();
        for _ in 0..steps {
            p.update(1.0 / 30.0, &cfg, &mut s, &mut q);
            prop_assert_eq!(p.is_alive(), !p.trail().is_empty());
            if !p.is_alive() {
                let frozen = (p.pos(), p.has_exploded());
                s.clear();
                p.update(1.0 / 30.0, &cfg, &mut s, &mut q);
                prop_assert_eq!((p.pos(), p.has_exploded()), frozen);
                prop_assert!(s.calls.is_empty());
                break;
            }
        }
    }
}
