// spawn.rs - Spawn geometry and the append channel
//
// `SpawnBands` is derived from the surface size on resize. `SpawnQueue` is the
// only way a particle can add to the population while the world is iterating.

use rand::Rng;

use super::Particle;
use crate::config::Span;

/// Where new rockets start and where auto-spawned ones aim.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpawnBands {
    /// Ground origin x range: middle half of the width.
    pub x_low: f32,
    pub x_high: f32,
    /// Auto-spawn target y range: 10% to 50% of the height.
    pub y_low: f32,
    pub y_high: f32,
}

impl SpawnBands {
    pub fn from_size(width: f32, height: f32) -> Self {
        let center = (width / 2.0).trunc();
        let quarter = center / 4.0;
        Self {
            x_low: (center - quarter).trunc(),
            x_high: (center + quarter).trunc(),
            y_low: (height * 0.1).trunc(),
            y_high: (height * 0.5).trunc(),
        }
    }

    pub fn origin_x<R: Rng>(&self, rng: &mut R) -> f32 {
        pick_between(rng, self.x_low, self.x_high)
    }

    pub fn target_y<R: Rng>(&self, rng: &mut R) -> f32 {
        pick_between(rng, self.y_low, self.y_high)
    }
}

/// Whole number in `[lo, hi]`, both ends truncated first.
pub fn pick_between<R: Rng>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    let (lo, hi) = (lo.trunc() as i64, hi.trunc() as i64);
    if lo >= hi {
        return lo as f32;
    }
    rng.gen_range(lo..=hi) as f32
}

pub fn pick<R: Rng>(rng: &mut R, span: Span) -> u32 {
    rng.gen_range(span.min..=span.max)
}

/// Particles waiting to join the population.
#[derive(Debug, Default)]
pub struct SpawnQueue {
    pending: Vec<Particle>,
}

impl SpawnQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, p: Particle) {
        self.pending.push(p);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.pending.iter()
    }

    /// Move everything queued to the end of `population`, preserving order.
    pub fn drain_into(&mut self, population: &mut Vec<Particle>) {
        population.append(&mut self.pending);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn bands_follow_size() {
        let b = SpawnBands::from_size(800.0, 600.0);
        assert_eq!((b.x_low, b.x_high), (300.0, 500.0));
        assert_eq!((b.y_low, b.y_high), (60.0, 300.0));
    }

    #[test]
    fn bands_truncate_odd_sizes() {
        let b = SpawnBands::from_size(1001.0, 333.0);
        // center 500, quarter 125
        assert_eq!((b.x_low, b.x_high), (375.0, 625.0));
        assert_eq!((b.y_low, b.y_high), (33.0, 166.0));
    }

    #[test]
    fn zero_size_collapses() {
        let b = SpawnBands::from_size(0.0, 0.0);
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(b.origin_x(&mut rng), 0.0);
        assert_eq!(b.target_y(&mut rng), 0.0);
    }

    #[test]
    fn picks_stay_inclusive() {
        let mut rng = SmallRng::seed_from_u64(7);
        let span = Span::new(3, 5);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let v = pick(&mut rng, span);
            assert!((3..=5).contains(&v));
            seen[(v - 3) as usize] = true;
        }
        assert_eq!(seen, [true; 3]);

        for _ in 0..200 {
            let v = pick_between(&mut rng, 10.0, 12.9);
            assert!(v == 10.0 || v == 11.0 || v == 12.0);
        }
    }
}
