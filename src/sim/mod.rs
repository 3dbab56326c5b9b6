// sim/ - Fireworks simulation
//
// The world owns the population and the spawn policy. Particles move and draw
// themselves; anything they spawn goes through a `SpawnQueue` that the world
// flushes after each particle, so bursts are visited in the same frame.

mod particle;
mod spawn;
mod trail;

pub use particle::{Kind, Particle};
pub use spawn::{SpawnBands, SpawnQueue, pick, pick_between};
pub use trail::Trail;

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::FireworksConfig;
use crate::error::Result;
use crate::render::{Color, Composite, Surface};

/// Simulation controller
pub struct FireworksWorld<R: Rng = SmallRng> {
    // Surface dimensions (logical units)
    w: f32,
    h: f32,
    bands: SpawnBands,

    particles: Vec<Particle>,
    pending: SpawnQueue,

    // Fires an auto-spawn at >= 1
    counter: f32,

    config: FireworksConfig,
    rng: R,
}

impl FireworksWorld<SmallRng> {
    pub fn with_seed(config: FireworksConfig, seed: u64) -> Result<Self> {
        Self::new(config, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> FireworksWorld<R> {
    /// Empty world with a zero-sized surface. Call `resize` before the first frame.
    ///
    /// Fails if `config` does not validate, so spawning can never hit an empty range.
    pub fn new(config: FireworksConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            w: 0.0,
            h: 0.0,
            bands: SpawnBands::default(),
            particles: Vec::new(),
            pending: SpawnQueue::new(),
            counter: 0.0,
            config,
            rng,
        })
    }

    /// Recompute spawn geometry. Particles in flight keep their targets.
    pub fn resize(&mut self, w: f32, h: f32) {
        self.w = w;
        self.h = h;
        self.bands = SpawnBands::from_size(w, h);
    }

    /// Launch a volley of rockets at a focal point and hold off the next auto-spawn.
    pub fn request_spawn(&mut self, x: f32, y: f32) {
        let count = pick(&mut self.rng, self.config.burst_count);
        for _ in 0..count {
            let origin = Vec2::new(self.bands.origin_x(&mut self.rng), self.h);
            let jitter = match self.config.user_target_jitter {
                j if j > 0.0 => self.rng.gen_range(0.0..=j),
                _ => 0.0,
            };
            let hue = pick(&mut self.rng, self.config.user_hue) as f32;
            let radius = pick(&mut self.rng, self.config.burst_radius) as f32;
            self.particles.push(Particle::rocket(
                origin,
                Vec2::new(x + jitter, y),
                hue,
                radius,
                self.config.trail_capacity,
            ));
        }
        self.counter = self.config.user_spawn_reset;
        log::debug!("spawned {count} rockets toward ({x}, {y})");
    }

    /// One frame: fade, update every particle, auto-spawn, compact.
    pub fn advance<S: Surface + ?Sized>(&mut self, delta: f32, surface: &mut S) {
        // Negative or NaN deltas freeze the frame
        let delta = delta.max(0.0);

        let [r, g, b] = self.config.fade_color;
        surface.set_composite(Composite::HardLight);
        surface.set_fill(Color::Rgba { r, g, b, a: self.config.fade_rate * delta });
        surface.fill_rect(0.0, 0.0, self.w, self.h);

        surface.set_composite(Composite::Lighter);

        // Length is re-read every step so freshly spawned sparks get their turn
        let mut i = 0;
        while i < self.particles.len() {
            self.particles[i].update(delta, &self.config, &mut *surface, &mut self.pending);
            self.pending.drain_into(&mut self.particles);
            i += 1;
        }

        self.counter += delta * self.config.auto_spawn_rate;
        if self.counter >= 1.0 {
            self.auto_spawn();
            self.counter = 0.0;
        }

        if self.particles.len() > self.config.compaction_threshold {
            let before = self.particles.len();
            self.particles.retain(Particle::is_alive);
            log::debug!("compacted population {before} -> {}", self.particles.len());
        }
    }

    fn auto_spawn(&mut self) {
        let origin = Vec2::new(self.bands.origin_x(&mut self.rng), self.h);
        let target = Vec2::new(
            pick_between(&mut self.rng, 0.0, self.w),
            self.bands.target_y(&mut self.rng),
        );
        let hue = pick(&mut self.rng, self.config.auto_hue) as f32;
        let radius = pick(&mut self.rng, self.config.burst_radius) as f32;
        log::trace!("auto-spawn toward {target}");
        self.particles.push(Particle::rocket(origin, target, hue, radius, self.config.trail_capacity));
    }

    /// Add a particle directly to the population.
    pub fn insert(&mut self, p: Particle) {
        self.particles.push(p);
    }

    pub fn particles(&self) -> &[Particle] { &self.particles }
    pub fn population(&self) -> usize { self.particles.len() }
    pub fn bands(&self) -> SpawnBands { self.bands }
    pub fn counter(&self) -> f32 { self.counter }
    pub fn config(&self) -> &FireworksConfig { &self.config }
    pub fn width(&self) -> f32 { self.w }
    pub fn height(&self) -> f32 { self.h }
}
