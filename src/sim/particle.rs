// particle.rs - Rockets and sparks
//
// A particle eases toward its target, leaving a trail. On arrival a rocket
// bursts into sparks once, then both kinds drain their trail and die.
//
//   traveling -> arrived-draining -> dead

use std::f32::consts::TAU;

use glam::Vec2;

use super::{SpawnQueue, Trail};
use crate::config::FireworksConfig;
use crate::render::{Color, Surface};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Kind {
    /// Bursts into `floor(burst_radius / 2)` sparks on arrival.
    Rocket { burst_radius: f32 },
    /// Terminal ember. Never spawns anything.
    Spark,
}

impl Kind {
    /// Zero (or less) is a spark.
    pub fn from_radius(burst_radius: f32) -> Self {
        if burst_radius > 0.0 { Kind::Rocket { burst_radius } } else { Kind::Spark }
    }

    pub fn burst_radius(&self) -> f32 {
        match *self {
            Kind::Rocket { burst_radius } => burst_radius,
            Kind::Spark => 0.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Particle {
    pos: Vec2,
    target: Vec2,
    hue: f32,
    kind: Kind,
    trail: Trail,
    alive: bool,
    exploded: bool,
}

impl Particle {
    pub fn new(pos: Vec2, target: Vec2, hue: f32, kind: Kind, trail_capacity: usize) -> Self {
        Self {
            pos,
            target,
            hue,
            kind,
            trail: Trail::new(trail_capacity),
            alive: true,
            exploded: false,
        }
    }

    pub fn rocket(pos: Vec2, target: Vec2, hue: f32, burst_radius: f32, trail_capacity: usize) -> Self {
        Self::new(pos, target, hue, Kind::from_radius(burst_radius), trail_capacity)
    }

    pub fn spark(pos: Vec2, target: Vec2, hue: f32, trail_capacity: usize) -> Self {
        Self::new(pos, target, hue, Kind::Spark, trail_capacity)
    }

    pub fn pos(&self) -> Vec2 { self.pos }
    pub fn target(&self) -> Vec2 { self.target }
    pub fn hue(&self) -> f32 { self.hue }
    pub fn kind(&self) -> Kind { self.kind }
    pub fn trail(&self) -> &Trail { &self.trail }
    pub fn is_alive(&self) -> bool { self.alive }
    pub fn has_exploded(&self) -> bool { self.exploded }

    /// Move, maybe burst, then draw. Does nothing once dead.
    pub fn update<S: Surface + ?Sized>(
        &mut self,
        delta: f32,
        cfg: &FireworksConfig,
        surface: &mut S,
        spawns: &mut SpawnQueue,
    ) {
        if !self.alive { return; }

        let diff = self.target - self.pos;
        let t = cfg.arrival_threshold;

        if diff.x.abs() > t || diff.y.abs() > t {
            // Speed proportional to remaining distance
            self.pos += diff * (cfg.approach_rate * delta);
            self.trail.push(self.pos);
        } else {
            if !self.exploded {
                self.explode(cfg.trail_capacity, spawns);
                self.exploded = true;
            }
            self.trail.evict_oldest();
        }

        if self.trail.is_empty() {
            self.alive = false;
            return;
        }

        self.draw(cfg, surface);
    }

    fn explode(&self, trail_capacity: usize, spawns: &mut SpawnQueue) {
        let Kind::Rocket { burst_radius } = self.kind else { return };

        let count = (burst_radius / 2.0).floor() as usize;
        for i in 0..count {
            let angle = TAU * i as f32 / count as f32;
            let target = self.pos + Vec2::from_angle(angle) * burst_radius;
            spawns.push(Particle::spark(self.pos, target, self.hue, trail_capacity));
        }
    }

    fn draw<S: Surface + ?Sized>(&self, cfg: &FireworksConfig, surface: &mut S) {
        let r = cfg.particle_radius;
        match self.kind {
            // Streak from dark tail to bright head
            Kind::Rocket { .. } => {
                for (i, p) in self.trail.iter().enumerate() {
                    let l = i as f32 * cfg.trail_lightness_step;
                    surface.set_fill(Color::Hsl { h: self.hue, s: 100.0, l });
                    surface.fill_circle(p.x, p.y, r);
                }
            }
            // Head only, the fade pass leaves the streak
            Kind::Spark => {
                surface.set_fill(Color::Hsl { h: self.hue, s: 100.0, l: cfg.spark_lightness });
                surface.fill_circle(self.pos.x, self.pos.y, r);
            }
        }
    }
}
