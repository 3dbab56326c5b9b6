// config.rs - Tunable constants
//
// Defaults reproduce the classic look. Hosts can override any subset from JSON;
// missing keys fall back to the default.

use serde::{Deserialize, Serialize};

use crate::error::{FireworksError, Result};

/// Largest accepted burst radius. A burst spawns `radius / 2` sparks.
pub const MAX_BURST_RADIUS: u32 = 1000;

/// Inclusive integer range, sampled like `random(min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub min: u32,
    pub max: u32,
}

impl Span {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    fn check(&self, field: &'static str) -> Result<()> {
        if self.min > self.max {
            return Err(FireworksError::EmptyRange { field, min: self.min, max: self.max });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FireworksConfig {
    // Motion
    pub trail_capacity: usize,
    pub arrival_threshold: f32,
    pub approach_rate: f32,

    // Drawing
    pub particle_radius: f32,
    pub spark_lightness: f32,
    pub trail_lightness_step: f32,
    pub fade_color: [u8; 3],
    pub fade_rate: f32,

    // Population
    pub auto_spawn_rate: f32,
    pub user_spawn_reset: f32,
    pub compaction_threshold: usize,

    // Spawn randomness
    pub burst_count: Span,
    pub burst_radius: Span,
    pub user_hue: Span,
    pub auto_hue: Span,
    pub user_target_jitter: f32,

    // Host clock
    pub max_frame_delta: f32,
}

impl Default for FireworksConfig {
    fn default() -> Self {
        Self {
            trail_capacity: 20,
            arrival_threshold: 3.0,
            approach_rate: 2.0,
            particle_radius: 1.0,
            spark_lightness: 50.0,
            trail_lightness_step: 1.0,
            fade_color: [20, 20, 20],
            fade_rate: 7.0,
            auto_spawn_rate: 3.0,
            user_spawn_reset: -1.0,
            compaction_threshold: 1000,
            burst_count: Span::new(3, 5),
            burst_radius: Span::new(30, 110),
            user_hue: Span::new(0, 260),
            // Degrees, 360 would wrap to 0
            auto_hue: Span::new(0, 359),
            user_target_jitter: 0.0,
            max_frame_delta: 0.25,
        }
    }
}

impl FireworksConfig {
    /// Parse a (possibly partial) JSON object and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.trail_capacity == 0 {
            return Err(FireworksError::ZeroTrail);
        }
        self.burst_count.check("burst_count")?;
        self.burst_radius.check("burst_radius")?;
        if self.burst_radius.max > MAX_BURST_RADIUS {
            return Err(FireworksError::BurstTooLarge { max: self.burst_radius.max, limit: MAX_BURST_RADIUS });
        }
        self.user_hue.check("user_hue")?;
        self.auto_hue.check("auto_hue")?;
        Ok(())
    }
}
