// clock.rs - Frame timestamps to simulation deltas
//
// Browsers stop calling requestAnimationFrame for background tabs, so the first
// frame after returning can be seconds late. Deltas are capped.

#[derive(Debug, Clone)]
pub struct FrameClock {
    last_ms: Option<f64>,
    max_delta: f32,
}

impl FrameClock {
    pub fn new(max_delta: f32) -> Self {
        Self { last_ms: None, max_delta }
    }

    /// Seconds since the previous tick, in `[0, max_delta]`. First tick is 0.
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let delta = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        delta.clamp(0.0, self.max_delta)
    }

    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}
