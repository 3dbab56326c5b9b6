use wasm_bindgen::prelude::*;

// ============================================================================
// FIREWORKS - Rockets that burst into fading sparks, drawn on a 2D canvas
// ============================================================================
//
// The page owns the canvas (sizing, DPR transform), input listeners and the
// requestAnimationFrame loop. It forwards:
//   resize(w, h)      logical size changes
//   spawn_at(x, y)    clicks / first touch point
//   frame(now_ms)     once per animation frame

pub mod clock;
pub mod config;
pub mod error;
pub mod render;
pub mod sim;

pub use clock::FrameClock;
pub use config::{FireworksConfig, Span};
pub use error::{FireworksError, Result};
pub use render::{CanvasSurface, Color, Composite, DrawCall, Recorder, Surface};
pub use sim::{FireworksWorld, Kind, Particle, SpawnBands, SpawnQueue, Trail};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    console_log::init_with_level(log::Level::Info).ok();
}

#[wasm_bindgen]
pub struct FireworksApp {
    world: FireworksWorld,
    surface: CanvasSurface,
    clock: FrameClock,
}

#[wasm_bindgen]
impl FireworksApp {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> std::result::Result<FireworksApp, JsValue> {
        Ok(Self::build(canvas_id, FireworksConfig::default())?)
    }

    /// Same as the constructor, with a JSON object of config overrides.
    pub fn with_config(canvas_id: &str, json: &str) -> std::result::Result<FireworksApp, JsValue> {
        let config = FireworksConfig::from_json(json)?;
        Ok(Self::build(canvas_id, config)?)
    }

    pub fn resize(&mut self, w: f32, h: f32) {
        self.world.resize(w, h);
    }

    pub fn spawn_at(&mut self, x: f32, y: f32) {
        self.world.request_spawn(x, y);
    }

    /// Advance by an explicit delta in seconds.
    pub fn advance(&mut self, delta: f32) {
        self.world.advance(delta, &mut self.surface);
    }

    /// Advance using a frame timestamp in milliseconds (e.g. the rAF argument).
    pub fn frame(&mut self, now_ms: f64) {
        let delta = self.clock.tick(now_ms);
        self.world.advance(delta, &mut self.surface);
    }

    /// Forget the last timestamp, e.g. when the page becomes visible again.
    pub fn pause(&mut self) {
        self.clock.reset();
    }

    pub fn population(&self) -> usize { self.world.population() }
    pub fn width(&self) -> f32 { self.world.width() }
    pub fn height(&self) -> f32 { self.world.height() }
}

impl FireworksApp {
    fn build(canvas_id: &str, config: FireworksConfig) -> Result<Self> {
        let surface = CanvasSurface::from_element_id(canvas_id)?;
        let clock = FrameClock::new(config.max_frame_delta);
        let world = FireworksWorld::with_seed(config, seed())?;
        log::info!("fireworks ready on canvas `{canvas_id}`");
        Ok(Self { world, surface, clock })
    }
}

fn seed() -> u64 {
    let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let lo = js_sys::Date::now() as u64;
    (hi << 32) ^ lo
}
