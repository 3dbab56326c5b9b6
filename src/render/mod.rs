// render/ - Drawing surface contract
//
// The simulation draws through `Surface`, an immediate-mode 2D API modelled on
// the canvas context. The browser implementation lives in `canvas`, an
// in-memory one in `record`.

mod canvas;
mod record;

pub use canvas::CanvasSurface;
pub use record::{DrawCall, Recorder};

use std::fmt;

/// Blend mode applied to subsequent fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Composite {
    /// Darkens what is already there. Used for the per-frame fade.
    HardLight,
    /// Additive. Overlapping sparks brighten instead of occluding.
    Lighter,
}

impl Composite {
    pub fn as_css(self) -> &'static str {
        match self {
            Composite::HardLight => "hard-light",
            Composite::Lighter => "lighter",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// Hue in degrees, saturation and lightness in percent.
    Hsl { h: f32, s: f32, l: f32 },
    Rgba { r: u8, g: u8, b: u8, a: f32 },
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Hsl { h, s, l } => write!(f, "hsl({h},{s}%,{l}%)"),
            Color::Rgba { r, g, b, a } => write!(f, "rgba({r},{g},{b},{a})"),
        }
    }
}

pub trait Surface {
    fn set_composite(&mut self, mode: Composite);
    fn set_fill(&mut self, color: Color);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32);
}
