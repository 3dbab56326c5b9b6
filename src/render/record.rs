// record.rs - In-memory surface
//
// Captures draw calls instead of rasterizing them. Used to inspect what a
// frame would paint.

use super::{Color, Composite, Surface};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Composite(Composite),
    Fill(Color),
    Rect { x: f32, y: f32, w: f32, h: f32 },
    Circle { x: f32, y: f32, radius: f32 },
}

#[derive(Debug, Default)]
pub struct Recorder {
    pub calls: Vec<DrawCall>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn circles(&self) -> usize {
        self.calls.iter().filter(|c| matches!(c, DrawCall::Circle { .. })).count()
    }

    /// Fill colors in the order they were set.
    pub fn fills(&self) -> impl Iterator<Item = Color> + '_ {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Fill(color) => Some(*color),
            _ => None,
        })
    }
}

impl Surface for Recorder {
    fn set_composite(&mut self, mode: Composite) {
        self.calls.push(DrawCall::Composite(mode));
    }

    fn set_fill(&mut self, color: Color) {
        self.calls.push(DrawCall::Fill(color));
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.calls.push(DrawCall::Rect { x, y, w, h });
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32) {
        self.calls.push(DrawCall::Circle { x, y, radius });
    }
}
