// trail.rs - Bounded position history
//
// Oldest entry at the front. Pushing past capacity evicts from the front.

use std::collections::VecDeque;

use glam::Vec2;

#[derive(Debug, Clone)]
pub struct Trail {
    points: VecDeque<Vec2>,
    cap: usize,
}

impl Trail {
    /// Holds at least one point, so a moving particle is never born dead.
    pub fn new(cap: usize) -> Self {
        let cap = cap.max(1);
        Self { points: VecDeque::with_capacity(cap + 1), cap }
    }

    pub fn push(&mut self, p: Vec2) {
        self.points.push_back(p);
        if self.points.len() > self.cap {
            self.points.pop_front();
        }
    }

    /// Drop the oldest entry. No-op when empty.
    pub fn evict_oldest(&mut self) {
        self.points.pop_front();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Oldest to newest.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Vec2> + '_ {
        self.points.iter().copied()
    }
}
