// Moving platforms: solids that ease back and forth along a fixed offset

use std::f32::consts::PI;

use glam::Vec2;

use crate::core::math::Rect;

/// A platform following a sine yoyo between its base position and `base + travel`
#[derive(Debug, Clone, PartialEq)]
pub struct MovingPlatform {
    base: Rect,
    travel: Vec2,
    /// Seconds to go from one end to the other
    half_period: f32,
    elapsed: f32,
    rect: Rect,
    delta: Vec2,
}

impl MovingPlatform {
    pub fn new(base: Rect, travel: Vec2, half_period: f32) -> Self {
        Self {
            base,
            travel,
            half_period,
            elapsed: 0.0,
            rect: base,
            delta: Vec2::ZERO,
        }
    }

    /// Offset from the base position after `elapsed` seconds
    pub fn offset_at(&self, elapsed: f32) -> Vec2 {
        let phase = PI * elapsed / self.half_period;
        self.travel * (1.0 - phase.cos()) * 0.5
    }

    /// Move along the path, recording this step's displacement
    pub fn update(&mut self, dt: f32) {
        self.elapsed = (self.elapsed + dt) % (2.0 * self.half_period);
        let next = self.base.translated(self.offset_at(self.elapsed));
        self.delta = next.position() - self.rect.position();
        self.rect = next;
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Displacement applied by the last `update`
    pub fn delta(&self) -> Vec2 {
        self.delta
    }
}
