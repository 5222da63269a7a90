// Bounce pads: solid springs that launch whatever lands on them

use crate::core::math::Rect;
use crate::engine::physics::KinematicBody;

pub const DEFAULT_BOUNCE_SPEED: f32 = 600.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BouncePad {
    pub rect: Rect,
    /// Upward speed given on landing
    pub speed: f32,
}

impl BouncePad {
    pub fn new(rect: Rect, speed: f32) -> Self {
        Self { rect, speed }
    }

    /// Send a body that just landed on the pad back up
    pub fn launch(&self, body: &mut KinematicBody) {
        body.velocity.y = -self.speed;
        body.leave_ground();
    }
}
