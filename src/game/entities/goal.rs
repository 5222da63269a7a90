// Level goal: a one-shot trigger area

use crate::core::math::Rect;

pub const GOAL_SIZE: f32 = 32.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Goal {
    rect: Rect,
    reached: bool,
}

impl Goal {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            rect: Rect::new(x, y, GOAL_SIZE, GOAL_SIZE),
            reached: false,
        }
    }

    /// True only on the first overlap
    pub fn check(&mut self, body: &Rect) -> bool {
        if self.reached || !body.intersects(&self.rect) {
            return false;
        }
        self.reached = true;
        true
    }

    pub fn is_reached(&self) -> bool {
        self.reached
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}
