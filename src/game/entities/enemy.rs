// Patrolling enemy: walks back and forth along a fixed horizontal range

use crate::core::math::Rect;

use super::EnemyId;

pub const ENEMY_SIZE: f32 = 24.0;
pub const DEFAULT_PATROL_DISTANCE: f32 = 100.0;
pub const DEFAULT_PATROL_SPEED: f32 = 50.0;

/// An enemy that ignores gravity and patrols `[origin_x, end_x]`
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub id: EnemyId,
    rect: Rect,
    origin_x: f32,
    end_x: f32,
    /// +1 moving right, -1 moving left
    direction: f32,
    speed: f32,
    defeated: bool,
}

impl Enemy {
    /// Spawn at `(x, y)` walking right towards `x + patrol_distance`
    pub fn new(id: EnemyId, x: f32, y: f32, patrol_distance: f32) -> Self {
        Self {
            id,
            rect: Rect::new(x, y, ENEMY_SIZE, ENEMY_SIZE),
            origin_x: x,
            end_x: x + patrol_distance,
            direction: 1.0,
            speed: DEFAULT_PATROL_SPEED,
            defeated: false,
        }
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Advance along the patrol range, clamping and turning at either bound
    pub fn patrol(&mut self, dt: f32) {
        self.rect.x += self.direction * self.speed * dt;

        if self.rect.x >= self.end_x {
            self.rect.x = self.end_x;
            self.direction = -1.0;
        } else if self.rect.x <= self.origin_x {
            self.rect.x = self.origin_x;
            self.direction = 1.0;
        }
    }

    /// Mark for removal at the end of the step
    pub fn defeat(&mut self) {
        self.defeated = true;
    }

    pub fn is_defeated(&self) -> bool {
        self.defeated
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn direction(&self) -> f32 {
        self.direction
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn patrol_range(&self) -> (f32, f32) {
        (self.origin_x, self.end_x)
    }
}
