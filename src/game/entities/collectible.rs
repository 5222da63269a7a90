// Pickups: stars and hearts taken on overlap

use serde::{Deserialize, Serialize};

use crate::core::math::Rect;

use super::CollectibleId;

pub const COLLECTIBLE_SIZE: f32 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectibleKind {
    Star,
    Heart,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Collectible {
    pub id: CollectibleId,
    pub kind: CollectibleKind,
    rect: Rect,
    collected: bool,
}

impl Collectible {
    pub fn new(id: CollectibleId, x: f32, y: f32, kind: CollectibleKind) -> Self {
        Self {
            id,
            kind,
            rect: Rect::new(x, y, COLLECTIBLE_SIZE, COLLECTIBLE_SIZE),
            collected: false,
        }
    }

    /// Take the pickup; returns false if it was already taken this step
    pub fn collect(&mut self) -> bool {
        if self.collected {
            return false;
        }
        self.collected = true;
        true
    }

    pub fn is_collected(&self) -> bool {
        self.collected
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}
