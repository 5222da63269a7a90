// Serialized level layout, as authored in RON files

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::math::Rect;
use crate::game::content::{self, ContentError};
use crate::game::entities::{CollectibleKind, DEFAULT_BOUNCE_SPEED, DEFAULT_PATROL_DISTANCE};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn to_vec2(self) -> glam::Vec2 {
        glam::Vec2::new(self.x, self.y)
    }
}

fn default_travel() -> Point {
    Point::new(0.0, 30.0)
}

fn default_half_period() -> f32 {
    2.0
}

fn default_wind() -> Point {
    Point::new(-600.0, 0.0)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovingPlatformData {
    pub rect: Rect,
    /// Offset of the far end of the path from `rect`
    #[serde(default = "default_travel")]
    pub travel: Point,
    /// Seconds from one end to the other
    #[serde(default = "default_half_period")]
    pub half_period: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectibleData {
    pub x: f32,
    pub y: f32,
    pub kind: CollectibleKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyData {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub patrol_distance: Option<f32>,
    #[serde(default)]
    pub speed: Option<f32>,
}

impl EnemyData {
    pub fn patrol_distance(&self) -> f32 {
        self.patrol_distance.unwrap_or(DEFAULT_PATROL_DISTANCE)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindZoneData {
    pub rect: Rect,
    #[serde(default = "default_wind")]
    pub acceleration: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BouncePadData {
    pub rect: Rect,
    #[serde(default)]
    pub speed: Option<f32>,
}

impl BouncePadData {
    pub fn speed(&self) -> f32 {
        self.speed.unwrap_or(DEFAULT_BOUNCE_SPEED)
    }
}

/// Per-level overrides of the global physics
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LevelPhysics {
    #[serde(default)]
    pub gravity: Option<f32>,
    /// Level-wide horizontal wind acceleration (units/s²)
    #[serde(default)]
    pub wind_x: Option<f32>,
}

/// A complete level description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelData {
    pub name: String,
    pub width: f32,
    /// Bodies whose top passes below this line have fallen out
    pub height: f32,
    /// Player spawn (top-left of the hitbox)
    pub start: Point,
    #[serde(default)]
    pub platforms: Vec<Rect>,
    #[serde(default)]
    pub moving_platforms: Vec<MovingPlatformData>,
    #[serde(default)]
    pub collectibles: Vec<CollectibleData>,
    #[serde(default)]
    pub enemies: Vec<EnemyData>,
    #[serde(default)]
    pub goal: Option<Point>,
    #[serde(default)]
    pub wind_zones: Vec<WindZoneData>,
    #[serde(default)]
    pub bounce_pads: Vec<BouncePadData>,
    #[serde(default)]
    pub physics: LevelPhysics,
}

fn invalid(message: String) -> ContentError {
    ContentError::Invalid(message)
}

fn check_rect(what: &str, index: usize, rect: &Rect) -> Result<(), ContentError> {
    if rect.is_valid() {
        Ok(())
    } else {
        Err(invalid(format!("{} #{} has an invalid rect {:?}", what, index, rect)))
    }
}

fn check_point(what: &str, point: &Point) -> Result<(), ContentError> {
    if point.x.is_finite() && point.y.is_finite() {
        Ok(())
    } else {
        Err(invalid(format!("{} is not finite: {:?}", what, point)))
    }
}

impl LevelData {
    /// Load and validate a level file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let level: Self = content::load_ron(path.as_ref())?;
        level.validate()?;
        Ok(level)
    }

    /// Parse and validate level RON text
    pub fn from_ron(text: &str) -> Result<Self, ContentError> {
        let level: Self = content::parse_ron(text, "<inline level>")?;
        level.validate()?;
        Ok(level)
    }

    /// Serialize back to pretty RON
    pub fn to_ron(&self) -> Result<String, ContentError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| invalid(format!("cannot serialize level {}: {}", self.name, e)))
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(invalid(format!(
                "level {} has invalid size {}x{}",
                self.name, self.width, self.height
            )));
        }
        check_point("start", &self.start)?;

        for (i, rect) in self.platforms.iter().enumerate() {
            check_rect("platform", i, rect)?;
        }

        for (i, moving) in self.moving_platforms.iter().enumerate() {
            check_rect("moving platform", i, &moving.rect)?;
            check_point("moving platform travel", &moving.travel)?;
            if !moving.half_period.is_finite() || moving.half_period <= 0.0 {
                return Err(invalid(format!(
                    "moving platform #{} half_period must be > 0, got {}",
                    i, moving.half_period
                )));
            }
        }

        for (i, item) in self.collectibles.iter().enumerate() {
            check_point("collectible", &Point::new(item.x, item.y))
                .map_err(|_| invalid(format!("collectible #{} is not finite", i)))?;
        }

        for (i, enemy) in self.enemies.iter().enumerate() {
            check_point("enemy", &Point::new(enemy.x, enemy.y))
                .map_err(|_| invalid(format!("enemy #{} is not finite", i)))?;
            let distance = enemy.patrol_distance();
            if !distance.is_finite() || distance < 0.0 {
                return Err(invalid(format!(
                    "enemy #{} patrol_distance must be >= 0, got {}",
                    i, distance
                )));
            }
            if let Some(speed) = enemy.speed {
                if !speed.is_finite() || speed < 0.0 {
                    return Err(invalid(format!(
                        "enemy #{} speed must be >= 0, got {}",
                        i, speed
                    )));
                }
            }
        }

        if let Some(goal) = &self.goal {
            check_point("goal", goal)?;
        }

        for (i, zone) in self.wind_zones.iter().enumerate() {
            check_rect("wind zone", i, &zone.rect)?;
            check_point("wind acceleration", &zone.acceleration)?;
        }

        for (i, pad) in self.bounce_pads.iter().enumerate() {
            check_rect("bounce pad", i, &pad.rect)?;
            let speed = pad.speed();
            if !speed.is_finite() || speed < 0.0 {
                return Err(invalid(format!(
                    "bounce pad #{} speed must be >= 0, got {}",
                    i, speed
                )));
            }
        }

        if let Some(gravity) = self.physics.gravity {
            if !gravity.is_finite() || gravity < 0.0 {
                return Err(invalid(format!("gravity must be >= 0, got {}", gravity)));
            }
        }
        if let Some(wind_x) = self.physics.wind_x {
            if !wind_x.is_finite() {
                return Err(invalid(format!("wind_x must be finite, got {}", wind_x)));
            }
        }

        Ok(())
    }
}
