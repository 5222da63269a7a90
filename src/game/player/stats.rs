// Movement tuning - every physics constant the controller reads lives here

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::input::TimingWindows;
use crate::engine::physics::{BodyProfile, Integration, SimError};
use crate::game::content::{self, ContentError};

/// Movement tuning for the player. Units are pixels and seconds, +y points down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    // Physics
    /// Downward acceleration (units/s²)
    pub gravity: f32,
    /// Maximum horizontal speed
    pub max_speed: f32,
    /// Terminal vertical speed
    pub max_fall_speed: f32,

    // Running
    /// Horizontal acceleration while a direction is held
    pub acceleration: f32,
    /// Deceleration on the ground with no direction held
    pub ground_drag: f32,
    /// Deceleration in the air with no direction held
    pub air_drag: f32,
    /// |vx| above which a grounded player counts as running
    pub run_threshold: f32,

    // Sliding
    /// Acceleration while steering a slide
    pub slide_acceleration: f32,
    /// Deceleration while sliding (much lower than ground drag)
    pub slide_drag: f32,
    /// |vx| a slide needs to start or continue
    pub slide_min_speed: f32,

    // Jumping
    /// Upward speed given by a jump
    pub jump_speed: f32,
    /// Grace period after leaving the ground (seconds)
    pub coyote_time: f32,
    /// Grace period before landing (seconds)
    pub jump_buffer_time: f32,
    /// Upward speed above which releasing jump cuts the jump short
    pub jump_cut_threshold: f32,
    /// Per-step multiplier applied to vy while cutting a jump
    pub jump_cut_factor: f32,
    /// Flutter is available once vy rises above -flutter_threshold
    pub flutter_threshold: f32,
    /// Upward speed added by the single flutter
    pub flutter_impulse: f32,

    // Interactions
    /// Upward speed after stomping an enemy
    pub stomp_bounce_speed: f32,
    /// Horizontal knockback speed when hit
    pub knockback_speed_x: f32,
    /// Upward knockback speed when hit
    pub knockback_speed_y: f32,
    /// Seconds after a hit during which further enemy hits are ignored
    pub damage_cooldown: f32,

    // Cosmetic
    /// Seconds of continuous idling before the shiver signal
    pub idle_shiver_time: f32,

    // Dimensions
    /// Hitbox width
    pub width: f32,
    /// Hitbox height while standing/running/jumping
    pub height: f32,
    /// Hitbox height while sliding
    pub slide_height: f32,
}

/// Default tuning, matched to the hand-authored levels
pub const BASE_CONFIG: MovementConfig = MovementConfig {
    gravity: 1000.0,
    max_speed: 200.0,
    max_fall_speed: 800.0,

    acceleration: 800.0,
    ground_drag: 1200.0,
    air_drag: 400.0,
    run_threshold: 10.0,

    slide_acceleration: 200.0,
    slide_drag: 100.0,
    slide_min_speed: 10.0,

    jump_speed: 600.0,
    coyote_time: 0.15,
    jump_buffer_time: 0.15,
    jump_cut_threshold: 100.0,
    jump_cut_factor: 0.9,
    flutter_threshold: 50.0,
    flutter_impulse: 10.0,

    stomp_bounce_speed: 300.0,
    knockback_speed_x: 200.0,
    knockback_speed_y: 150.0,
    damage_cooldown: 1.0,

    idle_shiver_time: 3.0,

    width: 40.0,
    height: 60.0,
    slide_height: 30.0,
};

impl Default for MovementConfig {
    fn default() -> Self {
        BASE_CONFIG
    }
}

impl MovementConfig {
    /// Load tuning from a RON file; omitted fields keep their defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let config: Self = content::load_ron(path.as_ref())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse tuning from RON text
    pub fn from_ron(text: &str) -> Result<Self, ContentError> {
        let config: Self = content::parse_ron(text, "<inline config>")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject tuning the integrator cannot work with
    pub fn validate(&self) -> Result<(), ContentError> {
        let non_negative = [
            ("gravity", self.gravity),
            ("acceleration", self.acceleration),
            ("ground_drag", self.ground_drag),
            ("air_drag", self.air_drag),
            ("run_threshold", self.run_threshold),
            ("slide_acceleration", self.slide_acceleration),
            ("slide_drag", self.slide_drag),
            ("slide_min_speed", self.slide_min_speed),
            ("jump_speed", self.jump_speed),
            ("coyote_time", self.coyote_time),
            ("jump_buffer_time", self.jump_buffer_time),
            ("jump_cut_threshold", self.jump_cut_threshold),
            ("flutter_threshold", self.flutter_threshold),
            ("flutter_impulse", self.flutter_impulse),
            ("stomp_bounce_speed", self.stomp_bounce_speed),
            ("knockback_speed_x", self.knockback_speed_x),
            ("knockback_speed_y", self.knockback_speed_y),
            ("damage_cooldown", self.damage_cooldown),
            ("idle_shiver_time", self.idle_shiver_time),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ContentError::Invalid(format!(
                    "{} must be finite and >= 0, got {}",
                    name, value
                )));
            }
        }

        for (name, value) in [
            ("max_speed", self.max_speed),
            ("max_fall_speed", self.max_fall_speed),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ContentError::Invalid(format!(
                    "{} must be finite and > 0, got {}",
                    name, value
                )));
            }
        }

        if !(0.0..=1.0).contains(&self.jump_cut_factor) {
            return Err(ContentError::Invalid(format!(
                "jump_cut_factor must be within [0, 1], got {}",
                self.jump_cut_factor
            )));
        }

        self.normal_profile()?;
        self.slide_profile()?;
        Ok(())
    }

    pub fn integration(&self) -> Integration {
        Integration {
            gravity: self.gravity,
            ground_drag: self.ground_drag,
            air_drag: self.air_drag,
            slide_drag: self.slide_drag,
            max_speed: self.max_speed,
            max_fall_speed: self.max_fall_speed,
        }
    }

    pub fn timing_windows(&self) -> TimingWindows {
        TimingWindows {
            coyote_time: self.coyote_time,
            jump_buffer_time: self.jump_buffer_time,
        }
    }

    pub fn normal_profile(&self) -> Result<BodyProfile, SimError> {
        BodyProfile::new(self.width, self.height)
    }

    pub fn slide_profile(&self) -> Result<BodyProfile, SimError> {
        BodyProfile::new(self.width, self.slide_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MovementConfig::default();
        assert_eq!(config.gravity, 1000.0);
        assert_eq!(config.max_speed, 200.0);
        assert_eq!(config.jump_speed, 600.0);
        assert_eq!(config.coyote_time, 0.15);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_slide_drag_is_much_lower() {
        let config = MovementConfig::default();
        assert!(config.slide_drag < config.air_drag);
        assert!(config.air_drag < config.ground_drag);
    }

    #[test]
    fn test_partial_ron_keeps_defaults() {
        let config = MovementConfig::from_ron("(gravity: 500.0, jump_speed: 400.0)").unwrap();
        assert_eq!(config.gravity, 500.0);
        assert_eq!(config.jump_speed, 400.0);
        assert_eq!(config.max_speed, BASE_CONFIG.max_speed);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = MovementConfig::default();
        config.max_speed = 0.0;
        assert!(config.validate().is_err());

        let mut config = MovementConfig::default();
        config.slide_height = -1.0;
        assert!(config.validate().is_err());

        let mut config = MovementConfig::default();
        config.jump_cut_factor = 1.5;
        assert!(config.validate().is_err());

        let mut config = MovementConfig::default();
        config.gravity = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_ron_rejects_garbage() {
        assert!(MovementConfig::from_ron("(gravity: \"heavy\")").is_err());
    }

    #[test]
    fn test_integration_mirrors_config() {
        let config = MovementConfig::default();
        let integration = config.integration();
        assert_eq!(integration.gravity, config.gravity);
        assert_eq!(integration.slide_drag, config.slide_drag);
        assert_eq!(integration.max_fall_speed, config.max_fall_speed);
    }
}
