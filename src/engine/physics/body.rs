// Kinematic body: an axis-aligned hitbox integrated by hand every step

use glam::Vec2;

use super::SimError;
use crate::core::math::{approach, clamp, Rect};

/// Width/height pair used as an axis-aligned hitbox
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyProfile {
    pub width: f32,
    pub height: f32,
}

impl BodyProfile {
    /// Create a profile, rejecting non-positive or non-finite extents
    pub fn new(width: f32, height: f32) -> Result<Self, SimError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(SimError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Which hitbox a body is currently using
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileKind {
    #[default]
    Normal,
    Slide,
}

/// Global integration parameters shared by every step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Integration {
    /// Downward acceleration (units/s²)
    pub gravity: f32,
    /// Horizontal deceleration on ground with no drive (units/s²)
    pub ground_drag: f32,
    /// Horizontal deceleration in the air with no drive
    pub air_drag: f32,
    /// Horizontal deceleration while sliding
    pub slide_drag: f32,
    /// Maximum |vx|
    pub max_speed: f32,
    /// Maximum |vy| (terminal fall speed)
    pub max_fall_speed: f32,
}

/// Horizontal intent for one integration step, decided by the controller
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Drive {
    /// Self-propelled acceleration; zero means "coast under drag"
    pub acceleration: f32,
    /// Selects the slide drag regime
    pub sliding: bool,
    /// Environmental acceleration (wind), applied on top of drive or drag
    pub external: Vec2,
}

impl Drive {
    pub fn accelerate(acceleration: f32) -> Self {
        Self {
            acceleration,
            ..Self::default()
        }
    }

    pub fn coast() -> Self {
        Self::default()
    }

    pub fn sliding(mut self) -> Self {
        self.sliding = true;
        self
    }

    pub fn with_external(mut self, external: Vec2) -> Self {
        self.external = external;
        self
    }
}

/// Axis-aligned kinematic body integrated by hand every step
#[derive(Debug, Clone)]
pub struct KinematicBody {
    /// Top-left corner of the hitbox
    pub position: Vec2,
    pub velocity: Vec2,
    grounded: bool,
    normal: BodyProfile,
    slide: BodyProfile,
    profile: ProfileKind,
}

impl KinematicBody {
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size())
    }

    pub fn size(&self) -> Vec2 {
        self.active_profile().size()
    }

    pub fn active_profile(&self) -> BodyProfile {
        match self.profile {
            ProfileKind::Normal => self.normal,
            ProfileKind::Slide => self.slide,
        }
    }

    pub fn profile(&self) -> ProfileKind {
        self.profile
    }

    /// Switch hitbox, keeping the feet where they are
    pub fn set_profile(&mut self, kind: ProfileKind) {
        if kind == self.profile {
            return;
        }
        let old_height = self.active_profile().height;
        self.profile = kind;
        self.position.y += old_height - self.active_profile().height;
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Only the collision resolver lands a body
    pub(super) fn land(&mut self) {
        self.grounded = true;
    }

    pub(super) fn clear_ground(&mut self) {
        self.grounded = false;
    }

    /// Drop ground contact without a collision, e.g. when launched by a bounce pad
    pub fn leave_ground(&mut self) {
        self.grounded = false;
    }

    /// Apply gravity, drive or drag, clamps, then move
    pub fn integrate(&mut self, dt: f32, drive: Drive, params: &Integration) {
        if !self.grounded {
            self.velocity.y += params.gravity * dt;
        }

        if drive.acceleration != 0.0 {
            self.velocity.x += drive.acceleration * dt;
        } else {
            let drag = if drive.sliding {
                params.slide_drag
            } else if self.grounded {
                params.ground_drag
            } else {
                params.air_drag
            };
            self.velocity.x = approach(self.velocity.x, 0.0, drag * dt);
        }

        self.velocity += drive.external * dt;

        self.velocity.x = clamp(self.velocity.x, -params.max_speed, params.max_speed);
        self.velocity.y = clamp(
            self.velocity.y,
            -params.max_fall_speed,
            params.max_fall_speed,
        );

        self.position += self.velocity * dt;
    }

    /// Move without touching velocity (moving-platform carry)
    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Back to a spawn point: at rest, airborne, normal hitbox
    pub fn reset(&mut self, position: Vec2) {
        self.profile = ProfileKind::Normal;
        self.position = position;
        self.velocity = Vec2::ZERO;
        self.grounded = false;
    }

    /// Reject NaN/inf state before it spreads into overlap comparisons
    pub fn validate(&self) -> Result<(), SimError> {
        if !self.position.is_finite() {
            return Err(SimError::NonFinite("body position"));
        }
        if !self.velocity.is_finite() {
            return Err(SimError::NonFinite("body velocity"));
        }
        Ok(())
    }
}

/// Builder for creating kinematic bodies
pub struct BodyBuilder {
    position: Vec2,
    velocity: Vec2,
    normal: BodyProfile,
    slide: Option<BodyProfile>,
}

impl BodyBuilder {
    /// Start a body with the given normal hitbox
    pub fn new(profile: BodyProfile) -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            normal: profile,
            slide: None,
        }
    }

    /// Set the initial top-left position
    pub fn position(mut self, x: f32, y: f32) -> Self {
        self.position = Vec2::new(x, y);
        self
    }

    /// Set the initial velocity
    pub fn velocity(mut self, x: f32, y: f32) -> Self {
        self.velocity = Vec2::new(x, y);
        self
    }

    /// Set the reduced hitbox used while sliding
    pub fn slide_profile(mut self, profile: BodyProfile) -> Self {
        self.slide = Some(profile);
        self
    }

    pub fn build(self) -> KinematicBody {
        KinematicBody {
            position: self.position,
            velocity: self.velocity,
            grounded: false,
            normal: self.normal,
            slide: self.slide.unwrap_or(self.normal),
            profile: ProfileKind::Normal,
        }
    }
}
