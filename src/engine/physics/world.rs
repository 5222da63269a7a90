// Physics world: step validation and the integrate-then-resolve pipeline

use log::warn;

use super::body::{Drive, Integration, KinematicBody};
use super::collision::{resolve, Contact, Solid};
use super::SimError;

/// Longest step the integrator will take; longer frames are clamped to this
pub const DEFAULT_MAX_STEP: f32 = 0.1;

/// Physics world that owns the integration parameters and steps bodies against solids
#[derive(Debug, Clone)]
pub struct PhysicsWorld {
    /// Gravity, drag regimes and speed clamps
    integration: Integration,

    /// Upper bound on a single step's elapsed time (seconds)
    max_step: f32,
}

impl PhysicsWorld {
    pub fn new(integration: Integration) -> Self {
        Self {
            integration,
            max_step: DEFAULT_MAX_STEP,
        }
    }

    /// Validate and clamp an elapsed time before any state is touched
    pub fn clamp_step(&self, dt: f32) -> Result<f32, SimError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(SimError::InvalidTimestep(dt));
        }
        if dt > self.max_step {
            warn!("Clamping step of {:.3}s to {:.3}s", dt, self.max_step);
            return Ok(self.max_step);
        }
        Ok(dt)
    }

    /// Integrate one body, then separate it from the given solids.
    /// `dt` must already have passed through `clamp_step`.
    pub fn step_body<T: Copy>(
        &self,
        body: &mut KinematicBody,
        drive: Drive,
        solids: &[Solid<T>],
        dt: f32,
    ) -> Result<Vec<Contact<T>>, SimError> {
        body.validate()?;
        body.integrate(dt, drive, &self.integration);
        let contacts = resolve(body, solids);
        body.validate()?;
        Ok(contacts)
    }

    pub fn integration(&self) -> &Integration {
        &self.integration
    }

    /// Set gravity for the physics world
    pub fn set_gravity(&mut self, gravity: f32) {
        self.integration.gravity = gravity;
    }

    /// Get current gravity
    pub fn gravity(&self) -> f32 {
        self.integration.gravity
    }

    pub fn set_max_step(&mut self, max_step: f32) {
        self.max_step = max_step;
    }

    pub fn max_step(&self) -> f32 {
        self.max_step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::Rect;
    use crate::engine::physics::body::{BodyBuilder, BodyProfile};
    use crate::engine::physics::collision::ContactSide;
    use approx::assert_relative_eq;

    fn world() -> PhysicsWorld {
        PhysicsWorld::new(Integration {
            gravity: 1000.0,
            ground_drag: 1200.0,
            air_drag: 400.0,
            slide_drag: 100.0,
            max_speed: 200.0,
            max_fall_speed: 800.0,
        })
    }

    #[test]
    fn test_clamp_step() {
        let w = world();
        assert_eq!(w.clamp_step(0.016).unwrap(), 0.016);
        assert_eq!(w.clamp_step(0.5).unwrap(), DEFAULT_MAX_STEP);
    }

    #[test]
    fn test_clamp_step_rejects_bad_input() {
        let w = world();
        assert!(matches!(w.clamp_step(0.0), Err(SimError::InvalidTimestep(_))));
        assert!(w.clamp_step(-0.1).is_err());
        assert!(w.clamp_step(f32::NAN).is_err());
        assert!(w.clamp_step(f32::INFINITY).is_err());
    }

    #[test]
    fn test_falling_body_lands() {
        let w = world();
        let mut body = BodyBuilder::new(BodyProfile::new(32.0, 32.0).unwrap())
            .position(0.0, 0.0)
            .velocity(0.0, 100.0)
            .build();
        let solids = [Solid::new(Rect::new(0.0, 30.0, 100.0, 20.0), ())];

        // vy: 100 + 1000 * 0.1 = 200, y: 20, so the feet sink 22 into the platform
        let contacts = w
            .step_body(&mut body, Drive::coast(), &solids, 0.1)
            .unwrap();

        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].side, ContactSide::Floor);
        assert_relative_eq!(body.position.y, -2.0);
        assert_eq!(body.velocity.y, 0.0);
        assert!(body.is_grounded());
    }

    #[test]
    fn test_step_rejects_nan_body() {
        let w = world();
        let mut body = BodyBuilder::new(BodyProfile::new(32.0, 32.0).unwrap()).build();
        body.velocity.y = f32::NAN;
        let solids: [Solid<()>; 0] = [];
        assert!(w.step_body(&mut body, Drive::coast(), &solids, 0.1).is_err());
    }

    #[test]
    fn test_gravity_accessors() {
        let mut w = world();
        w.set_gravity(500.0);
        assert_eq!(w.gravity(), 500.0);
    }
}
