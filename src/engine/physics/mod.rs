// Physics: hand-integrated kinematic bodies and rectangle collision resolution

pub mod body;
pub mod collision;
mod world;

pub use body::{BodyBuilder, BodyProfile, Drive, Integration, KinematicBody, ProfileKind};
pub use collision::{resolve, touch, Contact, ContactSide, Side, Solid, Touch};
pub use world::{PhysicsWorld, DEFAULT_MAX_STEP};

/// Out-of-contract input rejected at the simulation boundary
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimError {
    #[error("Invalid timestep: {0} (must be finite and > 0)")]
    InvalidTimestep(f32),

    #[error("Invalid body dimensions: {width}x{height}")]
    InvalidDimensions { width: f32, height: f32 },

    #[error("Non-finite value in {0}")]
    NonFinite(&'static str),
}
