// Player system
//
// This module contains everything related to the player-controlled body:
// - Movement tuning loaded from RON
// - The controller that turns input into forces, jumps and hitbox changes
// - The motion state machine feeding animation selection

pub mod controller;
pub mod state;
pub mod stats;

// Re-export commonly used types
pub use controller::Player;
pub use state::{MotionSample, MotionState, MotionStateMachine};
pub use stats::{MovementConfig, BASE_CONFIG};
