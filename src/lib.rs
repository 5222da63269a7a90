// Pippin: player movement, collision resolution and level simulation for a 2D platformer
//
// - `core`: rectangle math
// - `engine`: kinematic bodies, collision resolution, input timing and frame clock
// - `game`: player controller, level actors and the level runtime

pub mod core;
pub mod engine;
pub mod game;

// Re-export commonly used types
pub use engine::input::{Action, InputFrame, PlayerInput};
pub use engine::physics::SimError;
pub use game::content::ContentError;
pub use game::events::GameEvent;
pub use game::level::{Level, LevelData};
pub use game::player::{MotionState, MovementConfig};
