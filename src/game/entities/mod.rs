// Level actors
//
// Everything in a level besides the player and static platforms:
// - Patrolling enemies
// - Collectibles and the goal
// - Wind zones, bounce pads and moving platforms

pub mod bounce_pad;
pub mod collectible;
pub mod enemy;
pub mod goal;
pub mod moving_platform;
pub mod wind;

pub type EnemyId = u32;
pub type CollectibleId = u32;

// Re-export commonly used types
pub use bounce_pad::{BouncePad, DEFAULT_BOUNCE_SPEED};
pub use collectible::{Collectible, CollectibleKind, COLLECTIBLE_SIZE};
pub use enemy::{Enemy, DEFAULT_PATROL_DISTANCE, DEFAULT_PATROL_SPEED, ENEMY_SIZE};
pub use goal::{Goal, GOAL_SIZE};
pub use moving_platform::MovingPlatform;
pub use wind::{wind_at, WindZone};
