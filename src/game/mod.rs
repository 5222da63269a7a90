// Game layer: the player, level actors and the level runtime built on the engine

pub mod content;
pub mod entities;
pub mod events;
pub mod level;
pub mod player;
