// Shared math types

pub mod math;

pub use math::Rect;
