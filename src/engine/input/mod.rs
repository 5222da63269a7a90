// Input handling system
//
// The movement core never sees raw key events. A front end feeds press/release
// events into `PlayerInput`, takes one `InputFrame` per simulation step and calls
// `update()` afterwards so edge-triggered signals last exactly one step.
//
// ## Architecture
//
// - `action`: Actions the movement core understands
// - `player`: Press/release debouncing into per-step `InputFrame`s
// - `buffer`: Coyote-time and jump-buffer countdowns
//
// ## Usage Example
//
// ```rust
// use pippin::engine::input::{Action, PlayerInput};
//
// let mut input = PlayerInput::new();
// input.press(Action::Jump);
//
// let frame = input.frame();
// assert!(frame.jump_pressed);
//
// // After stepping the level
// input.update();
// assert!(!input.frame().jump_pressed);
// ```

pub mod action;
pub mod buffer;
pub mod player;

// Re-export commonly used types
pub use action::Action;
pub use buffer::{JumpTiming, TimingWindows};
pub use player::{InputFrame, PlayerInput};
