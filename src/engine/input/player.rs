// Press/release bookkeeping for the single player

use std::collections::HashSet;

use super::action::Action;

/// Input sampled once per simulation step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputFrame {
    pub left: bool,
    pub right: bool,
    pub jump_held: bool,
    /// True only on the first step after a physical press
    pub jump_pressed: bool,
    pub slide_held: bool,
}

impl InputFrame {
    /// -1, 0 or +1; left wins when both directions are held
    pub fn direction(&self) -> f32 {
        if self.left {
            -1.0
        } else if self.right {
            1.0
        } else {
            0.0
        }
    }
}

/// Turns asynchronous press/release events into per-step `InputFrame`s.
///
/// Edges (`pressed`/`released`) survive until `update` is called after the step that
/// consumed them, so a tap shorter than a frame still reaches the simulation.
#[derive(Debug, Default)]
pub struct PlayerInput {
    held: HashSet<Action>,
    pressed_edges: HashSet<Action>,
    released_edges: HashSet<Action>,
}

impl PlayerInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pressed(&self, action: Action) -> bool {
        self.held.contains(&action)
    }

    /// Went down since the last `update`
    pub fn just_pressed(&self, action: Action) -> bool {
        self.pressed_edges.contains(&action)
    }

    /// Went up since the last `update`
    pub fn just_released(&self, action: Action) -> bool {
        self.released_edges.contains(&action)
    }

    /// Key-down; OS key repeat while held does not create a new edge
    pub fn press(&mut self, action: Action) {
        if self.held.insert(action) {
            self.pressed_edges.insert(action);
        }
    }

    /// Key-up; ignored for actions that were not held
    pub fn release(&mut self, action: Action) {
        if self.held.remove(&action) {
            self.released_edges.insert(action);
        }
    }

    /// Snapshot for the current step
    pub fn frame(&self) -> InputFrame {
        InputFrame {
            left: self.is_pressed(Action::MoveLeft),
            right: self.is_pressed(Action::MoveRight),
            jump_held: self.is_pressed(Action::Jump),
            jump_pressed: self.just_pressed(Action::Jump),
            slide_held: self.is_pressed(Action::Slide),
        }
    }

    /// Drop edges once a step has seen them
    pub fn update(&mut self) {
        self.pressed_edges.clear();
        self.released_edges.clear();
    }

    /// Forget everything, e.g. when focus is lost
    pub fn reset(&mut self) {
        self.held.clear();
        self.update();
    }
}
