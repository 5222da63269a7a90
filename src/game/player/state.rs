// Player motion state machine

/// Represents the current motion state of the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MotionState {
    /// Standing still on ground
    #[default]
    Idle,
    /// Moving horizontally on ground
    Run,
    /// In the air, moving upward
    Jump,
    /// In the air, moving downward (or at the apex)
    Fall,
    /// Sliding along the ground with the low hitbox
    Slide,
}

/// Inputs to the classification, sampled after collision resolution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSample {
    pub grounded: bool,
    pub velocity_x: f32,
    pub velocity_y: f32,
    pub slide_held: bool,
}

impl MotionState {
    /// Pure state-transition function. Rules are checked in order:
    ///
    /// | Condition                                       | State |
    /// |-------------------------------------------------|-------|
    /// | slide held, grounded, abs(vx) > slide_threshold | Slide |
    /// | airborne, `vy` < 0                              | Jump  |
    /// | airborne, `vy` >= 0                             | Fall  |
    /// | grounded, abs(vx) > run_threshold               | Run   |
    /// | grounded, abs(vx) <= run_threshold              | Idle  |
    ///
    /// `slide_threshold` must be the same speed the controller uses to pick the
    /// slide hitbox.
    pub fn classify(sample: MotionSample, run_threshold: f32, slide_threshold: f32) -> Self {
        let speed = sample.velocity_x.abs();
        let moving = speed > run_threshold;

        if sample.slide_held && sample.grounded && speed > slide_threshold {
            Self::Slide
        } else if !sample.grounded {
            if sample.velocity_y < 0.0 {
                Self::Jump
            } else {
                Self::Fall
            }
        } else if moving {
            Self::Run
        } else {
            Self::Idle
        }
    }

    /// Check if the player is on the ground
    pub fn is_grounded(&self) -> bool {
        matches!(self, Self::Idle | Self::Run | Self::Slide)
    }

    /// Check if the player is in the air
    pub fn is_airborne(&self) -> bool {
        matches!(self, Self::Jump | Self::Fall)
    }

    /// Get the animation name for this state
    pub fn animation_name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Run => "run",
            Self::Jump => "jump",
            Self::Fall => "fall",
            Self::Slide => "slide",
        }
    }
}

/// Tracks the classified state across steps so entry transitions can be detected
#[derive(Debug)]
pub struct MotionStateMachine {
    current_state: MotionState,
    previous_state: MotionState,
    state_time: f32,
    just_changed: bool,
}

impl Default for MotionStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl MotionStateMachine {
    pub fn new() -> Self {
        Self {
            current_state: MotionState::Idle,
            previous_state: MotionState::Idle,
            state_time: 0.0,
            just_changed: false,
        }
    }

    /// Get the current state
    pub fn state(&self) -> MotionState {
        self.current_state
    }

    /// Get the previous state
    pub fn previous_state(&self) -> MotionState {
        self.previous_state
    }

    /// Get time spent in current state
    pub fn state_time(&self) -> f32 {
        self.state_time
    }

    /// Check if state changed on the last `advance`
    pub fn state_just_changed(&self) -> bool {
        self.just_changed
    }

    /// Record this step's classification
    pub fn advance(&mut self, new_state: MotionState, dt: f32) {
        if self.current_state != new_state {
            log::debug!("Motion state {:?} -> {:?}", self.current_state, new_state);
            self.previous_state = self.current_state;
            self.current_state = new_state;
            self.state_time = 0.0;
            self.just_changed = true;
        } else {
            self.state_time += dt;
            self.just_changed = false;
        }
    }

    /// Back to idle, e.g. on respawn
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
