// Jump timing windows: coyote time and jump buffering

/// Grace windows for jump input, in seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingWindows {
    /// How long after leaving the ground a jump is still accepted
    pub coyote_time: f32,
    /// How long before landing a jump press is remembered
    pub jump_buffer_time: f32,
}

/// Countdown timers that decide whether a jump may fire this step
///
/// A jump is permitted while both timers are running: the buffer remembers a press made
/// slightly before landing, coyote time honours one made slightly after leaving a ledge.
#[derive(Debug, Clone, Default)]
pub struct JumpTiming {
    coyote_remaining: f32,
    buffer_remaining: f32,
}

impl JumpTiming {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance both timers by one step.
    ///
    /// While grounded the coyote window is held full; in the air it drains. A fresh jump
    /// press refills the buffer, otherwise it drains.
    pub fn update(&mut self, dt: f32, grounded: bool, jump_pressed: bool, windows: &TimingWindows) {
        if grounded {
            self.coyote_remaining = windows.coyote_time;
        } else {
            self.coyote_remaining = (self.coyote_remaining - dt).max(0.0);
        }

        if jump_pressed {
            self.buffer_remaining = windows.jump_buffer_time;
        } else {
            self.buffer_remaining = (self.buffer_remaining - dt).max(0.0);
        }
    }

    /// Refill the coyote window immediately (used on the landing step)
    pub fn refresh_coyote(&mut self, windows: &TimingWindows) {
        self.coyote_remaining = windows.coyote_time;
    }

    pub fn can_jump(&self) -> bool {
        self.buffer_remaining > 0.0 && self.coyote_remaining > 0.0
    }

    /// Spend both windows so one press cannot fire twice
    pub fn consume(&mut self) {
        self.coyote_remaining = 0.0;
        self.buffer_remaining = 0.0;
    }

    /// Consume and return true if a jump is permitted
    pub fn try_consume(&mut self) -> bool {
        if self.can_jump() {
            self.consume();
            true
        } else {
            false
        }
    }

    pub fn coyote_remaining(&self) -> f32 {
        self.coyote_remaining
    }

    pub fn buffer_remaining(&self) -> f32 {
        self.buffer_remaining
    }

    /// Clear both timers
    pub fn clear(&mut self) {
        self.consume();
    }
}
