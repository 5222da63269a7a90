// Frame clock for a one-step-per-frame simulation
//
// Every rendered frame runs exactly one simulation step. The step length is the
// measured frame time, clamped so a stalled or backgrounded frame cannot carry a body
// through a thin platform in a single integration.

use std::time::{Duration, Instant};

/// Default upper bound on a step (100 ms)
pub const MAX_FRAME_TIME: Duration = Duration::from_millis(100);

/// Weight of the newest frame in the smoothed frame time
const FPS_SMOOTHING: f32 = 0.1;

pub struct FrameClock {
    started: Instant,
    /// Wall time the previous frame began
    last_tick: Instant,
    max_frame_time: Duration,
    paused: bool,

    frames: u64,
    clamped: u64,
    /// Sum of the steps actually handed to the simulation
    simulated: Duration,
    /// Exponentially smoothed frame time in seconds
    smoothed_frame: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_max_frame_time(MAX_FRAME_TIME)
    }

    pub fn with_max_frame_time(max_frame_time: Duration) -> Self {
        let now = Instant::now();
        Self {
            started: now,
            last_tick: now,
            max_frame_time,
            paused: false,
            frames: 0,
            clamped: 0,
            simulated: Duration::ZERO,
            smoothed_frame: 0.0,
        }
    }

    /// Measure wall time since the last frame and return the step to simulate,
    /// or `None` when paused
    pub fn begin_frame(&mut self) -> Option<f32> {
        let now = Instant::now();
        let frame_time = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;
        self.advance(frame_time)
    }

    /// Feed an externally measured frame time (headless runs and tests)
    pub fn advance(&mut self, frame_time: Duration) -> Option<f32> {
        self.frames += 1;
        self.smooth(frame_time);

        if self.paused || frame_time.is_zero() {
            return None;
        }

        let step = if frame_time > self.max_frame_time {
            self.clamped += 1;
            log::debug!(
                "Frame took {:?}, clamping step to {:?}",
                frame_time,
                self.max_frame_time
            );
            self.max_frame_time
        } else {
            frame_time
        };

        self.simulated += step;
        Some(step.as_secs_f32())
    }

    fn smooth(&mut self, frame_time: Duration) {
        let secs = frame_time.as_secs_f32();
        self.smoothed_frame = if self.frames == 1 {
            secs
        } else {
            self.smoothed_frame + (secs - self.smoothed_frame) * FPS_SMOOTHING
        };
    }

    /// Frames per second from the smoothed frame time
    pub fn fps(&self) -> f32 {
        if self.smoothed_frame > 0.0 {
            1.0 / self.smoothed_frame
        } else {
            0.0
        }
    }

    /// Wall time since the clock was created
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn simulated(&self) -> Duration {
        self.simulated
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn clamped_count(&self) -> u64 {
        self.clamped
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Stop producing steps; frames are still counted
    pub fn set_paused(&mut self, paused: bool) {
        if paused == self.paused {
            return;
        }
        self.paused = paused;
        if !paused {
            // the paused interval is not simulated on the next begin_frame
            self.last_tick = Instant::now();
        }
        log::info!("Simulation {}", if paused { "paused" } else { "resumed" });
    }

    pub fn toggle_pause(&mut self) {
        self.set_paused(!self.paused);
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
