// Player controller: turns input and timing windows into forces and impulses

use glam::Vec2;

use crate::engine::input::{InputFrame, JumpTiming};
use crate::engine::physics::{
    BodyBuilder, Drive, KinematicBody, PhysicsWorld, ProfileKind, Side, SimError, Solid,
};
use crate::game::events::{EventQueue, GameEvent};

use super::state::{MotionSample, MotionState, MotionStateMachine};
use super::stats::MovementConfig;

/// The player-controlled body and everything that decides how it moves
#[derive(Debug)]
pub struct Player {
    /// Kinematic hitbox
    pub body: KinematicBody,
    /// Movement tuning
    config: MovementConfig,
    /// Coyote-time and jump-buffer windows
    timing: JumpTiming,
    /// Classified motion state
    state_machine: MotionStateMachine,

    /// Set by a jump, cleared on landing; gates jump cut and flutter
    is_jumping: bool,
    /// The flutter has been spent for this airborne period
    flutter_used: bool,
    /// Direction the player faces, for the renderer
    facing: Side,
    /// Continuous time spent idle
    idle_timer: f32,
    /// Grounded flag entering the current step
    was_grounded: bool,
}

impl Player {
    /// Create a player whose hitbox top-left sits at `spawn`
    pub fn new(config: MovementConfig, spawn: Vec2) -> Result<Self, SimError> {
        let body = BodyBuilder::new(config.normal_profile()?)
            .slide_profile(config.slide_profile()?)
            .position(spawn.x, spawn.y)
            .build();

        Ok(Self {
            body,
            config,
            timing: JumpTiming::new(),
            state_machine: MotionStateMachine::new(),
            is_jumping: false,
            flutter_used: false,
            facing: Side::Right,
            idle_timer: 0.0,
            was_grounded: false,
        })
    }

    /// Decide this step's horizontal drive and apply jump impulses.
    ///
    /// Reads the grounded flag left by the previous resolution. The returned drive is
    /// handed to the integrator; wind and carry are added by the caller.
    pub fn prepare(&mut self, input: &InputFrame, dt: f32, events: &mut EventQueue) -> Drive {
        let grounded = self.body.is_grounded();
        self.was_grounded = grounded;

        self.timing
            .update(dt, grounded, input.jump_pressed, &self.config.timing_windows());

        let drive = self.horizontal_drive(input, grounded);

        if self.timing.try_consume() {
            self.body.velocity.y = -self.config.jump_speed;
            self.body.leave_ground();
            self.is_jumping = true;
            self.flutter_used = false;
            events.push(GameEvent::Jumped);
        }

        if self.is_jumping && !grounded {
            // Releasing jump early cuts the ascent short
            if !input.jump_held && self.body.velocity.y < -self.config.jump_cut_threshold {
                self.body.velocity.y *= self.config.jump_cut_factor;
            }

            // One small hover near the apex while jump stays held
            if input.jump_held
                && self.body.velocity.y > -self.config.flutter_threshold
                && !self.flutter_used
            {
                self.body.velocity.y -= self.config.flutter_impulse;
                self.flutter_used = true;
                events.push(GameEvent::Fluttered);
            }
        }

        drive
    }

    fn horizontal_drive(&mut self, input: &InputFrame, grounded: bool) -> Drive {
        let sliding = input.slide_held
            && grounded
            && self.body.velocity.x.abs() > self.config.slide_min_speed;

        if sliding {
            if self.body.profile() != ProfileKind::Slide {
                log::debug!("Slide start at vx={:.1}", self.body.velocity.x);
                self.body.set_profile(ProfileKind::Slide);
            }
            return Drive::accelerate(input.direction() * self.config.slide_acceleration).sliding();
        }

        if self.body.profile() == ProfileKind::Slide {
            log::debug!("Slide end at vx={:.1}", self.body.velocity.x);
            self.body.set_profile(ProfileKind::Normal);
        }

        if input.left {
            self.facing = Side::Left;
        } else if input.right {
            self.facing = Side::Right;
        }

        Drive::accelerate(input.direction() * self.config.acceleration)
    }

    /// Re-read the resolved ground flag, classify the state and emit landing/shiver
    pub fn finish(&mut self, input: &InputFrame, dt: f32, events: &mut EventQueue) {
        let grounded = self.body.is_grounded();

        if grounded && !self.was_grounded {
            self.clear_jump();
            self.timing.refresh_coyote(&self.config.timing_windows());
            events.push(GameEvent::Landed);
        }

        let state = MotionState::classify(
            MotionSample {
                grounded,
                velocity_x: self.body.velocity.x,
                velocity_y: self.body.velocity.y,
                slide_held: input.slide_held,
            },
            self.config.run_threshold,
            self.config.slide_min_speed,
        );
        self.state_machine.advance(state, dt);
        self.match_profile(state);

        if state == MotionState::Idle {
            self.idle_timer += dt;
            if self.idle_timer > self.config.idle_shiver_time {
                self.idle_timer = 0.0;
                events.push(GameEvent::Shiver);
            }
        } else {
            self.idle_timer = 0.0;
        }
    }

    /// The low hitbox is worn exactly while the state is Slide
    fn match_profile(&mut self, state: MotionState) {
        let wanted = if state == MotionState::Slide {
            ProfileKind::Slide
        } else {
            ProfileKind::Normal
        };
        if self.body.profile() != wanted {
            log::debug!("Hitbox {:?} -> {:?} for {:?}", self.body.profile(), wanted, state);
            self.body.set_profile(wanted);
        }
    }

    /// Run a full step against a fixed set of solids, without level actors
    pub fn step<T: Copy>(
        &mut self,
        input: &InputFrame,
        dt: f32,
        world: &PhysicsWorld,
        solids: &[Solid<T>],
        events: &mut EventQueue,
    ) -> Result<(), SimError> {
        let dt = world.clamp_step(dt)?;
        let drive = self.prepare(input, dt, events);
        world.step_body(&mut self.body, drive, solids, dt)?;
        self.finish(input, dt, events);
        Ok(())
    }

    /// Forget the current jump (landing, or being launched by something else)
    pub fn clear_jump(&mut self) {
        self.is_jumping = false;
        self.flutter_used = false;
    }

    /// Put the player back at a spawn point with fresh timers
    pub fn respawn(&mut self, spawn: Vec2) {
        self.body.reset(spawn);
        self.timing.clear();
        self.state_machine.reset();
        self.clear_jump();
        self.idle_timer = 0.0;
        self.was_grounded = false;
        self.facing = Side::Right;
    }

    pub fn state(&self) -> MotionState {
        self.state_machine.state()
    }

    pub fn state_machine(&self) -> &MotionStateMachine {
        &self.state_machine
    }

    pub fn timing(&self) -> &JumpTiming {
        &self.timing
    }

    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    pub fn facing(&self) -> Side {
        self.facing
    }

    pub fn is_jumping(&self) -> bool {
        self.is_jumping
    }

    pub fn flutter_used(&self) -> bool {
        self.flutter_used
    }

    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.body.velocity
    }

    pub fn is_grounded(&self) -> bool {
        self.body.is_grounded()
    }
}
