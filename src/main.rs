use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use log::{debug, info};

use pippin::engine::game_loop::FrameClock;
use pippin::engine::input::{Action, PlayerInput};
use pippin::game::events::GameEvent;
use pippin::game::level::{Level, LevelData};
use pippin::game::player::MovementConfig;

/// Level used when no path is given on the command line
const BUILTIN_LEVEL: &str = include_str!("../assets/levels/frost_meadow.ron");

/// One 60 Hz frame
const FRAME_TIME: Duration = Duration::from_micros(16_667);

/// Simulated seconds before the run gives up on reaching the goal
const RUN_SECONDS: f32 = 30.0;

/// A timed press or release
#[derive(Debug, Clone, Copy)]
struct Cue {
    at: f32,
    action: Action,
    pressed: bool,
}

/// Timed press/release script standing in for a keyboard
struct ScriptedInput {
    cues: Vec<Cue>,
    next: usize,
}

impl ScriptedInput {
    /// Run right, hop roughly once a second, slide now and then
    fn runner() -> Self {
        let mut cues = vec![Cue {
            at: 0.5,
            action: Action::MoveRight,
            pressed: true,
        }];

        for i in 0..(RUN_SECONDS as usize) {
            let at = 1.0 + i as f32;
            cues.push(Cue {
                at,
                action: Action::Jump,
                pressed: true,
            });
            cues.push(Cue {
                at: at + 0.4,
                action: Action::Jump,
                pressed: false,
            });
        }

        for at in [6.6, 14.6] {
            cues.push(Cue {
                at,
                action: Action::Slide,
                pressed: true,
            });
            cues.push(Cue {
                at: at + 0.3,
                action: Action::Slide,
                pressed: false,
            });
        }

        cues.sort_by(|a, b| a.at.total_cmp(&b.at));
        Self { cues, next: 0 }
    }

    /// Apply every cue that is due by `time`
    fn apply(&mut self, time: f32, input: &mut PlayerInput) {
        while let Some(cue) = self.cues.get(self.next) {
            if cue.at > time {
                break;
            }
            if cue.pressed {
                input.press(cue.action);
            } else {
                input.release(cue.action);
            }
            self.next += 1;
        }
    }
}

#[derive(Debug, Default)]
struct RunStats {
    jumps: u32,
    collected: u32,
    stomps: u32,
    hits: u32,
    falls: u32,
    reached_goal: bool,
}

fn load_level(path: Option<&String>) -> Result<LevelData> {
    match path {
        Some(path) => LevelData::load(path).with_context(|| format!("loading level {}", path)),
        None => LevelData::from_ron(BUILTIN_LEVEL).context("parsing built-in level"),
    }
}

fn load_config(path: Option<&String>) -> Result<MovementConfig> {
    match path {
        Some(path) => {
            MovementConfig::load(path).with_context(|| format!("loading movement config {}", path))
        }
        None => Ok(MovementConfig::default()),
    }
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Pippin headless run...");

    // Usage: pippin [level.ron] [movement.ron]
    let args: Vec<String> = env::args().skip(1).collect();
    let data = load_level(args.first())?;
    let config = load_config(args.get(1))?;

    let mut level = Level::new(&data, config)?;
    let mut clock = FrameClock::new();
    let mut input = PlayerInput::new();
    let mut script = ScriptedInput::runner();
    let mut stats = RunStats::default();
    let mut time = 0.0;

    while time < RUN_SECONDS && !stats.reached_goal {
        let Some(dt) = clock.advance(FRAME_TIME) else {
            continue;
        };

        script.apply(time, &mut input);
        let events = level.step(&input.frame(), dt)?;
        input.update();
        time += dt;

        for event in events {
            debug!("t={:.2}s {:?}", time, event);
            match event {
                GameEvent::Jumped => stats.jumps += 1,
                GameEvent::Collected { id, kind } => {
                    info!("Collected {:?} #{}", kind, id);
                    stats.collected += 1;
                }
                GameEvent::Stomped(id) => {
                    info!("Stomped enemy #{}", id);
                    stats.stomps += 1;
                }
                GameEvent::Damaged { from } => {
                    info!("Hit from the {:?}", from);
                    stats.hits += 1;
                }
                GameEvent::FellBelowKillPlane => {
                    stats.falls += 1;
                    level.respawn();
                }
                GameEvent::ReachedGoal => stats.reached_goal = true,
                _ => {}
            }
        }
    }

    let player = level.player();
    info!(
        "Finished after {:.1}s ({} frames): x={:.0} state={:?}",
        time,
        clock.frame_count(),
        player.position().x,
        player.state()
    );
    info!("{:?}", stats);

    Ok(())
}
