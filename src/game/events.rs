// One-shot notifications emitted by the simulation for the orchestration layer

use crate::engine::physics::Side;
use crate::game::entities::{CollectibleId, CollectibleKind, EnemyId};

/// Everything the core reports; each value is one occurrence, not a continuous state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Player touched down after being airborne
    Landed,
    /// A jump fired
    Jumped,
    /// The single per-jump flutter was used
    Fluttered,
    /// A pickup was taken
    Collected { id: CollectibleId, kind: CollectibleKind },
    /// An enemy was stomped and removed
    Stomped(EnemyId),
    /// Player was hit; `from` is the side the hit came from
    Damaged { from: Side },
    /// Player dropped below the bottom of the level
    FellBelowKillPlane,
    /// Player reached the goal (once per level)
    ReachedGoal,
    /// Player was launched by a bounce pad
    Bounced,
    /// Player entered (`true`) or left (`false`) wind
    WindChanged { inside: bool },
    /// Player idled long enough to shiver (cosmetic)
    Shiver,
}

/// Events collected during one step, handed to the caller at the end of it
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(8),
        }
    }

    pub fn push(&mut self, event: GameEvent) {
        log::debug!("Event: {:?}", event);
        self.events.push(event);
    }

    /// Take all queued events, leaving the queue empty
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn contains(&self, event: &GameEvent) -> bool {
        self.events.contains(event)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
