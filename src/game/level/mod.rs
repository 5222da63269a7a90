// Level runtime
//
// Owns the player and every actor of a loaded level and advances them together,
// one synchronous step at a time:
// - moving platforms advance and carry a player standing on them
// - enemies patrol
// - the player decides its drive, wind is added, the body is integrated and resolved
// - overlap queries against pickups, enemies and the goal
// - removals are applied once every query has run, then the kill plane is checked

pub mod data;

pub use data::{
    BouncePadData, CollectibleData, EnemyData, LevelData, LevelPhysics, MovingPlatformData,
    Point, WindZoneData,
};

use glam::Vec2;
use log::{debug, info};

use crate::core::math::Rect;
use crate::engine::input::InputFrame;
use crate::engine::physics::{touch, ContactSide, PhysicsWorld, SimError, Solid};
use crate::game::content::ContentError;
use crate::game::entities::{
    wind_at, BouncePad, Collectible, CollectibleId, Enemy, EnemyId, Goal, MovingPlatform,
    WindZone,
};
use crate::game::events::{EventQueue, GameEvent};
use crate::game::player::{MovementConfig, Player};

/// Identifies which solid a contact was made with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolidTag {
    Platform(usize),
    Moving(usize),
    BouncePad(usize),
}

/// A running level
#[derive(Debug)]
pub struct Level {
    name: String,
    width: f32,
    height: f32,
    start: Vec2,

    world: PhysicsWorld,
    player: Player,

    platforms: Vec<Rect>,
    moving_platforms: Vec<MovingPlatform>,
    bounce_pads: Vec<BouncePad>,
    wind_zones: Vec<WindZone>,
    /// Level-wide horizontal wind (units/s²)
    global_wind: f32,

    collectibles: Vec<Collectible>,
    enemies: Vec<Enemy>,
    goal: Option<Goal>,

    /// Solid the player landed on during the last step
    standing_on: Option<SolidTag>,
    in_wind: bool,
    /// Kill plane already reported since the last respawn
    fallen: bool,
    /// Remaining time during which enemy contact is ignored
    damage_cooldown: f32,

    events: EventQueue,
}

impl Level {
    /// Build a level from validated data and the player's movement tuning.
    /// Level physics overrides are applied on top of `config`.
    pub fn new(data: &LevelData, config: MovementConfig) -> Result<Self, ContentError> {
        data.validate()?;

        let mut config = config;
        if let Some(gravity) = data.physics.gravity {
            config.gravity = gravity;
        }
        config.validate()?;

        let start = data.start.to_vec2();
        let world = PhysicsWorld::new(config.integration());
        let player = Player::new(config, start)?;

        let moving_platforms = data
            .moving_platforms
            .iter()
            .map(|m| MovingPlatform::new(m.rect, m.travel.to_vec2(), m.half_period))
            .collect();

        let bounce_pads = data
            .bounce_pads
            .iter()
            .map(|b| BouncePad::new(b.rect, b.speed()))
            .collect();

        let wind_zones = data
            .wind_zones
            .iter()
            .map(|w| WindZone::new(w.rect, w.acceleration.to_vec2()))
            .collect();

        let collectibles = data
            .collectibles
            .iter()
            .enumerate()
            .map(|(i, c)| Collectible::new(i as CollectibleId, c.x, c.y, c.kind))
            .collect();

        let enemies = data
            .enemies
            .iter()
            .enumerate()
            .map(|(i, e)| {
                let enemy = Enemy::new(i as EnemyId, e.x, e.y, e.patrol_distance());
                match e.speed {
                    Some(speed) => enemy.with_speed(speed),
                    None => enemy,
                }
            })
            .collect();

        let goal = data.goal.map(|g| Goal::new(g.x, g.y));

        info!(
            "Loaded level '{}' ({}x{}): {} platforms, {} moving, {} collectibles, {} enemies",
            data.name,
            data.width,
            data.height,
            data.platforms.len(),
            data.moving_platforms.len(),
            data.collectibles.len(),
            data.enemies.len()
        );

        Ok(Self {
            name: data.name.clone(),
            width: data.width,
            height: data.height,
            start,
            world,
            player,
            platforms: data.platforms.clone(),
            moving_platforms,
            bounce_pads,
            wind_zones,
            global_wind: data.physics.wind_x.unwrap_or(0.0),
            collectibles,
            enemies,
            goal,
            standing_on: None,
            in_wind: false,
            fallen: false,
            damage_cooldown: 0.0,
            events: EventQueue::new(),
        })
    }

    /// Advance the level by `dt` seconds and return the events it produced.
    ///
    /// An invalid `dt` is rejected before any state changes; an overlong one is clamped.
    pub fn step(&mut self, input: &InputFrame, dt: f32) -> Result<Vec<GameEvent>, SimError> {
        let dt = self.world.clamp_step(dt)?;
        self.player.body.validate()?;

        self.update_platforms(dt);

        for enemy in &mut self.enemies {
            enemy.patrol(dt);
        }

        let drive = self.player.prepare(input, dt, &mut self.events);
        let wind = self.update_wind();
        let drive = drive.with_external(drive.external + wind);

        let solids = self.solids();
        let contacts = self
            .world
            .step_body(&mut self.player.body, drive, &solids, dt)?;
        self.keep_in_bounds();

        self.standing_on = contacts
            .iter()
            .rev()
            .find(|c| c.side == ContactSide::Floor)
            .map(|c| c.tag);

        if let Some(SolidTag::BouncePad(i)) = self.standing_on {
            if let Some(pad) = self.bounce_pads.get(i) {
                pad.launch(&mut self.player.body);
                self.player.clear_jump();
                self.standing_on = None;
                self.events.push(GameEvent::Bounced);
            }
        }

        self.player.finish(input, dt, &mut self.events);

        self.damage_cooldown = (self.damage_cooldown - dt).max(0.0);
        self.check_overlaps();

        self.collectibles.retain(|c| !c.is_collected());
        self.enemies.retain(|e| !e.is_defeated());

        if !self.fallen && self.player.body.rect().top() > self.height {
            info!("Player fell out of '{}'", self.name);
            self.fallen = true;
            self.events.push(GameEvent::FellBelowKillPlane);
        }

        Ok(self.events.drain())
    }

    fn update_platforms(&mut self, dt: f32) {
        for platform in &mut self.moving_platforms {
            platform.update(dt);
        }

        // Carry a player resting on a moving platform along with it
        if let Some(SolidTag::Moving(i)) = self.standing_on {
            if self.player.is_grounded() {
                if let Some(platform) = self.moving_platforms.get(i) {
                    self.player.body.translate(platform.delta());
                }
            }
        }
    }

    /// Left, right and top edges of the level are walls; the bottom stays open
    /// so the kill plane can be reached
    fn keep_in_bounds(&mut self) {
        let body = &mut self.player.body;
        let max_x = (self.width - body.size().x).max(0.0);

        if body.position.x < 0.0 {
            body.position.x = 0.0;
            body.velocity.x = body.velocity.x.max(0.0);
        } else if body.position.x > max_x {
            body.position.x = max_x;
            body.velocity.x = body.velocity.x.min(0.0);
        }

        if body.position.y < 0.0 {
            body.position.y = 0.0;
            body.velocity.y = body.velocity.y.max(0.0);
        }
    }

    /// Total wind on the player this step; reports zone entry and exit
    fn update_wind(&mut self) -> Vec2 {
        let (zone_wind, inside) = wind_at(&self.wind_zones, &self.player.body.rect());
        if inside != self.in_wind {
            debug!("Wind zone {}", if inside { "entered" } else { "left" });
            self.in_wind = inside;
            self.events.push(GameEvent::WindChanged { inside });
        }
        zone_wind + Vec2::new(self.global_wind, 0.0)
    }

    /// Everything the player collides with, in resolution order
    fn solids(&self) -> Vec<Solid<SolidTag>> {
        let statics = self
            .platforms
            .iter()
            .enumerate()
            .map(|(i, rect)| Solid::new(*rect, SolidTag::Platform(i)));
        let moving = self
            .moving_platforms
            .iter()
            .enumerate()
            .map(|(i, p)| Solid::new(p.rect(), SolidTag::Moving(i)));
        let pads = self
            .bounce_pads
            .iter()
            .enumerate()
            .map(|(i, p)| Solid::new(p.rect, SolidTag::BouncePad(i)));

        statics.chain(moving).chain(pads).collect()
    }

    /// Pickups, enemies and the goal; removals wait for the end of the step
    fn check_overlaps(&mut self) {
        let body = self.player.body.rect();

        for item in &mut self.collectibles {
            if body.intersects(&item.rect()) && item.collect() {
                self.events.push(GameEvent::Collected {
                    id: item.id,
                    kind: item.kind,
                });
            }
        }

        let config = self.player.config();
        let stomp_speed = config.stomp_bounce_speed;
        let knockback = Vec2::new(config.knockback_speed_x, config.knockback_speed_y);
        let cooldown = config.damage_cooldown;

        for enemy in &mut self.enemies {
            if enemy.is_defeated() {
                continue;
            }
            let Some(hit) = touch(&body, &enemy.rect()) else {
                continue;
            };

            if hit.from_above {
                enemy.defeat();
                self.player.body.velocity.y = -stomp_speed;
                self.player.body.leave_ground();
                self.player.clear_jump();
                self.events.push(GameEvent::Stomped(enemy.id));
            } else if self.damage_cooldown <= 0.0 {
                // Knocked away from the enemy, towards the side the player is on
                self.player.body.velocity =
                    Vec2::new(hit.side.sign() * knockback.x, -knockback.y);
                self.player.body.leave_ground();
                self.player.clear_jump();
                self.damage_cooldown = cooldown;
                self.events.push(GameEvent::Damaged {
                    from: hit.side.opposite(),
                });
            }
        }

        if let Some(goal) = &mut self.goal {
            if goal.check(&body) {
                info!("Goal reached in '{}'", self.name);
                self.events.push(GameEvent::ReachedGoal);
            }
        }
    }

    /// Put the player back at the level start. Taken pickups, defeated enemies and
    /// a reached goal stay as they are.
    pub fn respawn(&mut self) {
        info!("Respawning at ({:.0}, {:.0})", self.start.x, self.start.y);
        self.player.respawn(self.start);
        self.standing_on = None;
        self.fallen = false;
        self.damage_cooldown = 0.0;
        if self.in_wind {
            self.in_wind = false;
            self.events.push(GameEvent::WindChanged { inside: false });
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Level extent as a rectangle anchored at the origin
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    pub fn start(&self) -> Vec2 {
        self.start
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    pub fn platforms(&self) -> &[Rect] {
        &self.platforms
    }

    pub fn moving_platforms(&self) -> &[MovingPlatform] {
        &self.moving_platforms
    }

    pub fn bounce_pads(&self) -> &[BouncePad] {
        &self.bounce_pads
    }

    pub fn wind_zones(&self) -> &[WindZone] {
        &self.wind_zones
    }

    pub fn collectibles(&self) -> &[Collectible] {
        &self.collectibles
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn goal(&self) -> Option<&Goal> {
        self.goal.as_ref()
    }

    pub fn standing_on(&self) -> Option<SolidTag> {
        self.standing_on
    }

    pub fn is_in_wind(&self) -> bool {
        self.in_wind
    }

    pub fn has_fallen(&self) -> bool {
        self.fallen
    }
}
