//! Level entities: player, coins and fireballs
//!
//! Every entity is the same axis-aligned box; what differs between variants
//! is the `Motion` strategy picked by its constructor.

use std::f32::consts::TAU;
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use glam::Vec2;
use rand::Rng;

use super::geom::{Rect, ensure_finite, ensure_size};
use super::grid::ObstacleMap;
use crate::consts::*;
use crate::error::EngineError;

static NEXT_ENTITY_ID: AtomicU32 = AtomicU32::new(1);

/// Identity of an entity
///
/// Ids are unique per process. A cloned entity keeps its id and is treated
/// as the same entity by `intersects` and `Level::remove_entity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u32);

impl EntityId {
    fn fresh() -> Self {
        Self(NEXT_ENTITY_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Gameplay category of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Generic box with no gameplay meaning
    Actor,
    Player,
    Coin,
    Fireball,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Actor => "actor",
            EntityKind::Player => "player",
            EntityKind::Coin => "coin",
            EntityKind::Fireball => "fireball",
        }
    }
}

/// Vertical bobbing around a fixed anchor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    /// Rest position; the coin never leaves its vertical line through here
    pub anchor: Vec2,
    /// Current phase (radians)
    pub phase: f32,
    /// Phase advance per second
    pub speed: f32,
    /// Amplitude (tiles)
    pub dist: f32,
}

impl Spring {
    pub fn new(anchor: Vec2, phase: f32) -> Self {
        Self {
            anchor,
            phase,
            speed: COIN_SPRING_SPEED,
            dist: COIN_SPRING_DIST,
        }
    }

    /// Current vertical displacement from the anchor
    pub fn offset(&self) -> Vec2 {
        Vec2::new(0.0, self.phase.sin() * self.dist)
    }

    /// Advance the phase and return the new position
    fn advance(&mut self, dt: f32) -> Vec2 {
        self.phase += self.speed * dt;
        self.anchor + self.offset()
    }
}

/// Per-step motion policy
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Does not move on its own
    Idle,
    /// Moves by `speed`; reverses velocity when blocked
    Bounce,
    /// Moves by `speed`; jumps back to `start` when blocked
    Rain { start: Vec2 },
    /// Bobs in place, ignoring the grid
    Spring(Spring),
}

/// Construction parameters for a generic entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityConfig {
    /// Top-left corner. Default (0, 0)
    pub pos: Vec2,
    /// Extent. Default (1, 1)
    pub size: Vec2,
    /// Displacement per second. Default (0, 0)
    pub speed: Vec2,
}

impl Default for EntityConfig {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            size: Vec2::ONE,
            speed: Vec2::ZERO,
        }
    }
}

/// Construction parameters for a bouncing fireball
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FireballConfig {
    /// Top-left corner. Default (0, 0)
    pub pos: Vec2,
    /// Displacement per second. Default (0, 0)
    pub speed: Vec2,
}

/// An axis-aligned moving box in the level
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    id: EntityId,
    kind: EntityKind,
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: Vec2,
    motion: Motion,
}

impl Entity {
    fn with_motion(kind: EntityKind, pos: Vec2, size: Vec2, speed: Vec2, motion: Motion) -> Self {
        Self {
            id: EntityId::fresh(),
            kind,
            pos,
            size,
            speed,
            motion,
        }
    }

    /// A generic idle box
    pub fn actor(config: EntityConfig) -> Result<Self, EngineError> {
        let pos = ensure_finite("pos", config.pos)?;
        let size = ensure_size(config.size)?;
        let speed = ensure_finite("speed", config.speed)?;
        Ok(Self::with_motion(EntityKind::Actor, pos, size, speed, Motion::Idle))
    }

    /// The player, standing on the tile at `spawn`
    pub fn player(spawn: Vec2) -> Self {
        Self::with_motion(
            EntityKind::Player,
            spawn + PLAYER_SPAWN_OFFSET,
            PLAYER_SIZE,
            Vec2::ZERO,
            Motion::Idle,
        )
    }

    /// A coin centered in the tile at `spawn`, with a random starting phase
    pub fn coin<R: Rng>(spawn: Vec2, rng: &mut R) -> Self {
        let pos = spawn + COIN_SPAWN_OFFSET;
        let phase = rng.random_range(0.0..TAU);
        Self::with_motion(
            EntityKind::Coin,
            pos,
            COIN_SIZE,
            Vec2::ZERO,
            Motion::Spring(Spring::new(pos, phase)),
        )
    }

    /// A fireball that bounces back along its path when blocked
    pub fn fireball(config: FireballConfig) -> Result<Self, EngineError> {
        let pos = ensure_finite("pos", config.pos)?;
        let speed = ensure_finite("speed", config.speed)?;
        Ok(Self::bouncing_fireball(pos, speed))
    }

    fn bouncing_fireball(pos: Vec2, speed: Vec2) -> Self {
        Self::with_motion(EntityKind::Fireball, pos, FIREBALL_SIZE, speed, Motion::Bounce)
    }

    /// Fireball patrolling left and right
    pub fn horizontal_fireball(spawn: Vec2) -> Self {
        Self::bouncing_fireball(spawn, HORIZONTAL_FIREBALL_SPEED)
    }

    /// Fireball patrolling up and down
    pub fn vertical_fireball(spawn: Vec2) -> Self {
        Self::bouncing_fireball(spawn, VERTICAL_FIREBALL_SPEED)
    }

    /// Falling fireball that restarts from `spawn` when it lands
    pub fn fire_rain(spawn: Vec2) -> Self {
        Self::with_motion(
            EntityKind::Fireball,
            spawn,
            FIREBALL_SIZE,
            FIRE_RAIN_SPEED,
            Motion::Rain { start: spawn },
        )
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn motion(&self) -> &Motion {
        &self.motion
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Where `speed` would carry this entity after `dt` seconds
    pub fn next_position(&self, dt: f32) -> Vec2 {
        self.pos + self.speed * dt
    }

    /// True if the two boxes overlap with non-zero area. Never true for
    /// the entity itself.
    pub fn intersects(&self, other: &Entity) -> bool {
        if other.id == self.id {
            return false;
        }
        self.rect().overlaps(&other.rect())
    }

    /// Advance this entity by `dt` seconds
    pub fn step<M: ObstacleMap + ?Sized>(&mut self, dt: f32, map: &M) {
        match self.motion {
            Motion::Idle => {}
            Motion::Spring(ref mut spring) => {
                self.pos = spring.advance(dt);
            }
            Motion::Bounce => {
                let next = self.next_position(dt);
                if map.obstacle_at(next, self.size).is_some() {
                    self.speed = -self.speed;
                } else {
                    self.pos = next;
                }
            }
            Motion::Rain { start } => {
                let next = self.next_position(dt);
                if map.obstacle_at(next, self.size).is_some() {
                    self.pos = start;
                } else {
                    self.pos = next;
                }
            }
        }
    }
}
