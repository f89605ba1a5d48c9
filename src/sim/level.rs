//! Level state: grid, live entities and the win/loss state machine

use glam::Vec2;

use super::entity::{Entity, EntityId, EntityKind};
use super::grid::{Grid, Obstacle, ObstacleMap};
use crate::consts::FINISH_DELAY;

/// Outcome of a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelStatus {
    /// Not decided yet
    #[default]
    Playing,
    /// Every coin collected
    Won,
    /// Player touched lava or a fireball
    Lost,
}

impl LevelStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LevelStatus::Playing => "playing",
            LevelStatus::Won => "won",
            LevelStatus::Lost => "lost",
        }
    }

    /// Won or lost; a decided status never changes again
    pub fn is_decided(&self) -> bool {
        *self != LevelStatus::Playing
    }
}

/// Something the player touched: a grid feature or another entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    Obstacle(Obstacle),
    Entity(EntityKind),
}

impl From<Obstacle> for Contact {
    fn from(obstacle: Obstacle) -> Self {
        Contact::Obstacle(obstacle)
    }
}

impl From<EntityKind> for Contact {
    fn from(kind: EntityKind) -> Self {
        Contact::Entity(kind)
    }
}

/// A playable level
#[derive(Debug, Clone)]
pub struct Level {
    grid: Grid,
    /// Live entities in spawn order
    entities: Vec<Entity>,
    player: Option<EntityId>,
    status: LevelStatus,
    /// Grace countdown, only decremented once the status is decided
    finish_delay: f32,
}

impl Level {
    /// Build a level; the first player-kind entity becomes the player
    pub fn new(grid: Grid, entities: Vec<Entity>) -> Self {
        let player = entities
            .iter()
            .find(|e| e.kind() == EntityKind::Player)
            .map(Entity::id);
        Self {
            grid,
            entities,
            player,
            status: LevelStatus::Playing,
            finish_delay: FINISH_DELAY,
        }
    }

    /// Override the initial grace countdown
    pub fn with_finish_delay(mut self, delay: f32) -> Self {
        self.finish_delay = delay;
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id() == id)
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id() == id)
    }

    pub fn player_id(&self) -> Option<EntityId> {
        self.player
    }

    pub fn player(&self) -> Option<&Entity> {
        self.player.and_then(|id| self.entity(id))
    }

    /// Mutable player access for whoever drives it (input, scripted tests)
    pub fn player_mut(&mut self) -> Option<&mut Entity> {
        let id = self.player?;
        self.entity_mut(id)
    }

    pub fn status(&self) -> LevelStatus {
        self.status
    }

    pub fn finish_delay(&self) -> f32 {
        self.finish_delay
    }

    /// Count the grace period down; does nothing while still playing
    pub fn advance_finish_delay(&mut self, dt: f32) {
        if self.status.is_decided() {
            self.finish_delay -= dt;
        }
    }

    /// Decided, and the grace countdown has dropped below zero
    pub fn is_finished(&self) -> bool {
        self.status.is_decided() && self.finish_delay < 0.0
    }

    /// First entity, in spawn order, overlapping `entity`
    pub fn find_overlapping(&self, entity: &Entity) -> Option<&Entity> {
        self.entities.iter().find(|other| other.intersects(entity))
    }

    /// What blocks a rectangle at `pos` with extent `size`, if anything
    pub fn obstacle_at(&self, pos: Vec2, size: Vec2) -> Option<Obstacle> {
        self.grid.obstacle_at(pos, size)
    }

    /// Remove the entity with this id; no-op if it is not in the level
    pub fn remove_entity(&mut self, id: EntityId) {
        if let Some(index) = self.entities.iter().position(|e| e.id() == id) {
            self.entities.remove(index);
        }
    }

    /// True if no entity of `kind` is left
    pub fn no_remaining(&self, kind: EntityKind) -> bool {
        !self.entities.iter().any(|e| e.kind() == kind)
    }

    /// Apply the effect of the player touching `contact`
    ///
    /// Lava and fireballs lose the level. A coin is removed, and the level is
    /// won once none are left. Touches after the outcome is decided are
    /// ignored.
    pub fn resolve_touch(&mut self, contact: impl Into<Contact>, entity: EntityId) {
        if self.status.is_decided() {
            return;
        }

        match contact.into() {
            Contact::Obstacle(Obstacle::Lava) | Contact::Entity(EntityKind::Fireball) => {
                self.status = LevelStatus::Lost;
                log::info!("Level lost (touched by {})", entity);
            }
            Contact::Entity(EntityKind::Coin) => {
                self.remove_entity(entity);
                log::debug!("Coin {} collected", entity);
                if self.no_remaining(EntityKind::Coin) {
                    self.status = LevelStatus::Won;
                    log::info!("Level won, all coins collected");
                }
            }
            Contact::Obstacle(Obstacle::Wall)
            | Contact::Entity(EntityKind::Player)
            | Contact::Entity(EntityKind::Actor) => {}
        }
    }

    /// Motion phase: advance every entity against the grid
    pub fn step_entities(&mut self, dt: f32) {
        let grid = &self.grid;
        for entity in &mut self.entities {
            entity.step(dt, grid);
        }
    }
}

impl ObstacleMap for Level {
    fn obstacle_at(&self, pos: Vec2, size: Vec2) -> Option<Obstacle> {
        self.grid.obstacle_at(pos, size)
    }
}
