//! Text level parsing
//!
//! A level is a list of rows, one character per tile:
//! - `' '` empty, `'x'` wall, `'!'` lava
//! - `'@'` player, `'o'` coin
//! - `'='` horizontal fireball, `'|'` vertical fireball, `'v'` fire rain
//!
//! Unknown characters are empty tiles.

use std::collections::HashMap;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entity::Entity;
use super::grid::{Grid, Obstacle};
use super::level::Level;
use crate::error::EngineError;

/// Entity factories a legend symbol can spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spawn {
    Player,
    Coin,
    HorizontalFireball,
    VerticalFireball,
    FireRain,
}

impl Spawn {
    /// Create the entity for a tile at `pos` (column, row)
    pub fn build<R: Rng>(self, pos: Vec2, rng: &mut R) -> Entity {
        match self {
            Spawn::Player => Entity::player(pos),
            Spawn::Coin => Entity::coin(pos, rng),
            Spawn::HorizontalFireball => Entity::horizontal_fireball(pos),
            Spawn::VerticalFireball => Entity::vertical_fireball(pos),
            Spawn::FireRain => Entity::fire_rain(pos),
        }
    }
}

/// Mapping from level symbols to spawns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Legend {
    entries: HashMap<char, Spawn>,
}

impl Default for Legend {
    fn default() -> Self {
        Self::standard()
    }
}

impl Legend {
    /// Legend with no entity symbols
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// The stock symbol set
    pub fn standard() -> Self {
        let entries = [
            ('@', Spawn::Player),
            ('=', Spawn::HorizontalFireball),
            ('|', Spawn::VerticalFireball),
            ('v', Spawn::FireRain),
            ('o', Spawn::Coin),
        ];
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Bind `symbol` to `spawn`, replacing any previous binding
    ///
    /// Obstacle symbols cannot be rebound: a tile is either terrain or a
    /// spawn point.
    pub fn insert(&mut self, symbol: char, spawn: Spawn) -> Result<(), EngineError> {
        if let Some(obstacle) = LevelParser::obstacle_from_symbol(symbol) {
            return Err(EngineError::invalid(format!(
                "symbol '{}' is reserved for {}",
                symbol,
                obstacle.as_str()
            )));
        }
        self.entries.insert(symbol, spawn);
        Ok(())
    }

    /// Builder form of `insert`
    pub fn with(mut self, symbol: char, spawn: Spawn) -> Result<Self, EngineError> {
        self.insert(symbol, spawn)?;
        Ok(self)
    }

    pub fn get(&self, symbol: char) -> Option<Spawn> {
        self.entries.get(&symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds levels from text rows
///
/// Owns the RNG used for coin phases, so parsing the same rows with the same
/// seed gives identical levels.
#[derive(Debug, Clone)]
pub struct LevelParser {
    legend: Legend,
    rng: Pcg32,
}

impl Default for LevelParser {
    fn default() -> Self {
        Self::new(Legend::standard(), 0)
    }
}

impl LevelParser {
    pub fn new(legend: Legend, seed: u64) -> Self {
        Self {
            legend,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    /// Terrain for a symbol; `None` is an empty tile
    pub fn obstacle_from_symbol(symbol: char) -> Option<Obstacle> {
        match symbol {
            'x' => Some(Obstacle::Wall),
            '!' => Some(Obstacle::Lava),
            _ => None,
        }
    }

    /// Terrain grid; ragged rows stay ragged
    pub fn build_grid<S: AsRef<str>>(rows: &[S]) -> Grid {
        let cells = rows
            .iter()
            .map(|row| row.as_ref().chars().map(Self::obstacle_from_symbol).collect())
            .collect();
        Grid::new(cells)
    }

    /// Entities for every legend symbol, in row-major order
    pub fn build_entities<S: AsRef<str>>(&mut self, rows: &[S]) -> Vec<Entity> {
        let mut entities = Vec::new();
        for (y, row) in rows.iter().enumerate() {
            for (x, symbol) in row.as_ref().chars().enumerate() {
                if let Some(spawn) = self.legend.get(symbol) {
                    let pos = Vec2::new(x as f32, y as f32);
                    entities.push(spawn.build(pos, &mut self.rng));
                }
            }
        }
        entities
    }

    pub fn parse<S: AsRef<str>>(&mut self, rows: &[S]) -> Level {
        let grid = Self::build_grid(rows);
        let entities = self.build_entities(rows);
        log::debug!(
            "Parsed level {}x{} with {} entities",
            grid.width(),
            grid.height(),
            entities.len()
        );
        Level::new(grid, entities)
    }
}
