//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied timestep only
//! - Seeded RNG only (coin phases come from the parser's RNG)
//! - Stable iteration order (spawn order, row-major grid scans)
//! - No rendering or platform dependencies

pub mod entity;
pub mod geom;
pub mod grid;
pub mod level;
pub mod parser;
pub mod tick;

pub use entity::{Entity, EntityConfig, EntityId, EntityKind, FireballConfig, Motion, Spring};
pub use geom::Rect;
pub use grid::{Grid, Obstacle, ObstacleMap};
pub use level::{Contact, Level, LevelStatus};
pub use parser::{Legend, LevelParser, Spawn};
pub use tick::{TickOutcome, place_player, run_level, tick};
