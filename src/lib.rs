//! Lava Runner - A tile platformer simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, grid, collisions, level state)
//! - `levels`: Level packs (JSON arrays of text rows)
//! - `settings`: Runner configuration
//! - `error`: Engine error type

pub mod error;
pub mod levels;
pub mod settings;
pub mod sim;

pub use error::EngineError;
pub use levels::LevelPack;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep used by the headless runner (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Grace period (in simulation seconds) between a decided status and `is_finished`
    pub const FINISH_DELAY: f32 = 1.0;

    /// Player hitbox, shifted up so its feet rest on the spawn tile
    pub const PLAYER_SIZE: Vec2 = Vec2::new(0.8, 1.5);
    pub const PLAYER_SPAWN_OFFSET: Vec2 = Vec2::new(0.0, -0.5);

    /// Coin hitbox, centered inside its tile
    pub const COIN_SIZE: Vec2 = Vec2::new(0.6, 0.6);
    pub const COIN_SPAWN_OFFSET: Vec2 = Vec2::new(0.2, 0.1);
    /// Angular speed of the coin bob (radians per second)
    pub const COIN_SPRING_SPEED: f32 = 8.0;
    /// Vertical amplitude of the coin bob (tiles)
    pub const COIN_SPRING_DIST: f32 = 0.07;

    /// Fireballs occupy exactly one tile
    pub const FIREBALL_SIZE: Vec2 = Vec2::ONE;
    pub const HORIZONTAL_FIREBALL_SPEED: Vec2 = Vec2::new(2.0, 0.0);
    pub const VERTICAL_FIREBALL_SPEED: Vec2 = Vec2::new(0.0, 2.0);
    pub const FIRE_RAIN_SPEED: Vec2 = Vec2::new(0.0, 3.0);
}
