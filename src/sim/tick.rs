//! Fixed timestep simulation tick
//!
//! One tick is two strictly ordered phases: every entity moves, then the
//! player's contacts are resolved against the updated positions.

use glam::Vec2;

use super::entity::Entity;
use super::grid::Obstacle;
use super::level::{Level, LevelStatus};

/// Summary of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    pub status: LevelStatus,
    pub finished: bool,
}

/// Advance the level by one timestep of `dt` seconds
pub fn tick(level: &mut Level, dt: f32) -> TickOutcome {
    if level.is_finished() {
        return outcome(level);
    }

    // Motion phase
    level.step_entities(dt);

    // Touch phase
    if !level.status().is_decided() {
        resolve_player_contacts(level);
    }

    level.advance_finish_delay(dt);
    outcome(level)
}

fn outcome(level: &Level) -> TickOutcome {
    TickOutcome {
        status: level.status(),
        finished: level.is_finished(),
    }
}

fn resolve_player_contacts(level: &mut Level) {
    let Some(player) = level.player().cloned() else {
        return;
    };

    let touched = level
        .find_overlapping(&player)
        .map(|other| (other.kind(), other.id()));
    if let Some((kind, id)) = touched {
        level.resolve_touch(kind, id);
    }

    if level.obstacle_at(player.pos, player.size) == Some(Obstacle::Lava) {
        level.resolve_touch(Obstacle::Lava, player.id());
    }
}

/// Tick until the level is finished or `max_ticks` have run
///
/// Returns the final status; `Playing` means the tick budget ran out.
pub fn run_level(level: &mut Level, dt: f32, max_ticks: u32) -> LevelStatus {
    for ticks in 0..max_ticks {
        if tick(level, dt).finished {
            log::debug!("Level finished after {} ticks", ticks + 1);
            return level.status();
        }
    }
    log::debug!("Level still running after {} ticks", max_ticks);
    level.status()
}

/// Teleport the player, e.g. from input or a scripted test
pub fn place_player(level: &mut Level, pos: Vec2) -> Option<&Entity> {
    let player = level.player_mut()?;
    player.pos = pos;
    Some(&*player)
}
