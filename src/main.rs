//! Lava Runner headless runner
//!
//! Plays every bundled level with an idle player and reports the outcomes.
//! Usage: `lava-runner [settings.json]`

use lava_runner::sim::{Legend, LevelParser, LevelStatus, run_level};
use lava_runner::{LevelPack, Settings};

fn main() {
    env_logger::init();
    log::info!("Lava Runner (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };

    let pack = match LevelPack::bundled() {
        Ok(pack) => pack,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let dt = settings.effective_dt();
    let mut parser = LevelParser::new(Legend::standard(), settings.seed);
    let mut won = 0;

    for index in 0..pack.len() {
        let Some(level) = pack.build(index, &mut parser) else {
            continue;
        };
        let mut level = level.with_finish_delay(settings.effective_finish_delay());
        let status = run_level(&mut level, dt, settings.max_ticks_per_level);
        if status == LevelStatus::Won {
            won += 1;
        }
        println!(
            "Level {}: {} ({}x{}, {} entities left)",
            index + 1,
            status.as_str(),
            level.width(),
            level.height(),
            level.entities().len()
        );
    }

    println!("Won {} of {} levels", won, pack.len());
}
