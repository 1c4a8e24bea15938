//! Breakout headless runner
//!
//! Plays the game with the autopilot and logs what happens. Useful for
//! tuning configs without a drawing surface.
//!
//! Usage: `breakout [config.json]`
//!
//! Environment:
//! - `BREAKOUT_CONFIG`: config path if none is given on the command line
//! - `BREAKOUT_DIFFICULTY`: easy | normal | hard (applied on top of the config)
//! - `BREAKOUT_SEED`: autopilot seed (default 1)
//! - `BREAKOUT_TICKS`: ticks to simulate (default 36000, ten minutes at 60 Hz)
//! - `BREAKOUT_VIEWPORT`: `WIDTHxHEIGHT` (default 1280x800)

use std::env;

use breakout::config::Difficulty;
use breakout::consts::FRAME_MS;
use breakout::render::{DrawList, paint};
use breakout::sim::{Autopilot, GameEvent, GameState, Viewport, tick};
use breakout::{GameConfig, GameError};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Breakout (headless) starting...");

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), GameError> {
    let mut config = match env::args().nth(1).or_else(|| env::var("BREAKOUT_CONFIG").ok()) {
        Some(path) => GameConfig::load(path)?,
        None => {
            log::info!("Using default config");
            GameConfig::default()
        }
    };

    if let Ok(name) = env::var("BREAKOUT_DIFFICULTY") {
        match Difficulty::from_str(&name) {
            Some(difficulty) => {
                config.apply_difficulty(difficulty);
                config.validate()?;
                log::info!("Difficulty: {}", difficulty.as_str());
            }
            None => log::warn!("Unknown difficulty '{}', ignoring", name),
        }
    }

    let seed = env_parse("BREAKOUT_SEED").unwrap_or(1u64);
    let ticks = env_parse("BREAKOUT_TICKS").unwrap_or(36_000u64);
    let viewport = env::var("BREAKOUT_VIEWPORT")
        .ok()
        .and_then(|v| parse_viewport(&v))
        .unwrap_or(Viewport::new(1280.0, 800.0));

    let mut state = GameState::new(config, viewport)?;
    let mut pilot = Autopilot::new(seed);
    let mut frame = DrawList::default();

    let mut bricks = 0u64;
    let mut lost = 0u64;
    let mut best_score = 0u32;

    for _ in 0..ticks {
        let inputs: Vec<_> = pilot.next_input(&state).into_iter().collect();
        for event in tick(&mut state, &inputs, FRAME_MS) {
            match event {
                GameEvent::BrickBroken { .. } => bricks += 1,
                GameEvent::BallLost => lost += 1,
                GameEvent::Victory => log::info!("Victory at tick {}", state.ticks),
                _ => {}
            }
        }
        best_score = best_score.max(state.score);
        paint(&state, &mut frame);
    }

    log::info!(
        "Simulated {} ticks ({:.1}s): level {}, {} bricks broken, {} balls lost, best score {}",
        state.ticks,
        state.time_ms / 1000.0,
        state.level,
        bricks,
        lost,
        best_score
    );
    log::info!("Last frame: {} draw commands", frame.commands.len());
    if log::log_enabled!(log::Level::Debug) {
        log::debug!("Final state: {}", serde_json::to_string(&state)?);
    }

    Ok(())
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    match raw.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("Ignoring unparsable {}='{}'", key, raw);
            None
        }
    }
}

fn parse_viewport(s: &str) -> Option<Viewport> {
    let (w, h) = s.split_once(|c: char| c == 'x' || c == 'X')?;
    Some(Viewport::new(w.trim().parse().ok()?, h.trim().parse().ok()?))
}
