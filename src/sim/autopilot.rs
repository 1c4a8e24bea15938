//! Demo/attract mode: a seeded pointer that chases the ball
//!
//! The aim point wanders around the ball by a random fraction of the paddle
//! width so rallies hit different parts of the paddle. Same seed, same game.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::input::InputEvent;
use super::state::GameState;

/// Ticks between re-rolling the aim offset
const RETARGET_TICKS: u64 = 30;

pub struct Autopilot {
    rng: Pcg32,
    /// Max aim offset as a fraction of half the paddle width
    jitter: f32,
    offset: f32,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self::with_jitter(seed, 0.8)
    }

    pub fn with_jitter(seed: u64, jitter: f32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            jitter: jitter.clamp(0.0, 1.0),
            offset: 0.0,
        }
    }

    /// Pointer event for this tick, or `None` while the ball is hidden
    pub fn next_input(&mut self, state: &GameState) -> Option<InputEvent> {
        if !state.ball.visible {
            return None;
        }
        if state.ticks % RETARGET_TICKS == 0 && self.jitter > 0.0 {
            self.offset = self.rng.random_range(-self.jitter..=self.jitter);
        }
        let x = state.ball.pos.x + self.offset * state.paddle.w / 2.0;
        Some(InputEvent::PointerMove { x })
    }
}
