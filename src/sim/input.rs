//! Player input
//!
//! Hosts translate their key, mouse and touch events into [`InputEvent`]s.
//! Events only set paddle intent; the paddle moves during the next tick.

use serde::{Deserialize, Serialize};

use super::state::GameState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Map a host key name (`"ArrowLeft"`, `"ArrowRight"`) to a direction
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "Left" => Some(Direction::Left),
            "ArrowRight" | "Right" => Some(Direction::Right),
            _ => None,
        }
    }

    fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// Input the core consumes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    KeyDown(Direction),
    /// Releasing either direction stops keyboard movement
    KeyUp(Direction),
    /// Pointer or touch position, in surface coordinates
    PointerMove { x: f32 },
}

impl GameState {
    /// Apply one input event to the paddle's intent
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(dir) => {
                self.paddle.dx = self.paddle.speed * dir.sign();
            }
            InputEvent::KeyUp(_) => {
                self.paddle.dx = 0.0;
            }
            InputEvent::PointerMove { x } => {
                if !x.is_finite() {
                    return;
                }
                let target = x - self.paddle.w / 2.0;
                self.paddle.target_x = self.paddle.clamp_x(target, self.layout.width);
            }
        }
    }
}
