//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed step per tick, virtual clock supplied by the host
//! - Seeded RNG only (autopilot)
//! - Stable iteration order (bricks row-major)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod input;
pub mod layout;
pub mod progression;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use collision::{Rect, ball_rect_overlap, paddle_bounce, reflect_off_walls};
pub use input::{Direction, InputEvent};
pub use layout::{BrickMetrics, Layout, Viewport};
pub use state::{
    BRICK_COLOR_COUNT, Ball, Brick, BrickGrid, GameEvent, GamePhase, GameState, Paddle,
    PendingTransition,
};
pub use tick::tick;
