//! Breakout - a paddle, a ball and a wall of bricks
//!
//! Core modules:
//! - `sim`: Deterministic simulation (layout, physics, collisions, progression)
//! - `render`: Drawing-surface contract and frame painting
//! - `config`: Data-driven game tuning loaded from JSON
//! - `error`: Setup-time precondition failures

pub mod config;
pub mod error;
pub mod render;
pub mod sim;

pub use config::GameConfig;
pub use error::GameError;

/// Game configuration constants
pub mod consts {
    /// Reference surface the base metrics are authored against
    pub const REFERENCE_WIDTH: f32 = 800.0;
    pub const REFERENCE_HEIGHT: f32 = 600.0;
    /// Viewports at or below this width get the narrow (mobile) layout
    pub const NARROW_BREAKPOINT: f32 = 768.0;
    /// Share of the viewport width used by the narrow layout
    pub const NARROW_WIDTH_FRACTION: f32 = 0.95;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 80.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    pub const PADDLE_SPEED: f32 = 8.0;
    /// Gap between the paddle top and the surface bottom
    pub const PADDLE_BOTTOM_GAP: f32 = 20.0;
    /// Pointer-tracking blend per tick
    pub const PADDLE_SMOOTHING: f32 = 0.2;
    /// Width lost per level above 1
    pub const PADDLE_SHRINK_PER_LEVEL: f32 = 10.0;
    pub const PADDLE_MIN_WIDTH: f32 = 40.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED: f32 = 4.0;
    /// Slightly faster on narrow screens
    pub const BALL_SPEED_NARROW: f32 = 5.0;
    /// Maximum paddle deflection from vertical (60°)
    pub const MAX_BOUNCE_ANGLE: f32 = std::f32::consts::FRAC_PI_3;

    /// Brick grid defaults
    pub const BRICK_ROWS: u32 = 5;
    pub const BRICK_COLS: u32 = 9;
    pub const BRICK_ROWS_PER_LEVEL: u32 = 1;
    pub const BRICK_MAX_ROWS: u32 = 8;
    pub const BRICK_WIDTH: f32 = 70.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_X: f32 = 45.0;
    pub const BRICK_OFFSET_Y: f32 = 60.0;

    /// Progression
    pub const MAX_LEVEL: u32 = 5;
    /// Pause between clearing a level and the next grid (milliseconds)
    pub const LEVEL_TRANSITION_DELAY_MS: f64 = 500.0;

    /// Nominal frame time at 60 Hz (milliseconds)
    pub const FRAME_MS: f64 = 1000.0 / 60.0;
}
