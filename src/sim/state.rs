//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in [`GameState`]; there is no
//! other mutable state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::layout::{BrickMetrics, Layout, Viewport};
use crate::config::GameConfig;
use crate::error::GameError;

/// Number of distinct brick colors a level palette provides
pub const BRICK_COLOR_COUNT: u8 = 6;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Every brick is down; ball and paddle are hidden until the pending
    /// transition fires
    LevelTransition,
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the left, right or top wall
    WallBounce,
    /// Ball bounced off the paddle
    PaddleBounce,
    BrickBroken { row: u32, col: u32 },
    /// Ball left through the bottom; the board was reset
    BallLost,
    /// Last brick of `level` went down
    LevelCleared { level: u32 },
    LevelStarted { level: u32 },
    /// Final level cleared; play wraps back to level 1
    Victory,
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Centre position
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    pub radius: f32,
    /// Serve speed; `vel` has this magnitude after every serve and paddle bounce
    pub speed: f32,
    pub visible: bool,
}

impl Ball {
    pub fn new(radius: f32, speed: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius,
            speed,
            visible: true,
        }
    }

    /// Place the ball and launch it up and to the right at `speed`
    pub fn serve(&mut self, pos: Vec2) {
        self.pos = pos;
        self.vel = Vec2::new(1.0, -1.0).normalize() * self.speed;
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub w: f32,
    pub h: f32,
    /// Keyboard-driven horizontal step per tick
    pub dx: f32,
    /// Pointer-driven left edge the paddle eases toward
    pub target_x: f32,
    /// Step applied while a direction key is held
    pub speed: f32,
    pub visible: bool,
}

impl Paddle {
    pub fn new(w: f32, h: f32, speed: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            w,
            h,
            dx: 0.0,
            target_x: 0.0,
            speed,
            visible: true,
        }
    }

    /// Largest valid left edge on a surface of `surface_width`.
    ///
    /// Zero when the paddle is wider than the surface, so clamping never
    /// sees an inverted range.
    #[inline]
    pub fn max_x(&self, surface_width: f32) -> f32 {
        (surface_width - self.w).max(0.0)
    }

    #[inline]
    pub fn clamp_x(&self, x: f32, surface_width: f32) -> f32 {
        x.clamp(0.0, self.max_x(surface_width))
    }

    /// Horizontal centre
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    /// Ease toward the pointer target, add the keyboard step, then clamp
    pub fn move_toward_target(&mut self, smoothing: f32, surface_width: f32) {
        let x = self.x + (self.target_x - self.x) * smoothing + self.dx;
        self.x = self.clamp_x(x, surface_width);
    }
}

/// A single destructible brick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub visible: bool,
    /// Index into the level palette, `< BRICK_COLOR_COUNT`
    pub color: u8,
}

impl Brick {
    /// Knock the brick out. Returns false if it was already down.
    pub fn hit(&mut self) -> bool {
        std::mem::replace(&mut self.visible, false)
    }
}

/// Bricks stored row-major; row 0 is the top row, column 0 the leftmost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBrickGrid")]
pub struct BrickGrid {
    rows: u32,
    cols: u32,
    bricks: Vec<Brick>,
}

/// Unchecked wire form of [`BrickGrid`]
#[derive(Deserialize)]
struct RawBrickGrid {
    rows: u32,
    cols: u32,
    bricks: Vec<Brick>,
}

impl TryFrom<RawBrickGrid> for BrickGrid {
    type Error = String;

    /// Brick count must match `rows * cols` so indexing by `(row, col)` holds
    fn try_from(raw: RawBrickGrid) -> Result<Self, Self::Error> {
        let expected = (raw.rows as u64) * (raw.cols as u64);
        if raw.bricks.len() as u64 != expected {
            return Err(format!(
                "brick grid {}x{} holds {} bricks, expected {}",
                raw.rows,
                raw.cols,
                raw.bricks.len(),
                expected
            ));
        }
        Ok(Self {
            rows: raw.rows,
            cols: raw.cols,
            bricks: raw.bricks,
        })
    }
}

impl BrickGrid {
    /// Lay out a fresh grid with every brick visible
    pub fn generate(rows: u32, cols: u32, metrics: &BrickMetrics, level: u32) -> Self {
        let mut bricks = Vec::with_capacity(rows.saturating_mul(cols) as usize);
        for row in 0..rows {
            let shift = row.saturating_add(level.saturating_sub(1));
            let color = (shift % BRICK_COLOR_COUNT as u32) as u8;
            for col in 0..cols {
                bricks.push(Brick {
                    x: metrics.offset_x + col as f32 * (metrics.w + metrics.padding_x),
                    y: metrics.offset_y + row as f32 * (metrics.h + metrics.padding_y),
                    w: metrics.w,
                    h: metrics.h,
                    visible: true,
                    color,
                });
            }
        }
        Self { rows, cols, bricks }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn get(&self, row: u32, col: u32) -> Option<&Brick> {
        if row < self.rows && col < self.cols {
            self.bricks.get((row * self.cols + col) as usize)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, row: u32, col: u32) -> Option<&mut Brick> {
        if row < self.rows && col < self.cols {
            self.bricks.get_mut((row * self.cols + col) as usize)
        } else {
            None
        }
    }

    /// Row-major iteration with `(row, col)` indices
    pub fn iter(&self) -> impl Iterator<Item = ((u32, u32), &Brick)> {
        let cols = self.cols.max(1);
        self.bricks
            .iter()
            .enumerate()
            .map(move |(i, b)| ((i as u32 / cols, i as u32 % cols), b))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = ((u32, u32), &mut Brick)> {
        let cols = self.cols.max(1);
        self.bricks
            .iter_mut()
            .enumerate()
            .map(move |(i, b)| ((i as u32 / cols, i as u32 % cols), b))
    }

    pub fn visible_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.visible).count()
    }

    /// True once every brick has been knocked out
    pub fn all_cleared(&self) -> bool {
        self.bricks.iter().all(|b| !b.visible)
    }
}

/// A deferred level advance, due once the virtual clock reaches `deadline_ms`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendingTransition {
    pub deadline_ms: f64,
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    pub layout: Layout,
    pub ball: Ball,
    pub paddle: Paddle,
    pub grid: BrickGrid,
    /// Bricks broken since the last grid was generated
    pub score: u32,
    /// Current level, 1..=max_level
    pub level: u32,
    pub phase: GamePhase,
    /// Virtual clock advanced by the host through `tick`
    pub time_ms: f64,
    /// Level advance waiting on the clock
    pub pending: Option<PendingTransition>,
    /// Simulation tick counter
    pub ticks: u64,
}

impl GameState {
    /// Create a game at level 1 for the given viewport.
    ///
    /// Fails if the config is invalid or the viewport has no usable area.
    pub fn new(config: GameConfig, viewport: Viewport) -> Result<Self, GameError> {
        config.validate()?;
        let layout = Layout::compute(viewport, &config)?;

        let level = 1;
        let metrics = layout.brick_metrics(&config);
        let mut state = Self {
            ball: Ball::new(layout.ball_radius(&config), layout.ball_speed),
            paddle: Paddle::new(
                layout.paddle_width(&config, level),
                layout.paddle_height(&config),
                layout.paddle_speed(&config),
            ),
            grid: BrickGrid::generate(config.rows_for_level(level), config.brick_cols, &metrics, level),
            config,
            layout,
            score: 0,
            level,
            phase: GamePhase::Playing,
            time_ms: 0.0,
            pending: None,
            ticks: 0,
        };
        state.reset_positions();

        log::info!(
            "New game: surface {}x{} (scale {:.3}), {} bricks",
            state.layout.width,
            state.layout.height,
            state.layout.scale_x,
            state.grid.len()
        );
        Ok(state)
    }

    /// Recompute the layout for a new viewport and rescale every entity.
    ///
    /// The grid is rebuilt fresh; score and level are untouched. Calling this twice
    /// with the same viewport leaves the state unchanged the second time.
    /// A pending level transition survives the resize.
    pub fn resize(&mut self, viewport: Viewport) -> Result<(), GameError> {
        let layout = Layout::compute(viewport, &self.config)?;
        self.layout = layout;

        self.ball.radius = layout.ball_radius(&self.config);
        self.ball.speed = layout.ball_speed;
        self.paddle.h = layout.paddle_height(&self.config);
        self.paddle.speed = layout.paddle_speed(&self.config);

        self.rebuild_for_level();

        log::debug!(
            "Resized to {}x{} (narrow: {})",
            layout.width,
            layout.height,
            layout.narrow
        );
        Ok(())
    }

    /// Fresh grid and paddle width for the current level, entities back at start
    pub fn rebuild_for_level(&mut self) {
        self.paddle.w = self.layout.paddle_width(&self.config, self.level);
        self.regenerate_grid();
        self.reset_positions();
    }

    /// Replace the grid with a fully visible one for the current level
    pub fn regenerate_grid(&mut self) {
        let metrics = self.layout.brick_metrics(&self.config);
        self.grid = BrickGrid::generate(
            self.config.rows_for_level(self.level),
            self.config.brick_cols,
            &metrics,
            self.level,
        );
    }

    /// Paddle centred at the bottom, ball served from the surface centre
    pub fn reset_positions(&mut self) {
        let width = self.layout.width;
        self.paddle.x = self.paddle.clamp_x(width / 2.0 - self.paddle.w / 2.0, width);
        self.paddle.y = self.layout.paddle_y(&self.config);
        self.paddle.target_x = self.paddle.x;
        self.paddle.dx = 0.0;

        self.ball.serve(self.layout.center());
    }
}
