//! Surface sizing and scale factors
//!
//! All base metrics in [`GameConfig`] are authored against the 800x600
//! reference surface. A [`Layout`] maps them onto the actual surface.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::consts::{NARROW_WIDTH_FRACTION, REFERENCE_HEIGHT, REFERENCE_WIDTH};
use crate::error::GameError;

/// Space the host makes available for the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    fn validate(&self) -> Result<(), GameError> {
        let ok = |v: f32| v.is_finite() && v > 0.0;
        if ok(self.width) && ok(self.height) {
            Ok(())
        } else {
            Err(GameError::InvalidSurface {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Brick dimensions after scaling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrickMetrics {
    pub w: f32,
    pub h: f32,
    pub padding_x: f32,
    pub padding_y: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

/// Resolved surface size plus the scale factors derived from it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub width: f32,
    pub height: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    /// Narrow viewports get a proportionally shrunk surface and a faster ball
    pub narrow: bool,
    /// Ball speed (pixels per tick) for this layout
    pub ball_speed: f32,
}

impl Layout {
    /// Size the surface for a viewport.
    ///
    /// Narrow viewports use 95% of the available width and keep the reference
    /// aspect ratio; wider ones use the reference resolution unchanged.
    pub fn compute(viewport: Viewport, config: &GameConfig) -> Result<Self, GameError> {
        viewport.validate()?;

        let narrow = viewport.width <= config.narrow_breakpoint;
        let (width, height, ball_speed) = if narrow {
            let width = viewport.width * NARROW_WIDTH_FRACTION;
            (
                width,
                width * (REFERENCE_HEIGHT / REFERENCE_WIDTH),
                config.ball_speed_narrow,
            )
        } else {
            (REFERENCE_WIDTH, REFERENCE_HEIGHT, config.ball_speed)
        };

        Ok(Self {
            width,
            height,
            scale_x: width / REFERENCE_WIDTH,
            scale_y: height / REFERENCE_HEIGHT,
            narrow,
            ball_speed,
        })
    }

    /// Surface centre
    pub fn center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn brick_metrics(&self, config: &GameConfig) -> BrickMetrics {
        BrickMetrics {
            w: config.brick_width * self.scale_x,
            h: config.brick_height * self.scale_y,
            padding_x: config.brick_padding * self.scale_x,
            padding_y: config.brick_padding * self.scale_y,
            offset_x: config.brick_offset_x * self.scale_x,
            offset_y: config.brick_offset_y * self.scale_y,
        }
    }

    /// Paddle width for a level, shrunk per level and then scaled
    pub fn paddle_width(&self, config: &GameConfig, level: u32) -> f32 {
        config.paddle_width_for_level(level) * self.scale_x
    }

    pub fn paddle_height(&self, config: &GameConfig) -> f32 {
        config.paddle_height * self.scale_y
    }

    pub fn paddle_speed(&self, config: &GameConfig) -> f32 {
        config.paddle_speed * self.scale_x
    }

    /// Top edge of the paddle
    pub fn paddle_y(&self, config: &GameConfig) -> f32 {
        self.height - config.paddle_bottom_gap * self.scale_y
    }

    pub fn ball_radius(&self, config: &GameConfig) -> f32 {
        config.ball_radius * self.scale_x.min(self.scale_y)
    }
}
