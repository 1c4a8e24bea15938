//! Game tuning and configuration
//!
//! Every field defaults to the matching constant in [`crate::consts`]. A JSON
//! file may override any subset of fields; missing keys keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::GameError;

/// Upper bound on bricks in any level's grid
pub const MAX_BRICKS: u32 = 10_000;

/// Difficulty preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" | "norm" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Ball speed multiplier for this preset
    pub fn ball_speed_factor(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.75,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 1.5,
        }
    }

    /// Paddle width multiplier for this preset
    pub fn paddle_width_factor(&self) -> f32 {
        match self {
            Difficulty::Easy => 1.25,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 0.8,
        }
    }
}

/// Tunable game parameters, authored against the 800x600 reference surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_bottom_gap: f32,
    /// Pointer-tracking blend per tick (0, 1]
    pub paddle_smoothing: f32,
    pub paddle_shrink_per_level: f32,
    pub paddle_min_width: f32,

    // === Ball ===
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub ball_speed_narrow: f32,

    // === Bricks ===
    pub brick_rows: u32,
    pub brick_cols: u32,
    pub brick_rows_per_level: u32,
    pub brick_max_rows: u32,
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_padding: f32,
    pub brick_offset_x: f32,
    pub brick_offset_y: f32,

    // === Progression ===
    pub max_level: u32,
    pub level_transition_delay_ms: f64,

    // === Layout ===
    pub narrow_breakpoint: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_bottom_gap: PADDLE_BOTTOM_GAP,
            paddle_smoothing: PADDLE_SMOOTHING,
            paddle_shrink_per_level: PADDLE_SHRINK_PER_LEVEL,
            paddle_min_width: PADDLE_MIN_WIDTH,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            ball_speed_narrow: BALL_SPEED_NARROW,

            brick_rows: BRICK_ROWS,
            brick_cols: BRICK_COLS,
            brick_rows_per_level: BRICK_ROWS_PER_LEVEL,
            brick_max_rows: BRICK_MAX_ROWS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_padding: BRICK_PADDING,
            brick_offset_x: BRICK_OFFSET_X,
            brick_offset_y: BRICK_OFFSET_Y,

            max_level: MAX_LEVEL,
            level_transition_delay_ms: LEVEL_TRANSITION_DELAY_MS,

            narrow_breakpoint: NARROW_BREAKPOINT,
        }
    }
}

impl GameConfig {
    /// Create a config from a difficulty preset (applies preset multipliers)
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        let mut config = Self::default();
        config.apply_difficulty(difficulty);
        config
    }

    /// Scale ball speeds and paddle widths by the preset's factors
    pub fn apply_difficulty(&mut self, difficulty: Difficulty) {
        let speed = difficulty.ball_speed_factor();
        self.ball_speed *= speed;
        self.ball_speed_narrow *= speed;

        let width = difficulty.paddle_width_factor();
        self.paddle_width *= width;
        self.paddle_min_width = (self.paddle_min_width * width).min(self.paddle_width);
    }

    /// Parse a config from JSON and validate it
    pub fn from_json_str(json: &str) -> Result<Self, GameError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a JSON file and validate it
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), GameError> {
        fn positive(field: &'static str, value: f32) -> Result<(), GameError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(GameError::InvalidConfig {
                    field,
                    reason: "must be a positive finite number",
                })
            }
        }
        fn non_negative(field: &'static str, value: f32) -> Result<(), GameError> {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(GameError::InvalidConfig {
                    field,
                    reason: "must be a non-negative finite number",
                })
            }
        }

        positive("paddle_width", self.paddle_width)?;
        positive("paddle_height", self.paddle_height)?;
        positive("paddle_min_width", self.paddle_min_width)?;
        non_negative("paddle_speed", self.paddle_speed)?;
        non_negative("paddle_bottom_gap", self.paddle_bottom_gap)?;
        non_negative("paddle_shrink_per_level", self.paddle_shrink_per_level)?;
        if !(self.paddle_smoothing > 0.0 && self.paddle_smoothing <= 1.0) {
            return Err(GameError::InvalidConfig {
                field: "paddle_smoothing",
                reason: "must be in (0, 1]",
            });
        }
        if self.paddle_min_width > self.paddle_width {
            return Err(GameError::InvalidConfig {
                field: "paddle_min_width",
                reason: "must not exceed paddle_width",
            });
        }

        positive("ball_radius", self.ball_radius)?;
        positive("ball_speed", self.ball_speed)?;
        positive("ball_speed_narrow", self.ball_speed_narrow)?;

        if self.brick_rows == 0 || self.brick_cols == 0 {
            return Err(GameError::EmptyGrid {
                rows: self.brick_rows,
                cols: self.brick_cols,
            });
        }
        let largest_grid = self.brick_max_rows.checked_mul(self.brick_cols);
        if !largest_grid.is_some_and(|n| n <= MAX_BRICKS) {
            return Err(GameError::InvalidConfig {
                field: "brick_max_rows",
                reason: "brick_max_rows x brick_cols must not exceed 10000 bricks",
            });
        }
        if self.brick_max_rows < self.brick_rows {
            return Err(GameError::InvalidConfig {
                field: "brick_max_rows",
                reason: "must be at least brick_rows",
            });
        }
        positive("brick_width", self.brick_width)?;
        positive("brick_height", self.brick_height)?;
        non_negative("brick_padding", self.brick_padding)?;
        non_negative("brick_offset_x", self.brick_offset_x)?;
        non_negative("brick_offset_y", self.brick_offset_y)?;

        if self.max_level == 0 {
            return Err(GameError::InvalidConfig {
                field: "max_level",
                reason: "must be at least 1",
            });
        }
        if !(self.level_transition_delay_ms.is_finite() && self.level_transition_delay_ms >= 0.0) {
            return Err(GameError::InvalidConfig {
                field: "level_transition_delay_ms",
                reason: "must be a non-negative finite number",
            });
        }
        positive("narrow_breakpoint", self.narrow_breakpoint)?;

        Ok(())
    }

    /// Brick rows for a level (1-based), capped at `brick_max_rows`
    pub fn rows_for_level(&self, level: u32) -> u32 {
        let extra = level.saturating_sub(1).saturating_mul(self.brick_rows_per_level);
        self.brick_rows.saturating_add(extra).min(self.brick_max_rows)
    }

    /// Unscaled paddle width for a level (1-based), never below `paddle_min_width`
    pub fn paddle_width_for_level(&self, level: u32) -> f32 {
        let shrink = level.saturating_sub(1) as f32 * self.paddle_shrink_per_level;
        (self.paddle_width - shrink).max(self.paddle_min_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(GameConfig::default().validate().is_ok());
        for d in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
            assert!(GameConfig::from_difficulty(d).validate().is_ok(), "{}", d.as_str());
        }
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json_str(r#"{ "max_level": 3, "ball_speed": 6.0 }"#).unwrap();
        assert_eq!(config.max_level, 3);
        assert_eq!(config.ball_speed, 6.0);
        assert_eq!(config.brick_cols, BRICK_COLS);
        assert_eq!(config.paddle_smoothing, PADDLE_SMOOTHING);
    }

    #[test]
    fn test_rejects_empty_grid() {
        let err = GameConfig::from_json_str(r#"{ "brick_rows": 0 }"#).unwrap_err();
        assert!(matches!(err, GameError::EmptyGrid { rows: 0, .. }));
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = GameConfig::default();
        config.ball_speed = 0.0;
        assert!(matches!(
            config.validate(),
            Err(GameError::InvalidConfig { field: "ball_speed", .. })
        ));

        let mut config = GameConfig::default();
        config.paddle_smoothing = 1.5;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.max_level = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_oversized_grid() {
        let json = r#"{ "brick_rows": 70000, "brick_cols": 70000, "brick_max_rows": 70000 }"#;
        let err = GameConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig { field: "brick_max_rows", .. }));

        let config = GameConfig {
            brick_rows: 100,
            brick_max_rows: 101,
            brick_cols: 100,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            brick_rows: 100,
            brick_max_rows: 100,
            brick_cols: 100,
            ..GameConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = GameConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, GameError::Parse(_)));
    }

    #[test]
    fn test_level_scaling() {
        let config = GameConfig::default();
        assert_eq!(config.rows_for_level(1), 5);
        assert_eq!(config.rows_for_level(2), 6);
        assert_eq!(config.rows_for_level(100), BRICK_MAX_ROWS);

        assert_eq!(config.paddle_width_for_level(1), 80.0);
        assert_eq!(config.paddle_width_for_level(2), 70.0);
        assert_eq!(config.paddle_width_for_level(50), PADDLE_MIN_WIDTH);
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!(Difficulty::from_str("HARD"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("norm"), Some(Difficulty::Normal));
        assert_eq!(Difficulty::from_str("extreme"), None);
    }

    #[test]
    fn test_difficulty_scales_speed_and_paddle() {
        let hard = GameConfig::from_difficulty(Difficulty::Hard);
        assert_eq!(hard.ball_speed, BALL_SPEED * 1.5);
        assert_eq!(hard.ball_speed_narrow, BALL_SPEED_NARROW * 1.5);
        assert_eq!(hard.paddle_width, PADDLE_WIDTH * 0.8);
        assert!(hard.validate().is_ok());

        let easy = GameConfig::from_difficulty(Difficulty::Easy);
        assert_eq!(easy.paddle_width, PADDLE_WIDTH * 1.25);
        assert!(easy.paddle_min_width <= easy.paddle_width);

        assert_eq!(GameConfig::from_difficulty(Difficulty::Normal), GameConfig::default());
    }
}
