//! Setup-time error types.
//!
//! Nothing in the per-tick path can fail. Invalid surfaces and invalid
//! configuration are rejected when a game is created or resized, before any
//! value reaches the physics loop.

use std::fmt;

/// Top-level error enum for the breakout core.
#[derive(Debug)]
pub enum GameError {
    /// Surface (or viewport) dimensions were zero, negative or not finite.
    InvalidSurface {
        width: f32,
        height: f32,
    },

    /// A configuration value is outside its valid range.
    InvalidConfig {
        /// Name of the offending field.
        field: &'static str,
        /// Human-readable description of the accepted range.
        reason: &'static str,
    },

    /// The brick grid would contain no bricks.
    EmptyGrid { rows: u32, cols: u32 },

    /// Config file could not be read.
    Io(std::io::Error),

    /// Config file is not valid JSON for [`crate::GameConfig`].
    Parse(serde_json::Error),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidSurface { width, height } => {
                write!(f, "invalid surface dimensions {}x{}", width, height)
            }
            GameError::InvalidConfig { field, reason } => {
                write!(f, "invalid config value for '{}': {}", field, reason)
            }
            GameError::EmptyGrid { rows, cols } => {
                write!(f, "brick grid is empty ({} rows x {} columns)", rows, cols)
            }
            GameError::Io(e) => write!(f, "failed to read config: {}", e),
            GameError::Parse(e) => write!(f, "failed to parse config: {}", e),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Io(e) => Some(e),
            GameError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GameError {
    fn from(e: std::io::Error) -> Self {
        GameError::Io(e)
    }
}

impl From<serde_json::Error> for GameError {
    fn from(e: serde_json::Error) -> Self {
        GameError::Parse(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_field() {
        let err = GameError::InvalidConfig {
            field: "max_level",
            reason: "must be at least 1",
        };
        let msg = err.to_string();
        assert!(msg.contains("max_level"));
        assert!(msg.contains("at least 1"));
    }

    #[test]
    fn test_parse_error_has_source() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = GameError::from(parse);
        assert!(std::error::Error::source(&err).is_some());
    }
}
