//! Error types
//!
//! Nothing in the per-frame simulation can fail. Errors only surface when a
//! configuration is built or when the high score is written out.

use core::fmt;

/// A `GameConfig` that would make the simulation misbehave
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A speed, size or duration that must be strictly positive
    NonPositive { field: &'static str, value: f64 },
    /// An infinite or NaN value
    NonFinite { field: &'static str, value: f64 },
    /// A margin or offset that must not be negative
    Negative { field: &'static str, value: f64 },
    /// A `[min, max]` range with `min > max`
    InvertedRange {
        field: &'static str,
        min: u32,
        max: u32,
    },
    /// Playfield too small to fit an entity below the HUD margin
    PlayfieldTooSmall {
        field: &'static str,
        available: f32,
        required: f32,
    },
    /// Config text could not be parsed
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositive { field, value } => {
                write!(f, "{field} must be greater than zero, got {value}")
            }
            Self::NonFinite { field, value } => {
                write!(f, "{field} must be finite, got {value}")
            }
            Self::Negative { field, value } => {
                write!(f, "{field} must not be negative, got {value}")
            }
            Self::InvertedRange { field, min, max } => {
                write!(f, "{field} range is inverted: min={min}, max={max}")
            }
            Self::PlayfieldTooSmall {
                field,
                available,
                required,
            } => write!(
                f,
                "playfield too small for {field}: {available}px available below the HUD, need more than {required}px"
            ),
            Self::Parse(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Failure to persist the high score
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreError {
    Io(String),
    Serialize(String),
    /// Backing storage does not exist on this platform (e.g. no LocalStorage)
    Unavailable,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "high score i/o failed: {msg}"),
            Self::Serialize(msg) => write!(f, "high score encoding failed: {msg}"),
            Self::Unavailable => write!(f, "high score storage unavailable"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialize(err.to_string())
    }
}
