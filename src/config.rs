//! Game tuning constants
//!
//! Loaded from JSON (any missing field falls back to its default) and
//! validated once, before the first frame runs.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Every number the simulation depends on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Playfield ===
    /// Playfield width (pixels)
    pub width: f32,
    /// Playfield height (pixels)
    pub height: f32,
    /// Band at the top reserved for the scoreboard; nothing spawns or moves above it
    pub hud_margin: f32,

    // === Player ===
    /// Fixed horizontal position of the ship
    pub player_x: f32,
    pub player_width: f32,
    pub player_height: f32,
    /// Pixels per 60 Hz frame (also the bullet speed)
    pub player_speed: f32,
    pub starting_lives: i32,

    // === Weapons ===
    pub bullet_size: f32,
    /// Minimum time between two shots (ms)
    pub fire_cooldown_ms: f64,

    // === Enemies ===
    /// Pixels per 60 Hz frame
    pub enemy_speed: f32,
    pub enemy_size: f32,
    /// Fixed spawn grid period (ms)
    pub enemy_spawn_interval_ms: f64,
    pub score_per_kill: u64,

    // === Particles ===
    /// Time for a particle to fade from fully opaque to gone (ms)
    pub particle_lifetime_ms: f64,
    /// Burst size range, inclusive
    pub particle_count_min: u32,
    pub particle_count_max: u32,
    /// Half-size of a particle square
    pub particle_radius: f32,
    /// Downward acceleration per frame
    pub gravity: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 480.0,
            hud_margin: 80.0,

            player_x: 134.0,
            player_width: 4.0 * 8.0,
            player_height: 5.0 * 8.0,
            player_speed: 250.0 / 60.0,
            starting_lives: 3,

            bullet_size: 5.0,
            fire_cooldown_ms: 500.0,

            enemy_speed: 5.0,
            enemy_size: 5.0 * 8.0,
            enemy_spawn_interval_ms: 1667.0,
            score_per_kill: 100,

            particle_lifetime_ms: 1660.0,
            particle_count_min: 7,
            particle_count_max: 9,
            particle_radius: 4.0,
            gravity: 0.02,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs that would break the simulation mid-frame
    pub fn validate(&self) -> Result<(), ConfigError> {
        let floats: [(&'static str, f64); 15] = [
            ("width", self.width as f64),
            ("height", self.height as f64),
            ("hud_margin", self.hud_margin as f64),
            ("player_x", self.player_x as f64),
            ("player_width", self.player_width as f64),
            ("player_height", self.player_height as f64),
            ("player_speed", self.player_speed as f64),
            ("bullet_size", self.bullet_size as f64),
            ("fire_cooldown_ms", self.fire_cooldown_ms),
            ("enemy_speed", self.enemy_speed as f64),
            ("enemy_size", self.enemy_size as f64),
            ("enemy_spawn_interval_ms", self.enemy_spawn_interval_ms),
            ("particle_lifetime_ms", self.particle_lifetime_ms),
            ("particle_radius", self.particle_radius as f64),
            ("gravity", self.gravity as f64),
        ];
        for (field, value) in floats {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }

        let positive: [(&'static str, f64); 14] = [
            ("width", self.width as f64),
            ("height", self.height as f64),
            ("player_width", self.player_width as f64),
            ("player_height", self.player_height as f64),
            ("player_speed", self.player_speed as f64),
            ("starting_lives", self.starting_lives as f64),
            ("bullet_size", self.bullet_size as f64),
            ("fire_cooldown_ms", self.fire_cooldown_ms),
            ("enemy_speed", self.enemy_speed as f64),
            ("enemy_size", self.enemy_size as f64),
            ("enemy_spawn_interval_ms", self.enemy_spawn_interval_ms),
            ("score_per_kill", self.score_per_kill as f64),
            ("particle_lifetime_ms", self.particle_lifetime_ms),
            ("particle_radius", self.particle_radius as f64),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        if self.hud_margin < 0.0 {
            return Err(ConfigError::Negative {
                field: "hud_margin",
                value: self.hud_margin as f64,
            });
        }

        if self.particle_count_min > self.particle_count_max {
            return Err(ConfigError::InvertedRange {
                field: "particle_count",
                min: self.particle_count_min,
                max: self.particle_count_max,
            });
        }

        let available = self.height - self.hud_margin;
        // Enemy y is drawn from a half-open range, which must not be empty
        if available <= self.enemy_size {
            return Err(ConfigError::PlayfieldTooSmall {
                field: "enemy_size",
                available,
                required: self.enemy_size,
            });
        }
        if available < self.player_height {
            return Err(ConfigError::PlayfieldTooSmall {
                field: "player_height",
                available,
                required: self.player_height,
            });
        }

        Ok(())
    }

    /// Highest y the player may occupy
    pub fn player_max_y(&self) -> f32 {
        self.height - self.player_height
    }

    /// Player starting y: vertically centered in the playfield
    pub fn player_start_y(&self) -> f32 {
        self.height / 2.0 - self.player_height / 2.0
    }
}
