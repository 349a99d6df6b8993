//! Game state and entity types
//!
//! Everything a frame reads or writes lives in `GameState`; the renderer
//! only ever borrows it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::config::GameConfig;
use crate::error::ConfigError;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Out of lives. Nothing changes after this.
    GameOver,
}

/// Which image the renderer should draw for a sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextureId {
    Player,
    Bullet,
    Enemy,
}

/// A textured rectangle: the player ship, a bullet or an enemy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub rect: Rect,
    pub texture: TextureId,
}

impl Sprite {
    pub fn new(rect: Rect, texture: TextureId) -> Self {
        Self { rect, texture }
    }
}

/// A fading square of debris from a destroyed enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Half the side length
    pub size: f32,
    /// Draw rotation (radians)
    pub rotation: f32,
    /// Spawn timestamp (ms)
    pub born: f64,
    /// Opacity, 1 at birth down to 0 at end of life
    pub alpha: f32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, size: f32, rotation: f32, born: f64) -> Self {
        Self {
            pos,
            vel,
            size,
            rotation,
            born,
            alpha: 1.0,
        }
    }

    /// Recompute alpha from age. Returns false once the particle has faded out.
    pub fn fade(&mut self, now: f64, lifetime_ms: f64) -> bool {
        self.alpha = ((lifetime_ms - (now - self.born)) / lifetime_ms) as f32;
        self.alpha > 0.0
    }

    /// Gravity then velocity, both scaled by frame delta
    pub fn integrate(&mut self, delta: f32, gravity: f32) {
        self.vel.y += gravity * delta;
        self.pos += self.vel * delta;
    }
}

/// Things that happened during the last tick (for audio/visual hooks)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    BulletFired { pos: Vec2 },
    EnemySpawned { y: f32 },
    /// An enemy was shot; `pos` is where its center was
    EnemyDestroyed { pos: Vec2, score: u64 },
    /// An enemy crossed the left edge and cost a life
    EnemyEscaped { lives: i32 },
    GameOver { score: u64 },
}

/// What the HUD shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub lives: i32,
    pub score: u64,
    pub high_score: u64,
    pub game_over: bool,
}

impl Scoreboard {
    pub fn lives_text(&self) -> String {
        format!("Lives: {}", self.lives)
    }

    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Validated tuning constants
    pub config: GameConfig,
    pub phase: GamePhase,
    /// Only ever decremented; can dip below zero if several enemies escape at once
    pub lives: i32,
    pub score: u64,
    /// Best score seen, including values from earlier sessions
    pub high_score: u64,
    /// Timestamp of the last shot (ms)
    pub last_fired: f64,
    /// Last point on the enemy spawn grid (ms)
    pub last_spawn: f64,
    pub player: Sprite,
    pub bullets: Vec<Sprite>,
    pub enemies: Vec<Sprite>,
    /// Visual only
    pub particles: Vec<Particle>,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Start a fresh run. `high_score` is the value restored from persistence.
    pub fn new(config: GameConfig, high_score: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let player = Sprite::new(
            Rect::new(
                config.player_x,
                config.player_start_y(),
                config.player_width,
                config.player_height,
            ),
            TextureId::Player,
        );

        Ok(Self {
            phase: GamePhase::Running,
            lives: config.starting_lives,
            score: 0,
            high_score,
            last_fired: 0.0,
            last_spawn: 0.0,
            player,
            bullets: Vec::new(),
            enemies: Vec::new(),
            particles: Vec::new(),
            events: Vec::new(),
            config,
        })
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Add points for a kill and carry the high score along
    pub fn award_kill(&mut self) {
        self.score = self.score.saturating_add(self.config.score_per_kill);
        self.high_score = self.high_score.max(self.score);
    }

    pub fn scoreboard(&self) -> Scoreboard {
        Scoreboard {
            lives: self.lives,
            score: self.score,
            high_score: self.high_score,
            game_over: self.is_game_over(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(GameConfig::default(), 1200).expect("default config");
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 1200);
        assert_eq!(state.player.rect, Rect::new(134.0, 220.0, 32.0, 40.0));
        assert_eq!(state.player.texture, TextureId::Player);
        assert!(state.bullets.is_empty() && state.enemies.is_empty());
    }

    #[test]
    fn test_new_state_rejects_bad_config() {
        let config = GameConfig {
            enemy_speed: 0.0,
            ..Default::default()
        };
        assert!(GameState::new(config, 0).is_err());
    }

    #[test]
    fn test_award_kill_tracks_high_score() {
        let mut state = GameState::new(GameConfig::default(), 150).expect("default config");
        state.award_kill();
        assert_eq!(state.score, 100);
        assert_eq!(state.high_score, 150);
        state.award_kill();
        assert_eq!(state.score, 200);
        assert_eq!(state.high_score, 200);
    }

    #[test]
    fn test_award_kill_saturates() {
        let config = GameConfig {
            score_per_kill: u64::MAX,
            ..Default::default()
        };
        let mut state = GameState::new(config, 0).expect("huge score_per_kill is valid");
        state.award_kill();
        state.award_kill();
        assert_eq!(state.score, u64::MAX);
        assert_eq!(state.high_score, u64::MAX);
    }

    #[test]
    fn test_particle_fade() {
        let mut p = Particle::new(Vec2::ZERO, Vec2::ZERO, 4.0, 0.0, 1000.0);
        assert!(p.fade(1000.0, 1660.0));
        assert_eq!(p.alpha, 1.0);

        assert!(p.fade(1830.0, 1660.0));
        assert!((p.alpha - 0.5).abs() < 1e-6);

        assert!(!p.fade(2660.0, 1660.0));
        assert!(p.alpha <= 0.0);
    }

    #[test]
    fn test_particle_integrate_applies_gravity_first() {
        let mut p = Particle::new(Vec2::new(10.0, 10.0), Vec2::new(1.0, 0.0), 4.0, 0.0, 0.0);
        p.integrate(2.0, 0.02);
        assert!((p.vel.y - 0.04).abs() < 1e-6);
        assert!((p.pos.x - 12.0).abs() < 1e-6);
        assert!((p.pos.y - 10.08).abs() < 1e-5);
    }

    #[test]
    fn test_scoreboard_text() {
        let mut state = GameState::new(GameConfig::default(), 0).expect("default config");
        state.score = 300;
        let board = state.scoreboard();
        assert_eq!(board.lives_text(), "Lives: 3");
        assert_eq!(board.score_text(), "Score: 300");
        assert!(!board.game_over);
    }
}
