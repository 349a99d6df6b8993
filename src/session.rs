//! Frame driver for one play session
//!
//! Owns the game state, the seeded RNG and the previous frame timestamp.
//! The host calls `frame` once per display refresh until it reports
//! `GameOver`, then calls `end` to persist the high score.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::GameConfig;
use crate::error::{ConfigError, StoreError};
use crate::highscore::HighScoreStore;
use crate::platform::{Clock, InputSource};
use crate::sim::{GamePhase, GameState, TickInput, frame_delta, tick};

pub struct Session {
    /// Run seed for reproducibility
    pub seed: u64,
    pub state: GameState,
    rng: Pcg32,
    prev_time: f64,
    frames: u64,
}

impl Session {
    /// Start a session at `start_ms`, restoring the high score from `store`
    pub fn new(
        config: GameConfig,
        seed: u64,
        store: &impl HighScoreStore,
        start_ms: f64,
    ) -> Result<Self, ConfigError> {
        let high_score = store.load();
        let state = GameState::new(config, high_score)?;
        log::info!("Session started (seed {seed}, high score {high_score})");
        Ok(Self {
            seed,
            state,
            rng: Pcg32::seed_from_u64(seed),
            prev_time: start_ms,
            frames: 0,
        })
    }

    pub fn is_running(&self) -> bool {
        !self.state.is_game_over()
    }

    /// Frames simulated so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame at timestamp `now` with the host's held keys
    pub fn frame(&mut self, now: f64, input: &impl InputSource) -> GamePhase {
        self.frame_with(now, &TickInput::from_source(input))
    }

    /// Run one frame with an explicit input snapshot
    pub fn frame_with(&mut self, now: f64, input: &TickInput) -> GamePhase {
        if !self.is_running() {
            return GamePhase::GameOver;
        }
        let delta = frame_delta(self.prev_time, now);
        tick(&mut self.state, input, now, delta, &mut self.rng);
        self.prev_time = now;
        self.frames += 1;
        self.state.phase
    }

    /// Drive frames off `clock` until game over or `max_frames`, asking
    /// `input` for each frame's held keys. Returns the frames run.
    pub fn run(
        &mut self,
        clock: &mut impl Clock,
        max_frames: u64,
        mut input: impl FnMut(&GameState) -> TickInput,
    ) -> u64 {
        let mut ran = 0;
        while self.is_running() && ran < max_frames {
            let now = clock.now_ms();
            let held = input(&self.state);
            self.frame_with(now, &held);
            ran += 1;
        }
        ran
    }

    /// Hand the session's high score to persistence. A higher stored value
    /// (e.g. from a concurrent session) is kept.
    pub fn end(&self, store: &mut impl HighScoreStore) -> Result<u64, StoreError> {
        let best = self.state.high_score.max(store.load());
        store.save(best)?;
        log::info!(
            "Session ended after {} frames: score {}, high score {best}",
            self.frames,
            self.state.score
        );
        Ok(best)
    }
}
