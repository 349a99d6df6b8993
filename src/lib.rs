//! Void Runner - A side-scrolling arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, spawning, collisions, game state)
//! - `session`: Frame driver that feeds the simulation timestamps and input
//! - `platform`: Clock/input contracts and logging setup
//! - `highscore`: High score persistence
//! - `config`: Data-driven game tuning

pub mod config;
pub mod error;
pub mod highscore;
pub mod platform;
pub mod session;
pub mod sim;

pub use config::GameConfig;
pub use error::{ConfigError, StoreError};
pub use highscore::{HighScoreStore, MemoryStore};
pub use session::Session;
