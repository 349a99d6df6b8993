//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Time comes in as a timestamp, never read from a clock
//! - Randomness comes in as an injected RNG
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod geometry;
pub mod spawn;
pub mod state;
pub mod tick;

pub use autopilot::autopilot_input;
pub use geometry::Rect;
pub use spawn::{emit_burst, try_fire, try_spawn_enemy};
pub use state::{GameEvent, GamePhase, GameState, Particle, Scoreboard, Sprite, TextureId};
pub use tick::{FRAME_MS, TickInput, frame_delta, tick};
