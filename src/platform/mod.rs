//! Platform abstraction layer
//!
//! The simulation never touches the outside world directly. This module
//! defines what it needs from the host:
//! - Time (a monotonic millisecond clock)
//! - Input (which actions are currently held)
//! - Logging setup (env_logger natively, the browser console on web)

use std::collections::HashSet;

use crate::sim::TickInput;

/// Game actions the player can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Down,
    Fire,
}

impl Action {
    /// Key names (as reported by `KeyboardEvent.key`) bound to this action
    pub fn bindings(self) -> &'static [&'static str] {
        match self {
            Action::Up => &["w", "ArrowUp"],
            Action::Down => &["s", "ArrowDown"],
            Action::Fire => &[" "],
        }
    }
}

/// Anything that can report held actions
pub trait InputSource {
    fn is_held(&self, action: Action) -> bool;
}

impl TickInput {
    /// Snapshot the held state of every action
    pub fn from_source(source: &impl InputSource) -> Self {
        Self {
            up: source.is_held(Action::Up),
            down: source.is_held(Action::Down),
            fire: source.is_held(Action::Fire),
        }
    }
}

/// Monotonic, non-decreasing millisecond timestamps
pub trait Clock {
    fn now_ms(&mut self) -> f64;
}

/// Set of currently held key names, fed by key down/up events.
/// No debouncing: a key stays held until its release arrives.
#[derive(Debug, Clone, Default)]
pub struct KeySet {
    held: HashSet<String>,
}

impl KeySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: &str) {
        self.held.insert(key.to_string());
    }

    pub fn key_up(&mut self, key: &str) {
        self.held.remove(key);
    }

    /// Drop every held key (e.g. on focus loss)
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    pub fn is_key_down(&self, key: &str) -> bool {
        self.held.contains(key)
    }
}

impl InputSource for KeySet {
    fn is_held(&self, action: Action) -> bool {
        action.bindings().iter().any(|key| self.held.contains(*key))
    }
}

/// Clock that advances a fixed step per reading. Drives headless runs.
#[derive(Debug, Clone)]
pub struct FixedStepClock {
    now: f64,
    step_ms: f64,
}

impl FixedStepClock {
    pub fn new(start_ms: f64, step_ms: f64) -> Self {
        Self {
            now: start_ms,
            step_ms,
        }
    }

    /// 60 Hz starting at `start_ms`
    pub fn sixty_hz(start_ms: f64) -> Self {
        Self::new(start_ms, crate::sim::FRAME_MS)
    }
}

impl Clock for FixedStepClock {
    fn now_ms(&mut self) -> f64 {
        self.now += self.step_ms;
        self.now
    }
}

/// Initialize logging for the current target
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    // A second init (e.g. from tests) is harmless
    let _ = env_logger::try_init();
}

/// Initialize logging for the current target
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyset_bindings() {
        let mut keys = KeySet::new();
        assert!(!keys.is_held(Action::Up));

        keys.key_down("ArrowUp");
        assert!(keys.is_held(Action::Up));
        assert!(!keys.is_held(Action::Down));

        keys.key_down("s");
        keys.key_down(" ");
        assert!(keys.is_held(Action::Down));
        assert!(keys.is_held(Action::Fire));

        keys.key_up("ArrowUp");
        assert!(!keys.is_held(Action::Up));
        assert!(keys.is_key_down("s"));
    }

    #[test]
    fn test_keyset_either_binding_holds() {
        let mut keys = KeySet::new();
        keys.key_down("w");
        keys.key_down("ArrowUp");
        keys.key_up("w");
        assert!(keys.is_held(Action::Up));
        keys.release_all();
        assert!(!keys.is_held(Action::Up));
    }

    #[test]
    fn test_unbound_keys_ignored() {
        let mut keys = KeySet::new();
        keys.key_down("Enter");
        keys.key_down("W");
        assert!(!keys.is_held(Action::Up));
        assert!(!keys.is_held(Action::Fire));
    }

    #[test]
    fn test_tick_input_from_keys() {
        let mut keys = KeySet::new();
        keys.key_down("ArrowDown");
        keys.key_down(" ");
        let input = TickInput::from_source(&keys);
        assert_eq!(
            input,
            TickInput {
                up: false,
                down: true,
                fire: true
            }
        );
    }

    #[test]
    fn test_fixed_step_clock() {
        let mut clock = FixedStepClock::new(0.0, 10.0);
        assert_eq!(clock.now_ms(), 10.0);
        assert_eq!(clock.now_ms(), 20.0);

        let mut clock = FixedStepClock::sixty_hz(1000.0);
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b > a);
        assert!((b - a - 1000.0 / 60.0).abs() < 1e-9);
    }
}
