//! Idle/demo mode: the game plays itself
//!
//! Holds the trigger and lines the ship up with the nearest enemy that is
//! still in front of the muzzle.

use super::state::GameState;
use super::tick::TickInput;

/// Build the input a simple AI player would hold this frame
pub fn autopilot_input(state: &GameState) -> TickInput {
    let muzzle_x = state.player.rect.right();
    let ship_y = state.player.rect.center().y;

    // Nearest threat = smallest x still ahead of the muzzle
    let target = state
        .enemies
        .iter()
        .filter(|e| e.rect.right() > muzzle_x)
        .min_by(|a, b| {
            a.rect
                .x
                .partial_cmp(&b.rect.x)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    let mut input = TickInput {
        fire: true,
        ..Default::default()
    };

    if let Some(enemy) = target {
        let offset = enemy.rect.center().y - ship_y;
        // Dead zone of one step so the ship doesn't jitter around the target
        let dead_zone = state.config.player_speed;
        input.down = offset > dead_zone;
        input.up = offset < -dead_zone;
    }

    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::geometry::Rect;
    use crate::sim::state::{Sprite, TextureId};

    fn state_with_enemies(enemies: &[(f32, f32)]) -> GameState {
        let mut state = GameState::new(GameConfig::default(), 0).expect("default config");
        for &(x, y) in enemies {
            state
                .enemies
                .push(Sprite::new(Rect::new(x, y, 40.0, 40.0), TextureId::Enemy));
        }
        state
    }

    #[test]
    fn test_always_fires() {
        let input = autopilot_input(&state_with_enemies(&[]));
        assert!(input.fire);
        assert!(!input.up && !input.down);
    }

    #[test]
    fn test_steers_toward_nearest_enemy() {
        // Player center y = 240
        let state = state_with_enemies(&[(700.0, 100.0), (400.0, 380.0)]);
        let input = autopilot_input(&state);
        assert!(input.down);
        assert!(!input.up);

        let state = state_with_enemies(&[(300.0, 90.0), (600.0, 380.0)]);
        let input = autopilot_input(&state);
        assert!(input.up);
    }

    #[test]
    fn test_ignores_enemies_behind_muzzle() {
        // First enemy already past the ship; only the one ahead counts
        let state = state_with_enemies(&[(50.0, 380.0), (500.0, 90.0)]);
        let input = autopilot_input(&state);
        assert!(input.up);
    }

    #[test]
    fn test_holds_still_when_aligned() {
        let state = state_with_enemies(&[(500.0, 221.0)]);
        let input = autopilot_input(&state);
        assert!(!input.up && !input.down);
    }
}
