//! Time-gated entity creation
//!
//! Two independent timers. Firing is a cooldown measured from the last
//! actual shot; enemy spawning walks a fixed grid so frame jitter never
//! shifts the cadence.

use glam::Vec2;
use rand::Rng;

use super::geometry::Rect;
use super::state::{GameEvent, GameState, Particle, Sprite, TextureId};
use super::tick::TickInput;

/// Fire one bullet from the ship's muzzle if the trigger is held and the
/// cooldown has elapsed. Returns true if a bullet was created.
pub fn try_fire(state: &mut GameState, input: &TickInput, now: f64) -> bool {
    if !input.fire || now - state.last_fired < state.config.fire_cooldown_ms {
        return false;
    }
    state.last_fired = now;

    let s = state.config.bullet_size;
    let player = &state.player.rect;
    let x = player.right() - s;
    let y = player.y + player.h / 2.0 - s / 2.0;
    state
        .bullets
        .push(Sprite::new(Rect::new(x, y, s, s), TextureId::Bullet));
    state.events.push(GameEvent::BulletFired {
        pos: Vec2::new(x, y),
    });
    true
}

/// Spawn one enemy at the right edge if the next grid point has been reached.
///
/// The grid advances by exactly one interval per spawn, so a clock far ahead
/// of the grid catches up one enemy per call.
pub fn try_spawn_enemy(state: &mut GameState, now: f64, rng: &mut impl Rng) -> bool {
    let interval = state.config.enemy_spawn_interval_ms;
    if now - state.last_spawn < interval {
        return false;
    }
    state.last_spawn += interval;

    let size = state.config.enemy_size;
    let y = rng.random_range(state.config.hud_margin..state.config.height - size);
    state.enemies.push(Sprite::new(
        Rect::new(state.config.width, y, size, size),
        TextureId::Enemy,
    ));
    state.events.push(GameEvent::EnemySpawned { y });
    log::debug!("enemy spawned at y={y:.1} (grid {:.0}ms)", state.last_spawn);
    true
}

/// Scatter a burst of debris particles from `center`. Returns how many were made.
pub fn emit_burst(state: &mut GameState, center: Vec2, now: f64, rng: &mut impl Rng) -> u32 {
    let config = &state.config;
    let count = rng.random_range(config.particle_count_min..=config.particle_count_max);
    state.particles.reserve(count as usize);

    for _ in 0..count {
        let vel = Vec2::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0));
        let rotation = rng.random_range(0.0..std::f32::consts::TAU);
        state.particles.push(Particle::new(
            center,
            vel,
            config.particle_radius,
            rotation,
            now,
        ));
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn fire() -> TickInput {
        TickInput {
            fire: true,
            ..Default::default()
        }
    }

    fn new_state() -> GameState {
        GameState::new(GameConfig::default(), 0).expect("default config")
    }

    #[test]
    fn test_fire_from_muzzle() {
        let mut state = new_state();
        assert!(try_fire(&mut state, &fire(), 600.0));
        assert_eq!(state.bullets.len(), 1);
        // Player at (134, 220, 32, 40): right edge 166, center 240
        assert_eq!(state.bullets[0].rect, Rect::new(161.0, 237.5, 5.0, 5.0));
        assert_eq!(state.bullets[0].texture, TextureId::Bullet);
        assert_eq!(state.last_fired, 600.0);
    }

    #[test]
    fn test_fire_requires_trigger() {
        let mut state = new_state();
        assert!(!try_fire(&mut state, &TickInput::default(), 600.0));
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_fire_cooldown_resets_from_shot_time() {
        let mut state = new_state();
        assert!(try_fire(&mut state, &fire(), 700.0));
        assert!(!try_fire(&mut state, &fire(), 1199.0));
        assert!(try_fire(&mut state, &fire(), 1230.0));
        // Next window starts at 1230, not 1200
        assert!(!try_fire(&mut state, &fire(), 1700.0));
        assert!(try_fire(&mut state, &fire(), 1730.0));
        assert_eq!(state.bullets.len(), 3);
    }

    #[test]
    fn test_enemy_spawn_fixed_grid() {
        let mut state = new_state();
        let mut rng = Pcg32::seed_from_u64(7);

        assert!(!try_spawn_enemy(&mut state, 1666.0, &mut rng));
        // Late frame: grid still advances by exactly one interval
        assert!(try_spawn_enemy(&mut state, 1700.0, &mut rng));
        assert_eq!(state.last_spawn, 1667.0);
        assert!(!try_spawn_enemy(&mut state, 3333.0, &mut rng));
        assert!(try_spawn_enemy(&mut state, 3334.0, &mut rng));
        assert_eq!(state.last_spawn, 3334.0);
        assert_eq!(state.enemies.len(), 2);
    }

    #[test]
    fn test_enemy_spawn_catches_up_one_per_call() {
        let mut state = new_state();
        let mut rng = Pcg32::seed_from_u64(7);

        assert!(try_spawn_enemy(&mut state, 5100.0, &mut rng));
        assert_eq!(state.enemies.len(), 1);
        assert!(try_spawn_enemy(&mut state, 5100.0, &mut rng));
        assert!(try_spawn_enemy(&mut state, 5100.0, &mut rng));
        assert!(!try_spawn_enemy(&mut state, 5100.0, &mut rng));
        assert_eq!(state.last_spawn, 3.0 * 1667.0);
    }

    #[test]
    fn test_enemy_spawn_position_in_band() {
        let mut state = new_state();
        let mut rng = Pcg32::seed_from_u64(42);

        for i in 1..=200 {
            try_spawn_enemy(&mut state, i as f64 * 1667.0, &mut rng);
        }
        assert_eq!(state.enemies.len(), 200);
        for enemy in &state.enemies {
            assert_eq!(enemy.rect.x, 800.0);
            assert_eq!((enemy.rect.w, enemy.rect.h), (40.0, 40.0));
            assert!(enemy.rect.y >= 80.0 && enemy.rect.y < 440.0);
        }
    }

    #[test]
    fn test_burst_size_and_shape() {
        let mut state = new_state();
        let mut rng = Pcg32::seed_from_u64(3);
        let center = Vec2::new(420.0, 200.0);

        for _ in 0..50 {
            state.particles.clear();
            let count = emit_burst(&mut state, center, 900.0, &mut rng);
            assert!((7..=9).contains(&count));
            assert_eq!(state.particles.len(), count as usize);
            for p in &state.particles {
                assert_eq!(p.pos, center);
                assert_eq!(p.size, 4.0);
                assert_eq!(p.born, 900.0);
                assert_eq!(p.alpha, 1.0);
                assert!((-1.0..1.0).contains(&p.vel.x));
                assert!((-1.0..1.0).contains(&p.vel.y));
                assert!((0.0..std::f32::consts::TAU).contains(&p.rotation));
            }
        }
    }
}
