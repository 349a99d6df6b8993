//! Per-frame simulation step
//!
//! Advances the game by one display frame. `delta` is the frame time in
//! units of a 60 Hz frame, so all speeds in `GameConfig` are "pixels per
//! 60 Hz frame" and the game plays the same at any refresh rate.

use rand::Rng;

use super::spawn::{emit_burst, try_fire, try_spawn_enemy};
use super::state::{GameEvent, GamePhase, GameState};

/// Length of one reference frame (ms)
pub const FRAME_MS: f64 = 1000.0 / 60.0;

/// Held inputs for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub fire: bool,
}

/// Convert two frame timestamps (ms) into a frame delta
#[inline]
pub fn frame_delta(prev: f64, now: f64) -> f32 {
    ((now - prev) / FRAME_MS) as f32
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, now: f64, delta: f32, rng: &mut impl Rng) {
    if state.phase == GamePhase::GameOver {
        return;
    }
    state.events.clear();

    advance_enemies(state, delta);
    advance_bullets(state, delta);
    advance_particles(state, now, delta);
    move_player(state, input, delta);

    try_fire(state, input, now);
    try_spawn_enemy(state, now, rng);

    resolve_collisions(state, now, rng);

    if state.lives <= 0 {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver { score: state.score });
        log::info!(
            "Game over: score {} (high score {})",
            state.score,
            state.high_score
        );
    }
}

/// Scroll enemies left; each one that leaves the playfield costs a life
fn advance_enemies(state: &mut GameState, delta: f32) {
    let step = state.config.enemy_speed * delta;
    let mut escaped = 0;
    state.enemies.retain_mut(|enemy| {
        enemy.rect.x -= step;
        let gone = enemy.rect.x < -enemy.rect.w;
        if gone {
            escaped += 1;
        }
        !gone
    });

    for _ in 0..escaped {
        state.lives -= 1;
        state.events.push(GameEvent::EnemyEscaped { lives: state.lives });
    }
    if escaped > 0 {
        log::debug!("{escaped} enemy(s) escaped, {} lives left", state.lives);
    }
}

/// Bullets fly right at the ship's speed and vanish past the right edge
fn advance_bullets(state: &mut GameState, delta: f32) {
    let step = state.config.player_speed * delta;
    let width = state.config.width;
    state.bullets.retain_mut(|bullet| {
        bullet.rect.x += step;
        bullet.rect.x <= width
    });
}

/// Fade particles by age; survivors fall under gravity
fn advance_particles(state: &mut GameState, now: f64, delta: f32) {
    let lifetime = state.config.particle_lifetime_ms;
    let gravity = state.config.gravity;
    state.particles.retain_mut(|particle| {
        if !particle.fade(now, lifetime) {
            return false;
        }
        particle.integrate(delta, gravity);
        true
    });
}

/// Up and down are independent, so holding both cancels out
fn move_player(state: &mut GameState, input: &TickInput, delta: f32) {
    let step = state.config.player_speed * delta;
    let rect = &mut state.player.rect;
    if input.down {
        rect.y += step;
    }
    if input.up {
        rect.y -= step;
    }
    rect.y = rect.y.min(state.config.player_max_y()).max(state.config.hud_margin);
}

/// Each bullet destroys at most the first enemy it overlaps.
///
/// The enemy is gone before later bullets are tested, so a second bullet on
/// the same enemy survives and may hit something else.
fn resolve_collisions(state: &mut GameState, now: f64, rng: &mut impl Rng) {
    let mut i = 0;
    while i < state.bullets.len() {
        let bullet = state.bullets[i].rect;
        let Some(j) = state.enemies.iter().position(|e| bullet.overlaps(&e.rect)) else {
            i += 1;
            continue;
        };

        // Index i now holds the next bullet, so don't advance
        state.bullets.remove(i);
        let enemy = state.enemies.remove(j);
        state.award_kill();

        let center = enemy.rect.center();
        let count = emit_burst(state, center, now, rng);
        state.events.push(GameEvent::EnemyDestroyed {
            pos: center,
            score: state.score,
        });
        log::debug!(
            "enemy destroyed at ({:.0}, {:.0}), {count} particles, score {}",
            center.x,
            center.y,
            state.score
        );
    }
}
