//! Per-frame simulation advance
//!
//! One call moves every entity by `dt`, resolves collisions, and queues
//! events for the facade. It runs only in the `Playing` phase and follows a
//! fixed order: leveling, player, projectiles, enemies, spawning, collisions.

use glam::Vec2;

use super::collision::circle_collision;
use super::spawn;
use super::state::{GameEvent, GamePhase, SimState};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

impl TickInput {
    /// Raw direction from the held keys; the player normalizes it
    pub fn direction(&self) -> Vec2 {
        Vec2::new(
            (self.right as i32 - self.left as i32) as f32,
            (self.down as i32 - self.up as i32) as f32,
        )
    }
}

/// Advance the simulation by one (already capped) frame delta
pub fn tick(state: &mut SimState, input: &TickInput, dt: f32) {
    if state.phase != GamePhase::Playing {
        return;
    }

    advance_level(state, dt);

    // Player movement and firing
    state.player.update(input.direction(), dt, state.bounds);
    if input.fire && state.player.can_fire() {
        let volley = state.player.fire();
        state.push_player_bullets(volley);
    }

    advance_projectiles(state, dt);
    advance_enemies(state, dt);
    advance_spawner(state, dt);
    resolve_collisions(state);
}

fn advance_level(state: &mut SimState, dt: f32) {
    state.level_timer += dt;
    if state.level_timer < state.level_duration {
        return;
    }

    state.level_timer = 0.0;
    state.level += 1;
    state.spawn_rate =
        (state.spawn_rate + state.tuning.spawn_rate_step).min(state.tuning.spawn_rate_cap);
    state.level_duration = (state.level_duration - state.tuning.level_duration_step)
        .max(state.tuning.level_duration_floor);

    let power = state.tuning.power_level_for(state.level);
    state.player.set_power_level(power);

    state.events.push(GameEvent::LevelUp { level: state.level });
    log::info!(
        "level {} (spawn rate {:.1}/s, duration {:.0}s)",
        state.level,
        state.spawn_rate,
        state.level_duration
    );
}

fn advance_projectiles(state: &mut SimState, dt: f32) {
    let (w, h) = (state.bounds.x, state.bounds.y);
    for bullet in state
        .player_bullets
        .iter_mut()
        .chain(state.enemy_bullets.iter_mut())
    {
        bullet.advance(dt);
    }
    state.player_bullets.retain(|b| !b.is_expired(w, h));
    state.enemy_bullets.retain(|b| !b.is_expired(w, h));
}

fn advance_enemies(state: &mut SimState, dt: f32) {
    let bounds = state.bounds;
    let player_position = state.player.position;

    // Volleys are collected first so new bullets join the collection in
    // spawn order, after every enemy has moved
    let mut volleys = Vec::new();
    for enemy in state.enemies.iter_mut() {
        enemy.advance(dt, bounds.x);
        if enemy.can_fire() {
            volleys.extend(enemy.fire(player_position));
        }
    }
    state.push_enemy_bullets(volleys);

    state
        .enemies
        .retain(|e| e.active && !e.is_below_bounds(bounds.y));
}

fn advance_spawner(state: &mut SimState, dt: f32) {
    state.spawn_timer -= dt;
    if state.spawn_timer > 0.0 {
        return;
    }

    let config = spawn::spawn_config(
        state.level,
        state.enemies.len(),
        state.bounds,
        &state.tuning,
        &mut state.rng,
    );
    log::debug!("spawning {} at x={:.0}", config.kind.as_str(), config.position.x);
    state.push_enemy(config);
    state.spawn_timer = 1.0 / state.spawn_rate;
}

/// Circle-circle collision resolution in stable id order.
///
/// Only active flags, health, lives, and score are written here; the single
/// position write in the whole pass is the player respawn after a hit.
fn resolve_collisions(state: &mut SimState) {
    // Player bullets vs enemies: each bullet damages at most one enemy,
    // the first overlap in iteration order
    for bullet in state.player_bullets.iter_mut() {
        if !bullet.active {
            continue;
        }
        for enemy in state.enemies.iter_mut() {
            if !enemy.active {
                continue;
            }
            if circle_collision(
                bullet.position,
                bullet.radius,
                enemy.position,
                enemy.hit_radius(),
            ) {
                bullet.active = false;
                if enemy.apply_damage(bullet.damage) {
                    state.score += enemy.score_value;
                    state.events.push(GameEvent::EnemyDestroyed {
                        kind: enemy.kind,
                        score_value: enemy.score_value,
                    });
                }
                break;
            }
        }
    }

    // Everything below damages the player; invulnerability skips it wholesale
    if state.player.invulnerable {
        return;
    }

    let mut hit = false;
    for bullet in state.enemy_bullets.iter_mut() {
        if bullet.active
            && circle_collision(
                bullet.position,
                bullet.radius,
                state.player.position,
                state.player.hit_radius,
            )
        {
            bullet.active = false;
            hit = true;
            break;
        }
    }

    if !hit && state.tuning.contact_damage {
        for enemy in state.enemies.iter_mut() {
            if enemy.active
                && circle_collision(
                    enemy.position,
                    enemy.hit_radius(),
                    state.player.position,
                    state.player.hit_radius,
                )
            {
                enemy.active = false;
                hit = true;
                break;
            }
        }
    }

    if hit {
        damage_player(state);
    }
}

fn damage_player(state: &mut SimState) {
    state.lives = state.lives.saturating_sub(1);
    if state.lives == 0 {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver { score: state.score });
        log::info!("game over with score {}", state.score);
    } else {
        state.player.position = state.player_spawn();
        state.player.clamp_to(state.bounds);
        state.player.set_invulnerable(state.tuning.invuln_window);
        state.events.push(GameEvent::PlayerHit {
            lives_left: state.lives,
        });
    }
}
