//! Level-scaled enemy construction
//!
//! All spawn randomness draws from the simulation's seeded generator, so a
//! given seed always produces the same run and tests can force spawn
//! sequences by seed choice.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::enemy::{BulletPattern, EnemyConfig, EnemyKind, MovementPattern};
use crate::tuning::Tuning;

/// Boss waves recur on this level cadence
const BOSS_LEVEL_INTERVAL: u32 = 5;
/// At most this many simultaneous enemies during a boss wave
const BOSS_WAVE_LIMIT: usize = 5;

/// Multiplicative stat growth per level
fn level_multiplier(level: u32) -> f32 {
    1.0 + 0.15 * level.saturating_sub(1) as f32
}

/// Roll the configuration for the next spawn at the given level
pub fn spawn_config(
    level: u32,
    active_enemies: usize,
    bounds: Vec2,
    tuning: &Tuning,
    rng: &mut Pcg32,
) -> EnemyConfig {
    let kind = roll_kind(level, active_enemies, rng);
    let movement = roll_movement(kind, level, rng);
    let bullets = roll_bullets(kind, rng);
    let mult = level_multiplier(level);

    let (base_health, base_speed, base_score, size) = match kind {
        EnemyKind::Standard => (1.0, 60.0, 100.0, 40.0),
        EnemyKind::Shooter => (2.0, 50.0, 150.0, 40.0),
        EnemyKind::Spinner => (3.0, 40.0, 250.0, 44.0),
        EnemyKind::Boss => (12.0, 30.0, 1000.0, 80.0),
    };

    let max_x = (bounds.x - tuning.spawn_margin).max(tuning.spawn_margin);
    let x = rng.random_range(tuning.spawn_margin..=max_x);

    EnemyConfig {
        position: Vec2::new(x, -size),
        kind,
        size,
        health: (base_health * mult).ceil() as i32,
        speed: base_speed * mult,
        score_value: (base_score * mult) as u64,
        movement,
        bullets,
        fire_rate: (0.5 + 0.1 * level as f32).min(tuning.max_enemy_fire_rate),
        bullet_speed: (200.0 * mult).min(tuning.max_enemy_bullet_speed),
        bullet_damage: if kind == EnemyKind::Boss { 2 } else { 1 },
    }
}

/// Kind distribution shifts toward harder classes as the level rises
fn roll_kind(level: u32, active_enemies: usize, rng: &mut Pcg32) -> EnemyKind {
    if level.is_multiple_of(BOSS_LEVEL_INTERVAL) && active_enemies < BOSS_WAVE_LIMIT {
        return EnemyKind::Boss;
    }

    let shooter_weight = if level >= 2 { (10 + level * 3).min(30) } else { 0 };
    let spinner_weight = if level >= 3 { (5 + level * 2).min(20) } else { 0 };

    let roll = rng.random_range(0..100u32);
    if roll < shooter_weight {
        EnemyKind::Shooter
    } else if roll < shooter_weight + spinner_weight {
        EnemyKind::Spinner
    } else {
        EnemyKind::Standard
    }
}

fn roll_movement(kind: EnemyKind, level: u32, rng: &mut Pcg32) -> MovementPattern {
    if kind == EnemyKind::Boss {
        return MovementPattern::Boss;
    }

    let roll = rng.random_range(0..100u32);
    if roll < 40 {
        MovementPattern::Linear
    } else if roll < 65 {
        MovementPattern::Sine
    } else if roll < 85 && level >= 2 {
        MovementPattern::Zigzag
    } else if level >= 2 {
        MovementPattern::Circle
    } else {
        MovementPattern::Linear
    }
}

fn roll_bullets(kind: EnemyKind, rng: &mut Pcg32) -> BulletPattern {
    match kind {
        EnemyKind::Standard | EnemyKind::Shooter => BulletPattern::Single,
        EnemyKind::Spinner => {
            if rng.random_bool(0.5) {
                BulletPattern::Circle
            } else {
                BulletPattern::Spiral
            }
        }
        EnemyKind::Boss => BulletPattern::Spread,
    }
}
