//! Render pass over a host-provided drawing surface
//!
//! The core decides what to draw; the host decides how. A sprite the host
//! cannot supply falls back to a default-colored primitive so a frame never
//! fails.

use glam::Vec2;

use crate::consts::BLINK_RATE;
use crate::sim::{Enemy, EnemyKind, GamePhase, SimState};

/// Sprite assets the host may provide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    PlayerShip,
    PlayerBullet,
    EnemyStandard,
    EnemyShooter,
    EnemySpinner,
    EnemyBoss,
    EnemyBullet,
}

/// Fallback palette (0xRRGGBB)
pub const PLAYER_COLOR: u32 = 0x00FFFF;
pub const ENEMY_COLOR: u32 = 0xFF3366;
pub const HEALTH_BACK_COLOR: u32 = 0xFF0000;
pub const HEALTH_FILL_COLOR: u32 = 0x00FF00;

/// Host drawing surface. `sprite` returns false when the asset is missing
/// so the pass can fall back to primitives.
pub trait Surface {
    fn clear(&mut self);
    fn sprite(&mut self, kind: SpriteKind, center: Vec2, size: Vec2, rotation: f32) -> bool;
    fn circle(&mut self, center: Vec2, radius: f32, color: u32);
    fn rect(&mut self, min: Vec2, size: Vec2, color: u32);
}

fn sprite_for(kind: EnemyKind) -> SpriteKind {
    match kind {
        EnemyKind::Standard => SpriteKind::EnemyStandard,
        EnemyKind::Shooter => SpriteKind::EnemyShooter,
        EnemyKind::Spinner => SpriteKind::EnemySpinner,
        EnemyKind::Boss => SpriteKind::EnemyBoss,
    }
}

/// Draw one frame of the current state, back to front
pub fn draw(state: &SimState, surface: &mut dyn Surface) {
    surface.clear();
    if state.phase == GamePhase::Menu {
        return;
    }

    for bullet in &state.enemy_bullets {
        let size = Vec2::splat(bullet.radius * 2.0);
        if !surface.sprite(SpriteKind::EnemyBullet, bullet.position, size, 0.0) {
            surface.circle(bullet.position, bullet.radius, ENEMY_COLOR);
        }
    }

    for bullet in &state.player_bullets {
        let size = Vec2::splat(bullet.radius * 2.0);
        if !surface.sprite(SpriteKind::PlayerBullet, bullet.position, size, 0.0) {
            surface.circle(bullet.position, bullet.radius, PLAYER_COLOR);
        }
    }

    for enemy in &state.enemies {
        let size = Vec2::splat(enemy.size);
        if !surface.sprite(sprite_for(enemy.kind), enemy.position, size, enemy.rotation()) {
            surface.rect(enemy.position - size / 2.0, size, ENEMY_COLOR);
        }
        if enemy.kind == EnemyKind::Boss {
            draw_health_bar(enemy, surface);
        }
    }

    draw_player(state, surface);
}

/// Health-fraction bar floating above boss-class enemies
fn draw_health_bar(enemy: &Enemy, surface: &mut dyn Surface) {
    let width = enemy.size;
    let height = 5.0;
    let min = Vec2::new(
        enemy.position.x - width / 2.0,
        enemy.position.y - enemy.size / 2.0 - 10.0,
    );
    surface.rect(min, Vec2::new(width, height), HEALTH_BACK_COLOR);
    surface.rect(
        min,
        Vec2::new(width * enemy.health_fraction(), height),
        HEALTH_FILL_COLOR,
    );
}

fn draw_player(state: &SimState, surface: &mut dyn Surface) {
    let player = &state.player;

    // Blink while invulnerable; cosmetic only, the simulation never reads it
    if player.invulnerable {
        let phase = (player.invuln_remaining() * BLINK_RATE * std::f32::consts::PI).sin();
        if phase > 0.0 {
            return;
        }
    }

    let size = Vec2::splat(player.size);
    if !surface.sprite(SpriteKind::PlayerShip, player.position, size, 0.0) {
        surface.circle(player.position, player.size / 2.0, PLAYER_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::enemy::{BulletPattern, EnemyConfig, MovementPattern};
    use crate::sim::{GamePhase, SimState};
    use crate::tuning::Tuning;

    /// Surface with no sprite assets that records primitive fallbacks
    #[derive(Default)]
    struct BareSurface {
        clears: usize,
        sprites_requested: usize,
        circles: usize,
        rects: Vec<(Vec2, Vec2, u32)>,
    }

    impl Surface for BareSurface {
        fn clear(&mut self) {
            self.clears += 1;
        }

        fn sprite(&mut self, _kind: SpriteKind, _center: Vec2, _size: Vec2, _rot: f32) -> bool {
            self.sprites_requested += 1;
            false
        }

        fn circle(&mut self, _center: Vec2, _radius: f32, _color: u32) {
            self.circles += 1;
        }

        fn rect(&mut self, min: Vec2, size: Vec2, color: u32) {
            self.rects.push((min, size, color));
        }
    }

    fn playing_state() -> SimState {
        let mut state = SimState::new(1, Vec2::new(800.0, 600.0), Tuning::default());
        state.phase = GamePhase::Playing;
        state
    }

    #[test]
    fn test_menu_only_clears() {
        let state = SimState::new(1, Vec2::new(800.0, 600.0), Tuning::default());
        let mut surface = BareSurface::default();
        draw(&state, &mut surface);
        assert_eq!(surface.clears, 1);
        assert_eq!(surface.sprites_requested, 0);
    }

    #[test]
    fn test_missing_sprites_fall_back_to_primitives() {
        let mut state = playing_state();
        let volley = state.player.fire();
        state.push_player_bullets(volley);

        let mut surface = BareSurface::default();
        draw(&state, &mut surface);

        // Two bullets and the player ship, all as circles
        assert_eq!(surface.circles, 3);
        assert!(surface.sprites_requested >= 3);
    }

    #[test]
    fn test_boss_gets_a_health_bar() {
        let mut state = playing_state();
        state.push_enemy(EnemyConfig {
            position: Vec2::new(400.0, 100.0),
            kind: EnemyKind::Boss,
            size: 80.0,
            health: 10,
            speed: 30.0,
            score_value: 1000,
            movement: MovementPattern::Boss,
            bullets: BulletPattern::Spread,
            fire_rate: 0.5,
            bullet_speed: 200.0,
            bullet_damage: 2,
        });
        state.enemies[0].apply_damage(5);

        let mut surface = BareSurface::default();
        draw(&state, &mut surface);

        // Body fallback plus bar background and fill
        assert_eq!(surface.rects.len(), 3);
        let (_, back_size, _) = surface.rects[1];
        let (_, fill_size, _) = surface.rects[2];
        assert!((fill_size.x - back_size.x * 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_invulnerable_player_blinks() {
        let mut state = playing_state();
        // sin(0.1 * 5 * pi) > 0: the off phase of the blink
        state.player.set_invulnerable(0.1);

        let mut surface = BareSurface::default();
        draw(&state, &mut surface);
        assert_eq!(surface.circles, 0, "player draw suppressed mid-blink");

        // Near the end of the window the phase flips back on
        state.player.set_invulnerable(0.3);
        let mut surface = BareSurface::default();
        draw(&state, &mut surface);
        assert_eq!(surface.circles, 1);
    }
}
