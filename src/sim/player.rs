//! The player ship
//!
//! Movement normalizes the input direction so diagonals are no faster than
//! axis-aligned motion, and both axes clamp to the playfield every tick the
//! player moves.

use glam::Vec2;

use super::projectile::Projectile;
use crate::tuning::Tuning;

#[derive(Debug, Clone)]
pub struct Player {
    pub position: Vec2,
    pub size: f32,
    pub speed: f32,
    /// Volleys per second
    pub fire_rate: f32,
    pub bullet_speed: f32,
    /// Deliberately smaller than the visual silhouette (size / 3). The
    /// forgiving hitbox is a balance contract, not a tweakable.
    pub hit_radius: f32,
    pub invulnerable: bool,
    invuln_remaining: f32,
    time_since_last_shot: f32,
    power_level: u8,
}

impl Player {
    pub fn new(position: Vec2, tuning: &Tuning) -> Self {
        Self {
            position,
            size: tuning.player_size,
            speed: tuning.player_speed,
            fire_rate: tuning.player_fire_rate,
            bullet_speed: tuning.player_bullet_speed,
            hit_radius: tuning.player_size / 3.0,
            invulnerable: false,
            invuln_remaining: 0.0,
            time_since_last_shot: 0.0,
            power_level: 1,
        }
    }

    /// Advance timers and apply one tick of directional input
    pub fn update(&mut self, dir: Vec2, dt: f32, bounds: Vec2) {
        self.time_since_last_shot += dt;

        if self.invulnerable {
            self.invuln_remaining -= dt;
            if self.invuln_remaining <= 0.0 {
                self.invulnerable = false;
            }
        }

        if dir != Vec2::ZERO {
            self.position += dir.normalize_or_zero() * self.speed * dt;
            self.clamp_to(bounds);
        }
    }

    /// Clamp both axes into the playfield; also used directly after a resize
    pub fn clamp_to(&mut self, bounds: Vec2) {
        let half = self.size / 2.0;
        self.position.x = self.position.x.clamp(half, (bounds.x - half).max(half));
        self.position.y = self.position.y.clamp(half, (bounds.y - half).max(half));
    }

    pub fn can_fire(&self) -> bool {
        self.time_since_last_shot >= 1.0 / self.fire_rate
    }

    /// Bullets per volley at the current power tier
    pub fn bullets_per_shot(&self) -> usize {
        match self.power_level {
            1 => 2,
            2 => 3,
            3 => 4,
            _ => 1,
        }
    }

    /// Emit one volley and reset the cadence timer.
    ///
    /// The per-tier offsets, radii, and damage are a balance contract:
    /// tier 1 is a parallel pair, tier 2 adds angled wing shots, tier 3 is a
    /// heavier quad.
    pub fn fire(&mut self) -> Vec<Projectile> {
        self.time_since_last_shot = 0.0;
        let p = self.position;
        let up = Vec2::new(0.0, -1.0);

        match self.power_level {
            1 => vec![
                self.bullet(Vec2::new(p.x - 10.0, p.y - self.size / 2.0), up, 4.0, 1, 1.0),
                self.bullet(Vec2::new(p.x + 10.0, p.y - self.size / 2.0), up, 4.0, 1, 1.0),
            ],
            2 => vec![
                self.bullet(Vec2::new(p.x, p.y - self.size / 2.0), up, 4.0, 1, 1.0),
                self.bullet(
                    Vec2::new(p.x - 15.0, p.y - self.size / 3.0),
                    Vec2::new(-0.1, -0.9),
                    4.0,
                    1,
                    0.9,
                ),
                self.bullet(
                    Vec2::new(p.x + 15.0, p.y - self.size / 3.0),
                    Vec2::new(0.1, -0.9),
                    4.0,
                    1,
                    0.9,
                ),
            ],
            3 => vec![
                self.bullet(Vec2::new(p.x - 5.0, p.y - self.size / 2.0), up, 5.0, 2, 1.0),
                self.bullet(Vec2::new(p.x + 5.0, p.y - self.size / 2.0), up, 5.0, 2, 1.0),
                self.bullet(
                    Vec2::new(p.x - 20.0, p.y - self.size / 4.0),
                    Vec2::new(-0.2, -0.8),
                    4.0,
                    1,
                    0.85,
                ),
                self.bullet(
                    Vec2::new(p.x + 20.0, p.y - self.size / 4.0),
                    Vec2::new(0.2, -0.8),
                    4.0,
                    1,
                    0.85,
                ),
            ],
            // Out-of-range tier falls back to a single straight shot
            _ => vec![self.bullet(Vec2::new(p.x, p.y - self.size / 2.0), up, 4.0, 1, 1.0)],
        }
    }

    fn bullet(
        &self,
        position: Vec2,
        velocity: Vec2,
        radius: f32,
        damage: u32,
        speed_mult: f32,
    ) -> Projectile {
        Projectile::new(
            position,
            velocity,
            radius,
            damage,
            self.bullet_speed * speed_mult,
            true,
        )
    }

    /// Grant an invulnerability window; while it lasts the player is exempt
    /// from damage collision checks
    pub fn set_invulnerable(&mut self, duration: f32) {
        self.invulnerable = true;
        self.invuln_remaining = duration;
    }

    /// Remaining window, exposed for the cosmetic render blink
    pub fn invuln_remaining(&self) -> f32 {
        self.invuln_remaining
    }

    pub fn power_level(&self) -> u8 {
        self.power_level
    }

    pub fn set_power_level(&mut self, level: u8) {
        self.power_level = level.clamp(1, 3);
    }
}
