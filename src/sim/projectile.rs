//! A single bullet
//!
//! Position integrates from a unit-ish direction and a speed scalar, so
//! patterns can rewrite the direction without touching the speed.

use glam::Vec2;

use super::collision::rotate;
use crate::consts::SPIRAL_TURN_RATE;

/// Post-launch trajectory modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionPattern {
    /// Velocity rotates at a fixed angular rate - a curling trajectory
    /// independent of speed scaling
    Spiral,
    /// Lateral velocity follows a sine of elapsed time - a weaving
    /// trajectory that always makes forward progress
    Sin,
}

#[derive(Debug, Clone)]
pub struct Projectile {
    pub id: u32,
    pub position: Vec2,
    /// Unit-ish direction; scaled by `speed` on integration
    pub velocity: Vec2,
    pub radius: f32,
    pub damage: u32,
    pub speed: f32,
    pub player_owned: bool,
    pub active: bool,
    /// Seconds until self-destruction, independent of bounds
    pub lifespan: Option<f32>,
    pub pattern: Option<MotionPattern>,
    elapsed: f32,
}

impl Projectile {
    pub fn new(
        position: Vec2,
        velocity: Vec2,
        radius: f32,
        damage: u32,
        speed: f32,
        player_owned: bool,
    ) -> Self {
        Self {
            id: 0,
            position,
            velocity,
            radius,
            damage,
            speed,
            player_owned,
            active: true,
            lifespan: None,
            pattern: None,
            elapsed: 0.0,
        }
    }

    pub fn with_lifespan(mut self, seconds: f32) -> Self {
        self.lifespan = Some(seconds);
        self
    }

    pub fn with_pattern(mut self, pattern: MotionPattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Advance the projectile by one tick
    pub fn advance(&mut self, dt: f32) {
        self.position += self.velocity * self.speed * dt;
        self.elapsed += dt;

        if let Some(lifespan) = self.lifespan {
            if self.elapsed >= lifespan {
                self.active = false;
            }
        }

        match self.pattern {
            Some(MotionPattern::Spiral) => {
                self.velocity = rotate(self.velocity, SPIRAL_TURN_RATE * dt).normalize_or_zero();
            }
            Some(MotionPattern::Sin) => {
                self.velocity.x = (self.elapsed * 5.0).sin() * 0.5;
                self.velocity.y = if self.player_owned { -1.0 } else { 1.0 };
                self.velocity = self.velocity.normalize_or_zero();
            }
            None => {}
        }
    }

    /// True once the projectile is inactive or fully outside the playfield,
    /// with an outward margin of one radius on every side
    pub fn is_expired(&self, bounds_w: f32, bounds_h: f32) -> bool {
        !self.active
            || self.position.x < -self.radius
            || self.position.x > bounds_w + self.radius
            || self.position.y < -self.radius
            || self.position.y > bounds_h + self.radius
    }
}
