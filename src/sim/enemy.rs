//! Enemy entities
//!
//! Movement and bullet patterns are picked at spawn and drive everything
//! afterwards; firing is a deterministic periodic emitter, never random.

use glam::Vec2;
use std::f32::consts::TAU;

use super::collision::{aim, rotate};
use super::projectile::{MotionPattern, Projectile};

/// Spread pattern angular offsets (radians)
const SPREAD_OFFSETS: [f32; 3] = [-0.25, 0.0, 0.25];
/// Ring pattern shot count
const RING_SHOTS: u32 = 8;
/// Spiral shots self-destruct after this long; a curling bullet can orbit
/// inside the playfield indefinitely and would otherwise pile up
const SPIRAL_SHOT_LIFESPAN: f32 = 4.0;

const ZIGZAG_PERIOD: f32 = 2.0;
const CIRCLE_RADIUS: f32 = 50.0;
const BOSS_HOLD_Y: f32 = 100.0;
const BOSS_SWEEP_PERIOD: f32 = 5.0;

/// Enemy class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKind {
    Standard,
    Shooter,
    Spinner,
    Boss,
}

impl EnemyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnemyKind::Standard => "standard",
            EnemyKind::Shooter => "shooter",
            EnemyKind::Spinner => "spinner",
            EnemyKind::Boss => "boss",
        }
    }

    /// Shooter-class enemies lead their single shots at the player;
    /// standard enemies fire straight down only
    pub fn aims(&self) -> bool {
        matches!(self, EnemyKind::Shooter | EnemyKind::Boss)
    }
}

/// Movement pattern, selected at spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementPattern {
    /// Constant downward drift
    Linear,
    /// Lateral oscillation layered on downward drift
    Sine,
    /// Alternating lateral direction on a fixed period
    Zigzag,
    /// Rotating phasor around the spawn column, plus downward drift
    Circle,
    /// Descend to a hold line, then sweep side to side
    Boss,
}

impl MovementPattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementPattern::Linear => "linear",
            MovementPattern::Sine => "sine",
            MovementPattern::Zigzag => "zigzag",
            MovementPattern::Circle => "circle",
            MovementPattern::Boss => "boss",
        }
    }
}

/// Bullet pattern, selected at spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletPattern {
    /// One shot; straight down for standard, aimed for shooter-class
    Single,
    /// Three shots at fixed angular offsets around the base direction
    Spread,
    /// Eight shots evenly spaced around a full rotation
    Circle,
    /// Three shots whose launch angle advances with elapsed time, each
    /// curling after launch
    Spiral,
}

impl BulletPattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            BulletPattern::Single => "single",
            BulletPattern::Spread => "spread",
            BulletPattern::Circle => "circle",
            BulletPattern::Spiral => "spiral",
        }
    }
}

/// Spawn-time configuration for a single enemy
#[derive(Debug, Clone)]
pub struct EnemyConfig {
    pub position: Vec2,
    pub kind: EnemyKind,
    pub size: f32,
    pub health: i32,
    pub speed: f32,
    pub score_value: u64,
    pub movement: MovementPattern,
    pub bullets: BulletPattern,
    /// Shots per second
    pub fire_rate: f32,
    pub bullet_speed: f32,
    pub bullet_damage: u32,
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: u32,
    pub position: Vec2,
    pub kind: EnemyKind,
    pub size: f32,
    pub health: i32,
    pub max_health: i32,
    pub speed: f32,
    pub score_value: u64,
    pub movement: MovementPattern,
    pub bullets: BulletPattern,
    pub fire_rate: f32,
    pub bullet_speed: f32,
    pub bullet_damage: u32,
    pub active: bool,
    time_since_last_shot: f32,
    movement_time: f32,
    rotation: f32,
    /// Spawn column; the circle pattern orbits around it
    anchor_x: f32,
}

impl Enemy {
    pub fn new(id: u32, config: EnemyConfig) -> Self {
        Self {
            id,
            position: config.position,
            kind: config.kind,
            size: config.size,
            health: config.health,
            max_health: config.health,
            speed: config.speed,
            score_value: config.score_value,
            movement: config.movement,
            bullets: config.bullets,
            fire_rate: config.fire_rate,
            bullet_speed: config.bullet_speed,
            bullet_damage: config.bullet_damage,
            active: true,
            time_since_last_shot: 0.0,
            movement_time: 0.0,
            rotation: 0.0,
            anchor_x: config.position.x,
        }
    }

    pub fn hit_radius(&self) -> f32 {
        self.size / 2.0
    }

    /// Remaining health as a fraction of max, for the boss health bar
    pub fn health_fraction(&self) -> f32 {
        if self.max_health <= 0 {
            return 0.0;
        }
        (self.health.max(0) as f32 / self.max_health as f32).min(1.0)
    }

    /// Visual/emission phase of spinner-class enemies
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Advance timers and movement by one tick
    pub fn advance(&mut self, dt: f32, bounds_w: f32) {
        self.time_since_last_shot += dt;
        self.movement_time += dt;

        if self.kind == EnemyKind::Spinner {
            self.rotation += 2.0 * dt;
        }

        match self.movement {
            MovementPattern::Linear => {
                self.position.y += self.speed * dt;
            }
            MovementPattern::Sine => {
                self.position.y += self.speed * 0.7 * dt;
                self.position.x += (self.movement_time * 2.0).sin() * self.speed * dt;
            }
            MovementPattern::Zigzag => {
                self.position.y += self.speed * 0.8 * dt;
                let phase = (self.movement_time % ZIGZAG_PERIOD) / ZIGZAG_PERIOD;
                if phase < 0.5 {
                    self.position.x += self.speed * dt;
                } else {
                    self.position.x -= self.speed * dt;
                }
            }
            MovementPattern::Circle => {
                self.position.x = self.anchor_x + self.movement_time.cos() * CIRCLE_RADIUS;
                self.position.y += self.speed * 0.5 * dt;
            }
            MovementPattern::Boss => {
                if self.position.y < BOSS_HOLD_Y {
                    self.position.y += self.speed * 0.5 * dt;
                } else {
                    self.position.y = BOSS_HOLD_Y;
                }
                let amplitude = bounds_w * 0.4;
                self.position.x = bounds_w / 2.0
                    + (self.movement_time * (TAU / BOSS_SWEEP_PERIOD)).sin() * amplitude;
            }
        }

        // Keep inside the lateral playfield edges
        let half = self.size / 2.0;
        self.position.x = self.position.x.clamp(half, (bounds_w - half).max(half));
    }

    /// Ready to fire once the cadence interval has elapsed
    pub fn can_fire(&self) -> bool {
        self.time_since_last_shot >= 1.0 / self.fire_rate
    }

    /// Emit one volley per the bullet pattern and reset the cadence timer
    pub fn fire(&mut self, player_position: Vec2) -> Vec<Projectile> {
        self.time_since_last_shot = 0.0;

        let muzzle = Vec2::new(self.position.x, self.position.y + self.size / 2.0);
        let base_dir = if self.kind.aims() {
            aim(self.position, player_position)
        } else {
            Vec2::new(0.0, 1.0)
        };

        match self.bullets {
            BulletPattern::Single => {
                let radius = if self.kind.aims() { 5.0 } else { 4.0 };
                vec![Projectile::new(
                    muzzle,
                    base_dir,
                    radius,
                    self.bullet_damage,
                    self.bullet_speed,
                    false,
                )]
            }
            BulletPattern::Spread => SPREAD_OFFSETS
                .iter()
                .map(|&offset| {
                    Projectile::new(
                        muzzle,
                        rotate(base_dir, offset),
                        4.0,
                        self.bullet_damage,
                        self.bullet_speed,
                        false,
                    )
                })
                .collect(),
            BulletPattern::Circle => (0..RING_SHOTS)
                .map(|i| {
                    let angle = self.rotation + i as f32 * TAU / RING_SHOTS as f32;
                    Projectile::new(
                        self.position,
                        Vec2::new(angle.cos(), angle.sin()),
                        4.0,
                        self.bullet_damage,
                        self.bullet_speed * 0.8,
                        false,
                    )
                })
                .collect(),
            BulletPattern::Spiral => (0..3)
                .map(|i| {
                    let angle = self.movement_time * 2.0 + i as f32 * TAU / 3.0;
                    Projectile::new(
                        self.position,
                        Vec2::new(angle.cos(), angle.sin()),
                        4.0,
                        self.bullet_damage,
                        self.bullet_speed * 0.8,
                        false,
                    )
                    .with_pattern(MotionPattern::Spiral)
                    .with_lifespan(SPIRAL_SHOT_LIFESPAN)
                })
                .collect(),
        }
    }

    /// Subtract health. Returns true exactly when this call deactivates the
    /// enemy, so the caller credits the score once per destruction.
    pub fn apply_damage(&mut self, amount: u32) -> bool {
        if !self.active {
            return false;
        }
        self.health -= amount as i32;
        if self.health <= 0 {
            self.active = false;
            return true;
        }
        false
    }

    /// Passed below the visible playfield
    pub fn is_below_bounds(&self, bounds_h: f32) -> bool {
        self.position.y > bounds_h + self.size
    }
}
