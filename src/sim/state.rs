//! Game state and core simulation types
//!
//! The simulation owns everything here exclusively. The outside world only
//! ever sees read-mirrors published by the facade after a tick.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::enemy::{Enemy, EnemyConfig, EnemyKind};
use super::player::Player;
use super::projectile::Projectile;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    /// No session running
    Menu,
    /// Active gameplay
    Playing,
    /// Frozen mid-session
    Paused,
    /// Run ended; score is final
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Menu => "menu",
            GamePhase::Playing => "playing",
            GamePhase::Paused => "paused",
            GamePhase::GameOver => "gameover",
        }
    }
}

/// Something that happened during a tick that the outside world may want to
/// react to (sound triggers, UI). Queued here, drained by the facade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    EnemyDestroyed { kind: EnemyKind, score_value: u64 },
    PlayerHit { lives_left: u8 },
    LevelUp { level: u32 },
    GameOver { score: u64 },
}

/// Complete simulation state for one session
#[derive(Debug, Clone)]
pub struct SimState {
    pub phase: GamePhase,
    /// Monotonic; only destruction credits write it
    pub score: u64,
    pub lives: u8,
    /// Monotonic; driven by the level-progress timer
    pub level: u32,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub player_bullets: Vec<Projectile>,
    pub enemy_bullets: Vec<Projectile>,
    /// Playfield size; may change between ticks on host resize
    pub bounds: Vec2,
    pub tuning: Tuning,
    /// Seconds until the next enemy spawn
    pub spawn_timer: f32,
    /// Current spawns per second; grows with level up to the cap
    pub spawn_rate: f32,
    /// Progress into the current level
    pub level_timer: f32,
    /// Seconds the current level lasts; shrinks with level down to the floor
    pub level_duration: f32,
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub(crate) events: Vec<GameEvent>,
    next_id: u32,
}

impl SimState {
    /// Fresh session in the `Menu` phase with the player at bottom-center.
    /// Timers are primed from the tuning; nothing moves until the phase is
    /// switched to `Playing`.
    pub fn new(seed: u64, bounds: Vec2, tuning: Tuning) -> Self {
        let mut player = Player::new(
            Vec2::new(bounds.x / 2.0, bounds.y - tuning.player_spawn_offset),
            &tuning,
        );
        player.clamp_to(bounds);

        Self {
            phase: GamePhase::Menu,
            score: 0,
            lives: tuning.starting_lives,
            level: 1,
            player,
            enemies: Vec::new(),
            player_bullets: Vec::new(),
            enemy_bullets: Vec::new(),
            bounds,
            spawn_timer: 1.0 / tuning.base_spawn_rate,
            spawn_rate: tuning.base_spawn_rate,
            level_timer: 0.0,
            level_duration: tuning.base_level_duration,
            tuning,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity id (stable iteration order depends on these
    /// growing monotonically)
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub(crate) fn push_player_bullets(&mut self, bullets: Vec<Projectile>) {
        for mut bullet in bullets {
            bullet.id = self.next_entity_id();
            self.player_bullets.push(bullet);
        }
    }

    pub(crate) fn push_enemy_bullets(&mut self, bullets: Vec<Projectile>) {
        for mut bullet in bullets {
            bullet.id = self.next_entity_id();
            self.enemy_bullets.push(bullet);
        }
    }

    pub(crate) fn push_enemy(&mut self, config: EnemyConfig) {
        let id = self.next_entity_id();
        self.enemies.push(Enemy::new(id, config));
    }

    /// Player spawn point (bottom-center of the current playfield)
    pub fn player_spawn(&self) -> Vec2 {
        Vec2::new(
            self.bounds.x / 2.0,
            self.bounds.y - self.tuning.player_spawn_offset,
        )
    }

    /// Drain the events queued during the last tick
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Update playfield bounds (host resize). The player is re-clamped
    /// immediately rather than waiting for movement input; entities left
    /// outside the new bounds fall to the normal per-tick pruning.
    pub fn set_bounds(&mut self, bounds: Vec2) {
        self.bounds = bounds;
        self.player.clamp_to(bounds);
    }
}
