//! Data-driven game balance
//!
//! Everything a designer would tweak lives here; the simulation reads it
//! and never mutates it. Serializable so hosts can ship presets.

use serde::{Deserialize, Serialize};

/// Spawn-pressure presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Relaxed,
    #[default]
    Normal,
    Frantic,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Relaxed => "relaxed",
            Difficulty::Normal => "normal",
            Difficulty::Frantic => "frantic",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "relaxed" => Some(Difficulty::Relaxed),
            "normal" => Some(Difficulty::Normal),
            "frantic" => Some(Difficulty::Frantic),
            _ => None,
        }
    }

    /// Multiplier applied to the base spawn rate and its cap
    fn spawn_pressure(&self) -> f32 {
        match self {
            Difficulty::Relaxed => 0.7,
            Difficulty::Normal => 1.0,
            Difficulty::Frantic => 1.4,
        }
    }
}

/// Game balance surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    // === Player ===
    pub player_size: f32,
    pub player_speed: f32,
    /// Volleys per second
    pub player_fire_rate: f32,
    pub player_bullet_speed: f32,
    /// Distance of the spawn point above the bottom edge
    pub player_spawn_offset: f32,
    pub starting_lives: u8,
    /// Post-hit invulnerability window (seconds)
    pub invuln_window: f32,

    // === Spawning ===
    /// Enemy spawns per second at level 1
    pub base_spawn_rate: f32,
    /// Spawn-rate growth per level-up
    pub spawn_rate_step: f32,
    pub spawn_rate_cap: f32,
    /// Lateral margin kept free of spawn positions
    pub spawn_margin: f32,

    // === Leveling ===
    /// Seconds a level lasts at level 1
    pub base_level_duration: f32,
    /// Duration shrink per level-up
    pub level_duration_step: f32,
    pub level_duration_floor: f32,
    /// Levels at which the player's power tier rises to 2 and then 3
    pub power_levels: [u32; 2],

    // === Enemies ===
    /// Enemy bodies damage the player on contact
    pub contact_damage: bool,
    pub max_enemy_fire_rate: f32,
    pub max_enemy_bullet_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_size: 40.0,
            player_speed: 300.0,
            player_fire_rate: 5.0,
            player_bullet_speed: 500.0,
            player_spawn_offset: 100.0,
            starting_lives: 3,
            invuln_window: 2.0,
            base_spawn_rate: 2.0,
            spawn_rate_step: 0.2,
            spawn_rate_cap: 5.0,
            spawn_margin: 50.0,
            base_level_duration: 30.0,
            level_duration_step: 2.0,
            level_duration_floor: 20.0,
            power_levels: [3, 6],
            contact_damage: true,
            max_enemy_fire_rate: 2.0,
            max_enemy_bullet_speed: 400.0,
        }
    }
}

impl Tuning {
    /// Defaults with a difficulty preset applied
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        let mut tuning = Self::default();
        let pressure = difficulty.spawn_pressure();
        tuning.base_spawn_rate *= pressure;
        tuning.spawn_rate_cap *= pressure;
        tuning
    }

    /// Player power tier for a given level
    pub fn power_level_for(&self, level: u32) -> u8 {
        if level >= self.power_levels[1] {
            3
        } else if level >= self.power_levels[0] {
            2
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_round_trips() {
        for d in [Difficulty::Relaxed, Difficulty::Normal, Difficulty::Frantic] {
            assert_eq!(Difficulty::from_str(d.as_str()), Some(d));
        }
        assert_eq!(Difficulty::from_str("nightmare"), None);
    }

    #[test]
    fn test_power_tier_thresholds() {
        let tuning = Tuning::default();
        assert_eq!(tuning.power_level_for(1), 1);
        assert_eq!(tuning.power_level_for(2), 1);
        assert_eq!(tuning.power_level_for(3), 2);
        assert_eq!(tuning.power_level_for(5), 2);
        assert_eq!(tuning.power_level_for(6), 3);
        assert_eq!(tuning.power_level_for(40), 3);
    }

    #[test]
    fn test_difficulty_scales_spawn_pressure() {
        let normal = Tuning::default();
        let frantic = Tuning::with_difficulty(Difficulty::Frantic);
        assert!(frantic.base_spawn_rate > normal.base_spawn_rate);
        assert!(frantic.spawn_rate_cap > normal.spawn_rate_cap);
    }

    #[test]
    fn test_serde_round_trip() {
        let tuning = Tuning::default();
        let json = serde_json::to_string(&tuning).unwrap();
        let back: Tuning = serde_json::from_str(&json).unwrap();
        assert_eq!(back.spawn_rate_cap, tuning.spawn_rate_cap);
        assert_eq!(back.starting_lives, tuning.starting_lives);
    }
}
