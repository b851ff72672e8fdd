//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Seeded RNG only
//! - Stable iteration order (entities are pushed and pruned in id order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod enemy;
pub mod player;
pub mod projectile;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{aim, circle_collision, rotate};
pub use enemy::{BulletPattern, Enemy, EnemyConfig, EnemyKind, MovementPattern};
pub use player::Player;
pub use projectile::{MotionPattern, Projectile};
pub use state::{GameEvent, GamePhase, SimState};
pub use tick::{TickInput, tick};
