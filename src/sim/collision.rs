//! Circle overlap tests and direction helpers
//!
//! Every collision in the game reduces to a circle-circle overlap: bullets
//! are circles already, and the player and enemies expose hit radii.

use glam::Vec2;

/// Check overlap between two circles
#[inline]
pub fn circle_collision(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    a.distance(b) < radius_a + radius_b
}

/// Unit vector pointing from `from` toward `to`
///
/// Coincident points fall back to straight down (toward the player's side
/// of the field) instead of propagating NaN.
pub fn aim(from: Vec2, to: Vec2) -> Vec2 {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        Vec2::new(0.0, 1.0)
    } else {
        dir
    }
}

/// Rotate a vector by `angle` radians
#[inline]
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}
