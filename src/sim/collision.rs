//! Circle-circle collision tests
//!
//! Everything that collides here is a disc, so overlap reduces to comparing
//! squared center distance against the squared radius sum. No square roots in
//! the hot path.

use glam::Vec2;

/// Check whether two discs overlap (touching counts as overlap)
#[inline]
pub fn circles_overlap(pos_a: Vec2, radius_a: f32, pos_b: Vec2, radius_b: f32) -> bool {
    let reach = radius_a + radius_b;
    pos_a.distance_squared(pos_b) <= reach * reach
}
