//! Screen-space geometry for round entities
//!
//! Entities are anchored at their top-left corner (as laid out on screen) and
//! are circles of diameter `size` inscribed in that square.

use glam::Vec2;
use rand::Rng;

/// Center of an entity anchored at `pos`
#[inline]
pub fn center(pos: Vec2, size: f32) -> Vec2 {
    pos + Vec2::splat(size / 2.0)
}

/// Euclidean distance between the centers of two entities
#[inline]
pub fn distance_between_centers(a: Vec2, a_size: f32, b: Vec2, b_size: f32) -> f32 {
    center(a, a_size).distance(center(b, b_size))
}

/// Circle-circle overlap (touching exactly is not an overlap)
#[inline]
pub fn circles_overlap(a: Vec2, a_size: f32, b: Vec2, b_size: f32) -> bool {
    distance_between_centers(a, a_size, b, b_size) < a_size / 2.0 + b_size / 2.0
}

/// Largest valid anchor on each axis; zero when the entity does not fit
#[inline]
pub fn max_anchor(size: f32, screen: Vec2) -> Vec2 {
    (screen - Vec2::splat(size)).max(Vec2::ZERO)
}

/// Keep an entity fully on screen
#[inline]
pub fn clamp_to_screen(pos: Vec2, size: f32, screen: Vec2) -> Vec2 {
    pos.clamp(Vec2::ZERO, max_anchor(size, screen))
}

/// Uniform random anchor such that the entity fits on screen
///
/// An entity larger than the screen collapses that axis to 0 instead of failing.
pub fn random_position<R: Rng + ?Sized>(rng: &mut R, size: f32, screen: Vec2) -> Vec2 {
    let span = max_anchor(size, screen);
    Vec2::new(rng.random::<f32>() * span.x, rng.random::<f32>() * span.y)
}
