//! Tilt-to-position integration
//!
//! The device's Y rotation rate drives screen X and its X rate drives screen Y.
//! Small readings fall in a dead zone so a resting hand does not drift the player.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::clamp_to_screen;
use crate::settings::GameConfig;

/// One raw gyroscope reading (rad/s per axis)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TiltSample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl TiltSample {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Whether incoming samples move the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionState {
    Active,
    /// Samples are ignored (game over)
    Frozen,
}

/// Zero out readings inside the dead zone
#[inline]
fn dead_zone(value: f32, threshold: f32) -> f32 {
    if value.abs() > threshold { value } else { 0.0 }
}

/// Screen-space displacement produced by one sample, before smoothing
pub fn tilt_delta(sample: TiltSample, config: &GameConfig) -> Vec2 {
    Vec2::new(
        dead_zone(sample.y, config.tilt_threshold),
        dead_zone(sample.x, config.tilt_threshold),
    ) * config.tilt_speed
}

/// Next player anchor for one sample
///
/// Pure: the same inputs always give the same position.
pub fn integrate(
    prev: Vec2,
    sample: TiltSample,
    player_size: f32,
    smoothing: f32,
    config: &GameConfig,
) -> Vec2 {
    let delta = tilt_delta(sample, config) * smoothing;
    clamp_to_screen(prev + delta, player_size, config.screen())
}
