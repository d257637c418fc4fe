//! Read-only view of a session for a renderer
//!
//! A renderer draws from a [`Snapshot`] once per frame and never writes back;
//! the only way to influence the game is the reset action.

use glam::Vec2;
use serde::Serialize;

use crate::sim::{Explosion, GameState, OrbKind};

/// How an explosion should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExplosionView {
    /// Top-left of the (enlarged) flash
    pub pos: Vec2,
    /// Diameter of the flash
    pub diameter: f32,
    pub kind: OrbKind,
    pub color: &'static str,
}

impl From<Explosion> for ExplosionView {
    fn from(explosion: Explosion) -> Self {
        // Flash is 1.5x the orb, centered on it
        let diameter = explosion.size * 1.5;
        let offset = explosion.size * 0.25;
        Self {
            pos: explosion.pos - Vec2::splat(offset),
            diameter,
            kind: explosion.kind,
            color: match explosion.kind {
                OrbKind::Collectible => "yellow",
                OrbKind::Hazard => "black",
            },
        }
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub player_pos: Vec2,
    pub player_size: f32,
    pub collectible_pos: Vec2,
    pub collectible_size: f32,
    pub hazard_pos: Vec2,
    pub hazard_size: f32,
    pub explosion: Option<ExplosionView>,
    pub score: u32,
    pub time_remaining: u32,
    pub game_over: bool,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            player_pos: state.player.pos,
            player_size: state.player.size,
            collectible_pos: state.collectible.pos,
            collectible_size: state.collectible.size,
            hazard_pos: state.hazard.pos,
            hazard_size: state.hazard.size,
            explosion: state.explosion.map(ExplosionView::from),
            score: state.score,
            time_remaining: state.time_remaining,
            game_over: state.is_game_over(),
        }
    }

    /// Instruction line shown above the field
    pub fn instructions(&self) -> &'static str {
        "Collect the blue orbs (+1s, +1 point), avoid the red ones (-5s)!"
    }

    pub fn score_label(&self) -> String {
        format!("Score: {}", self.score)
    }

    pub fn timer_label(&self) -> String {
        format!("⏱ {}s", self.time_remaining)
    }

    /// Banner shown with the restart button once time is up
    pub fn game_over_banner(&self) -> Option<String> {
        self.game_over
            .then(|| format!("🏁 Game over! Final score: {}", self.score))
    }
}

impl From<&GameState> for Snapshot {
    fn from(state: &GameState) -> Self {
        Self::capture(state)
    }
}
