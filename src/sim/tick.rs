//! Simulation tick
//!
//! The single update loop: user input, then motion from queued sensor samples,
//! then collisions against the new position, then the virtual clock.

use super::clock::secs_to_micros;
use super::collision::check_collisions;
use super::motion::{MotionState, TiltSample, integrate};
use super::state::GameState;

/// Input gathered since the previous tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Sensor samples in arrival order
    pub samples: Vec<TiltSample>,
    /// Restart button pressed
    pub reset: bool,
}

impl TickInput {
    pub fn with_sample(sample: TiltSample) -> Self {
        Self {
            samples: vec![sample],
            ..Default::default()
        }
    }

    pub fn reset() -> Self {
        Self {
            reset: true,
            ..Default::default()
        }
    }
}

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();
    state.time_ticks += 1;

    if input.reset {
        state.reset();
    }

    if state.motion_state() == MotionState::Active {
        if input.samples.is_empty() {
            check_collisions(state);
        }
        // Collide after every step so a fast burst cannot skip over an orb
        for sample in &input.samples {
            if state.motion_state() != MotionState::Active {
                break;
            }
            state.player.pos = integrate(
                state.player.pos,
                *sample,
                state.player.size,
                state.config.tilt_smoothing,
                &state.config,
            );
            check_collisions(state);
        }
    }

    advance_clock(state, dt);
}

/// Run every timer due within the next `dt` seconds, one at a time
pub fn advance_clock(state: &mut GameState, dt: f32) {
    let until = state.clock.now() + secs_to_micros(dt);
    while let Some((id, kind)) = state.clock.pop_due(until) {
        state.on_timer(id, kind);
    }
    state.clock.settle(until);
}
