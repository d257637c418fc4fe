//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Virtual clock only (no wall-clock reads)
//! - Seeded RNG only
//! - Screen size comes from configuration
//! - No rendering or sensor dependencies

pub mod clock;
pub mod collision;
pub mod geometry;
pub mod motion;
pub mod spawn;
pub mod state;
pub mod tick;

pub use clock::{Scheduler, TimerId, TimerKind};
pub use collision::{check_collision, check_collisions};
pub use geometry::{center, circles_overlap, distance_between_centers, random_position};
pub use motion::{MotionState, TiltSample, integrate};
pub use spawn::{Placement, collectible_is_valid, ensure_collectible_valid, place_collectible_avoiding_hazard};
pub use state::{Explosion, GameEvent, GamePhase, GameState, Orb, OrbKind, Player};
pub use tick::{TickInput, advance_clock, tick};
