//! Orb Tilt - A tilt-controlled "collect orbs, avoid the bomb" arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, spawning, game clock)
//! - `sensor`: Tilt sensor contract and an in-process scripted sensor
//! - `session`: Live session wiring a sensor into the simulation
//! - `snapshot`: Read-only view consumed by a renderer
//! - `settings`: Game configuration (screen size, tuning)
//! - `demos`: Floating ball and raw gyroscope readout

pub mod demos;
pub mod error;
pub mod sensor;
pub mod session;
pub mod settings;
pub mod sim;
pub mod snapshot;

pub use error::ConfigError;
pub use session::GameSession;
pub use settings::GameConfig;
pub use snapshot::Snapshot;

/// Game configuration constants
pub mod consts {
    /// Default logical screen size (portrait phone)
    pub const SCREEN_WIDTH: f32 = 400.0;
    pub const SCREEN_HEIGHT: f32 = 800.0;

    /// Entity sizes (diameters, logical pixels)
    pub const COLLECTIBLE_SIZE: f32 = 30.0;
    pub const HAZARD_SIZE: f32 = 60.0;
    pub const PLAYER_INITIAL_SIZE: f32 = 50.0;

    /// Session length in seconds
    pub const INITIAL_TIME: u32 = 15;
    pub const COLLECTIBLE_TIME_BONUS: u32 = 1;
    pub const HAZARD_TIME_PENALTY: u32 = 5;

    /// Tilt sensitivity (pixels per unit of rotation rate)
    pub const TILT_SPEED: f32 = 15.0;
    /// Dead zone; smaller readings are treated as hand tremor
    pub const TILT_THRESHOLD: f32 = 0.05;
    /// Fraction of the raw delta applied per sample (1.0 = undamped)
    pub const TILT_SMOOTHING: f32 = 1.0;

    /// Extra clearance between collectible and hazard on spawn
    pub const SPAWN_MARGIN: f32 = 40.0;
    pub const SPAWN_MAX_ATTEMPTS: u32 = 100;

    /// Timer periods (seconds)
    pub const COUNTDOWN_PERIOD: f32 = 1.0;
    pub const HAZARD_RELOCATION_PERIOD: f32 = 5.0;
    pub const EXPLOSION_DURATION: f32 = 0.3;

    /// Sensor sample interval (~60 Hz)
    pub const SAMPLE_INTERVAL_MS: u32 = 16;

    /// Nominal tick rate for the headless runner
    pub const SIM_DT: f32 = 1.0 / 60.0;
}
