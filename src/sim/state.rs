//! Game state and core simulation types
//!
//! Everything one play-through owns: entities, counters, the seeded RNG and
//! the virtual clock with its armed timers.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::clock::{Scheduler, TimerId, TimerKind};
use super::geometry::random_position;
use super::motion::MotionState;
use super::spawn::{Placement, ensure_collectible_valid, place_collectible_avoiding_hazard};
use crate::settings::GameConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Countdown running, player moving
    Active,
    /// Time ran out; only a reset leaves this phase
    GameOver,
}

/// The two kinds of orb on the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrbKind {
    /// Blue orb: +1 point, +1 second, player grows
    Collectible,
    /// Red bomb: -5 seconds
    Hazard,
}

/// The tilt-controlled player circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: f32,
}

impl Player {
    /// Player of `size` centered on screen
    pub fn centered(size: f32, screen: Vec2) -> Self {
        Self {
            pos: (screen - Vec2::splat(size)) / 2.0,
            size,
        }
    }
}

/// A collectible or hazard
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orb {
    pub kind: OrbKind,
    pub pos: Vec2,
    pub size: f32,
}

/// Transient feedback left where an orb was hit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Explosion {
    pub pos: Vec2,
    pub kind: OrbKind,
    pub size: f32,
}

/// Things that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    CollectiblePicked { score: u32 },
    HazardHit { time_remaining: u32 },
    HazardRelocated,
    CollectibleRespawned { fallback: bool },
    ExplosionCleared,
    GameOver { score: u32 },
    Reset,
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    /// Session seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub score: u32,
    /// Whole seconds left
    pub time_remaining: u32,
    pub player: Player,
    pub collectible: Orb,
    pub hazard: Orb,
    pub explosion: Option<Explosion>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events produced by the most recent tick
    pub events: Vec<GameEvent>,
    pub clock: Scheduler,
    countdown_timer: Option<TimerId>,
    relocation_timer: Option<TimerId>,
    explosion_timer: Option<TimerId>,
}

impl GameState {
    /// Create a new session with the given config and seed
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let screen = config.screen();
        let mut state = Self {
            player: Player::centered(config.player_initial_size, screen),
            collectible: Orb {
                kind: OrbKind::Collectible,
                pos: Vec2::ZERO,
                size: config.collectible_size,
            },
            hazard: Orb {
                kind: OrbKind::Hazard,
                pos: Vec2::ZERO,
                size: config.hazard_size,
            },
            time_remaining: config.initial_time,
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Active,
            score: 0,
            explosion: None,
            time_ticks: 0,
            events: Vec::new(),
            clock: Scheduler::new(),
            countdown_timer: None,
            relocation_timer: None,
            explosion_timer: None,
        };

        state.place_orbs();
        state.arm_session_timers();
        log::info!("Session started with seed {seed}");
        state
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn motion_state(&self) -> MotionState {
        match self.phase {
            GamePhase::Active => MotionState::Active,
            GamePhase::GameOver => MotionState::Frozen,
        }
    }

    /// Hazard first, then the collectible clear of it
    fn place_orbs(&mut self) {
        self.hazard.pos = random_position(&mut self.rng, self.hazard.size, self.config.screen());
        let placement = place_collectible_avoiding_hazard(&mut self.rng, self.hazard.pos, &self.config);
        self.collectible.pos = placement.pos;
    }

    fn arm_session_timers(&mut self) {
        self.countdown_timer = Some(self.clock.every(self.config.countdown_period, TimerKind::Countdown));
        self.relocation_timer = Some(
            self.clock
                .every(self.config.hazard_relocation_period, TimerKind::HazardRelocation),
        );
    }

    fn record_respawn(&mut self, placement: Placement) {
        self.collectible.pos = placement.pos;
        self.events.push(GameEvent::CollectibleRespawned {
            fallback: placement.fallback,
        });
    }

    /// Fresh collectible position clear of the current hazard
    pub fn respawn_collectible(&mut self) {
        let placement = place_collectible_avoiding_hazard(&mut self.rng, self.hazard.pos, &self.config);
        self.record_respawn(placement);
    }

    /// Move the hazard anywhere and re-check the collectible against it
    pub fn relocate_hazard(&mut self) {
        self.hazard.pos = random_position(&mut self.rng, self.hazard.size, self.config.screen());
        self.events.push(GameEvent::HazardRelocated);
        if let Some(placement) =
            ensure_collectible_valid(&mut self.rng, self.hazard.pos, self.collectible.pos, &self.config)
        {
            self.record_respawn(placement);
        }
    }

    /// Show an explosion, replacing any pending clear
    pub fn spawn_explosion(&mut self, orb: Orb) {
        if let Some(id) = self.explosion_timer.take() {
            self.clock.cancel(id);
        }
        self.explosion = Some(Explosion {
            pos: orb.pos,
            kind: orb.kind,
            size: orb.size,
        });
        self.explosion_timer = Some(
            self.clock
                .after(self.config.explosion_duration, TimerKind::ExplosionClear),
        );
    }

    /// Handle one fired timer
    pub fn on_timer(&mut self, id: TimerId, kind: TimerKind) {
        match kind {
            TimerKind::Countdown => {
                if self.is_game_over() {
                    return;
                }
                self.time_remaining = self.time_remaining.saturating_sub(1);
                if self.time_remaining == 0 {
                    self.enter_game_over();
                }
            }
            TimerKind::HazardRelocation => {
                if self.is_game_over() {
                    return;
                }
                self.relocate_hazard();
            }
            TimerKind::ExplosionClear => {
                // A stale clear must not remove a newer explosion
                if self.explosion_timer == Some(id) {
                    self.explosion_timer = None;
                    self.explosion = None;
                    self.events.push(GameEvent::ExplosionCleared);
                }
            }
        }
    }

    fn enter_game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        if let Some(id) = self.countdown_timer.take() {
            self.clock.cancel(id);
        }
        if let Some(id) = self.relocation_timer.take() {
            self.clock.cancel(id);
        }
        self.events.push(GameEvent::GameOver { score: self.score });
        log::info!("Game over, final score {}", self.score);
    }

    /// Start a new play-through; ignored while a game is running
    ///
    /// Returns true if the session was reset.
    pub fn reset(&mut self) -> bool {
        if !self.is_game_over() {
            log::debug!("Reset ignored while game is active");
            return false;
        }

        self.teardown();
        self.explosion = None;
        self.player = Player::centered(self.config.player_initial_size, self.config.screen());
        self.place_orbs();
        self.score = 0;
        self.time_remaining = self.config.initial_time;
        self.phase = GamePhase::Active;
        self.arm_session_timers();
        self.events.push(GameEvent::Reset);
        log::info!("Session reset");
        true
    }

    /// Cancel all scheduled work
    pub fn teardown(&mut self) {
        self.clock.cancel_all();
        self.countdown_timer = None;
        self.relocation_timer = None;
        self.explosion_timer = None;
    }

    /// Timers still armed
    pub fn pending_timers(&self) -> usize {
        self.clock.pending()
    }
}
