//! Player vs orb collisions and their scoring effects

use super::geometry::{circles_overlap, clamp_to_screen};
use super::state::{GameEvent, GameState, OrbKind};

/// Test the player against one orb and apply the effects of a hit
///
/// Returns whether the player overlaps the orb. Nothing changes while the game
/// is over.
pub fn check_collision(state: &mut GameState, kind: OrbKind) -> bool {
    if state.is_game_over() {
        return false;
    }

    let orb = match kind {
        OrbKind::Collectible => state.collectible,
        OrbKind::Hazard => state.hazard,
    };
    if !circles_overlap(state.player.pos, state.player.size, orb.pos, orb.size) {
        return false;
    }

    match kind {
        OrbKind::Collectible => {
            state.score += 1;
            state.time_remaining += state.config.collectible_time_bonus;
            state.player.size += 1.0;
            // A bigger player at the edge must stay fully on screen
            state.player.pos =
                clamp_to_screen(state.player.pos, state.player.size, state.config.screen());
            state.events.push(GameEvent::CollectiblePicked { score: state.score });
            state.respawn_collectible();
        }
        OrbKind::Hazard => {
            state.time_remaining = state
                .time_remaining
                .saturating_sub(state.config.hazard_time_penalty);
            state.events.push(GameEvent::HazardHit {
                time_remaining: state.time_remaining,
            });
            state.relocate_hazard();
        }
    }

    // Explosion marks where the orb was, not where it respawned
    state.spawn_explosion(orb);
    true
}

/// Check both orbs independently; collectible first
pub fn check_collisions(state: &mut GameState) -> (bool, bool) {
    let collected = check_collision(state, OrbKind::Collectible);
    let hit = check_collision(state, OrbKind::Hazard);
    (collected, hit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::GameConfig;
    use crate::sim::geometry::center;
    use crate::sim::spawn::collectible_is_valid;
    use crate::sim::state::GamePhase;
    use glam::Vec2;

    /// Put the player so its center is `distance` to the right of the orb's center
    fn place_player_from(state: &mut GameState, kind: OrbKind, distance: f32) {
        let orb = match kind {
            OrbKind::Collectible => state.collectible,
            OrbKind::Hazard => state.hazard,
        };
        let orb_center = center(orb.pos, orb.size);
        let player_center = orb_center + Vec2::new(distance, 0.0);
        state.player.pos = player_center - Vec2::splat(state.player.size / 2.0);
    }

    /// State with orbs parked in fixed, far-apart corners
    fn fixed_state() -> GameState {
        let mut state = GameState::new(GameConfig::default(), 11);
        state.hazard.pos = Vec2::new(300.0, 20.0);
        state.collectible.pos = Vec2::new(40.0, 40.0);
        state
    }

    #[test]
    fn test_boundary() {
        let eps = 0.01;
        let mut state = fixed_state();
        let reach = state.player.size / 2.0 + state.collectible.size / 2.0;

        place_player_from(&mut state, OrbKind::Collectible, reach + eps);
        assert!(!check_collision(&mut state, OrbKind::Collectible));
        assert_eq!(state.score, 0);

        place_player_from(&mut state, OrbKind::Collectible, reach - eps);
        assert!(check_collision(&mut state, OrbKind::Collectible));
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_collectible_effects() {
        let mut state = fixed_state();
        state.score = 4;
        state.time_remaining = 9;
        state.player.size = 53.0;
        let old_orb = state.collectible;

        place_player_from(&mut state, OrbKind::Collectible, 0.0);
        assert!(check_collision(&mut state, OrbKind::Collectible));

        assert_eq!(state.score, 5);
        assert_eq!(state.time_remaining, 10);
        assert_eq!(state.player.size, 54.0);
        assert!(collectible_is_valid(state.collectible.pos, state.hazard.pos, &state.config));

        let explosion = state.explosion.expect("explosion spawned");
        assert_eq!(explosion.kind, OrbKind::Collectible);
        assert_eq!(explosion.pos, old_orb.pos);
        assert_eq!(explosion.size, old_orb.size);
    }

    #[test]
    fn test_growth_at_edge_stays_on_screen() {
        let mut state = fixed_state();
        state.player.pos = Vec2::new(350.0, 750.0);
        // Collectible tucked against the player's left side
        state.collectible.pos = Vec2::new(330.0, 760.0);
        state.hazard.pos = Vec2::new(0.0, 0.0);

        assert!(check_collision(&mut state, OrbKind::Collectible));
        assert_eq!(state.player.size, 51.0);
        assert_eq!(state.player.pos, Vec2::new(349.0, 749.0));
    }

    #[test]
    fn test_hazard_penalty_never_negative() {
        let mut state = fixed_state();
        state.time_remaining = 3;
        let old_hazard = state.hazard;

        place_player_from(&mut state, OrbKind::Hazard, 0.0);
        assert!(check_collision(&mut state, OrbKind::Hazard));

        assert_eq!(state.time_remaining, 0);
        assert_eq!(state.score, 0);
        // Penalty only: the game keeps running until the countdown ticks
        assert_eq!(state.phase, GamePhase::Active);
        assert!(state.events.contains(&GameEvent::HazardRelocated));
        assert!(collectible_is_valid(state.collectible.pos, state.hazard.pos, &state.config));
        assert_eq!(state.explosion.map(|e| e.pos), Some(old_hazard.pos));
    }

    #[test]
    fn test_hazard_penalty_subtracts() {
        let mut state = fixed_state();
        state.time_remaining = 12;
        place_player_from(&mut state, OrbKind::Hazard, 1.0);
        assert!(check_collision(&mut state, OrbKind::Hazard));
        assert_eq!(state.time_remaining, 7);
    }

    #[test]
    fn test_no_effect_when_game_over() {
        let mut state = fixed_state();
        state.phase = GamePhase::GameOver;
        place_player_from(&mut state, OrbKind::Collectible, 0.0);
        assert!(!check_collision(&mut state, OrbKind::Collectible));
        assert_eq!(state.score, 0);
        assert!(state.explosion.is_none());
    }

    #[test]
    fn test_new_hit_replaces_explosion() {
        let mut state = fixed_state();
        place_player_from(&mut state, OrbKind::Collectible, 0.0);
        check_collision(&mut state, OrbKind::Collectible);
        place_player_from(&mut state, OrbKind::Hazard, 0.0);
        check_collision(&mut state, OrbKind::Hazard);

        assert_eq!(state.explosion.map(|e| e.kind), Some(OrbKind::Hazard));
        // Countdown, relocation and a single explosion clear
        assert_eq!(state.pending_timers(), 3);
    }
}
