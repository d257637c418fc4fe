//! Collectible spawn placement
//!
//! The collectible must not spawn on top of the hazard, nor directly beneath it
//! when the two are horizontally aligned. Placement is rejection sampling with
//! an unchecked fallback, so it always produces a position.

use glam::Vec2;
use rand::Rng;

use super::geometry::{center, distance_between_centers, random_position};
use crate::settings::GameConfig;

/// Result of placing the collectible
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub pos: Vec2,
    /// Candidates drawn (including the accepted one)
    pub attempts: u32,
    /// True when every candidate was rejected and `pos` is unchecked
    pub fallback: bool,
}

/// Check both exclusion rules for a collectible against a hazard
pub fn collectible_is_valid(collectible: Vec2, hazard: Vec2, config: &GameConfig) -> bool {
    let distance =
        distance_between_centers(collectible, config.collectible_size, hazard, config.hazard_size);
    if distance < config.min_spawn_distance() {
        return false;
    }

    let c = center(collectible, config.collectible_size);
    let h = center(hazard, config.hazard_size);
    let aligned = (c.x - h.x).abs() < config.hazard_size;
    let below = c.y > h.y;
    !(aligned && below)
}

/// Place the collectible somewhere valid relative to the hazard
pub fn place_collectible_avoiding_hazard<R: Rng + ?Sized>(
    rng: &mut R,
    hazard: Vec2,
    config: &GameConfig,
) -> Placement {
    let screen = config.screen();
    for attempt in 1..=config.spawn_max_attempts {
        let candidate = random_position(rng, config.collectible_size, screen);
        if collectible_is_valid(candidate, hazard, config) {
            return Placement {
                pos: candidate,
                attempts: attempt,
                fallback: false,
            };
        }
    }

    log::warn!(
        "No valid collectible spot after {} attempts (hazard at {:.1},{:.1}), placing unchecked",
        config.spawn_max_attempts,
        hazard.x,
        hazard.y
    );
    Placement {
        pos: random_position(rng, config.collectible_size, screen),
        attempts: config.spawn_max_attempts,
        fallback: true,
    }
}

/// Re-place the collectible only if it now violates a rule against the hazard
///
/// Returns `None` when the current position is fine. Calling it again with the
/// returned position (on success) yields `None`.
pub fn ensure_collectible_valid<R: Rng + ?Sized>(
    rng: &mut R,
    hazard: Vec2,
    collectible: Vec2,
    config: &GameConfig,
) -> Option<Placement> {
    if collectible_is_valid(collectible, hazard, config) {
        None
    } else {
        Some(place_collectible_avoiding_hazard(rng, hazard, config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn hazard_at_center(config: &GameConfig) -> Vec2 {
        (config.screen() - Vec2::splat(config.hazard_size)) / 2.0
    }

    #[test]
    fn test_too_close_is_invalid() {
        let config = GameConfig::default();
        let hazard = Vec2::new(100.0, 100.0);
        // Collectible centered right next to the hazard, above it
        let collectible = Vec2::new(100.0, 60.0);
        assert!(!collectible_is_valid(collectible, hazard, &config));
    }

    #[test]
    fn test_directly_below_is_invalid() {
        let config = GameConfig::default();
        let hazard = Vec2::new(100.0, 100.0);
        // Far enough away, but straight down
        let collectible = Vec2::new(115.0, 400.0);
        assert!(!collectible_is_valid(collectible, hazard, &config));
        // Same distance straight up is fine
        let collectible = Vec2::new(115.0, 0.0);
        let hazard = Vec2::new(100.0, 300.0);
        assert!(collectible_is_valid(collectible, hazard, &config));
    }

    #[test]
    fn test_below_but_offset_is_valid() {
        let config = GameConfig::default();
        let hazard = Vec2::new(0.0, 0.0);
        let collectible = Vec2::new(300.0, 500.0);
        assert!(collectible_is_valid(collectible, hazard, &config));
    }

    #[test]
    fn test_placement_respects_rules_statistically() {
        let config = GameConfig::default();
        let hazard = hazard_at_center(&config);
        let mut rng = Pcg32::seed_from_u64(2024);

        let valid = (0..100)
            .map(|_| place_collectible_avoiding_hazard(&mut rng, hazard, &config))
            .filter(|p| collectible_is_valid(p.pos, hazard, &config))
            .count();
        assert!(valid >= 99, "only {valid}/100 placements were valid");
    }

    #[test]
    fn test_fallback_when_impossible() {
        // Screen barely larger than the hazard: nothing can be far enough away
        let config = GameConfig {
            screen_width: 70.0,
            screen_height: 70.0,
            ..GameConfig::default()
        };
        let mut rng = Pcg32::seed_from_u64(1);
        let placement = place_collectible_avoiding_hazard(&mut rng, Vec2::new(5.0, 5.0), &config);
        assert!(placement.fallback);
        assert_eq!(placement.attempts, config.spawn_max_attempts);
        assert!(placement.pos.x <= 40.0 && placement.pos.y <= 40.0);
    }

    #[test]
    fn test_ensure_is_idempotent() {
        let config = GameConfig::default();
        let hazard = Vec2::new(170.0, 100.0);
        let mut rng = Pcg32::seed_from_u64(99);

        // Valid already: untouched
        let good = Vec2::new(0.0, 0.0);
        assert!(collectible_is_valid(good, hazard, &config));
        assert!(ensure_collectible_valid(&mut rng, hazard, good, &config).is_none());

        // Invalid: moved, and the new spot passes a second check
        let bad = Vec2::new(185.0, 115.0);
        let placement = ensure_collectible_valid(&mut rng, hazard, bad, &config).expect("moved");
        assert!(!placement.fallback);
        assert!(ensure_collectible_valid(&mut rng, hazard, placement.pos, &config).is_none());
    }
}
