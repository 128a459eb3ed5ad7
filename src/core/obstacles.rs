//! Obstacle spawning.

use rand::Rng;

use crate::core::config::GameConfig;
use crate::core::types::Obstacle;

/// Whether an obstacle is due on this tick.
pub fn spawn_due(tick_count: u64, config: &GameConfig) -> bool {
    tick_count % config.spawn_interval_ticks == 0
}

/// Build a new obstacle just past the right edge with a random gap.
///
/// The gap top is a whole number drawn uniformly from
/// `[gap_top_min, gap_top_max)`.
pub fn spawn_obstacle<R: Rng>(rng: &mut R, config: &GameConfig) -> Obstacle {
    let gap_top = rng.gen_range(config.gap_top_min..config.gap_top_max).floor();
    Obstacle::new(
        config.playfield_width + config.spawn_margin,
        config.obstacle_width,
        gap_top,
        config.gap_height,
    )
}

/// Append an obstacle when the interval elapses. Returns true if one spawned.
pub fn maybe_spawn<R: Rng>(
    obstacles: &mut Vec<Obstacle>,
    tick_count: u64,
    rng: &mut R,
    config: &GameConfig,
) -> bool {
    if !spawn_due(tick_count, config) {
        return false;
    }
    let obstacle = spawn_obstacle(rng, config);
    log::debug!(
        "Spawned obstacle at x={} gap=[{}, {}]",
        obstacle.x,
        obstacle.gap_top,
        obstacle.gap_bottom
    );
    obstacles.push(obstacle);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    #[test]
    fn test_spawn_position_and_gap() {
        let config = GameConfig::default();
        let mut rng = create_test_rng();

        for _ in 0..500 {
            let obstacle = spawn_obstacle(&mut rng, &config);
            assert!((obstacle.x - 810.0).abs() < f64::EPSILON);
            assert!(obstacle.gap_top >= 50.0 && obstacle.gap_top < 250.0);
            assert_eq!(obstacle.gap_top.fract(), 0.0);
            assert!((obstacle.gap_bottom - obstacle.gap_top - 140.0).abs() < f64::EPSILON);
            assert!(!obstacle.passed);
        }
    }

    #[test]
    fn test_spawn_only_on_interval() {
        let config = GameConfig::default();
        let mut rng = create_test_rng();
        let mut obstacles = Vec::new();

        for tick in 1..165 {
            assert!(!maybe_spawn(&mut obstacles, tick, &mut rng, &config));
        }
        assert!(maybe_spawn(&mut obstacles, 165, &mut rng, &config));
        assert!(maybe_spawn(&mut obstacles, 330, &mut rng, &config));
        assert_eq!(obstacles.len(), 2);
    }

    #[test]
    fn test_same_seed_same_obstacles() {
        let config = GameConfig::default();
        let mut rng1 = ChaCha8Rng::seed_from_u64(99999);
        let mut rng2 = ChaCha8Rng::seed_from_u64(99999);

        for _ in 0..20 {
            assert_eq!(
                spawn_obstacle(&mut rng1, &config),
                spawn_obstacle(&mut rng2, &config)
            );
        }
    }
}
