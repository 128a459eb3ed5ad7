//! Property tests for the physics and collision rules.

use flapper::core::collision::{check_passed, collides};
use flapper::core::physics::{flap, integrate_playing};
use flapper::{GameConfig, Obstacle, Player, Rect};
use proptest::prelude::*;

proptest! {
    /// Away from the edges: v' = v + g, y' = y + v'.
    #[test]
    fn prop_velocity_then_position(y in 10.0f64..400.0, v in -4.0f64..4.0) {
        let config = GameConfig::default();
        let mut player = Player::new(&config);
        player.y = y;
        player.velocity = v;

        let outcome = integrate_playing(&mut player, &config);

        prop_assert!(!outcome.hit_floor);
        prop_assert!(!outcome.hit_ceiling);
        prop_assert!((player.velocity - (v + config.gravity)).abs() < 1e-9);
        prop_assert!((player.y - (y + v + config.gravity)).abs() < 1e-9);
    }

    /// Flap replaces whatever velocity the player had.
    #[test]
    fn prop_flap_overrides(v in -100.0f64..100.0) {
        let config = GameConfig::default();
        let mut player = Player::new(&config);
        player.velocity = v;
        flap(&mut player, &config);
        prop_assert_eq!(player.velocity, config.flap_impulse);
    }

    /// The player never ends a tick above the ceiling or below the floor.
    #[test]
    fn prop_stays_inside_playfield(y in -50.0f64..500.0, v in -20.0f64..20.0) {
        let config = GameConfig::default();
        let mut player = Player::new(&config);
        player.y = y;
        player.velocity = v;

        integrate_playing(&mut player, &config);

        prop_assert!(player.y >= 0.0);
        prop_assert!(player.y + player.h <= config.playfield_height + 1e-9);
    }

    /// Collision iff horizontal overlap and the player leaves the gap.
    #[test]
    fn prop_collision_predicate(
        px in 0.0f64..300.0,
        py in 0.0f64..450.0,
        ox in 0.0f64..300.0,
        gap_top in 50.0f64..250.0,
    ) {
        let player = Rect { x: px, y: py, w: 36.0, h: 28.0 };
        let obstacle = Obstacle::new(ox, 60.0, gap_top, 140.0);

        let overlap = px < ox + 60.0 && px + 36.0 > ox;
        let outside_gap = py < gap_top || py + 28.0 > gap_top + 140.0;

        prop_assert_eq!(collides(&player, &obstacle), overlap && outside_gap);
    }

    /// `passed` flips exactly once while scrolling past the player.
    #[test]
    fn prop_passed_flips_once(start in 100.0f64..900.0, speed in 0.5f64..5.0) {
        let player_x = 80.0;
        let mut obstacle = Obstacle::new(start, 60.0, 100.0, 140.0);
        let mut flips = 0;

        while obstacle.trailing_edge() > -50.0 {
            obstacle.x -= speed;
            if check_passed(&mut obstacle, player_x) {
                flips += 1;
                prop_assert!(obstacle.trailing_edge() < player_x);
            }
        }

        prop_assert_eq!(flips, 1);
        prop_assert!(obstacle.passed);
    }
}
