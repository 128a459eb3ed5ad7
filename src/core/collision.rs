//! Obstacle scrolling, pass-through scoring and collision tests.

use crate::core::config::GameConfig;
use crate::core::types::{Obstacle, Player, Rect};

/// What happened to the obstacle stream during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SweepOutcome {
    /// Obstacles newly passed this tick.
    pub passed: u32,
    /// Obstacles dropped off the left edge.
    pub culled: usize,
    /// The player overlaps a solid part of some obstacle.
    pub collided: bool,
}

/// True iff the player's box overlaps the obstacle horizontally and pokes
/// out of the gap vertically.
pub fn collides(player: &Rect, obstacle: &Obstacle) -> bool {
    let overlaps_x = player.x < obstacle.trailing_edge() && player.right() > obstacle.x;
    overlaps_x && (player.y < obstacle.gap_top || player.bottom() > obstacle.gap_bottom)
}

/// Mark the obstacle passed if the player has cleared it. Returns true
/// only on the tick the flag flips.
pub fn check_passed(obstacle: &mut Obstacle, player_x: f64) -> bool {
    if !obstacle.passed && obstacle.trailing_edge() < player_x {
        obstacle.passed = true;
        return true;
    }
    false
}

/// Scroll every obstacle left, score passes, drop obstacles past the
/// cull line and test the survivors for collision. Order is preserved.
pub fn sweep(obstacles: &mut Vec<Obstacle>, player: &Player, config: &GameConfig) -> SweepOutcome {
    let mut outcome = SweepOutcome::default();

    for obstacle in obstacles.iter_mut() {
        obstacle.x -= config.scroll_speed;
        if check_passed(obstacle, player.x()) {
            outcome.passed += 1;
        }
    }

    let before = obstacles.len();
    obstacles.retain(|o| o.trailing_edge() > config.cull_threshold);
    outcome.culled = before - obstacles.len();
    if outcome.culled > 0 {
        log::debug!("Culled {} obstacle(s)", outcome.culled);
    }

    let rect = player.rect();
    outcome.collided = obstacles.iter().any(|o| collides(&rect, o));

    outcome
}
