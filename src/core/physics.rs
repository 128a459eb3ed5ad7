//! Vertical motion of the player.
//!
//! Velocity is updated before position on every tick. Ceiling contact
//! absorbs momentum; floor contact is reported to the caller, which ends
//! the session.

use crate::core::config::GameConfig;
use crate::core::types::Player;

/// Result of integrating one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepOutcome {
    /// Player reached the floor line (lethal while playing).
    pub hit_floor: bool,
    /// Player was clamped at the ceiling (harmless).
    pub hit_ceiling: bool,
}

/// Advance the player one tick while playing.
pub fn integrate_playing(player: &mut Player, config: &GameConfig) -> StepOutcome {
    player.velocity += config.gravity;
    player.y += player.velocity;
    clamp_to_playfield(player, config.playfield_height)
}

/// Advance the player one tick after game over: much weaker gravity so the
/// sprite sinks slowly onto the floor instead of freezing.
pub fn integrate_settling(player: &mut Player, config: &GameConfig) {
    player.velocity += config.settle_gravity;
    player.y += player.velocity;
    clamp_to_playfield(player, config.playfield_height);
}

/// Flap: velocity is replaced, not accumulated.
pub fn flap(player: &mut Player, config: &GameConfig) {
    player.velocity = config.flap_impulse;
}

fn clamp_to_playfield(player: &mut Player, floor: f64) -> StepOutcome {
    let mut outcome = StepOutcome::default();

    if player.y + player.h >= floor {
        player.y = floor - player.h;
        outcome.hit_floor = true;
    }
    if player.y < 0.0 {
        player.y = 0.0;
        player.velocity = 0.0;
        outcome.hit_ceiling = true;
    }

    outcome
}
