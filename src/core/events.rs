//! Events emitted by the state machine for the presentation layer.
//!
//! The core never draws, plays sounds or toggles overlays. The front-end
//! drains these after every tick and owns all of those side effects.

/// What ended a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    /// Player overlapped the solid part of an obstacle.
    Obstacle,
    /// Player reached the floor line.
    Floor,
}

/// One-shot notifications produced by [`crate::core::session::Game`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Countdown shows `n` (3, 2, 1 with default tuning).
    CountdownTick(u32),
    /// Countdown finished; the session is live.
    PlayStarted,
    /// A flap was accepted.
    Flapped,
    /// An obstacle was passed; carries the new total.
    Scored(u32),
    /// Session ended. `rank` is the 1-based scoreboard position, if any.
    GameOver {
        score: u32,
        rank: Option<usize>,
        cause: DeathCause,
    },
    /// Restart cooldown elapsed.
    RestartReady,
}
