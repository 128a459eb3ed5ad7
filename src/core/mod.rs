//! Deterministic game core.
//!
//! Pure simulation: no terminal, clock or filesystem access except the
//! scoreboard write on game over. Randomness comes from a caller-supplied
//! `Rng` so tests can seed it.

pub mod collision;
pub mod config;
pub mod constants;
pub mod events;
pub mod obstacles;
pub mod physics;
pub mod session;
pub mod types;
