//! Flapper - a terminal flappy-bird clone.
//!
//! This module exposes the game logic for testing and external use.

pub mod build_info;
pub mod core;
pub mod scoreboard;
pub mod utils;

pub use crate::core::config::GameConfig;
pub use crate::core::events::{DeathCause, GameEvent};
pub use crate::core::session::{Game, Phase, RenderView, Session};
pub use crate::core::types::{Obstacle, Player, Rect};
pub use scoreboard::{FileStorage, MemoryStorage, ScoreEntry, ScoreStorage, Scoreboard};
