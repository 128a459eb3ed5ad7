//! Entities of a session: the player and the scrolling obstacles.

use serde::{Deserialize, Serialize};

use crate::core::config::GameConfig;

/// Axis-aligned rectangle in playfield units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }
}

/// The player-controlled sprite. Only `y` and `velocity` change after spawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    /// Vertical velocity in units/tick (positive = downward).
    pub velocity: f64,
}

impl Player {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.player_x,
            y: config.player_spawn_y(),
            w: config.player_width,
            h: config.player_height,
            velocity: 0.0,
        }
    }

    /// Fixed horizontal position (the leading edge used for scoring).
    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn rect(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            w: self.w,
            h: self.h,
        }
    }

    /// Put the player back at the spawn height, at rest.
    pub fn respawn(&mut self, config: &GameConfig) {
        self.y = config.player_spawn_y();
        self.velocity = 0.0;
    }
}

/// A gated obstacle: solid above `gap_top` and below `gap_bottom`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: f64,
    pub width: f64,
    pub gap_top: f64,
    pub gap_bottom: f64,
    /// Set once, when the player's leading edge clears the trailing edge.
    pub passed: bool,
}

impl Obstacle {
    pub fn new(x: f64, width: f64, gap_top: f64, gap_height: f64) -> Self {
        Self {
            x,
            width,
            gap_top,
            gap_bottom: gap_top + gap_height,
            passed: false,
        }
    }

    /// Right edge; the player must get past this to score.
    pub fn trailing_edge(&self) -> f64 {
        self.x + self.width
    }

    /// Solid part above the gap.
    pub fn upper_rect(&self) -> Rect {
        Rect {
            x: self.x,
            y: 0.0,
            w: self.width,
            h: self.gap_top.max(0.0),
        }
    }

    /// Solid part below the gap, down to `floor`.
    pub fn lower_rect(&self, floor: f64) -> Rect {
        Rect {
            x: self.x,
            y: self.gap_bottom,
            w: self.width,
            h: (floor - self.gap_bottom).max(0.0),
        }
    }
}
