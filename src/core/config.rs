//! Tuning values for a session.
//!
//! Defaults come from [`crate::core::constants`]. A partial
//! `~/.flapper/config.json` overrides individual fields.

use serde::{Deserialize, Serialize};

use crate::core::constants::*;
use crate::utils::persistence::load_json_or_default;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub playfield_width: f64,
    pub playfield_height: f64,

    pub player_x: f64,
    pub player_width: f64,
    pub player_height: f64,

    pub gravity: f64,
    pub flap_impulse: f64,
    /// Gravity applied after game over so the player sinks slowly.
    pub settle_gravity: f64,

    pub obstacle_width: f64,
    pub gap_height: f64,
    pub spawn_interval_ticks: u64,
    pub spawn_margin: f64,
    pub scroll_speed: f64,
    pub gap_top_min: f64,
    pub gap_top_max: f64,
    pub cull_threshold: f64,

    pub countdown_from: u32,
    pub countdown_step_ms: u64,
    pub restart_cooldown_ms: u64,
    pub frame_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,

            player_x: PLAYER_X,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,

            gravity: GRAVITY,
            flap_impulse: FLAP_IMPULSE,
            settle_gravity: SETTLE_GRAVITY,

            obstacle_width: OBSTACLE_WIDTH,
            gap_height: GAP_HEIGHT,
            spawn_interval_ticks: SPAWN_INTERVAL_TICKS,
            spawn_margin: SPAWN_MARGIN,
            scroll_speed: SCROLL_SPEED,
            gap_top_min: GAP_TOP_MIN,
            gap_top_max: GAP_TOP_MAX,
            cull_threshold: CULL_THRESHOLD,

            countdown_from: COUNTDOWN_FROM,
            countdown_step_ms: COUNTDOWN_STEP_MS,
            restart_cooldown_ms: RESTART_COOLDOWN_MS,
            frame_ms: FRAME_MS,
        }
    }
}

impl GameConfig {
    /// Load from ~/.flapper/config.json, falling back to defaults.
    pub fn load() -> Self {
        load_json_or_default::<Self>(CONFIG_FILE).validate()
    }

    /// Clamp values the simulation cannot work with.
    ///
    /// Non-finite numbers fall back to defaults, obstacles always scroll
    /// left, and the gap range always fits inside the playfield.
    pub fn validate(mut self) -> Self {
        let defaults = Self::default();

        if !positive(self.player_width) {
            self.player_width = defaults.player_width;
        }
        if !positive(self.player_height) {
            self.player_height = defaults.player_height;
        }
        if !(self.player_x.is_finite() && self.player_x >= 0.0) {
            self.player_x = defaults.player_x;
        }
        if !(self.playfield_height.is_finite() && self.playfield_height > self.player_height) {
            self.playfield_height = defaults.playfield_height.max(self.player_height * 2.0);
        }
        if !(self.playfield_width.is_finite()
            && self.playfield_width > self.player_x + self.player_width)
        {
            self.playfield_width = defaults
                .playfield_width
                .max((self.player_x + self.player_width) * 2.0);
        }

        self.gravity = finite_or(self.gravity, defaults.gravity);
        self.flap_impulse = finite_or(self.flap_impulse, defaults.flap_impulse);
        self.settle_gravity = finite_or(self.settle_gravity, defaults.settle_gravity);

        if !positive(self.scroll_speed) {
            log::warn!(
                "Scroll speed {} would never clear obstacles, using {}",
                self.scroll_speed,
                defaults.scroll_speed
            );
            self.scroll_speed = defaults.scroll_speed;
        }
        if !positive(self.obstacle_width) {
            self.obstacle_width = defaults.obstacle_width;
        }
        self.spawn_margin = finite_or(self.spawn_margin, defaults.spawn_margin);
        self.cull_threshold = finite_or(self.cull_threshold, defaults.cull_threshold);
        if self.spawn_interval_ticks == 0 {
            self.spawn_interval_ticks = 1;
        }

        if !(positive(self.gap_height) && self.gap_height < self.playfield_height) {
            self.gap_height = if defaults.gap_height < self.playfield_height {
                defaults.gap_height
            } else {
                self.playfield_height / 2.0
            };
        }
        self.clamp_gap_range(&defaults);

        if self.countdown_step_ms == 0 {
            self.countdown_step_ms = defaults.countdown_step_ms;
        }
        if self.frame_ms == 0 {
            self.frame_ms = defaults.frame_ms;
        }

        self
    }

    /// Keep `[gap_top_min, gap_top_max)` non-empty and inside
    /// `[0, playfield_height - gap_height]`.
    fn clamp_gap_range(&mut self, defaults: &Self) {
        let highest = self.playfield_height - self.gap_height;
        let fit = |value: f64, fallback: f64| finite_or(value, fallback).clamp(0.0, highest);

        let min = fit(self.gap_top_min, defaults.gap_top_min);
        let max = fit(self.gap_top_max, defaults.gap_top_max);
        if max > min {
            self.gap_top_min = min;
            self.gap_top_max = max;
            return;
        }

        log::warn!(
            "Empty gap range [{}, {}), using defaults",
            self.gap_top_min,
            self.gap_top_max
        );
        let min = defaults.gap_top_min.clamp(0.0, highest);
        let max = defaults.gap_top_max.clamp(0.0, highest);
        if max > min {
            self.gap_top_min = min;
            self.gap_top_max = max;
        } else {
            self.gap_top_min = 0.0;
            self.gap_top_max = highest;
        }
    }

    /// Vertical spawn position for a fresh session.
    pub fn player_spawn_y(&self) -> f64 {
        (self.playfield_height / 2.0 - PLAYER_SPAWN_OFFSET).max(0.0)
    }
}

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}
