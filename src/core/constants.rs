// Playfield (game units, origin top-left, y grows downward)
pub const PLAYFIELD_WIDTH: f64 = 800.0;
pub const PLAYFIELD_HEIGHT: f64 = 480.0;

// Player
pub const PLAYER_X: f64 = 80.0;
pub const PLAYER_WIDTH: f64 = 36.0;
pub const PLAYER_HEIGHT: f64 = 28.0;
/// Spawn height offset above the vertical center.
pub const PLAYER_SPAWN_OFFSET: f64 = 20.0;

// Physics (per tick)
pub const GRAVITY: f64 = 0.10;
pub const FLAP_IMPULSE: f64 = -3.8;
pub const SETTLE_GRAVITY: f64 = 0.005;

// Obstacles
pub const OBSTACLE_WIDTH: f64 = 60.0;
pub const GAP_HEIGHT: f64 = 140.0;
pub const SPAWN_INTERVAL_TICKS: u64 = 165;
pub const SPAWN_MARGIN: f64 = 10.0;
pub const SCROLL_SPEED: f64 = 1.2;
pub const GAP_TOP_MIN: f64 = 50.0;
pub const GAP_TOP_MAX: f64 = 250.0;
/// Obstacles whose trailing edge reaches this x are dropped.
pub const CULL_THRESHOLD: f64 = -50.0;

// Timers
pub const COUNTDOWN_FROM: u32 = 3;
pub const COUNTDOWN_STEP_MS: u64 = 1000;
pub const RESTART_COOLDOWN_MS: u64 = 4000;

// Frame pacing for the terminal driver (~60 FPS)
pub const FRAME_MS: u64 = 16;

// Scoreboard
pub const SCOREBOARD_CAPACITY: usize = 5;
pub const SCOREBOARD_FILE: &str = "highScores.json";
pub const SCOREBOARD_TIME_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

// Files under ~/.flapper/
pub const CONFIG_FILE: &str = "config.json";
pub const LOG_FILE: &str = "flapper.log";
