//! The session record and the countdown → playing → game-over state machine.
//!
//! [`Game::tick`] is called once per frame by the driver with the elapsed
//! milliseconds. Timers are plain "remaining time" fields decremented here,
//! so a countdown can never fire after play has begun.

use std::mem;

use rand::Rng;

use crate::core::collision;
use crate::core::config::GameConfig;
use crate::core::events::{DeathCause, GameEvent};
use crate::core::obstacles;
use crate::core::physics;
use crate::core::types::{Obstacle, Player, Rect};
use crate::scoreboard::Scoreboard;

/// Current phase. Moves forward only; `GameOver` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Countdown,
    Playing,
    GameOver,
}

/// Mutable per-session state, owned by the tick driver.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub player: Player,
    /// Live obstacles, oldest first.
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    /// Playing ticks, starting at 1 when play begins.
    pub tick_count: u64,
}

impl Session {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            player: Player::new(config),
            obstacles: Vec::new(),
            score: 0,
            tick_count: 0,
        }
    }

    /// Clear everything for the start of play.
    pub fn reset(&mut self, config: &GameConfig) {
        self.obstacles.clear();
        self.score = 0;
        self.player.respawn(config);
        self.tick_count = 1;
    }
}

/// Read-only snapshot handed to the renderer each frame.
#[derive(Debug, Clone, Copy)]
pub struct RenderView<'a> {
    pub phase: Phase,
    pub player: Rect,
    pub velocity: f64,
    pub obstacles: &'a [Obstacle],
    pub score: u32,
    pub playfield_width: f64,
    pub playfield_height: f64,
    pub restart_ready: bool,
}

/// One countdown-to-game-over lifecycle.
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    phase: Phase,
    session: Session,
    countdown: u32,
    countdown_remaining_ms: u64,
    cooldown_remaining_ms: u64,
    restart_ready: bool,
    scoreboard: Scoreboard,
    events: Vec<GameEvent>,
}

impl Game {
    /// Start a new game in the countdown phase. The first tick reports the
    /// initial countdown value.
    pub fn new(config: GameConfig, scoreboard: Scoreboard) -> Self {
        let session = Session::new(&config);
        let mut game = Self {
            phase: Phase::Countdown,
            session,
            countdown: config.countdown_from,
            countdown_remaining_ms: config.countdown_step_ms,
            cooldown_remaining_ms: 0,
            restart_ready: false,
            scoreboard,
            events: Vec::new(),
            config,
        };

        if game.countdown == 0 {
            game.begin_play();
        } else {
            game.events.push(GameEvent::CountdownTick(game.countdown));
        }
        game
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Direct access to the session, for scripted scenarios and tests.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn score(&self) -> u32 {
        self.session.score
    }

    /// True once the game is over and the cooldown has elapsed.
    pub fn can_restart(&self) -> bool {
        self.phase == Phase::GameOver && self.restart_ready
    }

    pub fn view(&self) -> RenderView<'_> {
        RenderView {
            phase: self.phase,
            player: self.session.player.rect(),
            velocity: self.session.player.velocity,
            obstacles: &self.session.obstacles,
            score: self.session.score,
            playfield_width: self.config.playfield_width,
            playfield_height: self.config.playfield_height,
            restart_ready: self.restart_ready,
        }
    }

    /// Flap input. Ignored unless playing.
    pub fn flap(&mut self) -> bool {
        if self.phase != Phase::Playing {
            return false;
        }
        physics::flap(&mut self.session.player, &self.config);
        self.events.push(GameEvent::Flapped);
        true
    }

    /// Advance one frame. `dt_ms` drives the countdown and cooldown timers;
    /// physics advances one step per call while playing or settling.
    pub fn tick<R: Rng>(&mut self, rng: &mut R, dt_ms: u64) -> Vec<GameEvent> {
        match self.phase {
            Phase::Countdown => self.advance_countdown(dt_ms),
            Phase::Playing => self.step_playing(rng),
            Phase::GameOver => self.step_game_over(dt_ms),
        }
        mem::take(&mut self.events)
    }

    fn advance_countdown(&mut self, dt_ms: u64) {
        let mut elapsed = dt_ms;
        while self.phase == Phase::Countdown && elapsed >= self.countdown_remaining_ms {
            elapsed -= self.countdown_remaining_ms;
            self.countdown = self.countdown.saturating_sub(1);
            if self.countdown > 0 {
                self.events.push(GameEvent::CountdownTick(self.countdown));
                self.countdown_remaining_ms = self.config.countdown_step_ms;
            } else {
                self.begin_play();
            }
        }
        if self.phase == Phase::Countdown {
            self.countdown_remaining_ms -= elapsed;
        }
    }

    fn begin_play(&mut self) {
        self.phase = Phase::Playing;
        self.countdown_remaining_ms = 0;
        self.session.reset(&self.config);
        self.events.push(GameEvent::PlayStarted);
        log::info!("Play started");
    }

    fn step_playing<R: Rng>(&mut self, rng: &mut R) {
        let session = &mut self.session;

        let step = physics::integrate_playing(&mut session.player, &self.config);
        obstacles::maybe_spawn(
            &mut session.obstacles,
            session.tick_count,
            rng,
            &self.config,
        );
        let sweep = collision::sweep(&mut session.obstacles, &session.player, &self.config);

        if sweep.passed > 0 {
            session.score += sweep.passed;
            log::debug!("Score {}", session.score);
            self.events.push(GameEvent::Scored(session.score));
        }
        session.tick_count += 1;

        // Both may fire on the same tick; only the first one counts.
        if sweep.collided {
            self.trigger_game_over(DeathCause::Obstacle);
        }
        if step.hit_floor {
            self.trigger_game_over(DeathCause::Floor);
        }
    }

    fn trigger_game_over(&mut self, cause: DeathCause) {
        if self.phase == Phase::GameOver {
            return;
        }
        self.phase = Phase::GameOver;

        let score = self.session.score;
        let rank = match self.scoreboard.record(score) {
            Ok(rank) => rank,
            Err(e) => {
                log::warn!("Could not save score {}: {}", score, e);
                None
            }
        };
        log::info!("Game over ({:?}) with score {}", cause, score);
        self.events.push(GameEvent::GameOver {
            score,
            rank,
            cause,
        });

        self.cooldown_remaining_ms = self.config.restart_cooldown_ms;
        if self.cooldown_remaining_ms == 0 {
            self.mark_restart_ready();
        }
    }

    fn step_game_over(&mut self, dt_ms: u64) {
        physics::integrate_settling(&mut self.session.player, &self.config);

        if !self.restart_ready {
            self.cooldown_remaining_ms = self.cooldown_remaining_ms.saturating_sub(dt_ms);
            if self.cooldown_remaining_ms == 0 {
                self.mark_restart_ready();
            }
        }
    }

    fn mark_restart_ready(&mut self) {
        self.restart_ready = true;
        self.events.push(GameEvent::RestartReady);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoreboard::MemoryStorage;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    fn new_game() -> (Game, MemoryStorage) {
        let storage = MemoryStorage::default();
        let board = Scoreboard::load(Box::new(storage.clone()));
        (Game::new(GameConfig::default(), board), storage)
    }

    fn playing_game() -> (Game, MemoryStorage) {
        let (mut game, storage) = new_game();
        let mut rng = create_test_rng();
        for _ in 0..3 {
            game.tick(&mut rng, 1000);
        }
        assert_eq!(game.phase(), Phase::Playing);
        (game, storage)
    }

    #[test]
    fn test_starts_in_countdown() {
        let (game, _) = new_game();
        assert_eq!(game.phase(), Phase::Countdown);
        assert_eq!(game.view().phase, Phase::Countdown);
    }

    #[test]
    fn test_first_tick_reports_initial_countdown() {
        let (mut game, _) = new_game();
        let events = game.tick(&mut create_test_rng(), 16);
        assert_eq!(events, vec![GameEvent::CountdownTick(3)]);
    }

    #[test]
    fn test_countdown_events_in_order() {
        let (mut game, _) = new_game();
        let mut rng = create_test_rng();
        let mut events = Vec::new();
        for _ in 0..3 {
            events.extend(game.tick(&mut rng, 1000));
        }
        assert_eq!(
            events,
            vec![
                GameEvent::CountdownTick(3),
                GameEvent::CountdownTick(2),
                GameEvent::CountdownTick(1),
                GameEvent::PlayStarted,
            ]
        );
    }

    #[test]
    fn test_countdown_accumulates_small_steps() {
        let (mut game, _) = new_game();
        let mut rng = create_test_rng();
        // 2999 ms is not enough
        for _ in 0..2999 {
            game.tick(&mut rng, 1);
        }
        assert_eq!(game.phase(), Phase::Countdown);
        game.tick(&mut rng, 1);
        assert_eq!(game.phase(), Phase::Playing);
    }

    #[test]
    fn test_large_step_does_not_run_physics_during_countdown() {
        let (mut game, _) = new_game();
        let y0 = game.session().player.y;
        game.tick(&mut create_test_rng(), 10_000);
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.session().player.y, y0);
    }

    #[test]
    fn test_flap_ignored_outside_playing() {
        let (mut game, _) = new_game();
        assert!(!game.flap());
        assert_eq!(game.session().player.velocity, 0.0);
    }

    #[test]
    fn test_flap_while_playing() {
        let (mut game, _) = playing_game();
        assert!(game.flap());
        assert_eq!(game.session().player.velocity, game.config().flap_impulse);
        let events = game.tick(&mut create_test_rng(), 16);
        assert_eq!(events.first(), Some(&GameEvent::Flapped));
    }

    #[test]
    fn test_begin_play_resets_session() {
        let (mut game, _) = new_game();
        game.session_mut().score = 9;
        game.session_mut()
            .obstacles
            .push(Obstacle::new(300.0, 60.0, 50.0, 140.0));
        game.session_mut().player.velocity = 4.0;

        for _ in 0..3 {
            game.tick(&mut create_test_rng(), 1000);
        }

        let session = game.session();
        assert!(session.obstacles.is_empty());
        assert_eq!(session.score, 0);
        assert_eq!(session.tick_count, 1);
        assert_eq!(session.player.velocity, 0.0);
    }

    #[test]
    fn test_floor_ends_game_and_records_score() {
        let (mut game, storage) = playing_game();
        let floor = game.config().playfield_height;
        game.session_mut().score = 4;
        game.session_mut().player.y = floor - 29.0;
        game.session_mut().player.velocity = 5.0;

        let events = game.tick(&mut create_test_rng(), 16);

        assert_eq!(game.phase(), Phase::GameOver);
        assert!(events.contains(&GameEvent::GameOver {
            score: 4,
            rank: Some(1),
            cause: DeathCause::Floor,
        }));
        assert_eq!(storage.write_count(), 1);
        assert_eq!(game.scoreboard().best(), Some(4));
    }

    #[test]
    fn test_restart_after_cooldown_only() {
        let (mut game, _) = playing_game();
        let mut rng = create_test_rng();
        let floor = game.config().playfield_height;
        game.session_mut().player.y = floor;
        game.tick(&mut rng, 16);
        assert_eq!(game.phase(), Phase::GameOver);
        assert!(!game.can_restart());

        let mut ready_events = 0;
        // 249 frames = 3984 ms
        for _ in 0..(4000 / 16 - 1) {
            let events = game.tick(&mut rng, 16);
            ready_events += events
                .iter()
                .filter(|e| **e == GameEvent::RestartReady)
                .count();
        }
        assert!(!game.can_restart());
        let events = game.tick(&mut rng, 16);
        assert!(events.contains(&GameEvent::RestartReady));
        assert!(game.can_restart());
        assert_eq!(ready_events, 0);

        // Stays terminal and does not re-announce
        assert!(game.tick(&mut rng, 16).is_empty());
        assert_eq!(game.phase(), Phase::GameOver);
    }

    #[test]
    fn test_game_over_is_terminal_for_input() {
        let (mut game, _) = playing_game();
        let floor = game.config().playfield_height;
        game.session_mut().player.y = floor;
        game.tick(&mut create_test_rng(), 16);
        assert!(!game.flap());
    }
}
