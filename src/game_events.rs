//! Maps [`GameEvent`]s to overlay state and terminal cues.
//!
//! Binary-only (not part of `lib.rs`): it bridges the pure game core to
//! what the terminal shows. Cue failures are ignored; they never affect
//! the game.

use std::io::Write;

use flapper::{DeathCause, GameEvent};

/// Frames the flap highlight stays on (~100ms at 60 FPS).
pub const FLAP_FLASH_FRAMES: u32 = 6;

/// Which overlay covers the playfield.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    Hidden,
    Countdown(u32),
    GameOver {
        score: u32,
        rank: Option<usize>,
        cause: DeathCause,
    },
}

/// Presentation state owned by the front-end.
#[derive(Debug, Clone, Default)]
pub struct Presentation {
    pub overlay: Overlay,
    pub flap_flash: u32,
    pub restart_ready: bool,
}

impl Presentation {
    /// Per-frame decay of short-lived effects.
    pub fn advance_frame(&mut self) {
        self.flap_flash = self.flap_flash.saturating_sub(1);
    }
}

/// Apply one tick's events. `cue` receives audible cues (terminal bell).
pub fn apply_game_events<W: Write>(
    presentation: &mut Presentation,
    events: &[GameEvent],
    cue: &mut W,
) {
    for event in events {
        match event {
            GameEvent::CountdownTick(n) => {
                presentation.overlay = Overlay::Countdown(*n);
            }
            GameEvent::PlayStarted => {
                presentation.overlay = Overlay::Hidden;
                presentation.restart_ready = false;
            }
            GameEvent::Flapped => {
                presentation.flap_flash = FLAP_FLASH_FRAMES;
            }
            GameEvent::Scored(_) => {}
            GameEvent::GameOver { score, rank, cause } => {
                presentation.overlay = Overlay::GameOver {
                    score: *score,
                    rank: *rank,
                    cause: *cause,
                };
                presentation.flap_flash = 0;
                if cue.write_all(b"\x07").is_ok() {
                    let _ = cue.flush();
                }
            }
            GameEvent::RestartReady => {
                presentation.restart_ready = true;
            }
        }
    }
}
