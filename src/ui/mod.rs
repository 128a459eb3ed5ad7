pub mod game_common;
pub mod playfield_scene;

use ratatui::Frame;

use crate::game_events::Presentation;
use flapper::{RenderView, Scoreboard};

/// Draw one frame of the game screen.
pub fn draw(
    frame: &mut Frame,
    view: &RenderView,
    scoreboard: &Scoreboard,
    presentation: &Presentation,
) {
    let area = frame.size();
    playfield_scene::render_game(frame, area, view, scoreboard, presentation);
}
