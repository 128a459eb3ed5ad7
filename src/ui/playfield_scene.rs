//! Playfield rendering: player, obstacles, score, overlays and the
//! scoreboard panel.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::game_events::{Overlay, Presentation};
use crate::ui::game_common::{
    create_game_layout, render_info_panel_frame, render_modal, render_status_bar,
};
use flapper::{DeathCause, Phase, RenderView, Scoreboard};

const INFO_PANEL_WIDTH: u16 = 26;

/// Render the whole game screen.
pub fn render_game(
    frame: &mut Frame,
    area: Rect,
    view: &RenderView,
    scoreboard: &Scoreboard,
    presentation: &Presentation,
) {
    let layout = create_game_layout(frame, area, " Flapper ", Color::Cyan, 8, INFO_PANEL_WIDTH);

    render_play_area(frame, layout.content, view, presentation);
    render_score(frame, layout.content, view.score);
    render_status_bar_content(frame, layout.status_bar, view, scoreboard);
    render_scoreboard_panel(frame, layout.info_panel, scoreboard);

    match &presentation.overlay {
        Overlay::Hidden => {}
        Overlay::Countdown(n) => render_countdown(frame, layout.content, *n),
        Overlay::GameOver { score, rank, cause } => render_game_over(
            frame,
            layout.content,
            *score,
            *rank,
            *cause,
            scoreboard,
            presentation.restart_ready,
        ),
    }
}

/// What occupies a single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Sky,
    Player,
    Pipe,
    PipeCap,
}

/// Classify a cell spanning `[x0, x1) x [y0, y1)` in playfield units.
fn classify(view: &RenderView, x0: f64, x1: f64, y0: f64, y1: f64) -> Cell {
    let p = view.player;
    if x0 < p.right() && x1 > p.x && y0 < p.bottom() && y1 > p.y {
        return Cell::Player;
    }

    let cy = (y0 + y1) / 2.0;
    let cell_h = y1 - y0;
    for obstacle in view.obstacles {
        let upper = obstacle.upper_rect();
        if x0 < upper.right() && x1 > upper.x && cy < upper.bottom() {
            return if cy + cell_h >= upper.bottom() {
                Cell::PipeCap
            } else {
                Cell::Pipe
            };
        }
        let lower = obstacle.lower_rect(view.playfield_height);
        if x0 < lower.right() && x1 > lower.x && cy > lower.y && cy < lower.bottom() {
            return if cy - cell_h <= lower.y {
                Cell::PipeCap
            } else {
                Cell::Pipe
            };
        }
    }
    Cell::Sky
}

/// Render the playfield scaled into `area`.
fn render_play_area(frame: &mut Frame, area: Rect, view: &RenderView, presentation: &Presentation) {
    let width = area.width as usize;
    let height = area.height as usize;

    if width == 0 || height == 0 {
        return;
    }

    let sx = view.playfield_width / width as f64;
    let sy = view.playfield_height / height as f64;

    let player_glyph = if view.velocity < -1.0 {
        "▲"
    } else if view.velocity > 2.0 {
        "▼"
    } else {
        "►"
    };
    let player_style = if presentation.flap_flash > 0 {
        Style::default()
            .fg(Color::LightYellow)
            .add_modifier(Modifier::BOLD)
    } else if view.phase == Phase::GameOver {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let y0 = row as f64 * sy;
        let y1 = y0 + sy;
        let mut spans = Vec::with_capacity(width);

        for col in 0..width {
            let x0 = col as f64 * sx;
            let x1 = x0 + sx;

            let span = match classify(view, x0, x1, y0, y1) {
                Cell::Player => Span::styled(player_glyph, player_style),
                Cell::Pipe => Span::styled("█", Style::default().fg(Color::Green)),
                Cell::PipeCap => Span::styled("█", Style::default().fg(Color::LightGreen)),
                Cell::Sky => Span::raw(" "),
            };
            spans.push(span);
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Score in the top-left corner of the playfield.
fn render_score(frame: &mut Frame, area: Rect, score: u32) {
    if area.width < 6 || area.height < 1 {
        return;
    }
    let text = format!(" {} ", score);
    let score_area = Rect {
        x: area.x + 1,
        y: area.y,
        width: (text.len() as u16).min(area.width - 1),
        height: 1,
    };
    let paragraph = Paragraph::new(Span::styled(
        text,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(paragraph, score_area);
}

fn render_status_bar_content(
    frame: &mut Frame,
    area: Rect,
    view: &RenderView,
    scoreboard: &Scoreboard,
) {
    match view.phase {
        Phase::Countdown => render_status_bar(
            frame,
            area,
            "Get ready...",
            Color::Yellow,
            &[("[Space/Up/Click]", "Flap"), ("[q]", "Quit")],
        ),
        Phase::Playing => {
            let status = match scoreboard.best() {
                Some(best) => format!("Score: {}   Best: {}", view.score, best),
                None => format!("Score: {}", view.score),
            };
            render_status_bar(
                frame,
                area,
                &status,
                Color::Green,
                &[("[Space/Up/Click]", "Flap"), ("[q]", "Quit")],
            );
        }
        Phase::GameOver => {
            let controls: &[(&str, &str)] = if view.restart_ready {
                &[("[Enter]", "Play again"), ("[q]", "Quit")]
            } else {
                &[("[q]", "Quit")]
            };
            render_status_bar(frame, area, "Crashed!", Color::Red, controls);
        }
    }
}

fn scoreboard_lines(scoreboard: &Scoreboard) -> Vec<Line<'static>> {
    if scoreboard.is_empty() {
        return vec![Line::from(Span::styled(
            "No scores yet",
            Style::default().fg(Color::DarkGray),
        ))];
    }

    let mut lines = Vec::new();
    for (i, entry) in scoreboard.entries().iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!("{}. ", i + 1), Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:<4}", entry.score),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(entry.time.clone(), Style::default().fg(Color::DarkGray)),
        ]));
    }
    lines
}

fn render_scoreboard_panel(frame: &mut Frame, area: Rect, scoreboard: &Scoreboard) {
    let inner = render_info_panel_frame(frame, area, " High Scores ");
    if inner.height < 1 || inner.width < 4 {
        return;
    }

    // Panel is narrow: score on one line, timestamp below
    let mut lines = Vec::new();
    for (i, entry) in scoreboard.entries().iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!(" {}. ", i + 1), Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", entry.score),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("    {}", entry.time),
            Style::default().fg(Color::DarkGray),
        )));
    }
    if lines.is_empty() {
        lines = scoreboard_lines(scoreboard);
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_countdown(frame: &mut Frame, area: Rect, n: u32) {
    let lines = vec![
        Line::from(Span::styled(
            "Get ready!",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{}", n),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    render_modal(frame, area, Color::Yellow, lines);
}

fn render_game_over(
    frame: &mut Frame,
    area: Rect,
    score: u32,
    rank: Option<usize>,
    cause: DeathCause,
    scoreboard: &Scoreboard,
    restart_ready: bool,
) {
    let cause_text = match cause {
        DeathCause::Obstacle => "You hit a pipe.",
        DeathCause::Floor => "You hit the ground.",
    };
    let (rank_text, rank_color) = match rank {
        Some(1) => ("New high score!".to_string(), Color::Yellow),
        Some(r) => (format!("Rank #{} on the board", r), Color::Cyan),
        None => ("Not in the top 5".to_string(), Color::DarkGray),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(cause_text, Style::default().fg(Color::White))),
        Line::from(Span::styled(
            format!("Score: {}", score),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(rank_text, Style::default().fg(rank_color))),
        Line::from(""),
    ];
    lines.extend(scoreboard_lines(scoreboard));
    lines.push(Line::from(""));
    lines.push(if restart_ready {
        Line::from(Span::styled(
            "[Enter] Play again   [q] Quit",
            Style::default().fg(Color::White),
        ))
    } else {
        Line::from(Span::styled(
            "Please wait...",
            Style::default().fg(Color::DarkGray),
        ))
    });

    render_modal(frame, area, Color::Red, lines);
}
