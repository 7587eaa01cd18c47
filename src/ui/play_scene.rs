//! The play surface: sky, pipes, bird, scrolling ground and score.
//!
//! The logical surface is scaled onto whatever cell grid the terminal gives
//! us. Each cell samples the surface at its centre, so shapes stay put as the
//! terminal is resized.

use crate::core::{Phase, Session};
use crate::ui::game_common::{
    create_game_layout, info_row, render_game_over_overlay, render_info_panel_frame,
    render_status_bar,
};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const PLAY_CONTROLS: &[(&str, &str)] = &[("[Space/Up/Enter]", "Flap"), ("[Q]", "Quit")];
const GAME_OVER_CONTROLS: &[(&str, &str)] = &[("[R]", "Play again"), ("[Q]", "Quit")];

/// Width of a foreground stripe in surface units.
const GROUND_STRIPE: i32 = 12;

/// Render the play screen for `session`.
pub fn render_play(frame: &mut Frame, area: Rect, session: &Session) {
    if let Phase::GameOver { score, cause } = session.phase() {
        render_game_over_overlay(
            frame,
            area,
            Color::Red,
            "GAME OVER",
            &format!("Final score: {}", score),
            &format!("You {}.", cause),
            GAME_OVER_CONTROLS,
        );
        return;
    }

    let layout = create_game_layout(frame, area, " Skyward ", Color::Cyan, 10, 22);
    render_surface(frame, layout.content, session);
    render_score(frame, layout.content, session.score());
    render_status(frame, layout.status_bar, session);
    render_info_panel(frame, layout.info_panel, session);
}

/// What occupies one sampled point of the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Cell {
    Sky,
    Pipe,
    Bird,
    Ground { stripe: bool },
}

/// Classify the surface point `(x, y)` using the documented draw order:
/// background, pipes, bird, then the foreground band on top.
pub(crate) fn classify(session: &Session, x: f64, y: f64) -> Cell {
    let surface_height = session.config().surface_height as f64;
    let ground_top = surface_height - session.sprites().foreground().height as f64;
    if y >= ground_top {
        let offset = (x as i32 - session.foreground_x()).rem_euclid(GROUND_STRIPE * 2);
        return Cell::Ground {
            stripe: offset < GROUND_STRIPE,
        };
    }
    if session.bird().bounds().contains(x, y) {
        return Cell::Bird;
    }
    if session.obstacles().rects().any(|r| r.contains(x, y)) {
        return Cell::Pipe;
    }
    Cell::Sky
}

/// Bird glyph for a tilt angle in radians.
pub(crate) fn tilt_glyph(tilt: f64) -> &'static str {
    if tilt <= -0.25 {
        "▲"
    } else if tilt >= 0.5 {
        "▼"
    } else {
        "►"
    }
}

fn render_surface(frame: &mut Frame, area: Rect, session: &Session) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let x_scale = session.config().surface_width as f64 / width as f64;
    let y_scale = session.config().surface_height as f64 / height as f64;
    let glyph = tilt_glyph(session.bird().tilt());
    let bird_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut bird_drawn = false;
    let mut lines = Vec::with_capacity(height);
    for row in 0..height {
        let y = (row as f64 + 0.5) * y_scale;
        let mut spans = Vec::with_capacity(width);
        for col in 0..width {
            let x = (col as f64 + 0.5) * x_scale;
            let span = match classify(session, x, y) {
                Cell::Sky => Span::raw(" "),
                Cell::Pipe => Span::styled("█", Style::default().fg(Color::Green)),
                Cell::Bird => {
                    bird_drawn = true;
                    Span::styled(glyph, bird_style)
                }
                Cell::Ground { stripe: true } => {
                    Span::styled("▓", Style::default().fg(Color::Yellow))
                }
                Cell::Ground { stripe: false } => {
                    Span::styled("▒", Style::default().fg(Color::Green))
                }
            };
            spans.push(span);
        }
        lines.push(Line::from(spans));
    }

    // A bird smaller than one cell can fall between sample points
    if !bird_drawn {
        let bounds = session.bird().bounds();
        let col = ((bounds.x + bounds.width / 2.0) / x_scale).floor();
        let row = ((bounds.y + bounds.height / 2.0) / y_scale).floor();
        if (0.0..width as f64).contains(&col) && (0.0..height as f64).contains(&row) {
            let ground_top = session.config().surface_height as f64
                - session.sprites().foreground().height as f64;
            if (row + 0.5) * y_scale < ground_top {
                lines[row as usize].spans[col as usize] = Span::styled(glyph, bird_style);
            }
        }
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_score(frame: &mut Frame, area: Rect, score: u32) {
    if area.height == 0 {
        return;
    }
    let text = Paragraph::new(Span::styled(
        format!(" {} ", score),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Right);
    frame.render_widget(text, Rect { height: 1, ..area });
}

fn render_status(frame: &mut Frame, area: Rect, session: &Session) {
    if session.phase() == Phase::Ready {
        render_status_bar(
            frame,
            area,
            "Press Space to start!",
            Color::Yellow,
            PLAY_CONTROLS,
        );
    } else {
        render_status_bar(
            frame,
            area,
            &format!("Score: {}", session.score()),
            Color::Green,
            PLAY_CONTROLS,
        );
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, session: &Session) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let bird = session.bird();
    let next_gap = session
        .obstacles()
        .pairs()
        .iter()
        .find(|p| p.trailing_edge() >= bird.x)
        .map(|p| format!("{:.0}-{:.0}", p.gap_top(), p.gap_bottom()))
        .unwrap_or_else(|| "-".to_string());

    let lines = vec![
        Line::from(Span::styled(
            " Skyward ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        info_row(" Score: ", session.score().to_string(), Color::White),
        info_row(" Height: ", format!("{:.0}", bird.y), Color::Yellow),
        info_row(" Speed: ", format!("{:+.2}", bird.velocity), Color::Yellow),
        info_row(" Next gap: ", next_gap, Color::Green),
        info_row(
            " Pipes: ",
            session.obstacles().len().to_string(),
            Color::Green,
        ),
        Line::from(""),
        info_row(" Ticks: ", session.tick_count().to_string(), Color::DarkGray),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
