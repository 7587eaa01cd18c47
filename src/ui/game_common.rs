//! Pieces shared by the loading, load-failed and play screens.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Regions of a Skyward screen.
pub struct GameLayout {
    /// Where the sky, pipes and bird (or the loading list) are drawn
    pub content: Rect,
    /// Two rows under the content: phase text, then key hints
    pub status_bar: Rect,
    /// Bordered side column with live numbers
    pub info_panel: Rect,
}

/// Split `area` into the play column and a fixed-width side panel, all
/// inside one titled border.
///
/// ```text
/// ┌ Skyward ─────────────────────────┬ Info ──────┐
/// │ sky ~~~~~~~~~~~~~~~~~~  Score: 3 │ Score:  3  │
/// │   ►      ██                      │ Height: .. │
/// │          ██                      │            │
/// │▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒ │            │
/// │ Flying                           │            │
/// │ [Space] Flap  [Q] Quit           │            │
/// └──────────────────────────────────┴────────────┘
/// ```
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    content_min_height: u16,
    info_panel_width: u16,
) -> GameLayout {
    frame.render_widget(Clear, area);

    let outer = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let [play_column, info_panel] = columns(inner, info_panel_width);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(content_min_height), Constraint::Length(2)])
        .split(play_column);

    GameLayout {
        content: rows[0],
        status_bar: rows[1],
        info_panel,
    }
}

fn columns(inner: Rect, side_width: u16) -> [Rect; 2] {
    let split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(side_width)])
        .split(inner);
    [split[0], split[1]]
}

/// Phase text on the first row, key hints on the second.
///
/// The hint row is skipped when `area` has only one row or there are no hints.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    let mut rows = area.rows();
    let Some(status_row) = rows.next() else {
        return;
    };
    frame.render_widget(
        Paragraph::new(status_text)
            .style(Style::default().fg(status_color))
            .alignment(Alignment::Center),
        status_row,
    );

    if let Some(hint_row) = rows.next().filter(|_| !controls.is_empty()) {
        frame.render_widget(
            Paragraph::new(controls_line(controls)).alignment(Alignment::Center),
            hint_row,
        );
    }
}

/// `[Key] Action` hints separated by two spaces.
fn controls_line<'a>(controls: &[(&'a str, &'a str)]) -> Line<'a> {
    let key_style = Style::default().fg(Color::White);
    let action_style = Style::default().fg(Color::DarkGray);
    let spans = controls
        .iter()
        .enumerate()
        .flat_map(|(i, (key, action))| {
            let gap = (i > 0).then(|| Span::raw("  "));
            gap.into_iter().chain([
                Span::styled(*key, key_style),
                Span::styled(format!(" {action}"), action_style),
            ])
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

/// Cover `area` with a bordered card: title, message, detail and key hints,
/// vertically centred.
pub fn render_game_over_overlay(
    frame: &mut Frame,
    area: Rect,
    title_color: Color,
    title: &str,
    message: &str,
    detail: &str,
    controls: &[(&str, &str)],
) {
    frame.render_widget(Clear, area);
    let card = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(title_color));
    let inside = card.inner(area);
    frame.render_widget(card, area);

    let body = vec![
        Line::styled(
            title,
            Style::default().fg(title_color).add_modifier(Modifier::BOLD),
        ),
        Line::default(),
        Line::styled(message, Style::default().fg(Color::White)),
        Line::default(),
        Line::styled(detail, Style::default().fg(Color::Cyan)),
        Line::default(),
        controls_line(controls),
    ];
    let target = middle_rows(inside, body.len() as u16);
    frame.render_widget(Paragraph::new(body).alignment(Alignment::Center), target);
}

/// The `height` rows in the vertical middle of `area`, clipped to fit.
fn middle_rows(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    Rect {
        y: area.y + (area.height - height) / 2,
        height,
        ..area
    }
}

/// Draw the side panel border and hand back the space inside it.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let panel = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inside = panel.inner(area);
    frame.render_widget(panel, area);
    inside
}

/// One `label: value` row for an info panel.
pub fn info_row<'a>(label: &'a str, value: String, value_color: Color) -> Line<'a> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(value_color)),
    ])
}
