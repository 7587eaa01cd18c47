//! Asset loading progress and the load-failure screen.

use crate::assets::{AssetError, AssetGate, AssetStatus, ImageAsset};
use crate::ui::game_common::{create_game_layout, info_row, render_info_panel_frame, render_status_bar};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use std::time::Duration;

/// Braille spinner frames, 100ms each.
const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub(crate) fn spinner_char(elapsed: Duration) -> char {
    SPINNER[((elapsed.as_millis() / 100) % SPINNER.len() as u128) as usize]
}

/// Per-image status while the loader runs.
pub fn render_loading(
    frame: &mut Frame,
    area: Rect,
    gate: &AssetGate,
    elapsed: Duration,
    timeout: Duration,
) {
    let layout = create_game_layout(frame, area, " Skyward ", Color::Cyan, 8, 22);

    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} Loading assets...", spinner_char(elapsed)),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for asset in ImageAsset::ALL {
        lines.push(asset_line(asset, gate.status(asset)));
    }
    frame.render_widget(Paragraph::new(lines), layout.content);

    render_status_bar(
        frame,
        layout.status_bar,
        &format!("{} of {} ready", gate.ready_count(), ImageAsset::ALL.len()),
        Color::Yellow,
        &[("[Q]", "Quit")],
    );

    let inner = render_info_panel_frame(frame, layout.info_panel);
    let info = vec![
        info_row(
            " Elapsed: ",
            format!("{:.1}s", elapsed.as_secs_f64()),
            Color::White,
        ),
        info_row(
            " Timeout: ",
            format!("{}s", timeout.as_secs()),
            Color::DarkGray,
        ),
    ];
    frame.render_widget(Paragraph::new(info), inner);
}

fn asset_line(asset: ImageAsset, status: &AssetStatus) -> Line<'static> {
    let (mark, color, detail) = match status {
        AssetStatus::Pending => ("…", Color::DarkGray, String::new()),
        AssetStatus::Ready(d) => ("✓", Color::Green, format!(" {}x{}", d.width, d.height)),
        AssetStatus::Failed(_) => ("✗", Color::Red, " failed".to_string()),
    };
    Line::from(vec![
        Span::styled(format!(" {} ", mark), Style::default().fg(color)),
        Span::styled(asset.label(), Style::default().fg(Color::White)),
        Span::styled(
            format!(" ({})", asset.file_name()),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(detail, Style::default().fg(color)),
    ])
}

/// The error that stopped loading, with retry and quit controls.
pub fn render_load_failed(frame: &mut Frame, area: Rect, error: &AssetError) {
    let layout = create_game_layout(frame, area, " Skyward ", Color::Red, 6, 22);

    let lines = vec![
        Line::from(Span::styled(
            "Could not load game assets",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::White),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }),
        layout.content,
    );

    render_status_bar(
        frame,
        layout.status_bar,
        "Loading failed",
        Color::Red,
        &[("[R]", "Retry"), ("[Q]", "Quit")],
    );

    let inner = render_info_panel_frame(frame, layout.info_panel);
    let hint = Paragraph::new(vec![
        Line::from(Span::styled(
            " Images are read from",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            " <assets>/images/",
            Style::default().fg(Color::White),
        )),
    ]);
    frame.render_widget(hint, inner);
}
