pub mod game_common;
pub mod loading_scene;
pub mod play_scene;

use crate::driver::{App, Screen};
use ratatui::Frame;

/// Draw whatever screen the app is on.
pub fn draw(frame: &mut Frame, app: &App) {
    let size = frame.size();
    match app.screen() {
        Screen::Loading { gate, loader } => loading_scene::render_loading(
            frame,
            size,
            gate,
            loader.elapsed(),
            app.config().asset_timeout,
        ),
        Screen::LoadFailed { error } => loading_scene::render_load_failed(frame, size, error),
        Screen::Playing { session } => play_scene::render_play(frame, size, session),
    }
}
