pub mod game_common;
pub mod snake_scene;
pub mod title_scene;

use ratatui::Frame;
use tilesnake::core::Screen;
use tilesnake::TileDisplay;

/// Main UI drawing function.
pub fn draw_ui(frame: &mut Frame, display: &TileDisplay) {
    let size = frame.size();
    match display.screen {
        Screen::Title => title_scene::render_title_scene(frame, size, display),
        Screen::Playfield => snake_scene::render_snake_scene(frame, size, display),
    }
}
