//! Playfield rendering.
//!
//! Uses half-block pixel rendering: each grid cell maps to one colored pixel
//! and pairs of vertical pixels are packed into one terminal row with the `▀`
//! character (fg = top, bg = bottom). Half-blocks keep cells square.

use super::game_common::{centered, create_game_layout, render_banner, render_status_bar};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tilesnake::core::{Banner, Tile, GRID_COLS, GRID_ROWS};
use tilesnake::display::{score_text, TileDisplay};

const HALF_TOP: char = '\u{2580}'; // ▀

const SNAKE_COLOR: Color = Color::Rgb(60, 220, 60);
const FOOD_COLOR: Color = Color::Rgb(255, 90, 50);
const EMPTY_BG: Color = Color::Rgb(12, 12, 18);

fn tile_color(tile: Tile) -> Color {
    match tile {
        Tile::Empty => EMPTY_BG,
        Tile::Snake => SNAKE_COLOR,
        Tile::Food => FOOD_COLOR,
    }
}

/// Pixel colors for the whole grid, food sprite drawn over the tiles.
fn pixel_grid(display: &TileDisplay) -> Vec<Vec<Color>> {
    let mut pixels: Vec<Vec<Color>> = (0..GRID_ROWS)
        .map(|row| {
            (0..GRID_COLS)
                .map(|col| tile_color(display.tile(col, row)))
                .collect()
        })
        .collect();

    if display.food_sprite.tile != Tile::Empty {
        if let Some((col, row)) = display.food_sprite.cell() {
            pixels[row as usize][col as usize] = tile_color(display.food_sprite.tile);
        }
    }
    pixels
}

pub fn render_snake_scene(frame: &mut Frame, area: Rect, display: &TileDisplay) {
    let layout = create_game_layout(frame, area, " Tile Snake ", Color::LightGreen);

    let board_w = GRID_COLS as u16 + 2;
    let board_h = (GRID_ROWS as u16).div_ceil(2) + 2;
    let board = centered(layout.content, board_w, board_h);
    render_play_field(frame, board, display);

    let controls: &[(&str, &str)] = match display.banner {
        Some(Banner::GameOver) => &[("[Z/Enter]", "Title"), ("[Q]", "Quit")],
        Some(Banner::Paused) => &[("[Enter]", "Resume"), ("[Q]", "Quit")],
        None => &[("[Arrows]", "Turn"), ("[Enter]", "Pause"), ("[Q]", "Quit")],
    };
    render_status_bar(frame, layout.status_bar, controls);

    match display.banner {
        Some(Banner::Paused) => render_banner(frame, board, "PAUSED", Color::Yellow, Vec::new()),
        Some(Banner::GameOver) => render_banner(
            frame,
            board,
            "GAME OVER",
            Color::LightRed,
            vec![
                Line::from(format!(
                    "Score {}  Best {}",
                    score_text(display.score),
                    score_text(display.high_score)
                )),
                Line::from(format!("Length {}", display.count(Tile::Snake))),
            ],
        ),
        None => {}
    }
}

fn render_play_field(frame: &mut Frame, area: Rect, display: &TileDisplay) {
    if area.height < 3 || area.width < 3 {
        return;
    }
    let border = Style::default().fg(Color::Rgb(80, 80, 80));
    let inner_w = area.width as usize - 2;

    // Top border carries the score
    let label = format!(" {} ", score_text(display.score));
    let pad = inner_w.saturating_sub(label.len());
    let top = Line::from(vec![
        Span::styled(format!("\u{250C}{}", "\u{2500}".repeat(pad / 2)), border),
        Span::styled(label, Style::default().fg(Color::White)),
        Span::styled(
            format!("{}\u{2510}", "\u{2500}".repeat(pad - pad / 2)),
            border,
        ),
    ]);
    frame.render_widget(Paragraph::new(top), Rect::new(area.x, area.y, area.width, 1));

    let pixels = pixel_grid(display);
    let content_rows = area.height as usize - 2;
    for term_row in 0..content_rows {
        let top_row = pixels.get(term_row * 2);
        let bot_row = pixels.get(term_row * 2 + 1);

        let mut spans = vec![Span::styled("\u{2502}", border)];
        for col in 0..inner_w.min(GRID_COLS as usize) {
            let fg = top_row.map_or(EMPTY_BG, |r| r[col]);
            let bg = bot_row.map_or(EMPTY_BG, |r| r[col]);
            spans.push(Span::styled(
                HALF_TOP.to_string(),
                Style::default().fg(fg).bg(bg),
            ));
        }
        spans.push(Span::styled("\u{2502}", border));

        let y = area.y + 1 + term_row as u16;
        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(area.x, y, area.width, 1),
        );
    }

    let bottom = format!("\u{2514}{}\u{2518}", "\u{2500}".repeat(inner_w));
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(bottom, border))),
        Rect::new(area.x, area.y + area.height - 1, area.width, 1),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilesnake::core::{RenderCommand, Sprite};

    #[test]
    fn test_food_sprite_drawn_over_tiles() {
        let mut display = TileDisplay::new();
        display.apply_all(&[
            RenderCommand::SetSpriteTile {
                sprite: Sprite::Food,
                tile: Tile::Food,
            },
            RenderCommand::MoveSprite {
                sprite: Sprite::Food,
                x: 16,
                y: 24,
            },
        ]);
        let pixels = pixel_grid(&display);
        assert_eq!(pixels[3][2], FOOD_COLOR);
        assert_eq!(pixels[0][0], EMPTY_BG);
    }

    #[test]
    fn test_hidden_sprite_not_drawn() {
        let display = TileDisplay::new();
        let pixels = pixel_grid(&display);
        assert!(pixels.iter().flatten().all(|&c| c == EMPTY_BG));
    }
}
