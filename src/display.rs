//! Retained display state built from [`RenderCommand`]s.
//!
//! This is the tile-and-sprite model the terminal UI draws from. It holds no
//! game logic: applying the commands from every frame in order reproduces
//! what the engine asked to be shown.

use crate::core::constants::{CELL_COUNT, GRID_COLS, GRID_ROWS};
use crate::core::tick::{Banner, RenderCommand, Screen, Sprite, Tile};
use crate::snake::types::{Cell, Difficulty, Position};

/// Last three decimal digits of a score, zero padded.
pub fn score_text(value: u8) -> String {
    format!("{:03}", value as u16 % 1000)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpriteState {
    pub x: i16,
    pub y: i16,
    pub tile: Tile,
}

impl SpriteState {
    /// Grid cell under the sprite's top-left pixel, if on screen.
    pub fn cell(&self) -> Option<(u8, u8)> {
        Position::new(self.x, self.y)
            .cell()
            .map(|c| (c.col(), c.row()))
    }
}

#[derive(Debug, Clone)]
pub struct TileDisplay {
    pub screen: Screen,
    pub banner: Option<Banner>,
    tiles: [Tile; CELL_COUNT],
    pub food_sprite: SpriteState,
    pub score: u8,
    pub high_score: u8,
    pub difficulty: Difficulty,
    pub wrap_enabled: bool,
}

impl Default for TileDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl TileDisplay {
    pub fn new() -> Self {
        Self {
            screen: Screen::Title,
            banner: None,
            tiles: [Tile::Empty; CELL_COUNT],
            food_sprite: SpriteState::default(),
            score: 0,
            high_score: 0,
            difficulty: Difficulty::default(),
            wrap_enabled: true,
        }
    }

    pub fn tile(&self, col: u8, row: u8) -> Tile {
        Cell::new(col, row)
            .map(|cell| self.tiles[cell.index()])
            .unwrap_or_default()
    }

    pub fn apply(&mut self, command: &RenderCommand) {
        match *command {
            RenderCommand::ShowScreen(screen) => self.screen = screen,
            RenderCommand::ShowBanner(banner) => self.banner = Some(banner),
            RenderCommand::HideBanner => self.banner = None,
            RenderCommand::SetTile { cell, tile } => self.tiles[cell.index()] = tile,
            RenderCommand::FillRect {
                col,
                row,
                width,
                height,
                tile,
            } => {
                let cols = col..col.saturating_add(width).min(GRID_COLS);
                for r in row..row.saturating_add(height).min(GRID_ROWS) {
                    for c in cols.clone() {
                        if let Some(cell) = Cell::new(c, r) {
                            self.tiles[cell.index()] = tile;
                        }
                    }
                }
            }
            RenderCommand::MoveSprite {
                sprite: Sprite::Food,
                x,
                y,
            } => {
                self.food_sprite.x = x;
                self.food_sprite.y = y;
            }
            RenderCommand::SetSpriteTile {
                sprite: Sprite::Food,
                tile,
            } => self.food_sprite.tile = tile,
            RenderCommand::ShowScore(score) => self.score = score,
            RenderCommand::ShowHighScore(score) => self.high_score = score,
            RenderCommand::ShowDifficulty(difficulty) => self.difficulty = difficulty,
            RenderCommand::ShowWrap(wrap) => self.wrap_enabled = wrap,
        }
    }

    pub fn apply_all<'a>(&mut self, commands: impl IntoIterator<Item = &'a RenderCommand>) {
        for command in commands {
            self.apply(command);
        }
    }

    /// Number of cells currently drawn with `tile`.
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }
}
