//! Snake game data structures.
//!
//! Positions are kept in pixel units aligned to the 8px tile grid, the way
//! the display addresses sprites; [`Cell`] is the flat `row * 20 + col`
//! index used by the body tracker.

use super::body::SnakeBody;
use crate::core::constants::{
    GRID_COLS, GRID_ROWS, SCREEN_HEIGHT_PX, SCREEN_WIDTH_PX, START_LENGTH, START_X_PX,
    START_Y_PX, TILE_PX,
};
use serde::{Deserialize, Serialize};

/// Speed settings, slowest first. The ordinal is the difficulty index 0-4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    VerySlow,
    Slow,
    #[default]
    Normal,
    Fast,
    VeryFast,
}

impl Difficulty {
    pub const ALL: [Difficulty; 5] = [
        Difficulty::VerySlow,
        Difficulty::Slow,
        Difficulty::Normal,
        Difficulty::Fast,
        Difficulty::VeryFast,
    ];

    /// Difficulty for an ordinal, clamped to the valid range.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(Self::ALL.len() - 1)]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::VerySlow => "Very Slow",
            Self::Slow => "Slow",
            Self::Normal => "Normal",
            Self::Fast => "Fast",
            Self::VeryFast => "Very Fast",
        }
    }

    /// Frames between successive one-cell moves (lower = faster).
    pub fn frames_per_move(&self) -> u8 {
        match self {
            Self::VerySlow => 10,
            Self::Slow => 8,
            Self::Normal => 6,
            Self::Fast => 4,
            Self::VeryFast => 3,
        }
    }

    /// Next faster setting; stays put at the top.
    pub fn harder(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Next slower setting; stays put at the bottom.
    pub fn easier(self) -> Self {
        Self::from_index(self.index().saturating_sub(1))
    }
}

/// Cardinal heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    /// (dx, dy) in cells.
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    pub fn is_perpendicular_to(&self, other: Direction) -> bool {
        self.is_horizontal() != other.is_horizontal()
    }
}

/// Flat index of a grid cell, `row * GRID_COLS + col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell(u16);

impl Cell {
    /// Returns `None` outside the 20x18 grid.
    pub fn new(col: u8, row: u8) -> Option<Self> {
        (col < GRID_COLS && row < GRID_ROWS)
            .then(|| Cell(row as u16 * GRID_COLS as u16 + col as u16))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn col(self) -> u8 {
        (self.0 % GRID_COLS as u16) as u8
    }

    pub fn row(self) -> u8 {
        (self.0 / GRID_COLS as u16) as u8
    }

    /// Top-left pixel of this cell.
    pub fn to_position(self) -> Position {
        Position {
            x: self.col() as i16 * TILE_PX,
            y: self.row() as i16 * TILE_PX,
        }
    }
}

/// Pixel coordinates, aligned to the tile grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    pub fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    pub fn is_on_screen(&self) -> bool {
        (0..SCREEN_WIDTH_PX).contains(&self.x) && (0..SCREEN_HEIGHT_PX).contains(&self.y)
    }

    /// Cell under this position, or `None` when off screen.
    pub fn cell(&self) -> Option<Cell> {
        if !self.is_on_screen() {
            return None;
        }
        Cell::new((self.x / TILE_PX) as u8, (self.y / TILE_PX) as u8)
    }

    /// One tile further along `direction`, without any boundary handling.
    pub fn stepped(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx * TILE_PX,
            y: self.y + dy * TILE_PX,
        }
    }

    /// Re-enter from the opposite edge when past one.
    pub fn wrapped(&self) -> Self {
        Self {
            x: self.x.rem_euclid(SCREEN_WIDTH_PX),
            y: self.y.rem_euclid(SCREEN_HEIGHT_PX),
        }
    }
}

/// Head position and heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerState {
    pub position: Position,
    pub direction: Direction,
    /// Set once a turn has been accepted; cleared when the next move executes.
    pub move_lock: bool,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            position: Position::new(START_X_PX, START_Y_PX),
            direction: Direction::Left,
            move_lock: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FoodState {
    pub position: Position,
}

/// Options chosen on the title screen (plus the two behavior switches).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub difficulty: Difficulty,
    pub wrap_enabled: bool,
    /// Running into the body ends the run.
    pub self_collision: bool,
    /// Food is never placed on a body cell.
    pub food_avoids_snake: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            wrap_enabled: true,
            self_collision: true,
            food_avoids_snake: false,
        }
    }
}

impl GameConfig {
    pub fn speed(&self) -> u8 {
        self.difficulty.frames_per_move()
    }
}

/// State of one run, from leaving the title screen until game over.
#[derive(Debug, Clone)]
pub struct SnakeGame {
    pub config: GameConfig,
    pub body: SnakeBody,
    pub player: PlayerState,
    pub food: FoodState,
    /// Segments eaten this run.
    pub score: u8,
    /// Frames per move, cached from the difficulty.
    pub speed: u8,
    /// Frame number on which the run began; moves are phase-locked to it.
    pub start_frame: u64,
    /// Movement steps taken.
    pub moves: u64,
}

impl SnakeGame {
    /// Fresh run with the head recorded as the first body segment.
    ///
    /// Food is left at the origin; callers place it with
    /// [`respawn_food`](super::food::respawn_food).
    pub fn new(config: GameConfig, start_frame: u64) -> Self {
        let player = PlayerState::default();
        let mut body = SnakeBody::new();
        if let Some(cell) = player.position.cell() {
            body.push_head(cell, START_LENGTH);
        }

        Self {
            config,
            body,
            player,
            food: FoodState::default(),
            score: 0,
            speed: config.speed(),
            start_frame,
            moves: 0,
        }
    }

    /// Target body length, `score + 3`.
    pub fn max_length(&self) -> usize {
        self.score as usize + START_LENGTH
    }

    pub fn head_cell(&self) -> Option<Cell> {
        self.player.position.cell()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_table() {
        let speeds: Vec<u8> = Difficulty::ALL.iter().map(|d| d.frames_per_move()).collect();
        assert_eq!(speeds, vec![10, 8, 6, 4, 3]);
        // Strictly faster as the ordinal rises
        assert!(speeds.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_difficulty_clamps() {
        assert_eq!(Difficulty::VeryFast.harder(), Difficulty::VeryFast);
        assert_eq!(Difficulty::VerySlow.easier(), Difficulty::VerySlow);
        assert_eq!(Difficulty::Normal.harder(), Difficulty::Fast);
        assert_eq!(Difficulty::Normal.easier(), Difficulty::Slow);
        assert_eq!(Difficulty::from_index(99), Difficulty::VeryFast);
    }

    #[test]
    fn test_difficulty_index_roundtrip() {
        for (i, d) in Difficulty::ALL.iter().enumerate() {
            assert_eq!(d.index(), i);
            assert_eq!(Difficulty::from_index(i), *d);
        }
    }

    #[test]
    fn test_perpendicular() {
        assert!(Direction::Right.is_perpendicular_to(Direction::Up));
        assert!(Direction::Up.is_perpendicular_to(Direction::Left));
        assert!(!Direction::Right.is_perpendicular_to(Direction::Left));
        assert!(!Direction::Down.is_perpendicular_to(Direction::Down));
    }

    #[test]
    fn test_cell_index_layout() {
        let cell = Cell::new(3, 2).unwrap();
        assert_eq!(cell.index(), 2 * 20 + 3);
        assert_eq!((cell.col(), cell.row()), (3, 2));
        assert_eq!(cell.to_position(), Position::new(24, 16));
        assert!(Cell::new(20, 0).is_none());
        assert!(Cell::new(0, 18).is_none());
    }

    #[test]
    fn test_position_cell_conversion() {
        assert_eq!(Position::new(80, 64).cell(), Cell::new(10, 8));
        assert_eq!(Position::new(-8, 0).cell(), None);
        assert_eq!(Position::new(160, 0).cell(), None);
        assert_eq!(Position::new(152, 136).cell(), Cell::new(19, 17));
    }

    #[test]
    fn test_wrapped_is_modulo_screen() {
        assert_eq!(Position::new(160, 64).wrapped(), Position::new(0, 64));
        assert_eq!(Position::new(-8, 64).wrapped(), Position::new(152, 64));
        assert_eq!(Position::new(40, 144).wrapped(), Position::new(40, 0));
        assert_eq!(Position::new(40, -8).wrapped(), Position::new(40, 136));
        assert_eq!(Position::new(40, 24).wrapped(), Position::new(40, 24));
    }

    #[test]
    fn test_new_game_defaults() {
        let config = GameConfig::default();
        let game = SnakeGame::new(config, 7);
        assert_eq!(game.score, 0);
        assert_eq!(game.speed, 6);
        assert_eq!(game.start_frame, 7);
        assert_eq!(game.player.position, Position::new(80, 64));
        assert_eq!(game.player.direction, Direction::Left);
        assert!(!game.player.move_lock);
        assert_eq!(game.max_length(), 3);
        // Only the head is on the board at the start
        assert_eq!(game.body.occupied_count(), 1);
        assert!(game.body.is_occupied(Cell::new(10, 8).unwrap()));
    }

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.difficulty, Difficulty::Normal);
        assert!(config.wrap_enabled);
        assert!(config.self_collision);
        assert!(!config.food_avoids_snake);
    }
}
