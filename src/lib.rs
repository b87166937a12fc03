//! Tilesnake - single-player snake on a 20x18 tile display.
//!
//! The library holds the frame-synchronous game engine, score persistence,
//! and the tile display model. The terminal frontend lives in the binary.

pub mod build_info;
pub mod core;
pub mod display;
pub mod input;
pub mod save_manager;
pub mod scores;
pub mod snake;
pub mod utils;

pub use crate::core::{frame_tick, FrameClock, GameSession, GameState, RenderCommand, TickResult};
pub use display::TileDisplay;
pub use input::{Buttons, InputSampler};
pub use save_manager::SaveManager;
pub use scores::HighScores;
pub use snake::{Difficulty, Direction, GameConfig, SnakeGame};
