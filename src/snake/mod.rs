//! The snake itself: body tracking, movement and food.
//!
//! A run advances one cell every `speed` frames. Each step the head moves,
//! the oldest body segment is released, collisions are checked against the
//! remaining body, and eating food grows the snake by one segment.

pub mod body;
pub mod food;
pub mod logic;
pub mod types;

pub use body::SnakeBody;
pub use food::{place_food, respawn_food};
pub use logic::*;
pub use types::*;
