//! Core engine: constants, frame clock, session state and the per-frame step.

pub mod constants;
pub mod frame_clock;
pub mod game_state;
pub mod tick;

pub use constants::*;
pub use frame_clock::FrameClock;
pub use game_state::{GameSession, GameState};
pub use tick::{frame_tick, Banner, RenderCommand, Screen, Sprite, Tile, TickResult};
