//! The per-frame step function.
//!
//! [`frame_tick`] is called once per display refresh with the frame number
//! and the held-button mask. It samples input, runs the handler for the
//! current [`GameState`], and returns a [`TickResult`] listing the display
//! updates and whether the high-score table needs persisting. The engine
//! never touches the display or the disk itself.

use crate::core::constants::{GRID_COLS, GRID_ROWS};
use crate::core::game_state::{GameSession, GameState};
use crate::input::Buttons;
use crate::snake::food::respawn_food;
use crate::snake::logic::{process_input, tick_snake, Collision};
use crate::snake::types::{Cell, Difficulty, SnakeGame};
use rand::Rng;

/// Background tile kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tile {
    #[default]
    Empty,
    Snake,
    Food,
}

/// Full-screen tilemaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Title,
    Playfield,
}

/// Window overlays shown above the playfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    Paused,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Food,
}

/// A single instruction for the rendering collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCommand {
    /// Load a full-screen tilemap.
    ShowScreen(Screen),
    ShowBanner(Banner),
    HideBanner,
    SetTile {
        cell: Cell,
        tile: Tile,
    },
    FillRect {
        col: u8,
        row: u8,
        width: u8,
        height: u8,
        tile: Tile,
    },
    /// Place a sprite at pixel coordinates.
    MoveSprite {
        sprite: Sprite,
        x: i16,
        y: i16,
    },
    SetSpriteTile {
        sprite: Sprite,
        tile: Tile,
    },
    ShowScore(u8),
    ShowHighScore(u8),
    ShowDifficulty(Difficulty),
    ShowWrap(bool),
}

/// Result of processing a single frame.
#[derive(Debug, Clone, Default)]
pub struct TickResult {
    /// Display updates, in the order they must be applied.
    pub commands: Vec<RenderCommand>,

    /// True if the high-score table changed and should be written out.
    /// The caller is responsible for the actual IO.
    pub scores_changed: bool,
}

/// Processes a single frame.
///
/// # Arguments
/// - `session` — All mutable game state.
/// - `frame` — Monotonic frame number from the frame clock.
/// - `held` — Buttons held down this frame.
/// - `rng` — Random source for food placement. Pass `&mut rand::thread_rng()`
///   in production or a seeded `rand_chacha::ChaCha8Rng` in tests.
pub fn frame_tick<R: Rng>(
    session: &mut GameSession,
    frame: u64,
    held: Buttons,
    rng: &mut R,
) -> TickResult {
    let mut result = TickResult::default();
    session.input.sample(held);
    let pressed = session.input.pressed();

    match session.state {
        GameState::Title => tick_title(session, frame, pressed, rng, &mut result),
        GameState::Playing => tick_playing(session, frame, pressed, rng, &mut result),
        GameState::Paused => {
            if pressed.contains(Buttons::START) {
                session.state = GameState::Playing;
                result.commands.push(RenderCommand::HideBanner);
                tracing::debug!("resumed");
            }
        }
        GameState::GameOver => {
            if pressed.intersects(Buttons::CONFIRM) {
                finish_run(session, &mut result);
            }
        }
    }

    result
}

fn tick_title<R: Rng>(
    session: &mut GameSession,
    frame: u64,
    pressed: Buttons,
    rng: &mut R,
    result: &mut TickResult,
) {
    let before = session.config;

    if pressed.contains(Buttons::UP) {
        session.config.difficulty = session.config.difficulty.harder();
    }
    if pressed.contains(Buttons::DOWN) {
        session.config.difficulty = session.config.difficulty.easier();
    }
    if before.difficulty != session.config.difficulty {
        result
            .commands
            .push(RenderCommand::ShowDifficulty(session.config.difficulty));
    }

    if pressed.contains(Buttons::SELECT) {
        session.config.wrap_enabled = !session.config.wrap_enabled;
        result
            .commands
            .push(RenderCommand::ShowWrap(session.config.wrap_enabled));
    }

    if before != session.config {
        result
            .commands
            .push(RenderCommand::ShowHighScore(session.current_high_score()));
    }

    if pressed.intersects(Buttons::CONFIRM) {
        start_run(session, frame, rng, result);
    }
}

/// Title -> Playing: fresh body, head, score and food.
fn start_run<R: Rng>(session: &mut GameSession, frame: u64, rng: &mut R, result: &mut TickResult) {
    let mut game = SnakeGame::new(session.config, frame);

    let commands = &mut result.commands;
    commands.push(RenderCommand::ShowScreen(Screen::Playfield));
    commands.push(RenderCommand::HideBanner);
    commands.push(RenderCommand::FillRect {
        col: 0,
        row: 0,
        width: GRID_COLS,
        height: GRID_ROWS,
        tile: Tile::Empty,
    });
    if let Some(cell) = game.head_cell() {
        commands.push(RenderCommand::SetTile {
            cell,
            tile: Tile::Snake,
        });
    }
    commands.push(RenderCommand::ShowScore(0));
    commands.push(RenderCommand::SetSpriteTile {
        sprite: Sprite::Food,
        tile: Tile::Food,
    });
    respawn_food(&mut game, rng, commands);

    tracing::info!(
        difficulty = game.config.difficulty.name(),
        wrap = game.config.wrap_enabled,
        "run started"
    );
    session.game = Some(game);
    session.state = GameState::Playing;
}

fn tick_playing<R: Rng>(
    session: &mut GameSession,
    frame: u64,
    pressed: Buttons,
    rng: &mut R,
    result: &mut TickResult,
) {
    if pressed.contains(Buttons::START) {
        session.state = GameState::Paused;
        result.commands.push(RenderCommand::ShowBanner(Banner::Paused));
        tracing::debug!("paused");
        return;
    }

    let held = session.input.held();
    let Some(game) = session.game.as_mut() else {
        // Playing without a run cannot happen; recover to the title screen.
        session.state = GameState::Title;
        result.commands.extend(session.redraw());
        return;
    };

    process_input(game, held);
    if let Some(collision) = tick_snake(game, frame, rng, &mut result.commands) {
        let score = game.score;
        let length = game.body.occupied_count();
        session.state = GameState::GameOver;
        result.commands.push(RenderCommand::ShowBanner(Banner::GameOver));
        result
            .commands
            .push(RenderCommand::ShowHighScore(session.current_high_score()));
        tracing::info!(
            score,
            length,
            cause = match collision {
                Collision::Border => "border",
                Collision::SelfBite => "self",
            },
            "game over"
        );
    }
}

/// GameOver -> Title, recording the score if it beats the stored one.
fn finish_run(session: &mut GameSession, result: &mut TickResult) {
    if let Some(game) = session.game.take() {
        let config = game.config;
        if session
            .high_scores
            .set_if_greater(config.difficulty, config.wrap_enabled, game.score)
        {
            result.scores_changed = true;
            tracing::info!(
                score = game.score,
                difficulty = config.difficulty.name(),
                wrap = config.wrap_enabled,
                "new high score"
            );
        }
    }

    session.state = GameState::Title;
    result.commands.extend(session.redraw());
}
