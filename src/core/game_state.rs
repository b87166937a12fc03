//! Session state: which screen is active and everything a run needs.

use crate::core::constants::{GRID_COLS, GRID_ROWS};
use crate::core::tick::{Banner, RenderCommand, Screen, Sprite, Tile};
use crate::input::InputSampler;
use crate::scores::HighScores;
use crate::snake::types::{GameConfig, SnakeGame};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    Title,
    Playing,
    Paused,
    GameOver,
}

/// Everything the frame step owns. One per running program.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub state: GameState,
    /// Current title-screen selection; copied into each new run.
    pub config: GameConfig,
    pub input: InputSampler,
    /// The active or just-finished run. `None` on the title screen.
    pub game: Option<SnakeGame>,
    pub high_scores: HighScores,
}

impl GameSession {
    pub fn new(config: GameConfig, high_scores: HighScores) -> Self {
        Self {
            state: GameState::Title,
            config,
            input: InputSampler::new(),
            game: None,
            high_scores,
        }
    }

    /// Stored best for the selected difficulty and wrap mode, or for the
    /// run in progress once one has started.
    pub fn current_high_score(&self) -> u8 {
        let config = self.game.as_ref().map_or(self.config, |game| game.config);
        self.high_scores.get(config.difficulty, config.wrap_enabled)
    }

    /// Commands that rebuild the whole display from the current state.
    pub fn redraw(&self) -> Vec<RenderCommand> {
        let game = match (self.state, self.game.as_ref()) {
            (GameState::Title, _) | (_, None) => return self.title_commands(),
            (_, Some(game)) => game,
        };

        let mut commands = vec![
            RenderCommand::ShowScreen(Screen::Playfield),
            RenderCommand::FillRect {
                col: 0,
                row: 0,
                width: GRID_COLS,
                height: GRID_ROWS,
                tile: Tile::Empty,
            },
        ];
        commands.extend(game.body.occupied_cells().map(|cell| RenderCommand::SetTile {
            cell,
            tile: Tile::Snake,
        }));
        commands.push(RenderCommand::ShowScore(game.score));
        commands.push(RenderCommand::SetSpriteTile {
            sprite: Sprite::Food,
            tile: Tile::Food,
        });
        commands.push(RenderCommand::MoveSprite {
            sprite: Sprite::Food,
            x: game.food.position.x,
            y: game.food.position.y,
        });

        match self.state {
            GameState::Paused => commands.push(RenderCommand::ShowBanner(Banner::Paused)),
            GameState::GameOver => {
                commands.push(RenderCommand::ShowBanner(Banner::GameOver));
                commands.push(RenderCommand::ShowHighScore(self.current_high_score()));
            }
            _ => commands.push(RenderCommand::HideBanner),
        }
        commands
    }

    fn title_commands(&self) -> Vec<RenderCommand> {
        vec![
            RenderCommand::ShowScreen(Screen::Title),
            RenderCommand::HideBanner,
            RenderCommand::ShowDifficulty(self.config.difficulty),
            RenderCommand::ShowWrap(self.config.wrap_enabled),
            RenderCommand::ShowHighScore(self.current_high_score()),
        ]
    }
}
