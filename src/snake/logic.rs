//! Snake movement: turning, stepping, wrap/border handling and collisions.

use super::food::respawn_food;
use super::types::*;
use crate::core::tick::{RenderCommand, Tile};
use crate::input::Buttons;
use rand::Rng;

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Stepped off the screen with wrap disabled.
    Border,
    /// Stepped onto a body cell.
    SelfBite,
}

/// Accept at most one perpendicular turn per move from the held buttons.
///
/// While heading left/right only up/down are considered (up first), and
/// vice versa (left first). A reversal can never be requested directly.
/// Returns true if the heading changed.
pub fn process_input(game: &mut SnakeGame, held: Buttons) -> bool {
    if game.player.move_lock {
        return false;
    }

    // Up before Down, Left before Right
    const TURNS: [(Buttons, Direction); 4] = [
        (Buttons::UP, Direction::Up),
        (Buttons::DOWN, Direction::Down),
        (Buttons::LEFT, Direction::Left),
        (Buttons::RIGHT, Direction::Right),
    ];

    let heading = game.player.direction;
    for (button, direction) in TURNS {
        if direction.is_perpendicular_to(heading) && held.contains(button) {
            game.player.direction = direction;
            game.player.move_lock = true;
            return true;
        }
    }
    false
}

/// True on frames where the snake should advance one cell.
pub fn is_move_frame(game: &SnakeGame, frame: u64) -> bool {
    let speed = game.speed.max(1) as u64;
    frame > game.start_frame && (frame - game.start_frame) % speed == 0
}

/// Advance the snake if this is a move frame.
///
/// Returns `Some` when the move was fatal.
pub fn tick_snake<R: Rng>(
    game: &mut SnakeGame,
    frame: u64,
    rng: &mut R,
    commands: &mut Vec<RenderCommand>,
) -> Option<Collision> {
    if !is_move_frame(game, frame) {
        return None;
    }
    step_snake(game, rng, commands)
}

/// Single movement step.
pub fn step_snake<R: Rng>(
    game: &mut SnakeGame,
    rng: &mut R,
    commands: &mut Vec<RenderCommand>,
) -> Option<Collision> {
    game.moves += 1;

    let mut next = game.player.position.stepped(game.player.direction);
    game.player.move_lock = false;

    if !next.is_on_screen() {
        if !game.config.wrap_enabled {
            game.player.position = next;
            return Some(Collision::Border);
        }
        next = next.wrapped();
    }
    game.player.position = next;
    let cell = next.cell()?;

    // The tail leaves before the head arrives, so chasing it is allowed.
    // A fatal bite leaves the body as it was.
    if game.config.self_collision && game.body.occupied_after_eviction(cell) {
        return Some(Collision::SelfBite);
    }

    if let Some(vacated) = game.body.evict_tail() {
        commands.push(RenderCommand::SetTile {
            cell: vacated,
            tile: Tile::Empty,
        });
    }

    let window = game.max_length();
    game.body.push_head(cell, window);
    commands.push(RenderCommand::SetTile {
        cell,
        tile: Tile::Snake,
    });

    if next == game.food.position {
        game.score = game.score.saturating_add(1);
        commands.push(RenderCommand::ShowScore(game.score));
        respawn_food(game, rng, commands);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    fn game_with(config: GameConfig) -> SnakeGame {
        let mut game = SnakeGame::new(config, 0);
        // Food parked in a corner the tests never reach
        game.food.position = Position::new(8, 8);
        game
    }

    fn step(game: &mut SnakeGame) -> Option<Collision> {
        let mut commands = Vec::new();
        step_snake(game, &mut test_rng(), &mut commands)
    }

    #[test]
    fn test_turn_accepted_only_perpendicular() {
        let mut game = game_with(GameConfig::default());
        game.player.direction = Direction::Right;

        assert!(!process_input(&mut game, Buttons::LEFT));
        assert_eq!(game.player.direction, Direction::Right);
        assert!(!game.player.move_lock);

        assert!(process_input(&mut game, Buttons::UP));
        assert_eq!(game.player.direction, Direction::Up);
        assert!(game.player.move_lock);

        // Same axis held alongside: only the perpendicular one counts
        let mut game = game_with(GameConfig::default());
        game.player.direction = Direction::Up;
        assert!(!process_input(&mut game, Buttons::UP | Buttons::DOWN));
        assert!(process_input(&mut game, Buttons::DOWN | Buttons::RIGHT));
        assert_eq!(game.player.direction, Direction::Right);
    }

    #[test]
    fn test_move_lock_blocks_second_turn() {
        let mut game = game_with(GameConfig::default());
        assert_eq!(game.player.direction, Direction::Left);

        assert!(process_input(&mut game, Buttons::DOWN));
        // Now vertical; Right would be perpendicular but the lock holds
        assert!(!process_input(&mut game, Buttons::RIGHT));
        assert_eq!(game.player.direction, Direction::Down);

        step(&mut game);
        assert!(!game.player.move_lock);
        assert!(process_input(&mut game, Buttons::RIGHT));
        assert_eq!(game.player.direction, Direction::Right);
    }

    #[test]
    fn test_turn_priority_up_before_down() {
        let mut game = game_with(GameConfig::default());
        process_input(&mut game, Buttons::UP | Buttons::DOWN);
        assert_eq!(game.player.direction, Direction::Up);

        let mut game = game_with(GameConfig::default());
        game.player.direction = Direction::Down;
        process_input(&mut game, Buttons::LEFT | Buttons::RIGHT);
        assert_eq!(game.player.direction, Direction::Left);
    }

    #[test]
    fn test_move_frames_follow_speed() {
        let game = SnakeGame::new(GameConfig::default(), 100);
        let moves: Vec<u64> = (100..=124).filter(|f| is_move_frame(&game, *f)).collect();
        assert_eq!(moves, vec![106, 112, 118, 124]);
    }

    #[test]
    fn test_tick_only_moves_on_move_frames() {
        let mut game = game_with(GameConfig::default());
        let mut rng = test_rng();
        let mut commands = Vec::new();
        for frame in 1..6 {
            tick_snake(&mut game, frame, &mut rng, &mut commands);
        }
        assert_eq!(game.moves, 0);
        tick_snake(&mut game, 6, &mut rng, &mut commands);
        assert_eq!(game.moves, 1);
        assert_eq!(game.player.position, Position::new(72, 64));
    }

    #[test]
    fn test_previous_head_becomes_body() {
        let mut game = game_with(GameConfig::default());
        let start = game.head_cell().unwrap();
        assert_eq!(step(&mut game), None);
        assert!(game.body.is_occupied(start));
        assert!(game.body.is_occupied(game.head_cell().unwrap()));
        assert_eq!(game.body.occupied_count(), 2);
    }

    #[test]
    fn test_length_capped_at_score_plus_three() {
        let mut game = game_with(GameConfig::default());
        for i in 0..8 {
            step(&mut game);
            assert_eq!(game.body.occupied_count(), (i + 2).min(3));
        }
    }

    #[test]
    fn test_wrap_right_edge() {
        let mut game = game_with(GameConfig::default());
        game.player.position = Position::new(152, 64);
        game.player.direction = Direction::Right;
        assert_eq!(step(&mut game), None);
        assert_eq!(game.player.position, Position::new(0, 64));
    }

    #[test]
    fn test_wrap_left_top_bottom_edges() {
        let cases = [
            (Position::new(0, 40), Direction::Left, Position::new(152, 40)),
            (Position::new(40, 0), Direction::Up, Position::new(40, 136)),
            (Position::new(40, 136), Direction::Down, Position::new(40, 0)),
        ];
        for (from, direction, expected) in cases {
            let mut game = game_with(GameConfig::default());
            game.player.position = from;
            game.player.direction = direction;
            assert_eq!(step(&mut game), None, "{:?}", direction);
            assert_eq!(game.player.position, expected, "{:?}", direction);
        }
    }

    #[test]
    fn test_border_is_fatal_without_wrap() {
        let config = GameConfig {
            wrap_enabled: false,
            ..GameConfig::default()
        };
        for (from, direction) in [
            (Position::new(0, 40), Direction::Left),
            (Position::new(152, 40), Direction::Right),
            (Position::new(40, 0), Direction::Up),
            (Position::new(40, 136), Direction::Down),
        ] {
            let mut game = game_with(config);
            game.player.position = from;
            game.player.direction = direction;
            assert_eq!(step(&mut game), Some(Collision::Border), "{:?}", direction);
        }
    }

    #[test]
    fn test_self_collision() {
        let mut game = game_with(GameConfig::default());
        game.score = 2; // length 5
        // Head (10,8) moving left builds a straight body, then a U-turn bites it
        for _ in 0..4 {
            step(&mut game);
        }
        game.player.direction = Direction::Up;
        step(&mut game);
        game.player.direction = Direction::Right;
        step(&mut game);
        game.player.direction = Direction::Down;
        assert_eq!(step(&mut game), Some(Collision::SelfBite));
    }

    #[test]
    fn test_fatal_bite_keeps_tail_on_screen() {
        let mut game = game_with(GameConfig::default());
        game.score = 2;
        for _ in 0..4 {
            step(&mut game);
        }
        game.player.direction = Direction::Up;
        step(&mut game);
        game.player.direction = Direction::Right;
        step(&mut game);
        game.player.direction = Direction::Down;
        let tail = Cell::new(8, 8).unwrap();
        assert!(game.body.is_occupied(tail));
        assert_eq!(game.body.occupied_count(), 5);

        let mut commands = Vec::new();
        let result = step_snake(&mut game, &mut test_rng(), &mut commands);
        assert_eq!(result, Some(Collision::SelfBite));
        assert!(commands.is_empty());
        assert!(game.body.is_occupied(tail));
        assert_eq!(game.body.occupied_count(), 5);
    }

    #[test]
    fn test_self_collision_can_be_disabled() {
        let config = GameConfig {
            self_collision: false,
            ..GameConfig::default()
        };
        let mut game = game_with(config);
        game.score = 2;
        for _ in 0..4 {
            step(&mut game);
        }
        game.player.direction = Direction::Up;
        step(&mut game);
        game.player.direction = Direction::Right;
        step(&mut game);
        game.player.direction = Direction::Down;
        assert_eq!(step(&mut game), None);
    }

    #[test]
    fn test_tail_chasing_allowed() {
        // Length 4 circling a 2x2 block re-enters its own tail cell every step
        let mut game = game_with(GameConfig::default());
        game.score = 1;
        let turns = [Direction::Up, Direction::Right, Direction::Down, Direction::Left];
        step(&mut game); // (9,8) heading left
        for i in 0..12 {
            game.player.direction = turns[i % 4];
            assert_eq!(step(&mut game), None, "step {}", i);
        }
        assert_eq!(game.body.occupied_count(), 4);
    }

    #[test]
    fn test_eviction_emitted_before_head() {
        let mut game = game_with(GameConfig::default());
        step(&mut game);
        step(&mut game);
        let tail = Cell::new(10, 8).unwrap();
        let mut commands = Vec::new();
        step_snake(&mut game, &mut test_rng(), &mut commands);
        assert_eq!(
            commands,
            vec![
                RenderCommand::SetTile {
                    cell: tail,
                    tile: Tile::Empty
                },
                RenderCommand::SetTile {
                    cell: Cell::new(7, 8).unwrap(),
                    tile: Tile::Snake
                },
            ]
        );
    }

    #[test]
    fn test_eating_food_scores_and_rerolls() {
        let mut game = game_with(GameConfig::default());
        game.food.position = Position::new(72, 64);
        let mut rng = test_rng();
        let mut commands = Vec::new();

        assert_eq!(step_snake(&mut game, &mut rng, &mut commands), None);
        assert_eq!(game.score, 1);
        assert_eq!(game.max_length(), 4);
        assert!(commands.contains(&RenderCommand::ShowScore(1)));
        assert!(commands.iter().any(|c| matches!(c, RenderCommand::MoveSprite { .. })));
        let food_cell = game.food.position.cell().unwrap();
        assert!((1..=18).contains(&food_cell.col()));
        assert!((1..=16).contains(&food_cell.row()));
    }

    #[test]
    fn test_score_saturates() {
        let mut game = game_with(GameConfig::default());
        game.score = u8::MAX;
        game.food.position = Position::new(72, 64);
        step(&mut game);
        assert_eq!(game.score, u8::MAX);
    }
}
