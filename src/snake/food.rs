//! Food placement.

use super::types::{Cell, Position, SnakeGame};
use crate::core::constants::{GRID_COLS, GRID_ROWS};
use crate::core::tick::{RenderCommand, Sprite};
use rand::seq::SliceRandom;
use rand::Rng;

/// Pick a food position strictly inside the border ring of cells.
///
/// Occupancy is ignored unless `food_avoids_snake` is set, so food can land
/// on the body. With the flag set the pick is uniform over free interior
/// cells, falling back to any interior cell when the body covers them all.
pub fn place_food<R: Rng>(game: &SnakeGame, rng: &mut R) -> Position {
    if game.config.food_avoids_snake {
        let free: Vec<Cell> = interior_cells()
            .filter(|cell| !game.body.is_occupied(*cell))
            .collect();
        if let Some(cell) = free.choose(rng) {
            return cell.to_position();
        }
    }

    let col = rng.gen_range(1..GRID_COLS - 1);
    let row = rng.gen_range(1..GRID_ROWS - 1);
    Cell::new(col, row)
        .map(Cell::to_position)
        .unwrap_or_default()
}

/// Re-roll the food and move its sprite.
pub fn respawn_food<R: Rng>(game: &mut SnakeGame, rng: &mut R, commands: &mut Vec<RenderCommand>) {
    let position = place_food(game, rng);
    game.food.position = position;
    commands.push(RenderCommand::MoveSprite {
        sprite: Sprite::Food,
        x: position.x,
        y: position.y,
    });
}

fn interior_cells() -> impl Iterator<Item = Cell> {
    (1..GRID_ROWS - 1).flat_map(|row| (1..GRID_COLS - 1).filter_map(move |col| Cell::new(col, row)))
}
