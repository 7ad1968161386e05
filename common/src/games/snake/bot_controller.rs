use super::game_state::SnakeGameState;
use super::types::{Cell, Direction};

/// Greedy autopilot: heads for the food along any safe step, otherwise
/// keeps going and accepts the crash.
pub struct BotController;

impl BotController {
    pub fn calculate_move(state: &SnakeGameState) -> Option<Direction> {
        let head = state.snake().head();
        let food = state.food();

        let safe_directions: Vec<Direction> = Self::get_valid_directions(state.direction())
            .into_iter()
            .filter(|&dir| Self::is_safe_position(head.offset(dir), state))
            .collect();

        safe_directions
            .into_iter()
            .min_by_key(|&dir| Self::manhattan_distance(head.offset(dir), food))
            .or(Some(state.direction()))
    }

    fn get_valid_directions(current: Direction) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|d| !d.is_opposite(&current))
            .collect()
    }

    fn manhattan_distance(a: Cell, b: Cell) -> i32 {
        (a.x - b.x).abs() + (a.y - b.y).abs()
    }

    // Mirrors the engine: any body cell, tail included, is fatal.
    fn is_safe_position(pos: Cell, state: &SnakeGameState) -> bool {
        state.grid().contains(pos) && !state.snake().occupies(pos)
    }
}
