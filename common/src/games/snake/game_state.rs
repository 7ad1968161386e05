use crate::games::SessionRng;
use crate::log;
use super::snake::Snake;
use super::types::{Cell, Collision, ColorTheme, Direction, GridSize};

/// One running game. Handed to [`GameEngine::update`] by value every tick
/// and handed back only if the game survived the tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnakeGameState {
    snake: Snake,
    food: Cell,
    direction: Direction,
    score: u32,
    theme: ColorTheme,
    grid: GridSize,
    ticks: u64,
}

impl SnakeGameState {
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn theme(&self) -> ColorTheme {
        self.theme
    }

    pub fn grid(&self) -> GridSize {
        self.grid
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[cfg(test)]
    pub(crate) fn from_parts(snake: Snake, food: Cell, direction: Direction, grid: GridSize) -> Self {
        Self {
            snake,
            food,
            direction,
            score: 0,
            theme: ColorTheme::with_fill(super::types::Rgb::BLACK),
            grid,
            ticks: 0,
        }
    }
}

/// What a game looked like when a collision ended it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResetInfo {
    pub reason: Collision,
    pub final_score: u32,
    pub final_length: usize,
    pub ticks: u64,
}

#[derive(Debug)]
pub enum TickResult {
    Running(SnakeGameState),
    Reset(ResetInfo),
}

impl TickResult {
    pub fn is_reset(&self) -> bool {
        matches!(self, TickResult::Reset(_))
    }

    pub fn into_state(self) -> Option<SnakeGameState> {
        match self {
            TickResult::Running(state) => Some(state),
            TickResult::Reset(_) => None,
        }
    }
}

pub struct GameEngine {
    grid: GridSize,
    initial_length: usize,
    rng: SessionRng,
}

impl GameEngine {
    /// The snake starts along the top row, so its length is capped at the
    /// grid width.
    pub fn new(grid: GridSize, initial_length: usize, rng: SessionRng) -> Self {
        let max_length = grid.width.max(1) as usize;
        Self {
            grid,
            initial_length: initial_length.clamp(1, max_length),
            rng,
        }
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Builds a fresh game: snake along the top row heading right, new
    /// colors, new food, score zero.
    pub fn start(&mut self) -> SnakeGameState {
        let snake = Snake::new(self.initial_length);
        let theme = ColorTheme::with_fill(self.rng.random_rgb());
        let food = self.rng.random_cell(self.grid);

        log!(
            "New game on {}x{} grid, food at {}, color {}",
            self.grid.width,
            self.grid.height,
            food,
            theme.fill.css()
        );

        SnakeGameState {
            snake,
            food,
            direction: Direction::Right,
            score: 0,
            theme,
            grid: self.grid,
            ticks: 0,
        }
    }

    /// Commits `requested` unless it reverses the direction currently in
    /// effect. Returns whether the direction was taken.
    pub fn set_direction(&self, state: &mut SnakeGameState, requested: Direction) -> bool {
        if requested.is_opposite(&state.direction) {
            return false;
        }
        state.direction = requested;
        true
    }

    pub fn update(&mut self, mut state: SnakeGameState) -> TickResult {
        let next_head = state.snake.head().offset(state.direction);

        if state.grid.is_wall(next_head) {
            return Self::reset(state, Collision::Wall);
        }

        // Checked against the body before it moves, so the cell the tail is
        // about to leave still counts as occupied.
        if state.snake.occupies(next_head) {
            return Self::reset(state, Collision::SelfBody);
        }

        if next_head == state.food {
            state.snake.grow_to(next_head);
            state.score += 1;
            self.respawn_food(&mut state);
            log!(
                "Ate food at {}. Score: {}, next food at {}",
                next_head,
                state.score,
                state.food
            );
        } else {
            state.snake.slide_to(next_head);
        }

        state.ticks += 1;
        TickResult::Running(state)
    }

    /// The new food may land on the snake; nothing re-rolls it.
    pub fn respawn_food(&mut self, state: &mut SnakeGameState) {
        state.food = self.rng.random_cell(state.grid);
    }

    fn reset(state: SnakeGameState, reason: Collision) -> TickResult {
        let info = ResetInfo {
            reason,
            final_score: state.score,
            final_length: state.snake.len(),
            ticks: state.ticks,
        };
        log!(
            "Game over: {} at tick {} with score {}",
            reason,
            info.ticks,
            info.final_score
        );
        TickResult::Reset(info)
    }
}
