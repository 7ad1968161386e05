mod bot_controller;
mod game_state;
mod input;
mod render;
mod session;
mod snake;
mod types;

pub use bot_controller::BotController;
pub use game_state::{GameEngine, ResetInfo, SnakeGameState, TickResult};
pub use input::{GameKey, KeyAction, SessionCommand};
pub use render::{DrawCommand, Frame, SCORE_COLOR, TextColor, build_frame, score_text};
pub use session::{FrameSink, GameEnd, GameRecord, SessionSummary, SnakeSession, SnakeSessionSettings};
pub use snake::{DEFAULT_SNAKE_LENGTH, Snake};
pub use types::{Cell, Collision, ColorTheme, Direction, GridSize, Rgb};
