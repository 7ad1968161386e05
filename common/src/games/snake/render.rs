use super::game_state::SnakeGameState;
use super::types::Rgb;

pub const SCORE_FONT_PX: u32 = 20;
pub const SCORE_MARGIN_PX: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextColor {
    pub rgb: Rgb,
    pub alpha: f32,
}

/// Faint black used for the score overlay.
pub const SCORE_COLOR: TextColor = TextColor {
    rgb: Rgb::BLACK,
    alpha: 0.2,
};

/// Pixel-space drawing instruction. A surface draws them in order.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear {
        color: Rgb,
    },
    Cell {
        x: u32,
        y: u32,
        size: u32,
        fill: Rgb,
        stroke: Rgb,
    },
    Text {
        text: String,
        x: u32,
        y: u32,
        font_px: u32,
        color: TextColor,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub width_px: u32,
    pub height_px: u32,
    pub cell_size: u32,
    pub commands: Vec<DrawCommand>,
}

pub fn score_text(score: u32) -> String {
    format!("Score: {}", score)
}

/// Background, snake (head first), food, then the score line anchored to
/// the bottom-left corner.
pub fn build_frame(state: &SnakeGameState, cell_size: u32) -> Frame {
    let grid = state.grid();
    let width_px = grid.width.max(0) as u32 * cell_size;
    let height_px = grid.height.max(0) as u32 * cell_size;
    let theme = state.theme();

    let mut commands = Vec::with_capacity(state.snake().len() + 3);
    commands.push(DrawCommand::Clear {
        color: Rgb::LIGHT_GREY,
    });

    let cells = state.snake().cells().copied().chain(std::iter::once(state.food()));
    for cell in cells {
        // The food can only leave the grid if the grid is shrunk under it.
        if !grid.contains(cell) {
            continue;
        }
        commands.push(DrawCommand::Cell {
            x: cell.x as u32 * cell_size,
            y: cell.y as u32 * cell_size,
            size: cell_size,
            fill: theme.fill,
            stroke: theme.stroke,
        });
    }

    commands.push(DrawCommand::Text {
        text: score_text(state.score()),
        x: SCORE_MARGIN_PX,
        y: height_px,
        font_px: SCORE_FONT_PX,
        color: SCORE_COLOR,
    });

    Frame {
        width_px,
        height_px,
        cell_size,
        commands,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::snake::snake::Snake;
    use crate::games::snake::types::{Cell, Direction, GridSize};

    fn create_state() -> SnakeGameState {
        SnakeGameState::from_parts(
            Snake::new(4),
            Cell::new(7, 3),
            Direction::Right,
            GridSize::new(30, 29),
        )
    }

    #[test]
    fn test_frame_dimensions() {
        let frame = build_frame(&create_state(), 20);
        assert_eq!(frame.width_px, 600);
        assert_eq!(frame.height_px, 580);
    }

    #[test]
    fn test_frame_command_order() {
        let frame = build_frame(&create_state(), 20);
        assert_eq!(frame.commands.len(), 1 + 4 + 1 + 1);
        assert!(matches!(frame.commands[0], DrawCommand::Clear { color } if color == Rgb::LIGHT_GREY));

        match &frame.commands[1] {
            DrawCommand::Cell { x, y, size, stroke, .. } => {
                assert_eq!((*x, *y, *size), (60, 0, 20));
                assert_eq!(*stroke, Rgb::WHITE);
            }
            other => panic!("expected head cell, got {:?}", other),
        }

        match &frame.commands[5] {
            DrawCommand::Cell { x, y, .. } => assert_eq!((*x, *y), (140, 60)),
            other => panic!("expected food cell, got {:?}", other),
        }
    }

    #[test]
    fn test_score_text_at_bottom_left() {
        let frame = build_frame(&create_state(), 20);
        match frame.commands.last() {
            Some(DrawCommand::Text { text, x, y, font_px, color }) => {
                assert_eq!(text, "Score: 0");
                assert_eq!((*x, *y), (10, 580));
                assert_eq!(*font_px, 20);
                assert_eq!(*color, SCORE_COLOR);
            }
            other => panic!("expected score text, got {:?}", other),
        }
    }
}
