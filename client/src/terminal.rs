use std::io::{self, Stdout, Write};
use std::sync::{Arc, Mutex};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{
        self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};

use snake_common::games::snake::{DrawCommand, Frame, FrameSink, ResetInfo, Rgb};
use snake_common::log;

use crate::colors::{blend_over, to_terminal_color};

/// Columns per grid cell; terminal glyphs are roughly twice as tall as wide.
const CELL_COLUMNS: u16 = 2;
const CELL_GLYPH: &str = "[]";

/// Raw mode and the alternate screen for as long as it lives.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        queue!(stdout, EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        stdout.flush()?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = queue!(stdout, ResetColor, Show, LeaveAlternateScreen);
        let _ = stdout.flush();
        let _ = disable_raw_mode();
    }
}

/// Maps pixel-space draw commands onto terminal cells.
#[derive(Clone, Default)]
pub struct TerminalSurface {
    status: Arc<Mutex<Option<String>>>,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn draw(&self, frame: &Frame) -> io::Result<()> {
        let mut stdout = io::stdout();
        let cell = frame.cell_size.max(1);
        let columns = (frame.width_px / cell) as u16;
        let rows = (frame.height_px / cell) as u16;
        let mut background = Rgb::LIGHT_GREY;

        for command in &frame.commands {
            match command {
                DrawCommand::Clear { color } => {
                    background = *color;
                    Self::fill_board(&mut stdout, columns, rows, *color)?;
                }
                DrawCommand::Cell { x, y, size, fill, stroke } => {
                    let size = (*size).max(1);
                    queue!(
                        stdout,
                        MoveTo((x / size) as u16 * CELL_COLUMNS, (y / size) as u16),
                        SetBackgroundColor(to_terminal_color(*fill)),
                        SetForegroundColor(to_terminal_color(*stroke)),
                        Print(CELL_GLYPH)
                    )?;
                }
                DrawCommand::Text { text, x, y, color, .. } => {
                    // The score sits on the board's bottom edge, which is the
                    // first terminal row under the board.
                    queue!(
                        stdout,
                        MoveTo((x / cell) as u16 * CELL_COLUMNS, (y / cell) as u16),
                        SetBackgroundColor(to_terminal_color(background)),
                        SetForegroundColor(to_terminal_color(blend_over(*color, background))),
                        Print(format!("{:<width$}", text, width = (columns * CELL_COLUMNS) as usize))
                    )?;
                }
            }
        }

        queue!(stdout, ResetColor, MoveTo(0, rows + 1))?;
        let status = self.status.lock().ok().and_then(|s| s.clone()).unwrap_or_default();
        queue!(
            stdout,
            Clear(ClearType::CurrentLine),
            Print(status),
            MoveTo(0, rows + 2),
            Clear(ClearType::CurrentLine),
            Print("arrows: steer  space: restart  q: quit")
        )?;
        stdout.flush()
    }

    fn fill_board(stdout: &mut Stdout, columns: u16, rows: u16, color: Rgb) -> io::Result<()> {
        let blank = " ".repeat((columns * CELL_COLUMNS) as usize);
        queue!(stdout, SetBackgroundColor(to_terminal_color(color)))?;
        for row in 0..rows {
            queue!(stdout, MoveTo(0, row), Print(&blank))?;
        }
        Ok(())
    }

    pub fn warn_if_too_small(width_px: u32, height_px: u32, cell_size: u32) {
        let needed_columns = (width_px / cell_size.max(1)) as u16 * CELL_COLUMNS;
        let needed_rows = (height_px / cell_size.max(1)) as u16 + 3;
        if let Ok((columns, rows)) = terminal::size()
            && (columns < needed_columns || rows < needed_rows)
        {
            log!(
                "Terminal is {}x{}, the board needs {}x{}; drawing will be clipped",
                columns,
                rows,
                needed_columns,
                needed_rows
            );
        }
    }
}

impl FrameSink for TerminalSurface {
    async fn present(&self, frame: Frame) {
        if let Err(e) = self.draw(&frame) {
            log!("Failed to draw frame: {}", e);
        }
    }

    async fn game_reset(&self, info: ResetInfo) {
        let message = format!(
            "Last game: {} after {} ticks, score {}",
            info.reason, info.ticks, info.final_score
        );
        if let Ok(mut status) = self.status.lock() {
            *status = Some(message);
        }
    }
}
