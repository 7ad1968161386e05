use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::games::snake::{DEFAULT_SNAKE_LENGTH, GridSize, SnakeSessionSettings};
use crate::logger::LogTarget;
use super::Validate;

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Default)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    pub file: Option<String>,
    pub use_prefix: bool,
}

impl LogConfig {
    pub fn target(&self) -> LogTarget {
        match self.file {
            Some(ref file) => LogTarget::File(PathBuf::from(file)),
            None => LogTarget::Stderr,
        }
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref file) = self.file
            && file.trim().is_empty()
        {
            return Err("log file must not be empty when set".to_string());
        }
        Ok(())
    }
}

/// Board geometry is given in pixels, like a drawing canvas, and
/// divided by the cell size to get the grid.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub canvas_width_px: u32,
    pub canvas_height_px: u32,
    pub cell_size_px: u32,
    pub tick_interval_ms: u32,
    pub initial_length: u32,
    pub history_capacity: u32,
    pub autopilot: bool,
    pub log: LogConfig,
}

impl GameConfig {
    pub fn grid(&self) -> GridSize {
        GridSize::from_canvas(self.canvas_width_px, self.canvas_height_px, self.cell_size_px)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms as u64)
    }

    pub fn session_settings(&self, seed: Option<u64>) -> SnakeSessionSettings {
        SnakeSessionSettings {
            grid: self.grid(),
            cell_size: self.cell_size_px,
            initial_length: self.initial_length as usize,
            tick_interval: self.tick_interval(),
            autopilot: self.autopilot,
            history_capacity: self.history_capacity as usize,
            seed,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if !(4..=100).contains(&self.cell_size_px) {
            return Err("cell_size_px must be between 4 and 100".to_string());
        }
        let grid = self.grid();
        if grid.width < 5 || grid.height < 2 {
            return Err("canvas must fit at least 5x2 cells".to_string());
        }
        if grid.width > 200 || grid.height > 200 {
            return Err("canvas must not exceed 200x200 cells".to_string());
        }
        if !(20..=2000).contains(&self.tick_interval_ms) {
            return Err("tick_interval_ms must be between 20 and 2000".to_string());
        }
        if self.initial_length < 1 {
            return Err("initial_length must be at least 1".to_string());
        }
        if self.initial_length as i32 > grid.width {
            return Err("initial_length must fit in one row of the grid".to_string());
        }
        if self.history_capacity < 1 {
            return Err("history_capacity must be at least 1".to_string());
        }
        self.log.validate()?;
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width_px: 600,
            canvas_height_px: 580,
            cell_size_px: 20,
            tick_interval_ms: 80,
            initial_length: DEFAULT_SNAKE_LENGTH as u32,
            history_capacity: 16,
            autopilot: false,
            log: LogConfig::default(),
        }
    }
}
