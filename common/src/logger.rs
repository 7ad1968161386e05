use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
#[cfg(not(test))]
use std::sync::Once;

use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();
#[cfg(not(test))]
static MISSING_LOGGER_WARNING: Once = Once::new();

/// Where log lines go. The terminal client owns stdout for drawing,
/// so stdout is not an option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

pub struct Logger {
    prefix: Option<String>,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl Logger {
    fn new(prefix: Option<String>, sink: Box<dyn Write + Send>) -> Self {
        Self {
            prefix,
            sink: Mutex::new(sink),
        }
    }

    fn format_line(&self, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message),
            None => format!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        let formatted = self.format_line(file, line, message);
        // A poisoned sink means another thread panicked mid-write; keep logging anyway.
        let mut sink = match self.sink.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let _ = writeln!(sink, "{}", formatted);
        let _ = sink.flush();
    }
}

fn open_sink(target: &LogTarget) -> Result<Box<dyn Write + Send>, String> {
    match target {
        LogTarget::Stderr => Ok(Box::new(std::io::stderr())),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .map_err(|e| format!("Failed to create log directory {}: {}", parent.display(), e))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| format!("Failed to open log file {}: {}", path.display(), e))?;
            Ok(Box::new(file))
        }
    }
}

/// Installs the process-wide logger. Later calls keep the first logger.
pub fn init_logger(prefix: Option<String>, target: LogTarget) -> Result<(), String> {
    if LOGGER.get().is_some() {
        return Ok(());
    }
    let sink = open_sink(&target)?;
    let _ = LOGGER.set(Logger::new(prefix, sink));
    Ok(())
}

pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    } else {
        #[cfg(not(test))]
        MISSING_LOGGER_WARNING.call_once(|| {
            eprintln!("Logger not initialized! Call init_logger() first.");
        });
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_strips_directories() {
        let logger = Logger::new(None, Box::new(std::io::sink()));
        let line = logger.format_line("src/games/snake/game_state.rs", 12, "hello");
        assert!(line.ends_with("[game_state.rs:12] hello"));
    }

    #[test]
    fn test_format_line_with_prefix() {
        let logger = Logger::new(Some("Client".to_string()), Box::new(std::io::sink()));
        let line = logger.format_line("main.rs", 3, "started");
        assert!(line.contains("[Client][main.rs:3] started"));
    }

    #[test]
    fn test_file_target_appends() {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("snake_logger_test_{}", random_number));
        path.push("snake.log");

        let sink = open_sink(&LogTarget::File(path.clone())).unwrap();
        let logger = Logger::new(None, sink);
        logger.log("a.rs", 1, "first");
        logger.log("a.rs", 2, "second");

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.contains("first"));
        assert!(content.contains("second"));
    }
}
