use std::path::PathBuf;

use snake_common::config::{ConfigManager, GameConfig, Validate};
use snake_common::logger::LogTarget;

use crate::Args;

const CONFIG_FILE_NAME: &str = "snake_config.yaml";
const LOG_FILE_NAME: &str = "snake_client.log";

fn path_next_to_exe(file_name: &str) -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(file_name);
    }
    PathBuf::from(file_name)
}

pub fn config_path(args: &Args) -> PathBuf {
    args.config
        .clone()
        .unwrap_or_else(|| path_next_to_exe(CONFIG_FILE_NAME))
}

/// File values first, then command-line flags on top.
pub fn load_config(args: &Args) -> Result<GameConfig, String> {
    let manager: ConfigManager<_, GameConfig, _> = ConfigManager::from_yaml_file(config_path(args));
    let mut config = manager.get_config()?;
    apply_overrides(&mut config, args);
    config
        .validate()
        .map_err(|e| format!("Invalid settings: {}", e))?;
    Ok(config)
}

pub fn apply_overrides(config: &mut GameConfig, args: &Args) {
    if let Some(tick_interval_ms) = args.tick_interval_ms {
        config.tick_interval_ms = tick_interval_ms;
    }
    if args.autopilot {
        config.autopilot = true;
    }
    if let Some(ref log_file) = args.log_file {
        config.log.file = Some(log_file.clone());
    }
    if args.use_log_prefix {
        config.log.use_prefix = true;
    }
}

/// The terminal is busy drawing the board, so without a configured file
/// the log goes next to the executable instead of stderr.
pub fn log_target(config: &GameConfig) -> LogTarget {
    match config.log.target() {
        LogTarget::Stderr => LogTarget::File(path_next_to_exe(LOG_FILE_NAME)),
        target => target,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_flags_override_file_values() {
        let args = Args::try_parse_from([
            "snake_client",
            "--tick-interval-ms",
            "150",
            "--autopilot",
            "--log-file",
            "run.log",
            "--use-log-prefix",
        ])
        .unwrap();

        let mut config = GameConfig::default();
        apply_overrides(&mut config, &args);

        assert_eq!(config.tick_interval_ms, 150);
        assert!(config.autopilot);
        assert_eq!(config.log.file.as_deref(), Some("run.log"));
        assert!(config.log.use_prefix);
    }

    #[test]
    fn test_no_flags_keep_file_values() {
        let args = Args::try_parse_from(["snake_client"]).unwrap();
        let mut config = GameConfig {
            tick_interval_ms: 200,
            ..GameConfig::default()
        };
        apply_overrides(&mut config, &args);
        assert_eq!(config.tick_interval_ms, 200);
        assert!(!config.autopilot);
    }

    #[test]
    fn test_explicit_config_path() {
        let args = Args::try_parse_from(["snake_client", "--config", "custom.yaml"]).unwrap();
        assert_eq!(config_path(&args), PathBuf::from("custom.yaml"));
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("missing_snake_config_{}.yaml", random_number));

        let args = Args::try_parse_from([
            "snake_client",
            "--config",
            path.to_str().unwrap(),
            "--tick-interval-ms",
            "1",
        ])
        .unwrap();
        assert!(load_config(&args).is_err());
    }

    #[test]
    fn test_log_defaults_to_file() {
        let target = log_target(&GameConfig::default());
        assert!(matches!(target, LogTarget::File(path) if path.ends_with(LOG_FILE_NAME)));
    }
}
