mod colors;
mod keyboard;
mod settings;
mod terminal;

use std::path::PathBuf;

use clap::Parser;
use tokio::sync::mpsc;

use snake_common::games::snake::SnakeSession;
use snake_common::version::VERSION;
use snake_common::{log, logger};
use terminal::{TerminalGuard, TerminalSurface};

#[derive(Parser, Debug)]
#[command(name = "snake_client", version, about = "Single-player snake in the terminal")]
pub struct Args {
    /// YAML settings file; defaults to snake_config.yaml next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fixed seed for food placement and colors.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    tick_interval_ms: Option<u32>,

    /// Let the built-in bot steer.
    #[arg(long)]
    autopilot: bool,

    #[arg(long)]
    log_file: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = settings::load_config(&args)?;
    let prefix = if config.log.use_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, settings::log_target(&config))?;
    log!("snake_client {} starting, config {}", VERSION, settings::config_path(&args).display());

    let session_settings = config.session_settings(args.seed);
    TerminalSurface::warn_if_too_small(config.canvas_width_px, config.canvas_height_px, config.cell_size_px);

    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let summary = {
        let _guard = TerminalGuard::enter()?;
        let reader = keyboard::spawn_reader(command_tx);
        let summary = SnakeSession::run(session_settings, command_rx, TerminalSurface::new()).await;
        if reader.join().is_err() {
            log!("Keyboard reader panicked");
        }
        summary
    };

    println!(
        "Played {} game(s), best score {}, {} ticks (seed {})",
        summary.games_played, summary.best_score, summary.total_ticks, summary.seed
    );

    Ok(())
}
