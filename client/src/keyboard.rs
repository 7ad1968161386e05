use std::thread::JoinHandle;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use snake_common::games::snake::{GameKey, SessionCommand};
use snake_common::log;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub fn map_key(event: &KeyEvent) -> Option<SessionCommand> {
    if event.kind != KeyEventKind::Press {
        return None;
    }
    match event.code {
        KeyCode::Up => Some(SessionCommand::Key(GameKey::ArrowUp)),
        KeyCode::Down => Some(SessionCommand::Key(GameKey::ArrowDown)),
        KeyCode::Left => Some(SessionCommand::Key(GameKey::ArrowLeft)),
        KeyCode::Right => Some(SessionCommand::Key(GameKey::ArrowRight)),
        KeyCode::Char(' ') => Some(SessionCommand::Key(GameKey::Restart)),
        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(SessionCommand::Stop)
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(SessionCommand::Stop),
        _ => None,
    }
}

/// Reads the terminal on a plain thread and forwards mapped keys to the
/// session. Ends after sending `Stop` or once the session hangs up.
pub fn spawn_reader(command_tx: mpsc::UnboundedSender<SessionCommand>) -> JoinHandle<()> {
    std::thread::spawn(move || {
        loop {
            if command_tx.is_closed() {
                break;
            }

            let ready = match event::poll(POLL_INTERVAL) {
                Ok(ready) => ready,
                Err(e) => {
                    log!("Failed to poll keyboard: {}", e);
                    let _ = command_tx.send(SessionCommand::Stop);
                    break;
                }
            };
            if !ready {
                continue;
            }

            let command = match event::read() {
                Ok(Event::Key(key)) => map_key(&key),
                Ok(_) => None,
                Err(e) => {
                    log!("Failed to read keyboard: {}", e);
                    Some(SessionCommand::Stop)
                }
            };

            if let Some(command) = command {
                let stop = command == SessionCommand::Stop;
                if command_tx.send(command).is_err() || stop {
                    break;
                }
            }
        }
    })
}
