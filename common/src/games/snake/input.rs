use super::types::Direction;

/// Logical keys a keyboard source may deliver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameKey {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Restart,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Turn(Direction),
    Restart,
}

impl GameKey {
    /// Accepts the DOM-style key codes (`"ArrowUp"`, `"Space"`) as well as
    /// the logical `"Restart"`. Anything else is ignored.
    pub fn from_name(name: &str) -> Option<GameKey> {
        match name {
            "ArrowUp" => Some(GameKey::ArrowUp),
            "ArrowDown" => Some(GameKey::ArrowDown),
            "ArrowLeft" => Some(GameKey::ArrowLeft),
            "ArrowRight" => Some(GameKey::ArrowRight),
            "Restart" | "Space" => Some(GameKey::Restart),
            _ => None,
        }
    }

    pub fn action(&self) -> KeyAction {
        match self {
            GameKey::ArrowUp => KeyAction::Turn(Direction::Up),
            GameKey::ArrowDown => KeyAction::Turn(Direction::Down),
            GameKey::ArrowLeft => KeyAction::Turn(Direction::Left),
            GameKey::ArrowRight => KeyAction::Turn(Direction::Right),
            GameKey::Restart => KeyAction::Restart,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    Key(GameKey),
    Stop,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(GameKey::from_name("ArrowLeft"), Some(GameKey::ArrowLeft));
        assert_eq!(GameKey::from_name("Space"), Some(GameKey::Restart));
        assert_eq!(GameKey::from_name("Restart"), Some(GameKey::Restart));
        assert_eq!(GameKey::from_name("KeyW"), None);
        assert_eq!(GameKey::from_name(""), None);
    }

    #[test]
    fn test_arrow_actions() {
        assert_eq!(GameKey::ArrowUp.action(), KeyAction::Turn(Direction::Up));
        assert_eq!(GameKey::ArrowDown.action(), KeyAction::Turn(Direction::Down));
        assert_eq!(GameKey::ArrowLeft.action(), KeyAction::Turn(Direction::Left));
        assert_eq!(GameKey::ArrowRight.action(), KeyAction::Turn(Direction::Right));
        assert_eq!(GameKey::Restart.action(), KeyAction::Restart);
    }
}
