//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions. Letters are case-insensitive.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Up => Some(GameAction::Rotate),
        KeyCode::Left => Some(GameAction::MoveLeft),
        KeyCode::Right => Some(GameAction::MoveRight),
        KeyCode::Down => Some(GameAction::SoftDrop),
        KeyCode::Char(c) => char_action(c.to_ascii_lowercase()),
        _ => None,
    }
}

fn char_action(c: char) -> Option<GameAction> {
    let action = match c {
        'w' => GameAction::Rotate,
        'a' => GameAction::MoveLeft,
        'd' => GameAction::MoveRight,
        's' => GameAction::SoftDrop,
        ' ' | 'p' => GameAction::Pause,
        'r' => GameAction::Restart,
        _ => return None,
    };
    Some(action)
}

/// `q`, Esc or Ctrl-C.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char(c) if c.eq_ignore_ascii_case(&'q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_table() {
        let table = [
            (KeyCode::Char('w'), GameAction::Rotate),
            (KeyCode::Up, GameAction::Rotate),
            (KeyCode::Char('a'), GameAction::MoveLeft),
            (KeyCode::Left, GameAction::MoveLeft),
            (KeyCode::Char('D'), GameAction::MoveRight),
            (KeyCode::Right, GameAction::MoveRight),
            (KeyCode::Char('s'), GameAction::SoftDrop),
            (KeyCode::Down, GameAction::SoftDrop),
            (KeyCode::Char(' '), GameAction::Pause),
            (KeyCode::Char('P'), GameAction::Pause),
            (KeyCode::Char('r'), GameAction::Restart),
        ];
        for (code, action) in table {
            assert_eq!(handle_key_event(KeyEvent::from(code)), Some(action), "{code:?}");
        }
    }

    #[test]
    fn test_unmapped_keys() {
        for code in [KeyCode::Char('x'), KeyCode::Enter, KeyCode::Tab, KeyCode::F(1)] {
            assert_eq!(handle_key_event(KeyEvent::from(code)), None, "{code:?}");
        }
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('Q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('w'))));
    }
}
