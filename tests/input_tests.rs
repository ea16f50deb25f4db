//! Input adapter driving a live game

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use tick_tetris::core::GameState;
use tick_tetris::input::{handle_key_event, handle_mouse_event, should_quit, SwipeTracker};
use tick_tetris::types::GameAction;

fn press(code: KeyCode) -> Option<GameAction> {
    handle_key_event(KeyEvent::from(code))
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn swipe(tracker: &mut SwipeTracker, from: (u16, u16), to: (u16, u16)) -> Vec<GameAction> {
    let left = MouseButton::Left;
    [
        mouse(MouseEventKind::Down(left), from.0, from.1),
        mouse(MouseEventKind::Drag(left), to.0, to.1),
        mouse(MouseEventKind::Up(left), to.0, to.1),
    ]
    .into_iter()
    .filter_map(|ev| handle_mouse_event(tracker, ev))
    .collect()
}

#[test]
fn test_keys_move_the_active_piece() {
    let mut state = GameState::with_seed(12345);
    let start = state.active();

    let action = press(KeyCode::Char('a')).unwrap();
    assert!(state.apply_action(action));
    assert_eq!(state.active().x, start.x - 1);

    let action = press(KeyCode::Right).unwrap();
    assert!(state.apply_action(action));
    assert_eq!(state.active().x, start.x);

    let action = press(KeyCode::Char('s')).unwrap();
    assert!(state.apply_action(action));
    assert_eq!(state.active().y, start.y + 1);

    let action = press(KeyCode::Char('w')).unwrap();
    assert!(state.apply_action(action));
    assert_eq!(state.active().rotation, start.rotation + 1);
}

#[test]
fn test_space_pauses_and_resumes() {
    let mut state = GameState::with_seed(1);
    let pause = press(KeyCode::Char(' ')).unwrap();
    state.apply_action(pause);
    assert!(!state.running());
    state.apply_action(pause);
    assert!(state.running());
}

#[test]
fn test_unmapped_keys_do_nothing() {
    assert_eq!(press(KeyCode::Char('x')), None);
    assert_eq!(press(KeyCode::Enter), None);
    assert!(!should_quit(KeyEvent::from(KeyCode::Char('w'))));
}

#[test]
fn test_swipes_drive_the_game() {
    let mut state = GameState::with_seed(77);
    let mut tracker = SwipeTracker::new();
    let start = state.active();

    let actions = swipe(&mut tracker, (40, 10), (30, 10));
    assert_eq!(actions, vec![GameAction::MoveLeft]);
    for a in actions {
        state.apply_action(a);
    }
    assert_eq!(state.active().x, start.x - 1);

    let actions = swipe(&mut tracker, (40, 10), (40, 14));
    assert_eq!(actions, vec![GameAction::SoftDrop]);

    // Upward swipe is swallowed, no tap on release
    assert!(swipe(&mut tracker, (40, 10), (40, 2)).is_empty());

    // Tap rotates
    assert_eq!(swipe(&mut tracker, (5, 5), (5, 5)), vec![GameAction::Rotate]);
}
