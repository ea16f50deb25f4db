//! Swipe gestures from pointer drags.
//!
//! One touch sequence (press, drags, release) yields at most one action:
//!
//! - The first drag away from the press point is classified by its dominant
//!   axis and sign: left, right or down. An upward swipe is consumed and
//!   ignored.
//! - A release with no classified drag is a tap, which rotates.
//!
//! There is no distance threshold; any nonzero displacement counts.

use crate::types::GameAction;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// Terminal cells are roughly twice as tall as they are wide, so rows are
/// scaled before comparing axes.
const ROW_ASPECT: i32 = 2;

/// Tracks the press point of the current touch sequence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwipeTracker {
    /// Press point, cleared once the sequence has been classified
    origin: Option<(i32, i32)>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// A touch sequence started at (x, y)
    pub fn begin(&mut self, x: i32, y: i32) {
        self.origin = Some((x, y));
    }

    /// The pointer moved to (x, y).
    ///
    /// Returns an action the first time the displacement is nonzero; later
    /// moves in the same sequence return nothing.
    pub fn moved(&mut self, x: i32, y: i32) -> Option<GameAction> {
        let (ox, oy) = self.origin?;
        let dx = x - ox;
        let dy = y - oy;
        if dx == 0 && dy == 0 {
            return None;
        }

        self.origin = None;

        if dx.abs() > dy.abs() {
            if dx < 0 {
                Some(GameAction::MoveLeft)
            } else {
                Some(GameAction::MoveRight)
            }
        } else if dy > 0 {
            Some(GameAction::SoftDrop)
        } else {
            // Swipe up
            None
        }
    }

    /// The touch sequence ended. A sequence without a swipe is a tap.
    pub fn end(&mut self) -> Option<GameAction> {
        self.origin.take().map(|_| GameAction::Rotate)
    }

    /// Whether a touch sequence is waiting to be classified
    pub fn is_tracking(&self) -> bool {
        self.origin.is_some()
    }
}

/// Map a left-button mouse press/drag/release into gesture actions.
pub fn handle_mouse_event(tracker: &mut SwipeTracker, event: MouseEvent) -> Option<GameAction> {
    let x = i32::from(event.column);
    let y = i32::from(event.row) * ROW_ASPECT;
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            tracker.begin(x, y);
            None
        }
        MouseEventKind::Drag(MouseButton::Left) => tracker.moved(x, y),
        MouseEventKind::Up(MouseButton::Left) => tracker.end(),
        _ => None,
    }
}
