//! Read-only, copyable view of a game for renderers.

use crate::game_state::ActivePiece;
use crate::pieces::Shape;
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH, PIECE_BOX};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    /// Quarter turns, already reduced to 0..4
    pub rotation: u8,
    pub x: i32,
    pub y: i32,
    pub shape: Shape,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            rotation: (value.rotation % 4) as u8,
            x: value.x,
            y: value.y,
            shape: value.shape(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub next: PieceKind,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub running: bool,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Gravity and moves are live
    pub fn playable(&self) -> bool {
        self.running && !self.game_over
    }

    /// Cell value of the active piece at board (x, y), 0 if it does not cover it
    pub fn active_cell(&self, x: i32, y: i32) -> u8 {
        let Some(active) = self.active else {
            return 0;
        };
        let col = x - active.x;
        let row = y - active.y;
        if (0..PIECE_BOX as i32).contains(&col) && (0..PIECE_BOX as i32).contains(&row) {
            active.shape[row as usize][col as usize]
        } else {
            0
        }
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            next: PieceKind::I,
            score: 0,
            level: 0,
            lines: 0,
            running: false,
            game_over: false,
        }
    }
}
