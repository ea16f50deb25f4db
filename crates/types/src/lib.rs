//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn position**: (3, -4), the 4x4 piece box sits fully above the board
//!
//! # Timing
//!
//! Gravity is counted in host ticks, not milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 10 | Default host tick cadence |
//! | `BASE_INTERVAL` | 30 | Ticks per gravity step at level 0 |
//!
//! Each level shortens the gravity interval by one tick, down to one tick.
//!
//! # Examples
//!
//! ```
//! use tick_tetris_types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! // Piece ids are the catalog colour ids 1..=7
//! assert_eq!(PieceKind::I.id(), 1);
//! assert_eq!(PieceKind::from_id(5), Some(PieceKind::T));
//! assert_eq!(PieceKind::from_id(0), None);
//!
//! // Parse game action
//! assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Side length of the square matrix every piece is defined over
pub const PIECE_BOX: usize = 4;

/// Number of distinct pieces in the catalog
pub const PIECE_COUNT: u8 = 7;

/// Spawn column: the 4-wide piece box is horizontally centered
pub const SPAWN_X: i32 = BOARD_WIDTH as i32 / 2 - 2;

/// Spawn row: the piece box starts fully above the visible board
pub const SPAWN_Y: i32 = -4;

/// Default host tick cadence in milliseconds
pub const TICK_MS: u32 = 10;

/// Default gravity interval at level 0, in ticks
pub const BASE_INTERVAL: u32 = 30;

/// Line clear scoring table, indexed by number of rows cleared at once.
///
/// Points are multiplied by (level + 1).
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Rows cleared at once that earn a level
pub const LEVEL_UP_LINES: usize = 4;

/// The seven tetromino piece kinds.
///
/// The discriminant is the piece id, which doubles as its colour id on the
/// board. Id 0 is reserved for "empty" and has no variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum PieceKind {
    I = 1,
    O = 2,
    L = 3,
    J = 4,
    T = 5,
    Z = 6,
    S = 7,
}

impl PieceKind {
    /// All kinds in id order
    pub const ALL: [PieceKind; PIECE_COUNT as usize] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::L,
        PieceKind::J,
        PieceKind::T,
        PieceKind::Z,
        PieceKind::S,
    ];

    /// Numeric id / colour id in 1..=7
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Look up a kind by id. Returns `None` for 0 and anything above 7.
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::O),
            3 => Some(PieceKind::L),
            4 => Some(PieceKind::J),
            5 => Some(PieceKind::T),
            6 => Some(PieceKind::Z),
            7 => Some(PieceKind::S),
            _ => None,
        }
    }

    /// Zero-based position in [`PieceKind::ALL`]
    pub const fn index(self) -> usize {
        self as usize - 1
    }
}

/// Colour token for a board cell value.
///
/// Renderers map tokens to concrete colours; the core only knows tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    /// Empty cell / board background
    Background,
    Cyan,
    Yellow,
    Orange,
    Magenta,
    BlueViolet,
    Lime,
    Red,
}

/// Candidate move checked by the game state before it is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Rotate 90° clockwise
    Rotate,
    /// One column left
    Left,
    /// One column right
    Right,
    /// One row down
    Down,
}

impl MoveKind {
    /// Pose delta as (rotation steps, dx, dy)
    pub const fn delta(self) -> (u32, i32, i32) {
        match self {
            MoveKind::Rotate => (1, 0, 0),
            MoveKind::Left => (0, -1, 0),
            MoveKind::Right => (0, 1, 0),
            MoveKind::Down => (0, 0, 1),
        }
    }
}

/// Discrete commands produced by input adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Rotate piece 90° clockwise
    Rotate,
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Toggle between running and stopped
    Pause,
    /// Start a fresh session
    Restart,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// ```
    /// use tick_tetris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("softDrop"), Some(GameAction::SoftDrop));
    /// assert_eq!(GameAction::from_str("ROTATE"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rotate" => Some(GameAction::Rotate),
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Rotate => "rotate",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }

    /// The piece move this action requests, if it is a move at all
    pub fn move_kind(&self) -> Option<MoveKind> {
        match self {
            GameAction::Rotate => Some(MoveKind::Rotate),
            GameAction::MoveLeft => Some(MoveKind::Left),
            GameAction::MoveRight => Some(MoveKind::Right),
            GameAction::SoftDrop => Some(MoveKind::Down),
            GameAction::Pause | GameAction::Restart => None,
        }
    }
}

/// Fire-and-forget audio trigger queued by the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Piece moved left, right or down
    Move,
    /// Piece rotated
    Rotate,
    /// Rows cleared at once (1..=4)
    LineClear(u8),
}
