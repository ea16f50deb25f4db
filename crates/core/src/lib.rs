//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, audio, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Unit tests for every rule
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Allocation-free**: The tick and move paths never allocate
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 game board with collision detection and line clearing
//! - [`game_state`]: Active piece, next piece, scoring, gravity ticks, lifecycle
//! - [`pieces`]: Tetromino catalog and 90° rotation
//! - [`rng`]: Seeded uniform piece draws without immediate repeats
//! - [`scoring`]: Line clear points, level progression, gravity speed
//! - [`snapshot`]: Copyable read-only view for renderers
//!
//! # Game Rules
//!
//! - Pieces spawn fully above the board, centered, and fall one row per gravity step
//! - A piece that cannot fall locks into the board on the next gravity step
//! - Full rows are removed and everything above drops down
//! - 1/2/3/4 rows score 100/300/500/800 times (level + 1); 4 rows raise the level
//! - Each level shortens the gravity interval by one tick
//! - Locking a piece partly above the board ends the session
//!
//! # Example
//!
//! ```
//! use tick_tetris_core::{GameConfig, GameState, TickOutcome};
//! use tick_tetris_types::{GameAction, MoveKind};
//!
//! let mut game = GameState::new(GameConfig { seed: 12345, base_interval: 1 });
//!
//! assert!(game.can_accept(MoveKind::Left));
//! game.apply_action(GameAction::MoveLeft);
//! game.apply_action(GameAction::Rotate);
//!
//! // With a base interval of 1 every tick is a gravity step
//! assert_eq!(game.tick(), TickOutcome::Fell);
//! assert_eq!(game.score(), 0);
//! ```

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tick_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, CellQuery, FullRows};
pub use game_state::{ActivePiece, GameConfig, GameState, TickOutcome};
pub use pieces::{color_of, rotate_cw, rotated_shape, shape_of, Shape};
pub use rng::{PieceRandomizer, SimpleRng};
pub use scoring::{gravity_interval, level_bonus, line_clear_score};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
