//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework beyond the
//! `crossterm` event types. It maps key presses and pointer drags into
//! [`crate::types::GameAction`] commands. It never touches game state; the host
//! applies the returned actions.

pub mod gesture;
pub mod map;

pub use tick_tetris_types as types;

pub use gesture::{handle_mouse_event, SwipeTracker};
pub use map::{handle_key_event, should_quit};
