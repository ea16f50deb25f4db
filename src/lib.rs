//! Tick Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates as `tick_tetris::{core, input, term, types}`
//! and owns the runtime configuration used by the binary.

pub mod config;

pub use tick_tetris_core as core;
pub use tick_tetris_input as input;
pub use tick_tetris_term as term;
pub use tick_tetris_types as types;

pub use config::AppConfig;
