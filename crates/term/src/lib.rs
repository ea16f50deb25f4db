//! Terminal adapters for the game.
//!
//! Rendering goes through a small framebuffer instead of a widget toolkit:
//! `GameView` paints a `GameSnapshot` into a `FrameBuffer`, and
//! `TerminalRenderer` flushes only the cells that changed. The `audio`
//! module turns queued sound cues into terminal bells.

pub mod audio;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tick_tetris_core as core;
pub use tick_tetris_types as types;

pub use audio::{AudioMode, AudioSink, BellAudio, SilentAudio};
pub use fb::{Cell, CellStyle, FrameBuffer, Rect, Rgb};
pub use game_view::{color_rgb, AnchorY, GameView, Layout, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
