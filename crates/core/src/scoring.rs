//! Scoring module - line clear points, level progression and gravity speed
//!
//! - Clearing 1/2/3/4 rows at once awards 100/300/500/800 points, times (level + 1).
//! - Clearing 4 rows at once raises the level by one.
//! - Each level removes one tick from the gravity interval, never below one tick.

use crate::types::{LEVEL_UP_LINES, LINE_SCORES};

/// Points for clearing `lines` rows at once at `level`.
/// Returns 0 for 0 lines or more than 4.
pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    match LINE_SCORES.get(lines) {
        Some(&base) => base.saturating_mul(level.saturating_add(1)),
        None => 0,
    }
}

/// Levels gained by clearing `lines` rows at once
pub fn level_bonus(lines: usize) -> u32 {
    u32::from(lines == LEVEL_UP_LINES)
}

/// Ticks between gravity steps at `level`
pub fn gravity_interval(base_interval: u32, level: u32) -> u32 {
    base_interval.saturating_sub(level).max(1)
}
