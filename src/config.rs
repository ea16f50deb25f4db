//! Runtime configuration read from `TETRIS_*` environment variables.
//!
//! Unparseable values fall back to their defaults.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::GameConfig;
use crate::term::AudioMode;
use crate::types::{BASE_INTERVAL, TICK_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: u32,
    pub tick_ms: u32,
    pub base_interval: u32,
    pub debug_grid: bool,
    pub audio: AudioMode,
    pub log_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            tick_ms: TICK_MS,
            base_interval: BASE_INTERVAL,
            debug_grid: false,
            audio: AudioMode::Bell,
            log_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup, e.g. a map in tests.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("TETRIS_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let tick_ms = lookup("TETRIS_TICK_MS")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or(TICK_MS)
            .max(1);

        let base_interval = lookup("TETRIS_BASE_INTERVAL")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .unwrap_or(BASE_INTERVAL)
            .max(1);

        let debug_grid = lookup("TETRIS_DEBUG_GRID")
            .map(|v| is_truthy(&v))
            .unwrap_or(false);

        let audio = lookup("TETRIS_AUDIO")
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();

        let log_path = lookup("TETRIS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) })
            .map(PathBuf::from);

        Self {
            seed,
            tick_ms,
            base_interval,
            debug_grid,
            audio,
            log_path,
        }
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            seed: self.seed,
            base_interval: self.base_interval,
        }
    }
}

fn is_truthy(v: &str) -> bool {
    let v = v.trim();
    v == "1" || v.eq_ignore_ascii_case("true") || v.eq_ignore_ascii_case("on")
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
