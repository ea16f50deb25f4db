//! Terminal Tetris runner (default binary).
//!
//! Owns the scheduler: one loop that waits for input until the next tick,
//! feeds commands to the game, advances gravity at a fixed cadence, plays
//! queued cues and redraws the board.

use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use env_logger::{Env, Target};

use tick_tetris::core::{GameSnapshot, GameState, TickOutcome};
use tick_tetris::input::{handle_key_event, handle_mouse_event, should_quit, SwipeTracker};
use tick_tetris::term::{AudioSink, FrameBuffer, GameView, TerminalRenderer, Viewport};
use tick_tetris::AppConfig;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    init_logging(&config)?;
    log::info!(
        "starting: seed {} tick {}ms base interval {} audio {:?}",
        config.seed,
        config.tick_ms,
        config.base_interval,
        config.audio
    );

    let mut term = TerminalRenderer::new();
    let result = term.enter().and_then(|_| run(&mut term, &config));

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        log::warn!("failed to restore terminal: {err:#}");
    }
    if let Err(err) = &result {
        log::error!("exiting with error: {err:#}");
    }
    result
}

/// Logs go to a file because the terminal is in raw mode; no path, no logs.
fn init_logging(config: &AppConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let mut game = GameState::new(config.game_config());
    let view = GameView::default().with_debug_grid(config.debug_grid);
    let mut audio = config.audio.sink();
    let mut swipe = SwipeTracker::new();

    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(u64::from(config.tick_ms));
    let mut last_tick = Instant::now();

    loop {
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());

        if event::poll(timeout)? {
            let action = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        log::info!("quit: score {} level {}", game.score(), game.level());
                        return Ok(());
                    }
                    handle_key_event(key)
                }
                Event::Mouse(mouse) => handle_mouse_event(&mut swipe, mouse),
                Event::Resize(_, _) => {
                    term.invalidate();
                    None
                }
                _ => None,
            };
            if let Some(action) = action {
                let accepted = game.apply_action(action);
                log::trace!("{} accepted={accepted}", action.as_str());
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            if let TickOutcome::ToppedOut { .. } = game.tick() {
                log::info!(
                    "game over: score {} level {} lines {}",
                    game.score(),
                    game.level(),
                    game.lines()
                );
            }
        }

        for cue in game.drain_cues() {
            audio.play(cue);
        }

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;
    }
}
