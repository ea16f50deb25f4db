//! Game state module - manages the complete game state
//!
//! This module ties together all core components: board, pieces, RNG, and
//! scoring. It handles the gravity tick, move validation, locking, line clears
//! and the session lifecycle.
//!
//! Timing is counted in host ticks. The host calls [`GameState::tick`] at a
//! fixed cadence; only every Nth call does any work, where N shrinks as the
//! level rises. Nothing in here reads a clock.

use arrayvec::ArrayVec;
use log::{debug, info, trace};

use crate::board::Board;
use crate::pieces::{rotated_shape, Shape};
use crate::rng::PieceRandomizer;
use crate::scoring::{gravity_interval, level_bonus, line_clear_score};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Pending sound cues kept between drains; extra cues are dropped
const CUE_CAPACITY: usize = 16;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    /// Clockwise quarter turns, interpreted mod 4
    pub rotation: u32,
    /// Column of the 4x4 box's left edge
    pub x: i32,
    /// Row of the 4x4 box's top edge (negative above the board)
    pub y: i32,
}

impl ActivePiece {
    /// Create a new piece at the spawn position
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: 0,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// Get the shape matrix for the current rotation
    pub fn shape(&self) -> Shape {
        rotated_shape(self.kind, self.rotation)
    }

    /// The pose this piece would have after `kind`
    pub fn moved(self, kind: MoveKind) -> Self {
        let (turns, dx, dy) = kind.delta();
        Self {
            rotation: self.rotation.wrapping_add(turns),
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Check if the piece fits on the board at its current pose
    pub fn fits(&self, board: &Board) -> bool {
        !board.collides(&self.shape(), self.x, self.y)
    }
}

/// Session parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// RNG seed for piece draws
    pub seed: u32,
    /// Ticks per gravity step at level 0
    pub base_interval: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            base_interval: BASE_INTERVAL,
        }
    }
}

/// What a call to [`GameState::tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Stopped, game over, or not a gravity tick
    Idle,
    /// The active piece fell one row
    Fell,
    /// The active piece locked and the next one spawned
    Locked { lines: usize },
    /// The active piece locked partly above the board; the session is over
    ToppedOut { lines: usize },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: ActivePiece,
    next: PieceKind,
    pieces: PieceRandomizer,
    score: u32,
    level: u32,
    lines: u32,
    running: bool,
    game_over: bool,
    tick_counter: u32,
    base_interval: u32,
    cues: ArrayVec<SoundCue, CUE_CAPACITY>,
}

impl GameState {
    /// Create a running game with the given configuration
    pub fn new(config: GameConfig) -> Self {
        let mut state = Self {
            board: Board::new(),
            active: ActivePiece::new(PieceKind::I),
            next: PieceKind::I,
            pieces: PieceRandomizer::new(config.seed),
            score: 0,
            level: 0,
            lines: 0,
            running: false,
            game_over: false,
            tick_counter: 0,
            base_interval: config.base_interval.max(1),
            cues: ArrayVec::new(),
        };
        state.reset();
        state
    }

    /// Create a running game with default settings and the given seed
    pub fn with_seed(seed: u32) -> Self {
        Self::new(GameConfig {
            seed,
            ..GameConfig::default()
        })
    }

    /// Start a fresh session in place.
    ///
    /// The piece sequence continues from the current RNG state.
    pub fn reset(&mut self) {
        self.board.clear();
        self.score = 0;
        self.level = 0;
        self.lines = 0;
        self.tick_counter = 0;
        self.running = true;
        self.game_over = false;
        self.cues.clear();

        self.next = self.pieces.draw();
        self.spawn_next();
        info!(
            "new session: active {:?}, next {:?}",
            self.active.kind, self.next
        );
    }

    /// Promote the next piece to active and draw a new next piece.
    ///
    /// The new draw never repeats the previous next piece.
    pub fn spawn_next(&mut self) {
        let drawn = self.pieces.draw_excluding(Some(self.next));
        self.active = ActivePiece::new(self.next);
        self.next = drawn;
        debug!("spawned {:?}, next {:?}", self.active.kind, self.next);
    }

    /// Whether `kind` is currently legal for the active piece
    pub fn can_accept(&self, kind: MoveKind) -> bool {
        if !self.playable() {
            return false;
        }
        self.active.moved(kind).fits(&self.board)
    }

    /// Apply a move that [`can_accept`](Self::can_accept) has approved.
    ///
    /// Queues a rotate or move sound cue.
    pub fn apply_move(&mut self, kind: MoveKind) {
        debug_assert!(
            self.can_accept(kind),
            "apply_move({kind:?}) without can_accept"
        );
        self.active = self.active.moved(kind);
        self.push_cue(match kind {
            MoveKind::Rotate => SoundCue::Rotate,
            MoveKind::Left | MoveKind::Right | MoveKind::Down => SoundCue::Move,
        });
    }

    /// Check and apply a move in one step. Returns whether it happened.
    pub fn try_move(&mut self, kind: MoveKind) -> bool {
        if !self.can_accept(kind) {
            return false;
        }
        self.apply_move(kind);
        true
    }

    /// Gravity heartbeat, called by the host at a fixed cadence
    pub fn tick(&mut self) -> TickOutcome {
        if !self.playable() {
            return TickOutcome::Idle;
        }

        self.tick_counter = self.tick_counter.wrapping_add(1);
        if self.tick_counter % self.gravity_interval() != 0 {
            return TickOutcome::Idle;
        }

        let below = self.active.moved(MoveKind::Down);
        if below.fits(&self.board) {
            self.active = below;
            trace!(
                "p: {:?} x: {} y: {} r: {}",
                below.kind,
                below.x,
                below.y,
                below.rotation % 4
            );
            return TickOutcome::Fell;
        }

        self.lock_active()
    }

    /// Lock the active piece, clear lines, then spawn or end the session
    fn lock_active(&mut self) -> TickOutcome {
        let piece = self.active;
        let above_top = self
            .board
            .lock_cells(&piece.shape(), piece.x, piece.y, piece.kind);
        debug!(
            "locked {:?} at ({}, {}) rotation {}",
            piece.kind,
            piece.x,
            piece.y,
            piece.rotation % 4
        );

        let lines = self.resolve_lines();

        if above_top > 0 {
            self.game_over = true;
            info!(
                "top out: {above_top} cell(s) above the board, score {} level {}",
                self.score, self.level
            );
            return TickOutcome::ToppedOut { lines };
        }

        self.spawn_next();
        TickOutcome::Locked { lines }
    }

    /// Clear full rows and score them. Returns the number of rows cleared.
    pub fn resolve_lines(&mut self) -> usize {
        let rows = self.board.find_full_rows();
        let count = rows.len();
        if count == 0 {
            return 0;
        }
        debug_assert!(count <= 4, "{count} rows cleared at once");

        self.board.clear_rows(&rows);

        let points = line_clear_score(count, self.level);
        self.score = self.score.saturating_add(points);
        self.level += level_bonus(count);
        self.lines = self.lines.saturating_add(count as u32);
        self.push_cue(SoundCue::LineClear(count as u8));

        debug!(
            "cleared rows {:?}: +{points}, score {} level {}",
            rows.as_slice(),
            self.score,
            self.level
        );
        count
    }

    /// Resume gravity and input
    pub fn start(&mut self) {
        self.running = true;
        info!("resumed at tick {}", self.tick_counter);
    }

    /// Freeze gravity and input without touching anything else
    pub fn stop(&mut self) {
        self.running = false;
        info!("paused at tick {}", self.tick_counter);
    }

    /// Pause/resume
    pub fn toggle_running(&mut self) {
        if self.running {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Apply an input command.
    ///
    /// Moves go through [`try_move`](Self::try_move). Pause toggles running and
    /// is accepted while stopped. Restart always starts a new session.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Pause => {
                if self.game_over {
                    return false;
                }
                self.toggle_running();
                true
            }
            GameAction::Restart => {
                self.reset();
                true
            }
            _ => match action.move_kind() {
                Some(kind) => self.try_move(kind),
                None => false,
            },
        }
    }

    /// Take all pending sound cues, oldest first
    pub fn drain_cues(&mut self) -> impl Iterator<Item = SoundCue> + '_ {
        self.cues.drain(..)
    }

    fn push_cue(&mut self, cue: SoundCue) {
        let _ = self.cues.try_push(cue);
    }

    /// Ticks between gravity steps at the current level
    pub fn gravity_interval(&self) -> u32 {
        gravity_interval(self.base_interval, self.level)
    }

    /// Running and not topped out
    pub fn playable(&self) -> bool {
        self.running && !self.game_over
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn next(&self) -> PieceKind {
        self.next
    }

    pub fn active(&self) -> ActivePiece {
        self.active
    }

    /// Shape of the active piece (for rendering)
    pub fn active_shape(&self) -> Shape {
        self.active.shape()
    }

    pub fn tick_counter(&self) -> u32 {
        self.tick_counter
    }

    pub fn base_interval(&self) -> u32 {
        self.base_interval
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for scripted setups.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Replace the active piece, for scripted setups.
    pub fn set_active(&mut self, piece: ActivePiece) {
        self.active = piece;
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = if self.game_over {
            None
        } else {
            Some(ActiveSnapshot::from(self.active))
        };
        out.next = self.next;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.running = self.running;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
