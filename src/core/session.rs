//! Session module - the complete game state machine
//!
//! Ties the board, piece generation, and scoring together and owns all
//! timing: the gravity accumulator and the row-clear flash sub-phase.
//! Commands arrive as discrete [`GameAction`]s; the clock arrives as
//! elapsed milliseconds through [`GameSession::tick`]. Everything here is
//! synchronous and infallible - blocked moves and failed rotations are
//! boolean outcomes, and game over is a phase, not an error.

use arrayvec::ArrayVec;

use crate::core::pieces::{self, base_cells, PieceCells, SPAWN_X};
use crate::core::rng::PieceGen;
use crate::core::scoring::{drop_interval_ms, drop_score, level_for_lines, line_clear_score};
use crate::core::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::core::Board;
use crate::types::{GameAction, Phase, PieceKind, CLEAR_FLASH_INTERVAL_MS, CLEAR_FLASH_TICKS};

/// Active falling piece: a kind, its current cell set, and its anchor.
///
/// The cell set is owned, not derived - rotation rewrites it in place,
/// so two pieces of the same kind can hold different orientations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Piece {
    pub kind: PieceKind,
    pub cells: PieceCells,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece at the spawn anchor in its base orientation
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            cells: base_cells(kind),
            x: SPAWN_X,
            y: 0,
        }
    }

    /// Check that every cell sits on a free board position
    pub fn fits(&self, board: &Board) -> bool {
        self.cells
            .iter()
            .all(|&(dx, dy)| board.is_valid(self.x + dx, self.y + dy))
    }
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    active: Option<Piece>,
    next: Option<PieceKind>,
    pieces: PieceGen,
    phase: Phase,
    score: u32,
    level: u32,
    lines: u32,
    /// Gravity accumulator; one downward step fires when it crosses the
    /// current level's interval.
    drop_timer_ms: u32,
    /// Rows locked in full, awaiting removal while they flash.
    clearing_rows: ArrayVec<usize, 4>,
    flash_timer_ms: u32,
    flashes_done: u8,
    flash_lit: bool,
}

impl GameSession {
    /// Create a session in the Ready phase with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            next: None,
            pieces: PieceGen::new(seed),
            phase: Phase::Ready,
            score: 0,
            level: 1,
            lines: 0,
            drop_timer_ms: 0,
            clearing_rows: ArrayVec::new(),
            flash_timer_ms: 0,
            flashes_done: 0,
            flash_lit: false,
        }
    }

    /// Start or restart the game.
    ///
    /// Every field is reinitialized; only the RNG stream carries over, so
    /// a restart does not replay the previous piece sequence. Any pending
    /// clear flash dies with the old session value.
    pub fn start(&mut self) {
        let seed = self.pieces.seed();
        *self = Self::new(seed);
        self.phase = Phase::Falling;
        self.advance_piece();
    }

    pub fn phase(&self) -> Phase {
        self.phase
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

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn next_kind(&self) -> Option<PieceKind> {
        self.next
    }

    /// Rows currently flashing (empty outside the Clearing phase)
    pub fn clearing_rows(&self) -> &[usize] {
        &self.clearing_rows
    }

    /// Whether flashing rows are currently lit
    pub fn flash_lit(&self) -> bool {
        self.flash_lit
    }

    /// Apply a command. Returns whether it had any effect.
    ///
    /// Guards run here: movement, rotation, and drops need the Falling
    /// phase and an active piece; pause toggles only between Falling and
    /// Paused; restart is always accepted.
    pub fn apply(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Restart => {
                self.start();
                true
            }
            GameAction::TogglePause => self.toggle_pause(),
            _ if self.phase != Phase::Falling || self.active.is_none() => false,
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::Rotate => self.try_rotate(),
            GameAction::SoftDrop => {
                // The point is for the command, not the movement: a step
                // that immediately locks still scores 1.
                self.step_down();
                self.score += drop_score(1, false);
                true
            }
            GameAction::HardDrop => {
                self.hard_drop();
                true
            }
        }
    }

    /// Advance the simulation by `elapsed_ms` of wall time.
    ///
    /// Gravity accumulates only in the Falling phase; the Clearing phase
    /// runs its flash counter off the same clock and suppresses gravity
    /// until removal completes.
    pub fn tick(&mut self, elapsed_ms: u32) {
        match self.phase {
            Phase::Falling => {
                self.drop_timer_ms += elapsed_ms;
                if self.drop_timer_ms >= drop_interval_ms(self.level) {
                    self.drop_timer_ms = 0;
                    self.step_down();
                }
            }
            Phase::Clearing => {
                self.flash_timer_ms += elapsed_ms;
                while self.flash_timer_ms >= CLEAR_FLASH_INTERVAL_MS {
                    self.flash_timer_ms -= CLEAR_FLASH_INTERVAL_MS;
                    self.flash_lit = !self.flash_lit;
                    self.flashes_done += 1;
                    if self.flashes_done >= CLEAR_FLASH_TICKS {
                        self.finish_clear();
                        break;
                    }
                }
            }
            Phase::Ready | Phase::Paused | Phase::GameOver => {}
        }
    }

    /// Lowest y the active piece can reach at its current x.
    ///
    /// Pure query for drop-preview rendering; the board is untouched.
    pub fn ghost_y(&self) -> Option<i8> {
        let piece = self.active?;
        Some(piece.y + self.drop_distance(&piece))
    }

    /// Fill a snapshot for the presentation layer
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.copy_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.ghost_y = self.ghost_y();
        out.next = self.next;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.phase = self.phase;
        out.clearing_rows = self.clearing_rows.clone();
        out.flash_lit = self.flash_lit;
    }

    /// Convenience allocation of a fresh snapshot
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    fn toggle_pause(&mut self) -> bool {
        match self.phase {
            Phase::Falling => {
                self.phase = Phase::Paused;
                true
            }
            Phase::Paused => {
                self.phase = Phase::Falling;
                // Resume restarts the gravity interval from zero.
                self.drop_timer_ms = 0;
                true
            }
            _ => false,
        }
    }

    /// Try to move the active piece by (dx, dy)
    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(piece) = self.active else {
            return false;
        };

        let fits = piece
            .cells
            .iter()
            .all(|&(cx, cy)| self.board.is_valid(piece.x + cx + dx, piece.y + cy + dy));

        if fits {
            self.active = Some(Piece {
                x: piece.x + dx,
                y: piece.y + dy,
                ..piece
            });
        }

        fits
    }

    /// Rotate the active piece, with horizontal kicks
    fn try_rotate(&mut self) -> bool {
        let Some(piece) = self.active else {
            return false;
        };

        let result = pieces::try_rotate(&piece.cells, piece.x, piece.y, |x, y| {
            self.board.is_valid(x, y)
        });

        if let Some((cells, kick)) = result {
            self.active = Some(Piece {
                cells,
                x: piece.x + kick,
                ..piece
            });
            return true;
        }

        false
    }

    /// One downward step: move if possible, lock otherwise.
    ///
    /// Returns whether the piece moved.
    fn step_down(&mut self) -> bool {
        if self.try_move(0, 1) {
            return true;
        }
        self.lock_active();
        false
    }

    /// Drop the active piece to its floor and lock it immediately,
    /// bypassing the per-step path. Awards 2 points per cell descended.
    fn hard_drop(&mut self) {
        let Some(piece) = self.active else {
            return;
        };

        let dist = self.drop_distance(&piece);
        if dist > 0 {
            self.active = Some(Piece {
                y: piece.y + dist,
                ..piece
            });
        }
        self.score += drop_score(dist as u32, true);
        self.lock_active();
    }

    /// How far the piece can descend before something blocks it
    fn drop_distance(&self, piece: &Piece) -> i8 {
        let mut dist: i8 = 0;
        loop {
            let blocked = piece
                .cells
                .iter()
                .any(|&(cx, cy)| self.board.is_blocked(piece.x + cx, piece.y + cy + dist + 1));
            if blocked {
                return dist;
            }
            dist += 1;
        }
    }

    /// Commit the active piece into the board, then either start the
    /// clear flash or advance to the next piece.
    fn lock_active(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        self.board.lock(&piece.cells, piece.x, piece.y, piece.kind);

        let full = self.board.full_rows();
        if full.is_empty() {
            self.advance_piece();
        } else {
            self.clearing_rows = full;
            self.flash_timer_ms = 0;
            self.flashes_done = 0;
            self.flash_lit = true;
            self.phase = Phase::Clearing;
        }
    }

    /// Remove the flashed rows, settle scoring, and respawn.
    ///
    /// Scoring uses the level in force when the rows filled; the level is
    /// recomputed from the new line total afterwards.
    fn finish_clear(&mut self) {
        let cleared = self.clearing_rows.len();
        self.board.remove_rows(&self.clearing_rows);

        self.score += line_clear_score(cleared, self.level);
        self.lines += cleared as u32;
        self.level = level_for_lines(self.lines);

        self.clearing_rows.clear();
        self.flash_lit = false;
        self.drop_timer_ms = 0;
        self.phase = Phase::Falling;
        self.advance_piece();
    }

    /// Promote the lookahead to active and draw a fresh lookahead.
    ///
    /// A blocked spawn ends the game: the phase flips to GameOver and no
    /// active piece remains.
    fn advance_piece(&mut self) {
        let kind = match self.next.take() {
            Some(kind) => kind,
            None => self.pieces.draw(),
        };
        self.next = Some(self.pieces.draw());

        let piece = Piece::spawn(kind);
        if piece.fits(&self.board) {
            self.active = Some(piece);
        } else {
            self.active = None;
            self.phase = Phase::GameOver;
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}
