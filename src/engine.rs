//! Game engine owning the board, move log, winner and error slot
//!
//! The engine is the only way to mutate a game. Every operation runs to
//! completion before returning, so callers never see a stone on the board
//! without its log entry (or the reverse).
//!
//! The color of each stone is never stored next to the log: it is derived
//! from the move's index (see [`Stone::for_ply`]).
//!
//! # Example
//!
//! ```
//! use gomoku::{Coord, GomokuEngine, Stone};
//!
//! let mut engine = GomokuEngine::new();
//! engine.play(Coord::new(0, 0)).unwrap();
//! assert_eq!(engine.stone_at(Coord::new(0, 0)), Stone::Black);
//! assert_eq!(engine.to_move(), Stone::White);
//!
//! // Off-board moves are rejected and leave the game untouched
//! assert!(engine.play(Coord::new(8, 0)).is_err());
//! assert_eq!(engine.moves().len(), 1);
//! assert!(engine.last_error().is_some());
//! ```

use tracing::{debug, info, instrument, warn};

use crate::board::{Board, Coord, Stone, BOARD_SIZE};
use crate::config::{validate_board_size, GameConfig};
use crate::error::{ConfigError, MoveError};
use crate::rules::find_five_line_at_pos;

/// A decided game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Victory {
    pub winner: Stone,
    /// Log index of the move that completed the line
    pub ply: usize,
    /// The winning run through the deciding stone
    pub line: Vec<Coord>,
}

/// A successfully applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub at: Coord,
    pub stone: Stone,
    pub ply: usize,
    /// Set when this very move completed a line
    pub winner: Option<Stone>,
}

/// How a replay of a move history ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayOutcome {
    /// Every move was applied
    Completed { applied: usize },
    /// Move `ply` won the game; later moves were discarded
    Won { ply: usize },
    /// Move `ply` was illegal; it and every later move were discarded
    Rejected { ply: usize, error: MoveError },
}

impl ReplayOutcome {
    /// Number of history entries that made it onto the board
    pub fn applied(&self) -> usize {
        match self {
            ReplayOutcome::Completed { applied } => *applied,
            ReplayOutcome::Won { ply } => ply + 1,
            ReplayOutcome::Rejected { ply, .. } => *ply,
        }
    }
}

/// Gomoku engine
#[derive(Debug, Clone)]
pub struct GomokuEngine {
    board: Board,
    moves: Vec<Coord>,
    victory: Option<Victory>,
    last_error: Option<MoveError>,
    /// History replayed on construction and on every reset
    opening: Vec<Coord>,
}

impl GomokuEngine {
    /// Create an empty 15x15 game
    pub fn new() -> Self {
        Self::build(BOARD_SIZE, Vec::new())
    }

    /// Create an empty game on a `size` x `size` board.
    ///
    /// `size` must be odd and at most
    /// [`MAX_BOARD_SIZE`](crate::config::MAX_BOARD_SIZE).
    pub fn with_size(size: usize) -> Result<Self, ConfigError> {
        Self::with_opening(size, Vec::new())
    }

    /// Create a game and replay `opening` onto it.
    ///
    /// A bad opening is not fatal: replay stops at the first illegal move and
    /// the reason is left in [`last_error`](Self::last_error). Only an invalid
    /// `size` is an error.
    pub fn with_opening(size: usize, opening: Vec<Coord>) -> Result<Self, ConfigError> {
        validate_board_size(size)?;
        Ok(Self::build(size, opening))
    }

    /// Build an engine from validated configuration
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config.board_size, config.opening.clone()))
    }

    /// `size` has already passed `validate_board_size`
    fn build(size: usize, opening: Vec<Coord>) -> Self {
        let mut engine = Self {
            board: Board::with_size(size),
            moves: Vec::new(),
            victory: None,
            last_error: None,
            opening,
        };
        engine.reset();
        engine
    }

    // ---- Board queries ----

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.board.size()
    }

    #[inline]
    pub fn is_valid_coord(&self, at: Coord) -> bool {
        self.board.is_valid(at)
    }

    /// Occupant of `at`; `Empty` for free or off-board cells
    #[inline]
    pub fn stone_at(&self, at: Coord) -> Stone {
        self.board.get(at)
    }

    // ---- Game queries ----

    /// Moves played so far, in play order
    #[inline]
    pub fn moves(&self) -> &[Coord] {
        &self.moves
    }

    #[inline]
    pub fn last_move(&self) -> Option<Coord> {
        self.moves.last().copied()
    }

    /// Player whose turn it is
    #[inline]
    pub fn to_move(&self) -> Stone {
        Stone::for_ply(self.moves.len())
    }

    #[inline]
    pub fn winner(&self) -> Option<Stone> {
        self.victory.as_ref().map(|v| v.winner)
    }

    #[inline]
    pub fn victory(&self) -> Option<&Victory> {
        self.victory.as_ref()
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.victory.is_some()
    }

    /// Reason the most recent move or replay was rejected
    #[inline]
    pub fn last_error(&self) -> Option<&MoveError> {
        self.last_error.as_ref()
    }

    #[inline]
    pub fn opening(&self) -> &[Coord] {
        &self.opening
    }

    // ---- Move lifecycle ----

    /// Check that `at` is on the board and free
    pub fn validate(&self, at: Coord) -> Result<(), MoveError> {
        if !self.board.is_valid(at) {
            return Err(MoveError::OutOfBounds(at));
        }
        match self.board.get(at) {
            Stone::Empty => Ok(()),
            by => Err(MoveError::Occupied { at, by }),
        }
    }

    #[inline]
    pub fn is_legal(&self, at: Coord) -> bool {
        self.validate(at).is_ok()
    }

    /// Place the next stone at `at`.
    ///
    /// On rejection only the error slot changes. Moves after a decided game
    /// are not refused here; callers check [`is_over`](Self::is_over) first.
    #[instrument(level = "debug", skip(self))]
    pub fn play(&mut self, at: Coord) -> Result<Placement, MoveError> {
        if let Err(error) = self.validate(at) {
            warn!(%error, "move rejected");
            self.last_error = Some(error.clone());
            return Err(error);
        }
        self.last_error = None;

        let ply = self.moves.len();
        let stone = self.apply(at);
        let winner = self.detect_win(at, stone, ply);
        debug!(%at, %stone, ply, "stone placed");

        Ok(Placement {
            at,
            stone,
            ply,
            winner,
        })
    }

    /// Undo the most recent move.
    ///
    /// Returns the freed coordinate, or `None` when there is nothing to undo
    /// (the error slot is then left as it was). Undoing the move that decided
    /// the game also clears the winner.
    #[instrument(level = "debug", skip(self))]
    pub fn rollback(&mut self) -> Option<Coord> {
        let at = self.moves.pop()?;
        self.board.remove_stone(at);
        self.last_error = None;

        if self
            .victory
            .as_ref()
            .is_some_and(|v| v.ply >= self.moves.len())
        {
            debug!("winning move undone");
            self.victory = None;
        }
        debug!(%at, remaining = self.moves.len(), "move undone");
        Some(at)
    }

    /// Clear the game and replay the configured opening
    #[instrument(level = "debug", skip(self))]
    pub fn reset(&mut self) -> ReplayOutcome {
        let opening = std::mem::take(&mut self.opening);
        let outcome = self.replay(&opening);
        self.opening = opening;
        outcome
    }

    /// Rebuild the game from `history`, discarding the current state.
    ///
    /// Replay stops at the first illegal move (recorded in the error slot) or
    /// right after a winning move. The move log always equals the applied
    /// prefix, so the log and the board agree.
    #[instrument(level = "debug", skip_all, fields(len = history.len()))]
    pub fn replay(&mut self, history: &[Coord]) -> ReplayOutcome {
        self.board.clear();
        self.moves.clear();
        self.victory = None;
        self.last_error = None;

        for (ply, &at) in history.iter().enumerate() {
            if let Err(error) = self.validate(at) {
                warn!(ply, %error, "replay truncated");
                self.last_error = Some(error.clone());
                return ReplayOutcome::Rejected { ply, error };
            }
            let stone = self.apply(at);
            if self.detect_win(at, stone, ply).is_some() {
                if ply + 1 < history.len() {
                    debug!(discarded = history.len() - ply - 1, "moves after win dropped");
                }
                return ReplayOutcome::Won { ply };
            }
        }
        ReplayOutcome::Completed {
            applied: history.len(),
        }
    }

    /// Color of the stone played at log index `ply`
    pub fn stone_at_ply(&self, ply: usize) -> Option<Stone> {
        (ply < self.moves.len()).then(|| Stone::for_ply(ply))
    }

    /// Place the mover's stone and append it to the log. `at` must be legal.
    fn apply(&mut self, at: Coord) -> Stone {
        let stone = self.to_move();
        self.board.place_stone(at, stone);
        self.moves.push(at);
        stone
    }

    /// Run the win check for the stone just placed; the first victory sticks.
    fn detect_win(&mut self, at: Coord, stone: Stone, ply: usize) -> Option<Stone> {
        let line = find_five_line_at_pos(&self.board, at, stone)?;
        if self.victory.is_none() {
            info!(winner = %stone, ply, "game decided");
            self.victory = Some(Victory {
                winner: stone,
                ply,
                line,
            });
        }
        Some(stone)
    }
}

impl Default for GomokuEngine {
    fn default() -> Self {
        Self::new()
    }
}
