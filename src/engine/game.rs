//! Stateful game controller wrapping Board.
//!
//! `Game` owns the single live board and is the type the presentation
//! layer talks to: it validates piece selection (including side-level
//! mandatory capture), walks capture chains move by move, closes turns,
//! and tracks the game status. Invalid input comes back as `Err` and
//! leaves the state untouched.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::engine::board::Board;
use crate::engine::movegen;
use crate::engine::types::{Color, Difficulty, DraughtsError, GameStatus, MoveKind, Piece, Square};

// =========================================================================
// MoveOutcome
// =========================================================================

/// What a successfully applied move did to the turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The jump landed where another capture is available; the same piece
    /// must continue and the turn stays open.
    ChainContinues,
    /// The turn is closed and play has passed to the opponent.
    TurnEnded,
}

// =========================================================================
// Game
// =========================================================================

/// A live draughts game with selection state and status tracking.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    /// Legal destinations of the selected piece, recomputed on selection
    /// and after every chain step.
    active_moves: Vec<Square>,
    status: GameStatus,

    // Metadata
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub ai_difficulty: Option<Difficulty>,
}

impl Game {
    // -----------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------

    /// Create a new game from the standard starting position.
    pub fn new() -> Self {
        Self::with_board(Board::starting())
    }

    /// Create a game from an arbitrary position.
    pub fn with_board(board: Board) -> Self {
        let mut game = Self {
            board,
            active_moves: Vec::new(),
            status: GameStatus::Active,
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            ai_difficulty: None,
        };
        game.refresh_status();
        game
    }

    // -----------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------

    /// The live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Side to move.
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move
    }

    /// Whether the game is over.
    pub fn is_game_over(&self) -> bool {
        self.status.is_game_over()
    }

    /// Legal destinations of the currently selected piece.
    pub fn active_moves(&self) -> &[Square] {
        &self.active_moves
    }

    /// The square of the currently selected piece.
    pub fn selected(&self) -> Option<Square> {
        self.board.selected()
    }

    /// Pieces captured so far in the open turn, for display.
    pub fn pending_captures(&self) -> &[Piece] {
        self.board.pending_captures()
    }

    // -----------------------------------------------------------------
    // Selection
    // -----------------------------------------------------------------

    /// Select the piece on `square` as the one to move this turn and
    /// return its legal destinations.
    ///
    /// Rejected (leaving the game untouched) when the square is empty or
    /// holds an opponent piece, when a capture chain is already in
    /// progress, when the piece has no moves, or when another friendly
    /// piece has a mandatory capture and this one does not.
    pub fn select(&mut self, square: Square) -> Result<&[Square], DraughtsError> {
        if self.status.is_game_over() {
            return Err(DraughtsError::GameOver(self.status));
        }
        if self.board.turn_in_progress() {
            return Err(reject(square, "a capture chain is in progress"));
        }

        let piece = match self.board.piece_at(square) {
            Some(piece) => *piece,
            None => return Err(reject(square, "no piece on that square")),
        };
        if piece.color != self.board.side_to_move {
            return Err(reject(square, "that piece belongs to the opponent"));
        }

        let moves = movegen::legal_moves(&self.board, &piece);
        if moves.is_empty() {
            return Err(reject(square, "that piece cannot move"));
        }
        if !movegen::has_capture(&self.board, &piece)
            && movegen::side_has_capture(&self.board, piece.color)
        {
            return Err(reject(square, "another piece has a mandatory capture"));
        }

        self.board.set_selected(square);
        self.active_moves = moves;
        Ok(&self.active_moves)
    }

    // -----------------------------------------------------------------
    // Moving
    // -----------------------------------------------------------------

    /// Move the selected piece to `dest`.
    ///
    /// `dest` must be one of [`Game::active_moves`]. A jump that lands
    /// where a further capture is available keeps the turn open and
    /// returns [`MoveOutcome::ChainContinues`] with the move set
    /// recomputed for the continuation; anything else closes the turn.
    pub fn move_to(&mut self, dest: Square) -> Result<MoveOutcome, DraughtsError> {
        if self.status.is_game_over() {
            return Err(DraughtsError::GameOver(self.status));
        }
        let from = self.board.selected().ok_or(DraughtsError::NoSelection)?;
        if !self.active_moves.contains(&dest) {
            tracing::debug!(%from, to = %dest, "destination rejected");
            return Err(DraughtsError::InvalidDestination { from, to: dest });
        }

        let was_jump = MoveKind::of(from, dest) == MoveKind::Jump;
        self.board.apply_move(from, dest);

        let moved = *self
            .board
            .piece_at(dest)
            .expect("mover vanished after apply_move");
        if was_jump && movegen::has_capture(&self.board, &moved) {
            self.active_moves = movegen::legal_moves(&self.board, &moved);
            return Ok(MoveOutcome::ChainContinues);
        }

        self.board.end_turn();
        self.active_moves.clear();
        self.refresh_status();
        Ok(MoveOutcome::TurnEnded)
    }

    // -----------------------------------------------------------------
    // AI turn adoption
    // -----------------------------------------------------------------

    /// Replace the live board with a successor produced by the AI's
    /// `play`. The successor already had its turn closed, so only the
    /// status needs refreshing.
    pub fn adopt_turn(&mut self, board: Board) {
        self.board = board;
        self.active_moves.clear();
        self.refresh_status();
    }

    // -----------------------------------------------------------------
    // Status detection
    // -----------------------------------------------------------------

    fn refresh_status(&mut self) {
        if self.board.is_won() {
            let winner = !self.board.side_to_move;
            tracing::info!(%winner, "game over");
            self.status = GameStatus::Won(winner);
        } else {
            self.status = GameStatus::Active;
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

fn reject(square: Square, reason: &str) -> DraughtsError {
    tracing::debug!(%square, reason, "selection rejected");
    DraughtsError::SelectionRejected {
        square,
        reason: reason.to_string(),
    }
}

// =========================================================================
// Tests
// =========================================================================
