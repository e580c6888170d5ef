//! Board state and the turn lifecycle.
//!
//! `Board` owns every live piece plus the per-turn bookkeeping: whose turn
//! it is, which piece is mid-move, and which captures the open turn has
//! produced so far. `Clone` deep-copies all of it, so hypothetical states
//! handed to the search never alias the live game.

use std::fmt;

use crate::engine::movegen;
use crate::engine::types::{Color, MoveKind, Piece, Square, BOARD_SIZE, PIECES_PER_SIDE};

// =========================================================================
// Board
// =========================================================================

/// The full state of a draughts position.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    pieces: Vec<Piece>,
    /// The side whose turn it is. Flips only in `end_turn`.
    pub side_to_move: Color,
    /// Live piece count per side, kept in sync with `pieces` for cheap
    /// win checks.
    counts: [u8; 2],
    /// The piece currently mid-turn, by square. `None` between turns.
    selected: Option<Square>,
    /// Pieces captured during the still-open turn. Already removed from
    /// `pieces` (they cannot be jumped twice), cleared at `end_turn`.
    pending_captures: Vec<Piece>,
}

impl Board {
    // -----------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------

    /// Standard starting position: three rows per side on the dark
    /// squares, Black on rows 0-2, White on rows 5-7, White to move.
    pub fn starting() -> Self {
        let rows_per_side = PIECES_PER_SIDE as u8 / (BOARD_SIZE / 2);
        let mut pieces = Vec::with_capacity(PIECES_PER_SIDE * 2);

        for row in 0..rows_per_side {
            for col in (((row + 1) % 2)..BOARD_SIZE).step_by(2) {
                pieces.push(Piece::new(Color::Black, Square::new(col, row)));
            }
        }
        for row in (BOARD_SIZE - rows_per_side)..BOARD_SIZE {
            for col in (((row + 1) % 2)..BOARD_SIZE).step_by(2) {
                pieces.push(Piece::new(Color::White, Square::new(col, row)));
            }
        }

        Board {
            pieces,
            side_to_move: Color::White,
            counts: [PIECES_PER_SIDE as u8; 2],
            selected: None,
            pending_captures: Vec::new(),
        }
    }

    /// An empty board, White to move. Used together with [`Board::place`]
    /// to build contrived positions in tests.
    pub fn empty() -> Self {
        Board {
            pieces: Vec::new(),
            side_to_move: Color::White,
            counts: [0; 2],
            selected: None,
            pending_captures: Vec::new(),
        }
    }

    /// Put a piece on the board. The square must be free.
    pub fn place(&mut self, piece: Piece) {
        assert!(
            self.piece_at(piece.square).is_none(),
            "place: {} is already occupied",
            piece.square
        );
        self.counts[piece.color.index()] += 1;
        self.pieces.push(piece);
    }

    // -----------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------

    /// All live pieces, in stable order.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// The piece occupying `square`, if any. O(pieces).
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.square == square)
    }

    /// Live piece count for one side.
    pub fn count(&self, color: Color) -> u8 {
        self.counts[color.index()]
    }

    /// The square of the piece currently mid-turn.
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Pieces captured so far in the open turn (for continued-turn
    /// display). Cleared at `end_turn`.
    pub fn pending_captures(&self) -> &[Piece] {
        &self.pending_captures
    }

    /// Whether a capture chain is in progress.
    pub fn turn_in_progress(&self) -> bool {
        !self.pending_captures.is_empty()
    }

    // -----------------------------------------------------------------
    // Mutators
    // -----------------------------------------------------------------

    /// Mark the piece on `square` as the one moving this turn.
    pub fn set_selected(&mut self, square: Square) {
        debug_assert!(self.piece_at(square).is_some(), "selecting empty square");
        self.selected = Some(square);
    }

    /// Apply a single move (step or jump) of the piece on `from` to `to`.
    ///
    /// A jump removes the jumped piece from the board into the pending
    /// capture set and decrements its side's count. The mover becomes the
    /// selected piece. The turn is *not* ended: a jump may continue as a
    /// chain, and the caller decides when to call [`Board::end_turn`].
    ///
    /// Panics if `from` is empty or a jump has no victim; both are
    /// engine contract violations, not user errors.
    pub fn apply_move(&mut self, from: Square, to: Square) {
        if MoveKind::of(from, to) == MoveKind::Jump {
            let mid = from.midpoint(to);
            let victim_idx = self
                .pieces
                .iter()
                .position(|p| p.square == mid)
                .expect("jump with no piece to capture");
            let victim = self.pieces.remove(victim_idx);
            self.counts[victim.color.index()] -= 1;
            self.pending_captures.push(victim);
        }

        // Re-find the mover: a capture above may have shifted indices.
        let mover = self
            .pieces
            .iter_mut()
            .find(|p| p.square == from)
            .expect("apply_move with no piece on the origin square");
        mover.square = to;
        self.selected = Some(to);
    }

    /// Close the current turn: crown the mover if it reached its crown
    /// row, clear the pending captures, pass the turn to the opponent and
    /// drop the selection.
    ///
    /// Panics if no move is in progress.
    pub fn end_turn(&mut self) {
        let mover_sq = self.selected.expect("end_turn without a move in progress");
        let mover = self
            .pieces
            .iter_mut()
            .find(|p| p.square == mover_sq)
            .expect("selected piece is not on the board");

        if !mover.crowned && mover.square.row == mover.color.crown_row() {
            mover.crowned = true;
        }

        self.pending_captures.clear();
        self.side_to_move = !self.side_to_move;
        self.selected = None;
    }

    // -----------------------------------------------------------------
    // Win detection
    // -----------------------------------------------------------------

    /// Whether the game is over, meaning the side to move has lost: it has
    /// no pieces left, or none of its pieces has a legal move. Only
    /// meaningful at the start of that side's turn.
    pub fn is_won(&self) -> bool {
        if self.count(self.side_to_move) == 0 {
            return true;
        }
        !movegen::side_has_move(self, self.side_to_move)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            write!(f, "  {} ", BOARD_SIZE - row)?;
            for col in 0..BOARD_SIZE {
                match self.piece_at(Square::new(col, row)) {
                    Some(piece) => write!(f, "{piece}")?,
                    None => write!(f, ".")?,
                }
                if col < BOARD_SIZE - 1 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "    ")?;
        for col in 0..BOARD_SIZE {
            write!(f, "{}", (b'a' + col) as char)?;
            if col < BOARD_SIZE - 1 {
                write!(f, " ")?;
            }
        }
        writeln!(f)
    }
}

// =========================================================================
// Tests
// =========================================================================
