//! Legal move generation for a single piece.
//!
//! Two-pass rule: captures are collected first over the piece's diagonal
//! directions, and any available capture suppresses every simple move for
//! that piece. A returned move set therefore never mixes step and jump
//! destinations.
//!
//! Side-level mandatory capture (no piece may make a simple move while any
//! friendly piece can capture) is a selection rule, enforced by callers
//! through [`side_has_capture`]; the helpers here expose what they need.

use crate::engine::board::Board;
use crate::engine::types::{Color, Piece, Square};

// =========================================================================
// Public API
// =========================================================================

/// All legal destinations for `piece`. Jumps if any exist, otherwise
/// steps; empty when the piece is boxed in.
pub fn legal_moves(board: &Board, piece: &Piece) -> Vec<Square> {
    let mut jumps = Vec::new();
    for &(dc, dr) in piece.directions() {
        if let Some(dest) = capture_dest(board, piece, dc, dr) {
            jumps.push(dest);
        }
    }
    if !jumps.is_empty() {
        return jumps;
    }

    let mut steps = Vec::new();
    for &(dc, dr) in piece.directions() {
        if let Some(dest) = piece.square.offset(dc, dr) {
            if board.piece_at(dest).is_none() {
                steps.push(dest);
            }
        }
    }
    steps
}

/// Legal destinations for the piece on `square`; empty when the square is.
pub fn legal_moves_from(board: &Board, square: Square) -> Vec<Square> {
    match board.piece_at(square) {
        Some(piece) => legal_moves(board, piece),
        None => Vec::new(),
    }
}

/// Whether `piece` has at least one capture available.
pub fn has_capture(board: &Board, piece: &Piece) -> bool {
    piece
        .directions()
        .iter()
        .any(|&(dc, dr)| capture_dest(board, piece, dc, dr).is_some())
}

/// Whether any piece of `color` has a capture available. While true, only
/// capturing pieces may be selected for that side's turn.
pub fn side_has_capture(board: &Board, color: Color) -> bool {
    board
        .pieces()
        .iter()
        .filter(|p| p.color == color)
        .any(|p| has_capture(board, p))
}

/// Whether any piece of `color` can move at all.
pub fn side_has_move(board: &Board, color: Color) -> bool {
    board
        .pieces()
        .iter()
        .filter(|p| p.color == color)
        .any(|p| !legal_moves(board, p).is_empty())
}

// =========================================================================
// Capture test (internal)
// =========================================================================

/// Landing square of a capture in direction `(dc, dr)`, if one is legal:
/// the adjacent square holds an opposing piece and the square beyond it is
/// on-board and empty.
fn capture_dest(board: &Board, piece: &Piece, dc: i8, dr: i8) -> Option<Square> {
    let mid = piece.square.offset(dc, dr)?;
    let dest = piece.square.offset(dc * 2, dr * 2)?;
    let victim = board.piece_at(mid)?;
    if victim.color != piece.color && board.piece_at(dest).is_none() {
        Some(dest)
    } else {
        None
    }
}

// =========================================================================
// Tests
// =========================================================================
