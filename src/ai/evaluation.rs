//! Static position evaluation.
//!
//! Scores a board from a fixed perspective (the AI's own color):
//! material plus crown weight, a flat win/loss bonus for terminal
//! positions, and a tempo penalty so that equal outcomes prefer the
//! shorter path.

use crate::engine::board::Board;
use crate::engine::types::Color;

/// Infinity sentinel for search bounds. Larger than any reachable value.
pub const INF: i32 = 1_000;

/// Terminal bonus: the side to move in a won position is the loser.
pub const WIN: i32 = 20;

/// Value of an uncrowned man.
pub const MAN: i32 = 1;

/// Value of a king.
pub const KING: i32 = 2;

/// Evaluate `state` from `perspective`'s point of view at search depth
/// `depth`.
///
/// A won position (the side to move is stuck) scores ±[`WIN`]; anything
/// else sums ±[`MAN`]/±[`KING`] over the live pieces. The depth is
/// subtracted either way, preferring faster wins and slower losses when
/// values otherwise tie.
pub fn evaluate(state: &Board, perspective: Color, depth: u32) -> i32 {
    let value = if state.is_won() {
        if state.side_to_move == perspective {
            -WIN
        } else {
            WIN
        }
    } else {
        state
            .pieces()
            .iter()
            .map(|piece| {
                let value = if piece.crowned { KING } else { MAN };
                if piece.color == perspective {
                    value
                } else {
                    -value
                }
            })
            .sum()
    };
    value - depth as i32
}

// =========================================================================
// Tests
// =========================================================================
