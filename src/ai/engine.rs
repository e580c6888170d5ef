//! Computer opponent: full-turn enumeration and minimax search.
//!
//! The search works on whole turns, not single piece-steps: a capture
//! that lands where another capture is available must continue with the
//! same piece, so one search edge may contain an entire jump chain.
//! `expand_piece`/`expand_side` enumerate every turn-ended successor
//! state a side can reach, each one an independently owned `Board`, and
//! `SearchAi` runs depth-limited minimax with alpha-beta pruning over
//! them.
//!
//! Candidate order is shuffled uniformly at every level so that
//! equally-valued turns are not deterministically biased.

use rand::seq::SliceRandom;

use crate::ai::evaluation::{self, INF};
use crate::engine::board::Board;
use crate::engine::movegen;
use crate::engine::types::{Color, Difficulty, MoveKind, Square};

// =========================================================================
// Turn enumeration
// =========================================================================

/// All turn-ended states reachable by the piece on `from`, one per
/// complete move or capture chain.
///
/// Each destination is applied to a fresh copy of `state`; if the step
/// was a jump and the moved piece has a further capture available, the
/// chain continues recursively instead of ending the turn. Branching
/// chains yield one state per distinct capture path.
pub fn expand_piece(state: &Board, from: Square) -> Vec<Board> {
    let piece = *state
        .piece_at(from)
        .expect("expand_piece on an empty square");
    let moves = movegen::legal_moves(state, &piece);

    let mut turns = Vec::new();
    for dest in moves {
        let mut next = state.clone();
        let was_jump = MoveKind::of(from, dest) == MoveKind::Jump;
        next.apply_move(from, dest);

        let moved = *next.piece_at(dest).expect("mover vanished after apply_move");
        if was_jump && movegen::has_capture(&next, &moved) {
            turns.extend(expand_piece(&next, dest));
        } else {
            next.end_turn();
            turns.push(next);
        }
    }
    turns
}

/// All turn-ended states reachable by the side to move.
///
/// Mandatory capture applies side-wide: while any piece can capture,
/// only capturing pieces are expanded. Empty iff the side has no legal
/// move at all.
pub fn expand_side(state: &Board) -> Vec<Board> {
    let to_move = state.side_to_move;
    let must_capture = movegen::side_has_capture(state, to_move);

    let mut turns = Vec::new();
    for piece in state.pieces() {
        if piece.color != to_move {
            continue;
        }
        let eligible = if must_capture {
            movegen::has_capture(state, piece)
        } else {
            !movegen::legal_moves(state, piece).is_empty()
        };
        if eligible {
            turns.extend(expand_piece(state, piece.square));
        }
    }
    turns
}

// =========================================================================
// SearchAi
// =========================================================================

/// Minimax opponent for one side, parameterized only by its search depth.
#[derive(Clone, Copy, Debug)]
pub struct SearchAi {
    color: Color,
    depth_limit: u32,
}

impl SearchAi {
    pub fn new(color: Color, difficulty: Difficulty) -> Self {
        Self {
            color,
            depth_limit: difficulty.depth(),
        }
    }

    /// Build with a raw depth limit instead of a named difficulty.
    pub fn with_depth(color: Color, depth_limit: u32) -> Self {
        Self { color, depth_limit }
    }

    /// The side this AI plays.
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn depth_limit(&self) -> u32 {
        self.depth_limit
    }

    /// Pick this side's turn: returns the successor state chosen by the
    /// search, with its turn already ended. The caller replaces the live
    /// board with it wholesale.
    pub fn play(&self, state: &Board) -> Board {
        debug_assert_eq!(state.side_to_move, self.color, "play called off-turn");
        let (successor, value) =
            self.search(state.clone(), -INF, INF, 0, self.depth_limit, true);
        tracing::debug!(value, depth_limit = self.depth_limit, "search chose a turn");
        successor
    }

    /// Depth-limited minimax over full turns.
    ///
    /// Returns the chosen immediate successor of `state` together with
    /// its backed-up value, or `state` itself, unexpanded, when the
    /// depth limit is already reached or the position is won. Pruning
    /// stops sibling evaluation as soon as the best value found so far
    /// meets the incoming opposing bound; running bounds are threaded
    /// into child calls. Ties keep the first candidate in shuffled order.
    ///
    /// Panics if a non-terminal position yields no candidate turns; the
    /// terminal check above rules that out for any consistent state.
    pub fn search(
        &self,
        state: Board,
        alpha: i32,
        beta: i32,
        depth: u32,
        depth_limit: u32,
        maximizing: bool,
    ) -> (Board, i32) {
        if depth == depth_limit || state.is_won() {
            let value = evaluation::evaluate(&state, self.color, depth);
            return (state, value);
        }

        let mut candidates = expand_side(&state);
        assert!(
            !candidates.is_empty(),
            "non-terminal position produced no successor turns"
        );
        candidates.shuffle(&mut rand::thread_rng());

        let mut alpha = alpha;
        let mut beta = beta;
        let mut best: Option<(Board, i32)> = None;
        for candidate in candidates {
            let value =
                self.minimax(&candidate, alpha, beta, depth + 1, depth_limit, !maximizing);

            let improves = match &best {
                None => true,
                Some((_, best_value)) => {
                    if maximizing {
                        value > *best_value
                    } else {
                        value < *best_value
                    }
                }
            };
            if improves {
                best = Some((candidate, value));
            }

            let best_value = best.as_ref().map(|(_, v)| *v).unwrap();
            if maximizing {
                alpha = alpha.max(best_value);
                if best_value >= beta {
                    break;
                }
            } else {
                beta = beta.min(best_value);
                if best_value <= alpha {
                    break;
                }
            }
        }
        best.expect("at least one candidate was evaluated")
    }

    /// Value-only recursion behind [`SearchAi::search`]; same terminal
    /// conditions, expansion, shuffle and pruning policy.
    fn minimax(
        &self,
        state: &Board,
        alpha: i32,
        beta: i32,
        depth: u32,
        depth_limit: u32,
        maximizing: bool,
    ) -> i32 {
        if depth == depth_limit || state.is_won() {
            return evaluation::evaluate(state, self.color, depth);
        }

        let mut candidates = expand_side(state);
        assert!(
            !candidates.is_empty(),
            "non-terminal position produced no successor turns"
        );
        candidates.shuffle(&mut rand::thread_rng());

        let mut alpha = alpha;
        let mut beta = beta;
        if maximizing {
            let mut best = -INF;
            for candidate in &candidates {
                let value = self.minimax(candidate, alpha, beta, depth + 1, depth_limit, false);
                best = best.max(value);
                alpha = alpha.max(best);
                if best >= beta {
                    break;
                }
            }
            best
        } else {
            let mut best = INF;
            for candidate in &candidates {
                let value = self.minimax(candidate, alpha, beta, depth + 1, depth_limit, true);
                best = best.min(value);
                beta = beta.min(best);
                if best <= alpha {
                    break;
                }
            }
            best
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
