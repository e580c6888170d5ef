//! Full-turn expansion counts: exhaustive rules correctness suite.
//!
//! Counts every reachable turn-ended state from the standard starting
//! position at a fixed depth and compares against known-correct values
//! for English draughts (a multi-jump chain is a single turn). If a count
//! is wrong at any depth, there is a bug in move generation, mandatory
//! capture, chain continuation, or the turn lifecycle.

use rust_draughts::ai::{expand_side, SearchAi};
use rust_draughts::engine::{legal_moves, Board, Color, Game, GameStatus, MoveKind, Piece, Square};

/// Recursive count of turn-ended states at `depth`.
fn count_turns(state: &Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let turns = expand_side(state);
    if depth == 1 {
        return turns.len() as u64;
    }
    turns.iter().map(|turn| count_turns(turn, depth - 1)).sum()
}

// =====================================================================
// Starting position
// =====================================================================

#[test]
fn turns_start_depth_1() {
    assert_eq!(count_turns(&Board::starting(), 1), 7);
}

#[test]
fn turns_start_depth_2() {
    assert_eq!(count_turns(&Board::starting(), 2), 49);
}

#[test]
fn turns_start_depth_3() {
    assert_eq!(count_turns(&Board::starting(), 3), 302);
}

#[test]
fn turns_start_depth_4() {
    assert_eq!(count_turns(&Board::starting(), 4), 1_469);
}

#[test]
fn turns_start_depth_5() {
    assert_eq!(count_turns(&Board::starting(), 5), 7_361);
}

#[test]
fn turns_start_depth_6() {
    assert_eq!(count_turns(&Board::starting(), 6), 36_768);
}

// =====================================================================
// Opening scenario
// =====================================================================

#[test]
fn opening_position_properties() {
    let board = Board::starting();
    assert!(!board.is_won());
    assert_eq!(board.count(Color::White), 12);
    assert_eq!(board.count(Color::Black), 12);

    for piece in board.pieces() {
        let moves = legal_moves(&board, piece);
        for dest in &moves {
            // Nothing to capture yet anywhere on the board.
            assert_eq!(MoveKind::of(piece.square, *dest), MoveKind::Step);
        }
        if piece.color == board.side_to_move && piece.square.row == 5 {
            assert!(
                (1..=2).contains(&moves.len()),
                "front-row man on {} has {} moves",
                piece.square,
                moves.len()
            );
        }
    }
}

// =====================================================================
// Forced chains through the enumerator
// =====================================================================

#[test]
fn forced_double_jump_is_one_turn() {
    let mut board = Board::empty();
    board.place(Piece::new(Color::White, Square::new(2, 5)));
    board.place(Piece::new(Color::White, Square::new(6, 5)));
    board.place(Piece::new(Color::Black, Square::new(3, 4)));
    board.place(Piece::new(Color::Black, Square::new(5, 2)));
    board.place(Piece::new(Color::Black, Square::new(0, 1)));

    // Mandatory capture shuts out the quiet man on (6, 5), and the chain
    // runs to its end inside the single expanded turn.
    let turns = expand_side(&board);
    assert_eq!(turns.len(), 1);
    assert_eq!(turns[0].count(Color::Black), 1);
    assert!(turns[0].piece_at(Square::new(6, 1)).is_some());
    assert_eq!(turns[0].side_to_move, Color::Black);
}

// =====================================================================
// Depth-zero search
// =====================================================================

#[test]
fn depth_zero_search_expands_nothing() {
    let board = Board::starting();
    let ai = SearchAi::with_depth(Color::White, 0);
    let chosen = ai.play(&board);
    assert_eq!(chosen, board);
}

// =====================================================================
// Self-play smoke test
// =====================================================================

#[test]
fn shallow_self_play_keeps_the_state_consistent() {
    let white = SearchAi::with_depth(Color::White, 1);
    let black = SearchAi::with_depth(Color::Black, 1);
    let mut game = Game::new();

    for _ in 0..120 {
        if game.is_game_over() {
            break;
        }
        let ai = if game.side_to_move() == Color::White {
            &white
        } else {
            &black
        };
        let successor = ai.play(game.board());
        game.adopt_turn(successor);

        let board = game.board();
        // The cached counts always agree with the live piece list.
        for color in [Color::White, Color::Black] {
            let live = board.pieces().iter().filter(|p| p.color == color).count();
            assert_eq!(board.count(color) as usize, live);
        }
        // Nothing ever leaves the dark squares and positions stay unique.
        for (i, piece) in board.pieces().iter().enumerate() {
            assert!(piece.square.is_dark());
            for other in &board.pieces()[i + 1..] {
                assert_ne!(piece.square, other.square);
            }
        }
        assert!(board.pending_captures().is_empty());
    }

    if game.is_game_over() {
        assert!(matches!(game.status(), GameStatus::Won(_)));
    }
}
