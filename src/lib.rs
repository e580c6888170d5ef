//! English draughts (checkers) rules engine with a minimax opponent.
//!
//! The crate has two layers: [`engine`] owns the board state and the move
//! rules (mandatory capture, multi-jump chains, crowning, win detection),
//! and [`ai`] enumerates whole turns on top of it and picks one by
//! depth-limited minimax with alpha-beta pruning. A presentation layer
//! (like the terminal driver in `main.rs`) talks to [`engine::Game`] for
//! the human side and adopts [`ai::SearchAi::play`]'s successor state for
//! the computer side.

pub mod ai;
pub mod config;
pub mod engine;
