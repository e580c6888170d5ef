pub mod board;
pub mod game;
pub mod movegen;
pub mod types;

pub use board::Board;
pub use game::{Game, MoveOutcome};
pub use movegen::{legal_moves, legal_moves_from};
pub use types::*;
