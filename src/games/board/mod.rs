//! Tic-Tac-Toe against a minimax opponent.
//!
//! The player is X and moves first. The opponent plays the searched move with
//! probability `max(0.3, 0.7 - bonus)` and a random empty cell otherwise.
//! A draw counts as a loss.

mod board;
mod game;

pub use board::{Board, EmptyCells, Mark, CELLS, WINNING_LINES};
pub use game::{BoardGame, BoardMove};
