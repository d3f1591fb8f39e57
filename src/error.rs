//! Rejected-input reasons.
//!
//! Nothing in the engine can fail at runtime. A move that arrives at the wrong
//! moment is simply not applied, and the caller gets a [`Rejection`] saying
//! why. Ignoring it is always safe: the game state is untouched.

use thiserror::Error;

use crate::rules::GameVariant;

/// Why a player input was ignored.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Rejection {
    #[error("a round is still resolving")]
    Busy,

    #[error("the game is already over")]
    GameOver,

    #[error("it is not the player's turn")]
    NotPlayerTurn,

    #[error("cell {index} is outside the 3x3 board")]
    CellOutOfRange { index: usize },

    #[error("cell {index} is already occupied")]
    CellOccupied { index: usize },

    #[error("input does not belong to {variant}")]
    WrongGame { variant: GameVariant },

    #[error("no game is accepting input")]
    NoActiveGame,
}

/// Failure to read a board from its text form.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ParseBoardError {
    #[error("expected 9 cells, got {got}")]
    WrongLength { got: usize },

    #[error("invalid character '{character}' at cell {position} (expected 'X', 'O' or '.')")]
    InvalidCell { character: char, position: usize },
}
