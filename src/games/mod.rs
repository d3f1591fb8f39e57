//! The three mini-games and the tagged union the session drives.
//!
//! Each game is self-contained and implements [`MiniGame`]. The session never
//! names a concrete game: it holds an [`ActiveGame`] and routes
//! [`PlayerInput`] through it.

pub mod board;
pub mod coin;
pub mod hand;

use serde::{Deserialize, Serialize};

use crate::core::{LossStreak, RandomSource};
use crate::error::Rejection;
use crate::rules::{GameOutcome, GameVariant, MiniGame};
use crate::search::SearchConfig;

use board::{BoardGame, BoardMove};
use coin::{CoinGuessGame, CoinRound, CoinSide};
use hand::{HandGame, HandRound, HandSign};

/// A player action for whichever game is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerInput {
    /// Call a side of the coin.
    Guess(CoinSide),
    /// Throw a hand sign.
    Throw(HandSign),
    /// Mark a board cell (0..9, row-major).
    Cell(usize),
}

/// A resolved round of any game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundRecord {
    Coin(CoinRound),
    Hand(HandRound),
    Board(BoardMove),
}

/// The game an attempt is playing.
#[derive(Clone, Debug)]
pub enum ActiveGame {
    CoinGuess(CoinGuessGame),
    Hand(HandGame),
    Board(BoardGame),
}

impl ActiveGame {
    /// Start a fresh game of `variant`.
    #[must_use]
    pub fn start(variant: GameVariant, loss_streak: LossStreak, search: &SearchConfig) -> Self {
        match variant {
            GameVariant::CoinGuess => ActiveGame::CoinGuess(CoinGuessGame::new(loss_streak)),
            GameVariant::Hand => ActiveGame::Hand(HandGame::new(loss_streak)),
            GameVariant::Board => {
                ActiveGame::Board(BoardGame::with_search(loss_streak, search.clone()))
            }
        }
    }

    #[must_use]
    pub fn variant(&self) -> GameVariant {
        match self {
            ActiveGame::CoinGuess(game) => game.variant(),
            ActiveGame::Hand(game) => game.variant(),
            ActiveGame::Board(game) => game.variant(),
        }
    }

    #[must_use]
    pub fn loss_streak(&self) -> LossStreak {
        match self {
            ActiveGame::CoinGuess(game) => game.loss_streak(),
            ActiveGame::Hand(game) => game.loss_streak(),
            ActiveGame::Board(game) => game.loss_streak(),
        }
    }

    /// Route an input to the game. Inputs for another game are rejected.
    pub fn submit(&mut self, input: PlayerInput) -> Result<(), Rejection> {
        match (self, input) {
            (ActiveGame::CoinGuess(game), PlayerInput::Guess(side)) => game.submit(side),
            (ActiveGame::Hand(game), PlayerInput::Throw(sign)) => game.submit(sign),
            (ActiveGame::Board(game), PlayerInput::Cell(cell)) => game.submit(cell),
            (game, _) => Err(Rejection::WrongGame {
                variant: game.variant(),
            }),
        }
    }

    /// Resolve whatever the game is waiting on.
    pub fn resolve<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Option<RoundRecord> {
        match self {
            ActiveGame::CoinGuess(game) => game.resolve(rng).map(RoundRecord::Coin),
            ActiveGame::Hand(game) => game.resolve(rng).map(RoundRecord::Hand),
            ActiveGame::Board(game) => game.resolve(rng).map(RoundRecord::Board),
        }
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        match self {
            ActiveGame::CoinGuess(game) => game.is_busy(),
            ActiveGame::Hand(game) => game.is_busy(),
            ActiveGame::Board(game) => game.is_busy(),
        }
    }

    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self {
            ActiveGame::CoinGuess(game) => game.outcome(),
            ActiveGame::Hand(game) => game.outcome(),
            ActiveGame::Board(game) => game.outcome(),
        }
    }

    /// Rounds resolved so far (board: marks placed).
    #[must_use]
    pub fn round_count(&self) -> usize {
        match self {
            ActiveGame::CoinGuess(game) => game.rounds().len(),
            ActiveGame::Hand(game) => game.rounds().len(),
            ActiveGame::Board(game) => game.rounds().len(),
        }
    }

    #[must_use]
    pub fn as_coin(&self) -> Option<&CoinGuessGame> {
        match self {
            ActiveGame::CoinGuess(game) => Some(game),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_hand(&self) -> Option<&HandGame> {
        match self {
            ActiveGame::Hand(game) => Some(game),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_board(&self) -> Option<&BoardGame> {
        match self {
            ActiveGame::Board(game) => Some(game),
            _ => None,
        }
    }
}
