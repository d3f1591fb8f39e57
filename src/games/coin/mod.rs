//! Heads or Tails.
//!
//! Best of three coin guesses. The coin is biased toward the player's guess
//! by the pity bonus: 50% at no losses, up to 90% after four.

mod game;

pub use game::{CoinGuessGame, CoinRound, CoinSide};
