//! Rock Paper Scissors.
//!
//! First to two round wins; draws are replayed. With pity active the
//! opponent sometimes throws the sign the player beats on purpose.

mod game;

pub use game::{HandGame, HandRound, HandSign, RoundResult};
