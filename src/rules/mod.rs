//! Shared contract for the mini-games.
//!
//! Games implement [`MiniGame`] to define:
//! - How a player input starts a round
//! - How a pending round resolves against a random source
//! - When the game is over and who won
//!
//! The session controller drives games only through this contract.

pub mod engine;

pub use engine::{GameOutcome, GameVariant, MiniGame};
