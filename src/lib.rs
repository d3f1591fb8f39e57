//! # pity-games
//!
//! Adaptive mini-game engine for dismissing reminders.
//!
//! A reminder popup only goes away once the user wins a short game. Every
//! lost game raises a pity bonus that tilts the next game toward the player,
//! up to a cap.
//!
//! ## Design Principles
//!
//! 1. **Games are plain data**: No game owns randomness or timers. Draws come
//!    from a [`RandomSource`] passed in at resolution time, pacing from the
//!    session [`Timeline`](session::Timeline).
//!
//! 2. **One contract**: Games implement [`MiniGame`]; the session drives them
//!    through the [`ActiveGame`] tagged union and never special-cases rules.
//!
//! 3. **Rejections are not errors**: Input at the wrong moment is ignored and
//!    reported as a [`Rejection`]; nothing in a session can fail.
//!
//! ## Modules
//!
//! - `core`: RNG, pity curve, configuration
//! - `rules`: `MiniGame` trait, outcomes, variants
//! - `games`: Heads or Tails, Rock Paper Scissors, Tic-Tac-Toe
//! - `search`: Minimax for the board opponent
//! - `session`: Game selection, loss streak, pacing, win callback

pub mod core;
pub mod error;
pub mod games;
pub mod rules;
pub mod search;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    luck_percent, pity_bonus, EngineConfig, GameRng, LossStreak, Pacing, RandomSource,
    ScriptedRandom,
};

pub use crate::error::{ParseBoardError, Rejection};

pub use crate::rules::{GameOutcome, GameVariant, MiniGame};

pub use crate::games::{ActiveGame, PlayerInput, RoundRecord};
pub use crate::games::board::{Board, BoardGame, BoardMove, Mark};
pub use crate::games::coin::{CoinGuessGame, CoinRound, CoinSide};
pub use crate::games::hand::{HandGame, HandRound, HandSign, RoundResult};

pub use crate::search::{GameTreeSearch, SearchConfig, SearchStats};

pub use crate::session::{AttemptRecord, Phase, SessionBuilder, SessionController, SessionStatus};
