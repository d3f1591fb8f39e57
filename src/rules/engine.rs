//! Mini-game trait and the values every game shares.

use serde::{Deserialize, Serialize};

use crate::core::{LossStreak, RandomSource};
use crate::error::Rejection;

/// Final result of one game, from the player's point of view.
///
/// There is no draw: a drawn board counts as a loss.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win,
    Loss,
}

impl GameOutcome {
    #[must_use]
    pub fn is_win(self) -> bool {
        matches!(self, GameOutcome::Win)
    }
}

/// Which mini-game an attempt plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameVariant {
    CoinGuess,
    Hand,
    Board,
}

impl GameVariant {
    /// All variants, in selection order.
    pub const ALL: [GameVariant; 3] = [GameVariant::CoinGuess, GameVariant::Hand, GameVariant::Board];

    /// Display name used by the popup.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            GameVariant::CoinGuess => "Heads or Tails",
            GameVariant::Hand => "Rock Paper Scissors",
            GameVariant::Board => "Tic-Tac-Toe",
        }
    }

    /// One-line instruction shown under the title.
    #[must_use]
    pub const fn objective(self) -> &'static str {
        match self {
            GameVariant::CoinGuess => "Guess correctly 2 out of 3 times to dismiss",
            GameVariant::Hand => "Win 2 rounds to dismiss",
            GameVariant::Board => "Beat the AI to dismiss (you are X)",
        }
    }
}

impl std::fmt::Display for GameVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// A turn-based mini-game.
///
/// Every game splits a player turn into two steps so the caller can pace it:
///
/// 1. [`submit`](MiniGame::submit) accepts the input and marks the game busy.
/// 2. [`resolve`](MiniGame::resolve) draws randomness and records the round.
///
/// ## Implementation Notes
///
/// - `submit` must leave the game untouched when it returns `Err`
/// - `resolve` returns `None` when nothing is pending
/// - Once `outcome` is `Some`, every later `submit` is rejected
pub trait MiniGame {
    /// What the player chooses each turn.
    type Input: Copy + std::fmt::Debug;

    /// What one resolved round records.
    type Round: Clone + std::fmt::Debug;

    fn variant(&self) -> GameVariant;

    /// Loss streak the game was started with.
    fn loss_streak(&self) -> LossStreak;

    /// Accept a player input.
    fn submit(&mut self, input: Self::Input) -> Result<(), Rejection>;

    /// Resolve the pending round, if any.
    fn resolve<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Option<Self::Round>;

    /// Is a round waiting to be resolved?
    fn is_busy(&self) -> bool;

    /// `Some` once the game has finished.
    fn outcome(&self) -> Option<GameOutcome>;

    /// Rounds resolved so far, oldest first.
    fn rounds(&self) -> &[Self::Round];

    // === Convenience Methods ===

    /// Is the game over?
    fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// Submit and immediately resolve, skipping any pacing.
    ///
    /// Returns the last round resolved, or `None` if the input itself ended
    /// the game.
    fn play_round<R: RandomSource + ?Sized>(
        &mut self,
        input: Self::Input,
        rng: &mut R,
    ) -> Result<Option<Self::Round>, Rejection> {
        self.submit(input)?;
        Ok(self.resolve(rng))
    }
}
