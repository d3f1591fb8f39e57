//! Pity mechanic: how much a losing streak tilts the odds toward the player.
//!
//! Every game reads the same bonus but spends it differently:
//! - Coin guess: added to the 50% chance of guessing right
//! - Hand game: probability the opponent throws the sign the player beats
//! - Board game: subtracted from the opponent's 70% chance of playing optimally

use serde::{Deserialize, Serialize};

/// Bonus granted per consecutive loss.
pub const PITY_STEP: f64 = 0.1;

/// Upper bound on the bonus, reached after four losses.
pub const PITY_CAP: f64 = 0.4;

/// Pity bonus for a streak: `min(streak * 0.1, 0.4)`.
///
/// ```
/// use pity_games::core::pity_bonus;
///
/// assert_eq!(pity_bonus(0), 0.0);
/// assert_eq!(pity_bonus(2), 0.2);
/// assert_eq!(pity_bonus(9), 0.4);
/// ```
#[must_use]
pub fn pity_bonus(loss_streak: u32) -> f64 {
    (f64::from(loss_streak) * PITY_STEP).min(PITY_CAP)
}

/// Whole-percent bonus as the popup shows it ("Luck +N%").
#[must_use]
pub fn luck_percent(loss_streak: u32) -> u32 {
    loss_streak.saturating_mul(10).min(40)
}

/// Number of consecutive lost games in the current session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LossStreak(pub u32);

impl LossStreak {
    /// A fresh streak.
    pub const ZERO: LossStreak = LossStreak(0);

    #[must_use]
    pub const fn new(losses: u32) -> Self {
        Self(losses)
    }

    /// Raw number of losses.
    #[must_use]
    pub const fn count(self) -> u32 {
        self.0
    }

    /// Record one more loss.
    pub fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }

    /// See [`pity_bonus`].
    #[must_use]
    pub fn bonus(self) -> f64 {
        pity_bonus(self.0)
    }

    /// See [`luck_percent`].
    #[must_use]
    pub fn luck_percent(self) -> u32 {
        luck_percent(self.0)
    }
}

impl std::fmt::Display for LossStreak {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} loss(es), luck +{}%", self.0, self.luck_percent())
    }
}
