//! Engine configuration.
//!
//! Only presentation pacing, seeding and search tuning are configurable.
//! The rules of each game and the pity curve are fixed.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::rules::GameVariant;
use crate::search::SearchConfig;

/// Delays, in milliseconds, between an event and its visible consequence.
///
/// Defaults match the animation timings of the reminder popup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pacing {
    /// Coin spin before the side is revealed.
    pub coin_flip_ms: u64,

    /// Hand-game reveal (nine 100 ms animation frames).
    pub hand_reveal_ms: u64,

    /// Board opponent "thinking" before it moves.
    pub board_reply_ms: u64,

    /// Pause on the final coin result before the verdict is signalled.
    pub coin_verdict_ms: u64,

    /// Pause on the final hand-game result before the verdict is signalled.
    pub hand_verdict_ms: u64,

    /// Pause on the final board before the verdict is signalled.
    pub board_verdict_ms: u64,

    /// Pause between a lost game and the next one becoming playable.
    pub restart_ms: u64,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            coin_flip_ms: 800,
            hand_reveal_ms: 900,
            board_reply_ms: 600,
            coin_verdict_ms: 1000,
            hand_verdict_ms: 1200,
            board_verdict_ms: 1200,
            restart_ms: 500,
        }
    }
}

impl Pacing {
    /// Every callback fires as soon as the clock is advanced at all.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            coin_flip_ms: 0,
            hand_reveal_ms: 0,
            board_reply_ms: 0,
            coin_verdict_ms: 0,
            hand_verdict_ms: 0,
            board_verdict_ms: 0,
            restart_ms: 0,
        }
    }

    /// Delay before a pending round of `variant` resolves.
    #[must_use]
    pub fn resolve_delay(&self, variant: GameVariant) -> Duration {
        Duration::from_millis(match variant {
            GameVariant::CoinGuess => self.coin_flip_ms,
            GameVariant::Hand => self.hand_reveal_ms,
            GameVariant::Board => self.board_reply_ms,
        })
    }

    /// Delay between a finished game and its win/loss signal.
    #[must_use]
    pub fn verdict_delay(&self, variant: GameVariant) -> Duration {
        Duration::from_millis(match variant {
            GameVariant::CoinGuess => self.coin_verdict_ms,
            GameVariant::Hand => self.hand_verdict_ms,
            GameVariant::Board => self.board_verdict_ms,
        })
    }

    #[must_use]
    pub fn restart_delay(&self) -> Duration {
        Duration::from_millis(self.restart_ms)
    }
}

/// Top-level engine configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Seed for variant selection and in-game draws.
    /// `None` seeds from the operating system.
    pub seed: Option<u64>,

    /// Presentation delays.
    pub pacing: Pacing,

    /// Board opponent search settings.
    pub search: SearchConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            pacing: Pacing::default(),
            search: SearchConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Use a fixed seed so a session can be replayed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    #[must_use]
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }
}
