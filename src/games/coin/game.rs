//! Coin guess implementation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{LossStreak, RandomSource};
use crate::error::Rejection;
use crate::rules::{GameOutcome, GameVariant, MiniGame};

/// Correct guesses needed to win, and misses that lose.
const DECISIVE: usize = 2;

/// Rounds in a best of three.
const MAX_ROUNDS: usize = 3;

/// Base chance of a correct guess.
const BASE_WIN_CHANCE: f64 = 0.5;

/// A face of the coin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoinSide {
    Heads,
    Tails,
}

impl CoinSide {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            CoinSide::Heads => CoinSide::Tails,
            CoinSide::Tails => CoinSide::Heads,
        }
    }

    /// Single-letter label ("H" / "T").
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            CoinSide::Heads => 'H',
            CoinSide::Tails => 'T',
        }
    }
}

/// One resolved flip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinRound {
    pub guess: CoinSide,
    pub actual: CoinSide,
    pub correct: bool,
}

/// Coin guess state for one attempt.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CoinGuessGame {
    loss_streak: LossStreak,
    /// Guess waiting for its flip to land.
    pending: Option<CoinSide>,
    rounds: SmallVec<[CoinRound; MAX_ROUNDS]>,
    outcome: Option<GameOutcome>,
}

impl CoinGuessGame {
    /// Start a fresh best of three.
    #[must_use]
    pub fn new(loss_streak: LossStreak) -> Self {
        Self {
            loss_streak,
            pending: None,
            rounds: SmallVec::new(),
            outcome: None,
        }
    }

    /// Chance that the coin lands on the guessed side.
    #[must_use]
    pub fn win_chance(&self) -> f64 {
        BASE_WIN_CHANCE + self.loss_streak.bonus()
    }

    /// Call a side. The flip lands on the next [`resolve`](Self::resolve).
    pub fn guess(&mut self, side: CoinSide) -> Result<(), Rejection> {
        if self.outcome.is_some() {
            return Err(Rejection::GameOver);
        }
        if self.pending.is_some() {
            return Err(Rejection::Busy);
        }
        self.pending = Some(side);
        Ok(())
    }

    /// Land the pending flip.
    pub fn resolve<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Option<CoinRound> {
        let guess = self.pending.take()?;

        let correct = rng.next_unit() < self.win_chance();
        let actual = if correct { guess } else { guess.opposite() };
        let round = CoinRound { guess, actual, correct };
        self.rounds.push(round);

        log::trace!(
            "coin round {}: guessed {:?}, landed {:?}",
            self.rounds.len(),
            guess,
            actual
        );

        if self.correct_count() >= DECISIVE {
            self.outcome = Some(GameOutcome::Win);
        } else if self.miss_count() >= DECISIVE {
            self.outcome = Some(GameOutcome::Loss);
        }

        Some(round)
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.rounds.iter().filter(|r| r.correct).count()
    }

    #[must_use]
    pub fn miss_count(&self) -> usize {
        self.rounds.iter().filter(|r| !r.correct).count()
    }

    /// The "Round N of 3" indicator.
    #[must_use]
    pub fn round_number(&self) -> usize {
        (self.rounds.len() + 1).min(MAX_ROUNDS)
    }

    #[must_use]
    pub fn last_round(&self) -> Option<&CoinRound> {
        self.rounds.last()
    }
}

impl MiniGame for CoinGuessGame {
    type Input = CoinSide;
    type Round = CoinRound;

    fn variant(&self) -> GameVariant {
        GameVariant::CoinGuess
    }

    fn loss_streak(&self) -> LossStreak {
        self.loss_streak
    }

    fn submit(&mut self, input: CoinSide) -> Result<(), Rejection> {
        self.guess(input)
    }

    fn resolve<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Option<CoinRound> {
        CoinGuessGame::resolve(self, rng)
    }

    fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    fn rounds(&self) -> &[CoinRound] {
        &self.rounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedRandom;

    #[test]
    fn test_win_chance_follows_streak() {
        assert_eq!(CoinGuessGame::new(LossStreak::ZERO).win_chance(), 0.5);
        assert!((CoinGuessGame::new(LossStreak::new(2)).win_chance() - 0.7).abs() < 1e-12);
        assert!((CoinGuessGame::new(LossStreak::new(10)).win_chance() - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_guess_while_pending_is_rejected() {
        let mut game = CoinGuessGame::new(LossStreak::ZERO);
        game.guess(CoinSide::Heads).unwrap();

        assert_eq!(game.guess(CoinSide::Tails), Err(Rejection::Busy));
        assert!(game.is_busy());
        assert!(game.rounds().is_empty());
    }

    #[test]
    fn test_resolve_without_guess_does_nothing() {
        let mut game = CoinGuessGame::new(LossStreak::ZERO);
        let mut rng = ScriptedRandom::constant(0.0);
        assert!(game.resolve(&mut rng).is_none());
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn test_hit_lands_on_guess() {
        let mut game = CoinGuessGame::new(LossStreak::ZERO);
        let mut rng = ScriptedRandom::constant(0.49);

        let round = game.play_round(CoinSide::Tails, &mut rng).unwrap().unwrap();
        assert_eq!(round.actual, CoinSide::Tails);
        assert!(round.correct);
        assert!(!game.is_busy());
    }

    #[test]
    fn test_miss_lands_on_opposite() {
        let mut game = CoinGuessGame::new(LossStreak::ZERO);
        let mut rng = ScriptedRandom::constant(0.5);

        let round = game.play_round(CoinSide::Heads, &mut rng).unwrap().unwrap();
        assert_eq!(round.actual, CoinSide::Tails);
        assert!(!round.correct);
    }

    #[test]
    fn test_two_hits_win() {
        let mut game = CoinGuessGame::new(LossStreak::ZERO);
        let mut rng = ScriptedRandom::constant(0.1);

        game.play_round(CoinSide::Heads, &mut rng).unwrap();
        assert_eq!(game.outcome(), None);
        assert_eq!(game.round_number(), 2);

        game.play_round(CoinSide::Heads, &mut rng).unwrap();
        assert_eq!(game.outcome(), Some(GameOutcome::Win));
        assert_eq!(game.guess(CoinSide::Heads), Err(Rejection::GameOver));
    }

    #[test]
    fn test_split_rounds_go_to_three() {
        let mut game = CoinGuessGame::new(LossStreak::ZERO);
        let mut rng = ScriptedRandom::new([0.9, 0.1, 0.9]);

        for _ in 0..3 {
            game.play_round(CoinSide::Heads, &mut rng).unwrap();
        }

        assert_eq!(game.rounds().len(), 3);
        assert_eq!(game.correct_count(), 1);
        assert_eq!(game.miss_count(), 2);
        assert_eq!(game.round_number(), 3);
        assert_eq!(game.outcome(), Some(GameOutcome::Loss));
    }

    #[test]
    fn test_pity_turns_a_miss_into_a_hit() {
        // 0.6 misses at 50% but hits at 70%
        let mut plain = CoinGuessGame::new(LossStreak::ZERO);
        let mut pitied = CoinGuessGame::new(LossStreak::new(2));

        let plain_round = plain.play_round(CoinSide::Heads, &mut ScriptedRandom::constant(0.6));
        let pitied_round = pitied.play_round(CoinSide::Heads, &mut ScriptedRandom::constant(0.6));

        assert!(!plain_round.unwrap().unwrap().correct);
        assert!(pitied_round.unwrap().unwrap().correct);
    }

    #[test]
    fn test_serialization() {
        let mut game = CoinGuessGame::new(LossStreak::new(1));
        game.play_round(CoinSide::Tails, &mut ScriptedRandom::constant(0.0)).unwrap();

        let json = serde_json::to_string(&game).unwrap();
        let restored: CoinGuessGame = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.rounds(), game.rounds());
        assert_eq!(restored.loss_streak(), LossStreak::new(1));
    }
}
