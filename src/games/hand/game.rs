//! Hand game implementation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{LossStreak, RandomSource};
use crate::error::Rejection;
use crate::rules::{GameOutcome, GameVariant, MiniGame};

/// Round wins needed by either side.
const WINS_NEEDED: usize = 2;

/// A throw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandSign {
    Rock,
    Paper,
    Scissors,
}

impl HandSign {
    /// All signs, in the order the opponent draws from.
    pub const ALL: [HandSign; 3] = [HandSign::Rock, HandSign::Paper, HandSign::Scissors];

    /// The sign this one beats.
    #[must_use]
    pub const fn beats(self) -> HandSign {
        match self {
            HandSign::Rock => HandSign::Scissors,
            HandSign::Paper => HandSign::Rock,
            HandSign::Scissors => HandSign::Paper,
        }
    }

    /// The sign that beats this one.
    #[must_use]
    pub const fn beaten_by(self) -> HandSign {
        match self {
            HandSign::Rock => HandSign::Paper,
            HandSign::Paper => HandSign::Scissors,
            HandSign::Scissors => HandSign::Rock,
        }
    }

    /// Result of throwing `self` against `other`.
    #[must_use]
    pub fn against(self, other: HandSign) -> RoundResult {
        if self == other {
            RoundResult::Draw
        } else if self.beats() == other {
            RoundResult::Win
        } else {
            RoundResult::Lose
        }
    }
}

/// Round result from the player's side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundResult {
    Win,
    Lose,
    Draw,
}

impl RoundResult {
    /// History badge ("W" / "L" / "D").
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            RoundResult::Win => 'W',
            RoundResult::Lose => 'L',
            RoundResult::Draw => 'D',
        }
    }
}

/// One resolved exchange.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandRound {
    pub player: HandSign,
    pub opponent: HandSign,
    pub result: RoundResult,
    /// The opponent's sign was picked by pity rather than drawn.
    pub forced: bool,
}

/// Hand game state for one attempt.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HandGame {
    loss_streak: LossStreak,
    pending: Option<HandSign>,
    /// Draws make the history longer than three.
    rounds: SmallVec<[HandRound; 4]>,
    outcome: Option<GameOutcome>,
}

impl HandGame {
    #[must_use]
    pub fn new(loss_streak: LossStreak) -> Self {
        Self {
            loss_streak,
            pending: None,
            rounds: SmallVec::new(),
            outcome: None,
        }
    }

    /// Probability that the opponent is forced onto the sign the player beats.
    #[must_use]
    pub fn pity_chance(&self) -> f64 {
        self.loss_streak.bonus()
    }

    /// Throw a sign. The opponent answers on the next [`resolve`](Self::resolve).
    pub fn play(&mut self, choice: HandSign) -> Result<(), Rejection> {
        if self.outcome.is_some() {
            return Err(Rejection::GameOver);
        }
        if self.pending.is_some() {
            return Err(Rejection::Busy);
        }
        self.pending = Some(choice);
        Ok(())
    }

    /// Reveal the opponent's sign for the pending throw.
    pub fn resolve<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Option<HandRound> {
        let player = self.pending.take()?;

        let forced = rng.next_unit() < self.pity_chance();
        let opponent = if forced {
            player.beats()
        } else {
            HandSign::ALL[rng.next_index(HandSign::ALL.len())]
        };

        let round = HandRound {
            player,
            opponent,
            result: player.against(opponent),
            forced,
        };
        self.rounds.push(round);

        log::trace!(
            "hand round {}: {:?} vs {:?} -> {:?}{}",
            self.rounds.len(),
            player,
            opponent,
            round.result,
            if forced { " (pity)" } else { "" }
        );

        if self.player_wins() >= WINS_NEEDED {
            self.outcome = Some(GameOutcome::Win);
        } else if self.opponent_wins() >= WINS_NEEDED {
            self.outcome = Some(GameOutcome::Loss);
        }

        Some(round)
    }

    #[must_use]
    pub fn player_wins(&self) -> usize {
        self.count(RoundResult::Win)
    }

    #[must_use]
    pub fn opponent_wins(&self) -> usize {
        self.count(RoundResult::Lose)
    }

    #[must_use]
    pub fn draws(&self) -> usize {
        self.count(RoundResult::Draw)
    }

    #[must_use]
    pub fn last_round(&self) -> Option<&HandRound> {
        self.rounds.last()
    }

    fn count(&self, result: RoundResult) -> usize {
        self.rounds.iter().filter(|r| r.result == result).count()
    }
}

impl MiniGame for HandGame {
    type Input = HandSign;
    type Round = HandRound;

    fn variant(&self) -> GameVariant {
        GameVariant::Hand
    }

    fn loss_streak(&self) -> LossStreak {
        self.loss_streak
    }

    fn submit(&mut self, input: HandSign) -> Result<(), Rejection> {
        self.play(input)
    }

    fn resolve<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Option<HandRound> {
        HandGame::resolve(self, rng)
    }

    fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    fn rounds(&self) -> &[HandRound] {
        &self.rounds
    }
}
