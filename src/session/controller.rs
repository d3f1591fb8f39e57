//! Session controller: picks games, carries the loss streak, reports the win.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{EngineConfig, GameRng, LossStreak, RandomSource};
use crate::error::Rejection;
use crate::games::{ActiveGame, PlayerInput};
use crate::rules::{GameOutcome, GameVariant};

use super::timeline::Timeline;

/// Where the controller is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Between games, waiting for the next one to start.
    Selecting,
    /// A game is accepting input.
    Running,
    /// The player won; the dismiss callback has fired.
    AttemptWon,
}

/// A finished game within this session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptRecord {
    pub variant: GameVariant,
    pub outcome: GameOutcome,
    /// Streak the game was played with.
    pub loss_streak: LossStreak,
    /// Rounds resolved (board: marks placed).
    pub rounds: usize,
}

/// Snapshot for the surrounding UI.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionStatus {
    pub phase: Phase,
    pub variant: Option<GameVariant>,
    pub loss_streak: u32,
    /// "Luck +N%" badge; 0 hides it.
    pub luck_percent: u32,
    pub attempts: usize,
    /// A scheduled callback is outstanding.
    pub busy: bool,
}

/// Deferred work on the session timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SessionEvent {
    /// Resolve the active game's pending round.
    Resolve,
    /// Signal the finished game's result.
    Verdict(GameOutcome),
    /// Start the next game after a loss.
    Restart,
}

/// Builder for creating a [`SessionController`].
pub struct SessionBuilder {
    config: EngineConfig,
    selection: Option<Box<dyn RandomSource>>,
    play: Option<Box<dyn RandomSource>>,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            selection: None,
            play: None,
        }
    }
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Source used to pick each game variant.
    pub fn selection_random<R: RandomSource + 'static>(mut self, source: R) -> Self {
        self.selection = Some(Box::new(source));
        self
    }

    /// Source used for every draw inside the games.
    pub fn play_random<R: RandomSource + 'static>(mut self, source: R) -> Self {
        self.play = Some(Box::new(source));
        self
    }

    /// Build the controller and start its first game.
    ///
    /// `on_attempt_won` runs exactly once, after the first won game.
    pub fn build<F>(self, on_attempt_won: F) -> SessionController
    where
        F: FnOnce() + 'static,
    {
        let rng = self
            .config
            .seed
            .map_or_else(GameRng::from_entropy, GameRng::new);
        let selection_rng: Box<dyn RandomSource> = match self.selection {
            Some(source) => source,
            None => Box::new(rng.for_context("selection")),
        };
        let play_rng: Box<dyn RandomSource> = match self.play {
            Some(source) => source,
            None => Box::new(rng.for_context("play")),
        };

        let mut controller = SessionController {
            config: self.config,
            phase: Phase::Selecting,
            loss_streak: LossStreak::ZERO,
            game: None,
            selection_rng,
            play_rng,
            timeline: Timeline::new(),
            on_attempt_won: Some(Box::new(on_attempt_won)),
            attempts: Vec::new(),
        };
        controller.select_game();
        controller
    }
}

/// Runs games until the player wins one.
///
/// Single-threaded and clock-agnostic: the host forwards player input with
/// [`input`](Self::input) and drives pacing with [`advance`](Self::advance).
/// Dropping the controller abandons the session without a verdict.
pub struct SessionController {
    config: EngineConfig,
    phase: Phase,
    loss_streak: LossStreak,
    game: Option<ActiveGame>,
    selection_rng: Box<dyn RandomSource>,
    play_rng: Box<dyn RandomSource>,
    timeline: Timeline<SessionEvent>,
    on_attempt_won: Option<Box<dyn FnOnce()>>,
    attempts: Vec<AttemptRecord>,
}

impl SessionController {
    /// Start a session with default configuration.
    pub fn new<F>(on_attempt_won: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        SessionBuilder::new().build(on_attempt_won)
    }

    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Forward a player action to the active game.
    ///
    /// Rejected inputs change nothing.
    pub fn input(&mut self, input: PlayerInput) -> Result<(), Rejection> {
        if self.phase != Phase::Running {
            return Err(Rejection::NoActiveGame);
        }
        let game = self.game.as_mut().ok_or(Rejection::NoActiveGame)?;
        game.submit(input)?;

        let variant = game.variant();
        let pacing = &self.config.pacing;
        if let Some(outcome) = game.outcome() {
            self.timeline
                .schedule(pacing.verdict_delay(variant), SessionEvent::Verdict(outcome));
        } else if game.is_busy() {
            self.timeline
                .schedule(pacing.resolve_delay(variant), SessionEvent::Resolve);
        }
        Ok(())
    }

    /// Move the virtual clock forward, firing every callback that falls due.
    pub fn advance(&mut self, elapsed: Duration) {
        let until = self.timeline.now() + elapsed;
        while let Some(event) = self.timeline.pop_due(until) {
            self.fire(event);
        }
        self.timeline.advance_to(until);
    }

    /// Fire scheduled callbacks until nothing is pending.
    pub fn run_until_idle(&mut self) {
        while let Some(due) = self.timeline.next_due() {
            if let Some(event) = self.timeline.pop_due(due) {
                self.fire(event);
            }
        }
    }

    /// Time until the next scheduled callback, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timeline
            .next_due()
            .map(|due| due.saturating_sub(self.timeline.now()))
    }

    fn fire(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Resolve => self.resolve_round(),
            SessionEvent::Verdict(outcome) => self.conclude(outcome),
            SessionEvent::Restart => {
                if self.phase == Phase::Selecting {
                    self.select_game();
                }
            }
        }
    }

    fn resolve_round(&mut self) {
        let Some(game) = self.game.as_mut() else {
            return;
        };
        if let Some(record) = game.resolve(self.play_rng.as_mut()) {
            log::trace!("resolved {:?}", record);
        }

        let variant = game.variant();
        let pacing = &self.config.pacing;
        if let Some(outcome) = game.outcome() {
            self.timeline
                .schedule(pacing.verdict_delay(variant), SessionEvent::Verdict(outcome));
        }
    }

    fn select_game(&mut self) {
        let variant = GameVariant::ALL[self.selection_rng.next_index(GameVariant::ALL.len())];
        log::debug!("starting {} with {}", variant, self.loss_streak);

        self.game = Some(ActiveGame::start(variant, self.loss_streak, &self.config.search));
        self.phase = Phase::Running;
    }

    fn conclude(&mut self, outcome: GameOutcome) {
        let Some(game) = self.game.take() else {
            return;
        };
        self.attempts.push(AttemptRecord {
            variant: game.variant(),
            outcome,
            loss_streak: game.loss_streak(),
            rounds: game.round_count(),
        });

        match outcome {
            GameOutcome::Loss => {
                self.loss_streak.increment();
                self.phase = Phase::Selecting;
                log::debug!("lost {}, now {}", game.variant(), self.loss_streak);
                self.timeline
                    .schedule(self.config.pacing.restart_delay(), SessionEvent::Restart);
            }
            GameOutcome::Win => {
                self.loss_streak.reset();
                self.phase = Phase::AttemptWon;
                self.timeline.clear();
                log::info!(
                    "won {} after {} attempt(s)",
                    game.variant(),
                    self.attempts.len()
                );
                if let Some(on_attempt_won) = self.on_attempt_won.take() {
                    on_attempt_won();
                }
            }
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn loss_streak(&self) -> LossStreak {
        self.loss_streak
    }

    /// The running game, or `None` between games and after the win.
    #[must_use]
    pub fn current_game(&self) -> Option<&ActiveGame> {
        self.game.as_ref()
    }

    /// Is a callback outstanding? Input is refused until it fires.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.timeline.has_pending()
    }

    /// Virtual time elapsed in this session.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.timeline.now()
    }

    /// Finished games, oldest first.
    #[must_use]
    pub fn attempts(&self) -> &[AttemptRecord] {
        &self.attempts
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            phase: self.phase,
            variant: self.game.as_ref().map(ActiveGame::variant),
            loss_streak: self.loss_streak.count(),
            luck_percent: self.loss_streak.luck_percent(),
            attempts: self.attempts.len(),
            busy: self.is_busy(),
        }
    }
}
