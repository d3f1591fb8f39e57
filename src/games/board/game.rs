//! Board game implementation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{LossStreak, RandomSource};
use crate::error::Rejection;
use crate::rules::{GameOutcome, GameVariant, MiniGame};
use crate::search::{GameTreeSearch, SearchConfig, SearchStats};

use super::board::{Board, Mark, CELLS};

/// Opponent's chance of playing the searched move with no pity.
const BASE_OPTIMAL_CHANCE: f64 = 0.7;

/// Floor on the opponent's chance of playing the searched move.
const MIN_OPTIMAL_CHANCE: f64 = 0.3;

/// One mark placed on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardMove {
    pub cell: usize,
    pub mark: Mark,
    /// Opponent move chosen by the search rather than at random.
    pub searched: bool,
}

/// Tic-tac-toe against the computer for one attempt.
#[derive(Clone, Debug)]
pub struct BoardGame {
    loss_streak: LossStreak,
    board: Board,
    to_move: Mark,
    moves: SmallVec<[BoardMove; CELLS]>,
    outcome: Option<GameOutcome>,
    search: GameTreeSearch,
}

impl BoardGame {
    /// Start with an empty board, the player (X) to move.
    #[must_use]
    pub fn new(loss_streak: LossStreak) -> Self {
        Self::with_search(loss_streak, SearchConfig::default())
    }

    #[must_use]
    pub fn with_search(loss_streak: LossStreak, config: SearchConfig) -> Self {
        Self {
            loss_streak,
            board: Board::new(),
            to_move: Mark::PLAYER,
            moves: SmallVec::new(),
            outcome: None,
            search: GameTreeSearch::new(config),
        }
    }

    /// Chance that the opponent plays the searched move: `max(0.3, 0.7 - bonus)`.
    #[must_use]
    pub fn optimal_chance(&self) -> f64 {
        (BASE_OPTIMAL_CHANCE - self.loss_streak.bonus()).max(MIN_OPTIMAL_CHANCE)
    }

    /// Mark a cell for the player.
    ///
    /// The player's mark lands immediately; if the game continues the
    /// opponent replies on the next [`resolve`](Self::resolve).
    pub fn play(&mut self, cell: usize) -> Result<(), Rejection> {
        if self.outcome.is_some() {
            return Err(Rejection::GameOver);
        }
        if self.to_move != Mark::PLAYER {
            return Err(Rejection::NotPlayerTurn);
        }
        self.board.place(cell, Mark::PLAYER)?;
        self.moves.push(BoardMove {
            cell,
            mark: Mark::PLAYER,
            searched: false,
        });
        self.settle(Mark::PLAYER);
        Ok(())
    }

    /// Let the opponent move, if it is its turn.
    pub fn resolve<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Option<BoardMove> {
        if self.outcome.is_some() || self.to_move != Mark::OPPONENT {
            return None;
        }

        let searched = rng.next_unit() < self.optimal_chance();
        let cell = if searched {
            self.search.best_move(&self.board, Mark::OPPONENT)?
        } else {
            let empty = self.board.empty_cells();
            *empty.get(rng.next_index(empty.len()))?
        };

        self.board.set(cell, Mark::OPPONENT);
        let placed = BoardMove {
            cell,
            mark: Mark::OPPONENT,
            searched,
        };
        self.moves.push(placed);
        log::trace!(
            "opponent took cell {} ({})",
            cell,
            if searched { "searched" } else { "random" }
        );

        self.settle(Mark::OPPONENT);
        Some(placed)
    }

    /// Check for a finished board after `mover` placed a mark.
    ///
    /// A full board without a line is a loss for the player.
    fn settle(&mut self, mover: Mark) {
        if let Some((winner, line)) = self.board.winning_line() {
            log::trace!("{:?} completed line {:?}", winner, line);
            self.outcome = Some(if winner == Mark::PLAYER {
                GameOutcome::Win
            } else {
                GameOutcome::Loss
            });
        } else if self.board.is_full() {
            log::trace!("board full without a line, counted as a loss");
            self.outcome = Some(GameOutcome::Loss);
        } else {
            self.to_move = mover.other();
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Can the player place a mark right now?
    #[must_use]
    pub fn is_player_turn(&self) -> bool {
        self.outcome.is_none() && self.to_move == Mark::PLAYER
    }

    /// Cells of the completed line, for highlighting.
    #[must_use]
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.board.winning_line().map(|(_, line)| line)
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&BoardMove> {
        self.moves.last()
    }

    /// Statistics from the opponent's most recent search.
    #[must_use]
    pub fn search_stats(&self) -> &SearchStats {
        self.search.stats()
    }
}

impl MiniGame for BoardGame {
    type Input = usize;
    type Round = BoardMove;

    fn variant(&self) -> GameVariant {
        GameVariant::Board
    }

    fn loss_streak(&self) -> LossStreak {
        self.loss_streak
    }

    fn submit(&mut self, input: usize) -> Result<(), Rejection> {
        self.play(input)
    }

    fn resolve<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Option<BoardMove> {
        BoardGame::resolve(self, rng)
    }

    fn is_busy(&self) -> bool {
        self.outcome.is_none() && self.to_move == Mark::OPPONENT
    }

    fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    fn rounds(&self) -> &[BoardMove] {
        &self.moves
    }
}
