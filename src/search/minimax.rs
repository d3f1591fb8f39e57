//! Exhaustive minimax over the remaining board.
//!
//! O maximises and X minimises. A line for O scores `10 - depth`, a line for
//! X scores `depth - 10`, and a full board without a line scores 0, so the
//! search prefers quick wins and slow losses. The whole remaining tree is
//! explored on every call; the result depends only on the position.

use std::time::Instant;

use rustc_hash::FxHashMap;

use crate::games::board::{Board, Mark};

use super::config::SearchConfig;
use super::stats::SearchStats;

/// Score of a line completed at depth 0.
pub const WIN_SCORE: i32 = 10;

/// Minimax searcher for the 3x3 board.
#[derive(Clone, Debug, Default)]
pub struct GameTreeSearch {
    config: SearchConfig,
    stats: SearchStats,
    /// Position values for the current search, keyed by [`Board::encode`].
    table: FxHashMap<u32, i32>,
}

impl GameTreeSearch {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stats: SearchStats::default(),
            table: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics from the most recent call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Best cell for `mark` to play, or `None` if the board has no empty cell.
    ///
    /// Ties go to the lowest cell index.
    pub fn best_move(&mut self, board: &Board, mark: Mark) -> Option<usize> {
        let start = Instant::now();
        self.begin();

        let mut scratch = *board;
        let mut best: Option<(usize, i32)> = None;

        for cell in board.empty_cells() {
            scratch.set(cell, mark);
            let score = self.minimax(&mut scratch, mark.other(), 0);
            scratch.clear(cell);

            let improves = match best {
                None => true,
                Some((_, best_score)) => match mark {
                    Mark::O => score > best_score,
                    Mark::X => score < best_score,
                },
            };
            if improves {
                best = Some((cell, score));
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        log::trace!(
            "search for {:?}: {:?} after {} nodes ({} cached) in {}us",
            mark,
            best,
            self.stats.nodes_visited,
            self.stats.cache_hits,
            self.stats.time_us
        );

        best.map(|(cell, _)| cell)
    }

    /// Minimax value of `board` with `to_move` about to play.
    ///
    /// Positive favours O, negative favours X, 0 is a draw under best play.
    pub fn evaluate(&mut self, board: &Board, to_move: Mark) -> i32 {
        let start = Instant::now();
        self.begin();

        let mut scratch = *board;
        let value = self.minimax(&mut scratch, to_move, 0);

        self.stats.time_us = start.elapsed().as_micros() as u64;
        value
    }

    fn begin(&mut self) {
        self.stats.reset();
        // Depth is relative to the root, so cached values only hold per search.
        self.table.clear();
    }

    fn minimax(&mut self, board: &mut Board, to_move: Mark, depth: i32) -> i32 {
        self.stats.nodes_visited += 1;

        match board.winner() {
            Some(Mark::O) => return WIN_SCORE - depth,
            Some(Mark::X) => return depth - WIN_SCORE,
            None if board.is_full() => return 0,
            None => {}
        }

        let key = board.encode();
        if self.config.memoize {
            if let Some(&value) = self.table.get(&key) {
                self.stats.cache_hits += 1;
                return value;
            }
        }

        let maximizing = to_move == Mark::O;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for cell in board.empty_cells() {
            board.set(cell, to_move);
            let score = self.minimax(board, to_move.other(), depth + 1);
            board.clear(cell);

            best = if maximizing { best.max(score) } else { best.min(score) };
        }

        if self.config.memoize {
            self.table.insert(key, best);
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let mut search = GameTreeSearch::default();
        assert_eq!(search.evaluate(&Board::new(), Mark::X), 0);
        assert!(search.stats().nodes_visited > 500_000);
    }

    #[test]
    fn test_takes_immediate_win() {
        let mut search = GameTreeSearch::default();
        // O to move with two in the top row
        assert_eq!(search.best_move(&board("OO. XX. X.."), Mark::O), Some(2));
    }

    #[test]
    fn test_blocks_immediate_loss() {
        let mut search = GameTreeSearch::default();
        // X threatens the middle row
        assert_eq!(search.best_move(&board("O.. XX. ..."), Mark::O), Some(5));
    }

    #[test]
    fn test_prefers_faster_win() {
        let mut search = GameTreeSearch::default();
        // O wins now at 2 (top row) rather than setting up anything slower
        let position = board("OO. X.. XX.");
        assert_eq!(search.best_move(&position, Mark::O), Some(2));

        let mut after = position;
        after.set(2, Mark::O);
        assert_eq!(search.evaluate(&after, Mark::X), WIN_SCORE);
    }

    #[test]
    fn test_x_side_search() {
        let mut search = GameTreeSearch::default();
        assert_eq!(search.best_move(&board("XX. OO. ..."), Mark::X), Some(2));
    }

    #[test]
    fn test_corner_reply_to_centre() {
        let mut search = GameTreeSearch::default();
        assert_eq!(search.best_move(&board(".... X...."), Mark::O), Some(0));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut search = GameTreeSearch::default();
        assert_eq!(search.best_move(&board("XOX XOO OXX"), Mark::O), None);
        assert_eq!(search.evaluate(&board("XOX XOO OXX"), Mark::O), 0);
    }

    #[test]
    fn test_memoized_search_agrees() {
        let mut plain = GameTreeSearch::default();
        let mut cached = GameTreeSearch::new(SearchConfig::default().with_memoize(true));

        for position in ["X........", "....X....", "X...O...X", ".X.......", "X.O.X...."] {
            let position = board(position);
            let to_move = if position.filled() % 2 == 0 { Mark::X } else { Mark::O };

            assert_eq!(plain.evaluate(&position, to_move), cached.evaluate(&position, to_move));
            assert_eq!(plain.best_move(&position, to_move), cached.best_move(&position, to_move));
            assert!(cached.stats().nodes_visited < plain.stats().nodes_visited);
            assert!(cached.stats().cache_hits > 0);
        }
    }
}
