//! Board game and minimax integration tests.

use pity_games::core::{GameRng, LossStreak, RandomSource, ScriptedRandom};
use pity_games::games::board::{Board, BoardGame, Mark};
use pity_games::rules::{GameOutcome, MiniGame};
use pity_games::search::{GameTreeSearch, SearchConfig};

/// Draws below every optimal chance, so the opponent always searches.
fn always_optimal() -> ScriptedRandom {
    ScriptedRandom::constant(0.0)
}

// =============================================================================
// Search
// =============================================================================

#[test]
fn test_empty_board_value_is_draw() {
    let mut plain = GameTreeSearch::default();
    let mut cached = GameTreeSearch::new(SearchConfig::default().with_memoize(true));

    assert_eq!(plain.evaluate(&Board::new(), Mark::X), 0);
    assert_eq!(cached.evaluate(&Board::new(), Mark::X), 0);
}

#[test]
fn test_optimal_self_play_draws() {
    let mut search = GameTreeSearch::default();
    let mut board = Board::new();
    let mut to_move = Mark::X;

    while board.winner().is_none() && !board.is_full() {
        let cell = search.best_move(&board, to_move).unwrap();
        board.place(cell, to_move).unwrap();
        to_move = to_move.other();
    }

    assert_eq!(board.winner(), None);
    assert!(board.is_full());
}

#[test]
fn test_search_is_deterministic() {
    let position: Board = "X.. .O. ..X".parse().unwrap();
    let mut first = GameTreeSearch::default();
    let mut second = GameTreeSearch::default();

    let a = first.best_move(&position, Mark::O);
    let b = second.best_move(&position, Mark::O);
    assert_eq!(a, b);
    assert_eq!(first.stats().nodes_visited, second.stats().nodes_visited);

    // Opposite corners: an edge reply is forced
    assert!(matches!(a, Some(1 | 3 | 5 | 7)));
}

// =============================================================================
// Board Game
// =============================================================================

#[test]
fn test_optimal_opponent_answers_centre_with_corner() {
    let mut game = BoardGame::new(LossStreak::ZERO);
    let reply = game.play_round(4, &mut always_optimal()).unwrap().unwrap();

    assert!(reply.searched);
    assert_eq!(reply.mark, Mark::O);
    assert!([0, 2, 6, 8].contains(&reply.cell), "edge reply {}", reply.cell);
}

#[test]
fn test_optimal_opponent_never_loses() {
    let mut player_rng = GameRng::new(2024);

    for _ in 0..40 {
        let mut game = BoardGame::new(LossStreak::new(4));
        let mut opponent_rng = always_optimal();

        while !game.is_over() {
            let empty = game.board().empty_cells();
            let cell = empty[player_rng.next_index(empty.len())];
            game.play_round(cell, &mut opponent_rng).unwrap();
        }

        assert_eq!(game.outcome(), Some(GameOutcome::Loss));
        assert_ne!(game.board().winner(), Some(Mark::X));
    }
}

#[test]
fn test_optimal_player_draw_is_still_a_loss() {
    let mut game = BoardGame::new(LossStreak::ZERO);
    let mut player = GameTreeSearch::default();
    let mut opponent_rng = always_optimal();

    while !game.is_over() {
        let cell = player.best_move(game.board(), Mark::X).unwrap();
        game.play_round(cell, &mut opponent_rng).unwrap();
    }

    assert!(game.board().is_full());
    assert_eq!(game.board().winner(), None);
    assert_eq!(game.winning_line(), None);
    assert_eq!(game.outcome(), Some(GameOutcome::Loss));
}

#[test]
fn test_games_end_within_nine_moves() {
    let mut rng = GameRng::new(8);

    for streak in 0..6 {
        let mut game =
            BoardGame::with_search(LossStreak::new(streak), SearchConfig::default().with_memoize(true));
        while !game.is_over() {
            let empty = game.board().empty_cells();
            let cell = empty[rng.next_index(empty.len())];
            game.play_round(cell, &mut rng).unwrap();
        }

        assert!(game.rounds().len() <= 9);
        let marks: Vec<_> = game.rounds().iter().map(|m| m.mark).collect();
        for pair in marks.windows(2) {
            assert_ne!(pair[0], pair[1], "turns must alternate");
        }
        match game.outcome().unwrap() {
            GameOutcome::Win => assert_eq!(game.board().winner(), Some(Mark::X)),
            GameOutcome::Loss => assert_ne!(game.board().winner(), Some(Mark::X)),
        }
    }
}

#[test]
fn test_pity_lowers_searched_share() {
    let mut rng = GameRng::new(99);
    let mut searched = [0usize; 2];
    let trials = 4000;

    for (slot, streak) in [0u32, 4].into_iter().enumerate() {
        for _ in 0..trials {
            let mut game =
                BoardGame::with_search(LossStreak::new(streak), SearchConfig::default().with_memoize(true));
            let reply = game.play_round(0, &mut rng).unwrap().unwrap();
            if reply.searched {
                searched[slot] += 1;
            }
        }
    }

    let base = searched[0] as f64 / trials as f64;
    let pitied = searched[1] as f64 / trials as f64;
    assert!((base - 0.7).abs() < 0.03, "base {base}");
    assert!((pitied - 0.3).abs() < 0.03, "pitied {pitied}");
}
