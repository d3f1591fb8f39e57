//! Integration tests for the probabilistic games.

use pity_games::core::{GameRng, LossStreak, RandomSource, ScriptedRandom};
use pity_games::games::coin::{CoinGuessGame, CoinSide};
use pity_games::games::hand::{HandGame, HandSign, RoundResult};
use pity_games::rules::{GameOutcome, MiniGame};
use pity_games::Rejection;

const TRIALS: usize = 20_000;

/// Play whole coin games until `TRIALS` rounds have resolved; return the hit rate.
fn coin_hit_rate(streak: u32, seed: u64) -> f64 {
    let mut rng = GameRng::new(seed);
    let mut hits = 0;
    let mut rounds = 0;

    while rounds < TRIALS {
        let mut game = CoinGuessGame::new(LossStreak::new(streak));
        while !game.is_over() {
            let side = if rng.next_index(2) == 0 { CoinSide::Heads } else { CoinSide::Tails };
            let round = game.play_round(side, &mut rng).unwrap().unwrap();
            rounds += 1;
            if round.correct {
                hits += 1;
            }
        }
    }

    hits as f64 / rounds as f64
}

// =============================================================================
// Coin Guess
// =============================================================================

#[test]
fn test_coin_fair_without_pity() {
    let rate = coin_hit_rate(0, 42);
    assert!((rate - 0.5).abs() < 0.02, "hit rate {rate}");
}

#[test]
fn test_coin_capped_pity_converges_to_ninety_percent() {
    for streak in [4, 7] {
        let rate = coin_hit_rate(streak, 1234 + u64::from(streak));
        assert!((rate - 0.9).abs() < 0.02, "streak {streak}: hit rate {rate}");
    }
}

#[test]
fn test_coin_two_misses_end_the_game_early() {
    let mut game = CoinGuessGame::new(LossStreak::ZERO);
    // Two misses, then a hit that is never drawn
    let mut rng = ScriptedRandom::new([0.7, 0.8, 0.1]);

    for _ in 0..2 {
        game.play_round(CoinSide::Heads, &mut rng).unwrap();
    }

    assert_eq!(game.outcome(), Some(GameOutcome::Loss));
    assert_eq!(game.rounds().len(), 2);
    assert!(game.rounds().iter().all(|r| r.actual == CoinSide::Tails));

    assert_eq!(game.guess(CoinSide::Heads), Err(Rejection::GameOver));
    assert_eq!(game.rounds().len(), 2);
    assert_eq!(rng.consumed(), 2);
}

#[test]
fn test_coin_games_last_two_or_three_rounds() {
    let mut rng = GameRng::new(9);
    for _ in 0..500 {
        let mut game = CoinGuessGame::new(LossStreak::new(1));
        while !game.is_over() {
            game.play_round(CoinSide::Tails, &mut rng).unwrap();
        }
        let rounds = game.rounds().len();
        assert!((2..=3).contains(&rounds));
        match game.outcome().unwrap() {
            GameOutcome::Win => assert_eq!(game.correct_count(), 2),
            GameOutcome::Loss => assert_eq!(game.miss_count(), 2),
        }
    }
}

// =============================================================================
// Hand Game
// =============================================================================

#[test]
fn test_hand_capped_pity_favours_the_player() {
    let mut rng = GameRng::new(77);

    for player in HandSign::ALL {
        let mut beaten = 0;
        for _ in 0..TRIALS / 3 {
            let mut game = HandGame::new(LossStreak::new(4));
            let round = game.play_round(player, &mut rng).unwrap().unwrap();
            if round.opponent == player.beats() {
                beaten += 1;
            }
        }
        // 0.4 forced + 0.6 / 3 drawn
        let rate = beaten as f64 / (TRIALS / 3) as f64;
        assert!(rate >= 0.4, "{player:?}: {rate}");
        assert!((rate - 0.6).abs() < 0.03, "{player:?}: {rate}");
    }
}

#[test]
fn test_hand_uniform_without_pity() {
    let mut rng = GameRng::new(5);
    let mut counts = [0usize; 3];

    for _ in 0..TRIALS {
        let mut game = HandGame::new(LossStreak::ZERO);
        let round = game.play_round(HandSign::Rock, &mut rng).unwrap().unwrap();
        assert!(!round.forced);
        let index = HandSign::ALL.iter().position(|&s| s == round.opponent).unwrap();
        counts[index] += 1;
    }

    for count in counts {
        let share = count as f64 / TRIALS as f64;
        assert!((share - 1.0 / 3.0).abs() < 0.02, "share {share}");
    }
}

#[test]
fn test_hand_pity_draws_below_bonus_force_wins() {
    let mut game = HandGame::new(LossStreak::new(4));
    let mut rng = ScriptedRandom::constant(0.2);

    for _ in 0..2 {
        let round = game.play_round(HandSign::Rock, &mut rng).unwrap().unwrap();
        assert!(round.forced);
        assert_eq!(round.opponent, HandSign::Scissors);
        assert_eq!(round.result, RoundResult::Win);
    }

    assert_eq!(game.outcome(), Some(GameOutcome::Win));
}

#[test]
fn test_hand_pity_can_still_fail() {
    let mut game = HandGame::new(LossStreak::new(4));
    // 0.5 misses the 0.4 pity window, then picks Paper from the uniform draw
    let mut rng = ScriptedRandom::constant(0.5);

    for _ in 0..2 {
        let round = game.play_round(HandSign::Rock, &mut rng).unwrap().unwrap();
        assert!(!round.forced);
        assert_eq!(round.opponent, HandSign::Paper);
        assert_eq!(round.result, RoundResult::Lose);
    }

    assert_eq!(game.outcome(), Some(GameOutcome::Loss));
    assert_eq!(game.opponent_wins(), 2);
    assert_eq!(game.play(HandSign::Rock), Err(Rejection::GameOver));
}

#[test]
fn test_hand_games_end_on_two_decisive_rounds() {
    let mut rng = GameRng::new(31);
    for _ in 0..500 {
        let mut game = HandGame::new(LossStreak::ZERO);
        while !game.is_over() {
            game.play_round(HandSign::Paper, &mut rng).unwrap();
        }
        let decisive = game.player_wins() + game.opponent_wins();
        assert!((2..=3).contains(&decisive));
        assert_eq!(game.player_wins().max(game.opponent_wins()), 2);
    }
}
