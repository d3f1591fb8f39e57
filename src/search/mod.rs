//! Game-tree search for the board opponent.
//!
//! ## Usage
//!
//! ```rust
//! use pity_games::games::board::{Board, Mark};
//! use pity_games::search::{GameTreeSearch, SearchConfig};
//!
//! let mut board = Board::new();
//! board.place(4, Mark::X).unwrap();
//!
//! let mut search = GameTreeSearch::new(SearchConfig::default());
//! let reply = search.best_move(&board, Mark::O);
//! assert_eq!(reply, Some(0)); // a corner answers the centre
//!
//! println!("visited {} positions", search.stats().nodes_visited);
//! ```

pub mod config;
pub mod minimax;
pub mod stats;

pub use config::SearchConfig;
pub use minimax::{GameTreeSearch, WIN_SCORE};
pub use stats::SearchStats;
