//! Session control for one reminder popup.
//!
//! ## Lifecycle
//!
//! ```text
//! Selecting --pick variant--> Running --loss--> Selecting (streak + 1, after a pause)
//!                                    \--win---> AttemptWon (streak reset, callback fired)
//! ```
//!
//! ## Example Usage
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use std::time::Duration;
//!
//! use pity_games::games::PlayerInput;
//! use pity_games::games::coin::CoinSide;
//! use pity_games::session::{Phase, SessionController};
//! use pity_games::ScriptedRandom;
//!
//! let dismissed = Rc::new(Cell::new(false));
//! let flag = Rc::clone(&dismissed);
//!
//! let mut session = SessionController::builder()
//!     .selection_random(ScriptedRandom::constant(0.0)) // always Heads or Tails
//!     .play_random(ScriptedRandom::constant(0.0)) // every guess lands
//!     .build(move || flag.set(true));
//!
//! assert_eq!(session.phase(), Phase::Running);
//!
//! session.input(PlayerInput::Guess(CoinSide::Heads)).unwrap();
//! session.advance(Duration::from_millis(800));
//! session.input(PlayerInput::Guess(CoinSide::Tails)).unwrap();
//! session.advance(Duration::from_millis(800));
//!
//! // The final flip stays on screen before the verdict
//! assert!(!dismissed.get());
//! session.advance(Duration::from_millis(1000));
//! assert!(dismissed.get());
//! assert_eq!(session.phase(), Phase::AttemptWon);
//! ```

mod controller;
mod timeline;

pub use controller::{AttemptRecord, Phase, SessionBuilder, SessionController, SessionStatus};
pub use timeline::Timeline;
