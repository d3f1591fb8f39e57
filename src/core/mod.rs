//! Core engine types: randomness, the pity curve, configuration.
//!
//! Everything here is game-agnostic. Individual games read the loss streak
//! and draw from a [`RandomSource`] but never own either.

pub mod config;
pub mod difficulty;
pub mod rng;

pub use config::{EngineConfig, Pacing};
pub use difficulty::{luck_percent, pity_bonus, LossStreak, PITY_CAP, PITY_STEP};
pub use rng::{GameRng, RandomSource, ScriptedRandom};
