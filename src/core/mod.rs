//! Core types: players, round records, errors.
//!
//! These are the building blocks shared by the scorer and the session layer.

pub mod error;
pub mod player;
pub mod round;

pub use error::ScoreError;
pub use player::{PlayerId, PlayerMap, MAX_PLAYERS, MIN_PLAYERS};
pub use round::{RoundRecord, RoundScore};
