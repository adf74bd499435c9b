//! Error taxonomy.
//!
//! Two families:
//! - Invalid input: malformed setup or round submission. The game state is
//!   left untouched; the caller corrects the input and resubmits.
//! - Not started: a round or query call arrived before the game was set up.
//!
//! No error is fatal and none leaves a partially applied round behind:
//! validation happens before any mutation.

use thiserror::Error;

use super::player::PlayerId;

/// Errors returned by the scorer and the session layer.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// Player count outside the supported range.
    #[error("player count {got} is outside the supported range 2..=20")]
    PlayerCount { got: usize },

    /// Two players would end up with the same name.
    #[error("duplicate player name {name:?}")]
    DuplicateName { name: String },

    /// Maal, points, or cumulative sequence length does not match the player count.
    #[error("expected {expected} values, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    /// A maal or points value was negative.
    #[error("negative value {value} for {player}")]
    NegativeValue { player: PlayerId, value: i64 },

    /// The closer index does not identify a seated player.
    #[error("closer {closer} is out of range for {player_count} players")]
    CloserOutOfRange {
        closer: PlayerId,
        player_count: usize,
    },

    /// The closer name does not match any player.
    #[error("no player named {name:?}")]
    UnknownCloser { name: String },

    /// A game is already in progress; reset before starting another.
    #[error("game already started")]
    AlreadyStarted,

    /// No game has been started yet.
    #[error("game not started")]
    NotStarted,
}
