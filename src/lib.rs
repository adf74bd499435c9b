//! # maal-score
//!
//! Session-scoped scorekeeper for the Marriage (Maal) card game.
//!
//! ## Design Principles
//!
//! 1. **Pure Core**: Round scoring is a deterministic function of its inputs.
//!    No I/O, no ambient state, no randomness.
//!
//! 2. **N-Player First**: Every API works for 2 to 20 players. Inputs and
//!    outputs are in seat order.
//!
//! 3. **All-or-Nothing Rounds**: A round submission is validated in full
//!    before any player's history changes. A rejected round leaves the game
//!    exactly as it was.
//!
//! 4. **Caller-Owned State**: The session layer (a web page, typically) owns
//!    a [`Session`] value and passes it around explicitly. Nothing is
//!    persisted; a session's state lives and dies with it.
//!
//! ## Modules
//!
//! - `core`: Player IDs, per-player storage, round records, errors
//! - `scoring`: The round scoring function
//! - `session`: Game lifecycle and the query surface the UI consumes

pub mod core;
pub mod scoring;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap, RoundRecord, RoundScore, ScoreError, MAX_PLAYERS, MIN_PLAYERS,
};
pub use crate::scoring::{score_round, RoundScores};
pub use crate::session::{Game, Player, Session};
