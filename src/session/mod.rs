//! Session lifecycle around a single game.
//!
//! The UI layer owns one [`Session`] value per open page. It starts a game
//! with the configured player names, feeds it one round at a time, reads the
//! scoreboard and per-player histories back after every mutation, and resets
//! it when the table wants a fresh start. Nothing is persisted; dropping the
//! session drops the game.

mod game;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, RoundRecord, ScoreError};

pub use game::{Game, Player};

/// A scoring session: either idle or holding one running game.
///
/// Every round-related call on an idle session fails with
/// [`ScoreError::NotStarted`] so the caller can prompt for setup instead.
///
/// ## Example
///
/// ```
/// use maal_score::session::Session;
///
/// let mut session = Session::new();
/// session.start(&["Asha", "Bikram", "Chandra"]).unwrap();
/// session.submit_round(&[2, 0, 0], &[0, 5, 3], "Asha").unwrap();
///
/// let totals = session.current_totals().unwrap();
/// assert_eq!(totals, vec![
///     ("Asha".to_string(), 12),
///     ("Bikram".to_string(), -7),
///     ("Chandra".to_string(), -5),
/// ]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    game: Option<Game>,
}

impl Session {
    /// Create an idle session with no game.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a game is in progress.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.game.is_some()
    }

    /// Start a game with the given player names.
    ///
    /// See [`Game::new`] for name defaulting and validation. Fails with
    /// [`ScoreError::AlreadyStarted`] if a game is already running; call
    /// [`Session::reset`] first.
    pub fn start<S: AsRef<str>>(&mut self, names: &[S]) -> Result<(), ScoreError> {
        if self.game.is_some() {
            return Err(ScoreError::AlreadyStarted);
        }
        self.game = Some(Game::new(names)?);
        Ok(())
    }

    /// Drop the game and all its rounds, returning to the idle state.
    pub fn reset(&mut self) {
        if self.game.take().is_some() {
            debug!("session reset");
        }
    }

    /// Borrow the running game.
    pub fn game(&self) -> Result<&Game, ScoreError> {
        self.game.as_ref().ok_or(ScoreError::NotStarted)
    }

    /// Submit one round. See [`Game::submit_round`].
    pub fn submit_round(
        &mut self,
        maal_values: &[i64],
        points_values: &[i64],
        closer_name: &str,
    ) -> Result<(), ScoreError> {
        self.game
            .as_mut()
            .ok_or(ScoreError::NotStarted)?
            .submit_round(maal_values, points_values, closer_name)
    }

    /// Current scoreboard: (name, cumulative total) per player in seat order.
    pub fn current_totals(&self) -> Result<Vec<(String, i64)>, ScoreError> {
        Ok(self
            .game()?
            .current_totals()
            .into_iter()
            .map(|(name, total)| (name.to_string(), total))
            .collect())
    }

    /// Round-by-round history for one player, oldest first.
    pub fn history(&self, player: PlayerId) -> Result<Vec<RoundRecord>, ScoreError> {
        Ok(self.game()?.history(player).copied().collect())
    }

    /// Index of the next round to be submitted (0-based).
    pub fn round_index(&self) -> Result<usize, ScoreError> {
        Ok(self.game()?.round_index())
    }
}
