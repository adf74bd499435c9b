//! Game state for one scoring session.

use im::Vector;
use log::debug;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{PlayerId, PlayerMap, RoundRecord, ScoreError, MAX_PLAYERS, MIN_PLAYERS};
use crate::scoring::score_round;

/// One seated player: a name and the rounds played so far.
///
/// The round history is an `im::Vector`, so cloning a game for a scoreboard
/// snapshot is O(1) regardless of how many rounds have been played.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    rounds: Vector<RoundRecord>,
}

impl Player {
    fn new(name: String) -> Self {
        Self {
            name,
            rounds: Vector::new(),
        }
    }

    /// The player's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player's cumulative total after the latest round, or 0 if no
    /// round has been played yet.
    #[must_use]
    pub fn current_total(&self) -> i64 {
        self.rounds.last().map_or(0, |r| r.cumulative)
    }

    /// Round-by-round history, oldest first.
    pub fn rounds(&self) -> impl Iterator<Item = &RoundRecord> {
        self.rounds.iter()
    }

    /// Number of rounds this player has recorded.
    #[must_use]
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }
}

/// A running game: fixed seats, append-only round history.
///
/// All mutation goes through [`Game::submit_round`], which validates the full
/// round before touching any player, so the invariant "every player has the
/// same number of rounds" holds at all times.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    players: PlayerMap<Player>,
    /// Closer lookup. Names are unique, enforced at construction.
    name_index: FxHashMap<String, PlayerId>,
    round_index: usize,
}

impl Game {
    /// Seat players and start a game.
    ///
    /// Names are trimmed; a blank name defaults to `Player{i}` (1-based seat
    /// number). Duplicate names are rejected so that closer-by-name lookup is
    /// unambiguous.
    ///
    /// ## Errors
    ///
    /// - [`ScoreError::PlayerCount`] if the name count is outside 2..=20
    /// - [`ScoreError::DuplicateName`] if two names collide after defaulting
    pub fn new<S: AsRef<str>>(names: &[S]) -> Result<Self, ScoreError> {
        let n = names.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&n) {
            return Err(ScoreError::PlayerCount { got: n });
        }

        let mut name_index = FxHashMap::default();
        let mut seated: Vec<Player> = Vec::with_capacity(n);
        for (i, raw) in names.iter().enumerate() {
            let trimmed = raw.as_ref().trim();
            let name = if trimmed.is_empty() {
                format!("Player{}", i + 1)
            } else {
                trimmed.to_string()
            };
            if name_index
                .insert(name.clone(), PlayerId::new(i as u8))
                .is_some()
            {
                return Err(ScoreError::DuplicateName { name });
            }
            seated.push(Player::new(name));
        }

        debug!("game started with {n} players");

        Ok(Self {
            players: PlayerMap::new(n, |p| seated[p.index()].clone()),
            name_index,
            round_index: 0,
        })
    }

    /// Number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Index of the next round to be submitted (0-based). Equals the number
    /// of rounds played so far.
    #[must_use]
    pub fn round_index(&self) -> usize {
        self.round_index
    }

    /// Seated player names, in seat order.
    pub fn player_names(&self) -> impl Iterator<Item = &str> {
        self.players.iter().map(|(_, p)| p.name())
    }

    /// Iterate over (PlayerId, &Player) pairs in seat order.
    pub fn players(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players.iter()
    }

    /// Look up a player's seat by name.
    #[must_use]
    pub fn player_id(&self, name: &str) -> Option<PlayerId> {
        self.name_index.get(name).copied()
    }

    /// Get a seated player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        self.players.get(id)
    }

    /// Submit one round for all players.
    ///
    /// `maal_values` and `points_values` are in seat order; `closer_name`
    /// identifies the player who closed the round. The round is scored first
    /// and appended only if scoring succeeds: on error, no player's history
    /// changes and the round index stays put.
    ///
    /// ## Errors
    ///
    /// - [`ScoreError::UnknownCloser`] if `closer_name` matches no player
    /// - any error from [`score_round`]
    pub fn submit_round(
        &mut self,
        maal_values: &[i64],
        points_values: &[i64],
        closer_name: &str,
    ) -> Result<(), ScoreError> {
        let closer = self
            .player_id(closer_name)
            .ok_or_else(|| ScoreError::UnknownCloser {
                name: closer_name.to_string(),
            })?;

        let previous: SmallVec<[i64; 8]> = self
            .players
            .iter()
            .map(|(_, p)| p.current_total())
            .collect();

        let scores = score_round(maal_values, points_values, closer, &previous)?;

        // Validation is done; the appends below cannot fail partway.
        for ((id, player), score) in self.players.iter_mut().zip(scores) {
            player.rounds.push_back(RoundRecord::new(
                maal_values[id.index()],
                points_values[id.index()],
                score,
            ));
        }
        self.round_index += 1;

        debug!(
            "round {} submitted, closed by {closer_name}",
            self.round_index
        );
        Ok(())
    }

    /// Current scoreboard: (name, cumulative total) per player, in seat
    /// order. Players with no rounds yet show 0.
    #[must_use]
    pub fn current_totals(&self) -> Vec<(&str, i64)> {
        self.players
            .iter()
            .map(|(_, p)| (p.name(), p.current_total()))
            .collect()
    }

    /// Round-by-round history for one player, oldest first.
    pub fn history(&self, player: PlayerId) -> impl Iterator<Item = &RoundRecord> {
        self.players.get(player).rounds()
    }
}
