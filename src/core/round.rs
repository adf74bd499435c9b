//! Round records.
//!
//! Every submitted round produces one [`RoundRecord`] per player: the raw
//! inputs (maal, points) alongside the computed round points and the running
//! cumulative total. Records are append-only; once computed they are never
//! mutated.
//!
//! ## Values (i64 only)
//!
//! All quantities are stored as `i64`. Maal and points are validated
//! non-negative when a round is submitted; round points and cumulative totals
//! are signed by design (non-closers routinely score negative).

use serde::{Deserialize, Serialize};

/// One player's computed scores for a single round.
///
/// Produced by [`score_round`](crate::scoring::score_round), one per player,
/// in seat order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundScore {
    /// Points won or lost this round. Sums to zero across all players.
    pub round_points: i64,

    /// Running total including this round.
    pub cumulative: i64,
}

/// One player's full record of a single round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Maal declared by this player.
    pub maal: i64,

    /// Points declared by this player.
    pub points: i64,

    /// Points won or lost this round.
    pub round_points: i64,

    /// Running total including this round.
    pub cumulative: i64,
}

impl RoundRecord {
    /// Combine raw inputs with a computed score into a record.
    #[must_use]
    pub fn new(maal: i64, points: i64, score: RoundScore) -> Self {
        Self {
            maal,
            points,
            round_points: score.round_points,
            cumulative: score.cumulative,
        }
    }
}
