//! Round scoring.
//!
//! The whole game reduces to one formula, applied once per round. With `n`
//! players, a total declared maal `T`, and per-player declared values
//! `maal[i]` and `points[i]`:
//!
//! - every non-closer scores `maal[i] * n - (T + points[i])`
//! - the closer scores the negated sum of everyone else's round points
//!
//! The closer rule makes every round zero-sum by construction. Cumulative
//! totals are the running sum of round points in round order.
//!
//! `score_round` is pure and deterministic: it validates everything up front,
//! touches no state, and identical inputs always produce identical outputs.

use smallvec::SmallVec;

use crate::core::{PlayerId, RoundScore, ScoreError, MIN_PLAYERS};

/// Per-round score buffer. Games rarely seat more than 8 players.
pub type RoundScores = SmallVec<[RoundScore; 8]>;

/// Compute one round's scores for all players.
///
/// Inputs are in seat order: `maal_values[i]` and `points_values[i]` belong to
/// the player at seat `i`, and `previous_cumulative[i]` is that player's
/// cumulative total before this round (all zeros for the first round).
///
/// Returns one [`RoundScore`] per player, in seat order.
///
/// ## Errors
///
/// - [`ScoreError::PlayerCount`] if fewer than 2 players
/// - [`ScoreError::LengthMismatch`] if the three input slices disagree on `n`
/// - [`ScoreError::CloserOutOfRange`] if `closer` is not a seat in `[0, n)`
/// - [`ScoreError::NegativeValue`] if any maal or points value is negative
///
/// ## Example
///
/// ```
/// use maal_score::core::PlayerId;
/// use maal_score::scoring::score_round;
///
/// // 3 players; seat 0 declared 2 maal and closed the round.
/// let scores = score_round(&[2, 0, 0], &[0, 5, 3], PlayerId::new(0), &[0, 0, 0]).unwrap();
///
/// assert_eq!(scores[0].round_points, 12);
/// assert_eq!(scores[1].round_points, -7);
/// assert_eq!(scores[2].round_points, -5);
/// ```
pub fn score_round(
    maal_values: &[i64],
    points_values: &[i64],
    closer: PlayerId,
    previous_cumulative: &[i64],
) -> Result<RoundScores, ScoreError> {
    let n = maal_values.len();
    if n < MIN_PLAYERS {
        return Err(ScoreError::PlayerCount { got: n });
    }
    if points_values.len() != n {
        return Err(ScoreError::LengthMismatch {
            expected: n,
            got: points_values.len(),
        });
    }
    if previous_cumulative.len() != n {
        return Err(ScoreError::LengthMismatch {
            expected: n,
            got: previous_cumulative.len(),
        });
    }
    if closer.index() >= n {
        return Err(ScoreError::CloserOutOfRange {
            closer,
            player_count: n,
        });
    }
    for (i, (&maal, &points)) in maal_values.iter().zip(points_values).enumerate() {
        for value in [maal, points] {
            if value < 0 {
                return Err(ScoreError::NegativeValue {
                    player: PlayerId::new(i as u8),
                    value,
                });
            }
        }
    }

    let total_maal: i64 = maal_values.iter().sum();

    let mut round_points: SmallVec<[i64; 8]> = SmallVec::from_elem(0, n);
    let mut non_closer_sum = 0i64;
    for i in 0..n {
        if i == closer.index() {
            continue;
        }
        let pts = maal_values[i] * n as i64 - (total_maal + points_values[i]);
        round_points[i] = pts;
        non_closer_sum += pts;
    }
    round_points[closer.index()] = -non_closer_sum;

    Ok(round_points
        .iter()
        .zip(previous_cumulative)
        .map(|(&rp, &prev)| RoundScore {
            round_points: rp,
            cumulative: prev + rp,
        })
        .collect())
}
