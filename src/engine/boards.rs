//! Board balancing.
//!
//! Assigns a pair of distinct boards to every incursion of a period so that
//! each board is used exactly the same number of times.
//!
//! # Algorithm
//!
//! 1. Build the complete round-robin over the boards: `B-1` rounds, each a
//!    perfect matching that uses every board once.
//! 2. Shuffle the round list.
//! 3. Take `repetitions = 2M / B` rounds, cycling through the shuffled list
//!    when more rounds are needed than exist.
//! 4. Concatenate their pairings.
//!
//! Every chosen round contributes each board once, so each board appears in
//! exactly `repetitions` pairs. The shuffle only picks among equally
//! balanced solutions.

use rand::seq::SliceRandom;
use rand::Rng;

use super::round_robin::{circle_rounds, ensure_even_pool};
use crate::error::{InputKind, ScheduleError, ScheduleResult};
use crate::models::Pairing;

/// Checks that `boards` can be spread evenly over `match_count` incursions.
///
/// # Errors
/// In order of precedence:
/// - [`ScheduleError::InvalidInputSize`] for fewer than 2 boards
/// - [`ScheduleError::InsufficientResources`] if `2 * match_count < boards`
/// - [`ScheduleError::UnbalanceableResources`] if `2 * match_count` is not a
///   multiple of `boards`
/// - [`ScheduleError::InvalidInputSize`] for an odd board count
pub fn check_board_capacity(boards: usize, match_count: usize) -> ScheduleResult<usize> {
    if boards < 2 {
        return Err(ScheduleError::InvalidInputSize {
            input: InputKind::Boards,
            len: boards,
        });
    }
    let slots = match_count * 2;
    if slots < boards {
        return Err(ScheduleError::InsufficientResources { slots, boards });
    }
    if slots % boards != 0 {
        return Err(ScheduleError::UnbalanceableResources { slots, boards });
    }
    ensure_even_pool(boards, InputKind::Boards)?;
    Ok(slots / boards)
}

/// Assigns `match_count` board pairs with perfectly even usage.
///
/// Consumes entropy from `rng` for one shuffle of the candidate rounds.
///
/// # Errors
/// See [`check_board_capacity`].
pub fn assign_boards<T, R>(
    boards: &[T],
    match_count: usize,
    rng: &mut R,
) -> ScheduleResult<Vec<Pairing<T>>>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let repetitions = check_board_capacity(boards.len(), match_count)?;

    let mut rounds = circle_rounds(boards)?;
    rounds.shuffle(rng);

    let assigned: Vec<Pairing<T>> = (0..repetitions)
        .flat_map(|i| rounds[i % rounds.len()].iter().cloned())
        .collect();

    debug_assert_eq!(assigned.len(), match_count);
    Ok(assigned)
}
