//! Era assembly.
//!
//! # Algorithm
//!
//! 1. Validate the three pools (blank / duplicate IDs, sizes).
//! 2. Build the spirit round-robin; each round becomes one period.
//! 3. Shuffle the period order.
//! 4. For each period, at its post-shuffle 1-based index:
//!    a. assign balanced board pairs,
//!    b. pick rotated layouts and shuffle them,
//!    c. zip spirit pairs with board pairs and shuffle the zipped list,
//!    d. flip spirit orientation and board orientation with p = 0.5 each,
//!    e. number incursions in final order.
//!
//! Shuffles only change presentation: which spirits meet, and how often
//! each board and layout is used, are fixed by steps 2 and 4a/4b.
//!
//! # Determinism
//! A single RNG is threaded through every step, drawn in a fixed order
//! (period shuffle; then per period: board rounds, layouts, incursions,
//! two coin flips per incursion). The same request always yields the
//! same era.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use super::boards::{assign_boards, check_board_capacity};
use super::layouts::rotate_layouts;
use super::round_robin::{circle_rounds, ensure_even_pool};
use crate::error::{InputKind, ScheduleError, ScheduleResult};
use crate::models::{Era, Incursion, Period};
use crate::validation::validate_roster;

/// Input container for era generation.
#[derive(Debug, Clone)]
pub struct EraRequest {
    /// Spirit IDs. Even count, at least 2.
    pub spirits: Vec<String>,
    /// Board IDs. Even count dividing the spirit count.
    pub boards: Vec<String>,
    /// Layout IDs, already filtered for eligibility.
    pub layouts: Vec<String>,
    /// Seed for every randomized choice.
    pub seed: u64,
}

impl EraRequest {
    /// Creates a new request.
    pub fn new<S: Into<String>>(
        spirits: impl IntoIterator<Item = S>,
        boards: impl IntoIterator<Item = S>,
        layouts: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            spirits: spirits.into_iter().map(Into::into).collect(),
            boards: boards.into_iter().map(Into::into).collect(),
            layouts: layouts.into_iter().map(Into::into).collect(),
            seed: 0,
        }
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Number of periods the era will have.
    pub fn period_count(&self) -> usize {
        self.spirits.len().saturating_sub(1)
    }

    /// Number of incursions in each period.
    pub fn incursions_per_period(&self) -> usize {
        self.spirits.len() / 2
    }

    /// Checks every precondition without generating anything.
    ///
    /// Returns how many times each board will be used per period.
    pub fn check(&self) -> ScheduleResult<usize> {
        validate_roster(&self.spirits, &self.boards, &self.layouts)
            .map_err(ScheduleError::Validation)?;
        ensure_even_pool(self.spirits.len(), InputKind::Spirits)?;
        let repetitions = check_board_capacity(self.boards.len(), self.incursions_per_period())?;
        if self.layouts.is_empty() {
            return Err(ScheduleError::InvalidInputSize {
                input: InputKind::Layouts,
                len: 0,
            });
        }
        Ok(repetitions)
    }
}

/// Generates an era, seeding a fresh RNG from `request.seed`.
///
/// # Example
///
/// ```
/// use era_schedule::engine::{assemble, EraRequest};
///
/// let request = EraRequest::new(
///     ["A", "B", "C", "D"],
///     ["r1", "r2", "r3", "r4"],
///     ["L1", "L2"],
/// )
/// .with_seed(1);
///
/// let era = assemble(&request).unwrap();
/// assert_eq!(era.period_count(), 3);
/// assert_eq!(era.incursion_count(), 6);
/// ```
pub fn assemble(request: &EraRequest) -> ScheduleResult<Era> {
    let mut rng = ChaCha8Rng::seed_from_u64(request.seed);
    assemble_with_rng(request, &mut rng)
}

/// Generates an era drawing every random choice from `rng`.
///
/// `request.seed` is only recorded on the era; the caller is responsible
/// for `rng` having been seeded from it when reproducibility matters.
///
/// # Errors
/// Any precondition failure aborts the whole build; no partial era is
/// returned.
pub fn assemble_with_rng<R: Rng + ?Sized>(
    request: &EraRequest,
    rng: &mut R,
) -> ScheduleResult<Era> {
    request.check()?;

    let mut rounds = circle_rounds(&request.spirits)?;
    rounds.shuffle(rng);

    let mut periods = Vec::with_capacity(rounds.len());
    for (pos, round) in rounds.into_iter().enumerate() {
        let period_index = pos + 1;
        let match_count = round.len();

        let board_pairs = assign_boards(&request.boards, match_count, rng)?;

        let mut layouts = rotate_layouts(&request.layouts, match_count, period_index)?;
        layouts.shuffle(rng);

        let mut games: Vec<_> = round.into_iter().zip(board_pairs).collect();
        games.shuffle(rng);

        let incursions: Vec<Incursion> = games
            .into_iter()
            .zip(layouts)
            .enumerate()
            .map(|(i, ((spirits, boards), layout))| {
                let spirits = if rng.random_bool(0.5) {
                    spirits.swapped()
                } else {
                    spirits
                };
                let boards = if rng.random_bool(0.5) {
                    boards.swapped()
                } else {
                    boards
                };
                Incursion::new(index_u32(i + 1), spirits, boards, layout)
            })
            .collect();

        debug!(
            period = period_index,
            incursions = incursions.len(),
            "period assembled"
        );
        periods.push(Period::new(index_u32(period_index), incursions));
    }

    let era = Era::new(request.seed, periods);
    info!(
        seed = request.seed,
        periods = era.period_count(),
        incursions = era.incursion_count(),
        "era assembled"
    );
    Ok(era)
}

fn index_u32(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EraSummary;
    use std::collections::{HashMap, HashSet};

    fn sample_request(seed: u64) -> EraRequest {
        EraRequest::new(
            ["A", "B", "C", "D"],
            ["r1", "r2", "r3", "r4"],
            ["L1", "L2"],
        )
        .with_seed(seed)
    }

    fn spirits(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("s{i:02}")).collect()
    }

    #[test]
    fn test_four_spirit_scenario() {
        let era = assemble(&sample_request(1)).unwrap();
        assert_eq!(era.seed(), 1);
        assert_eq!(era.period_count(), 3);

        let mut pairs = HashSet::new();
        for (i, period) in era.periods().iter().enumerate() {
            assert_eq!(period.index() as usize, i + 1);
            assert_eq!(period.incursion_count(), 2);
            for (j, inc) in period.incursions().iter().enumerate() {
                assert_eq!(inc.index() as usize, j + 1);
                assert!(pairs.insert(inc.spirits().key()));
            }
        }
        assert_eq!(pairs.len(), 6);

        let summary = EraSummary::calculate(&era);
        assert!(summary.boards_balanced());
        assert!(summary.board_usage.values().all(|&c| c == 3));
        assert_eq!(summary.board_usage.len(), 4);
    }

    #[test]
    fn test_every_spirit_once_per_period() {
        let request = EraRequest::new(spirits(10), spirits(10), spirits(3)).with_seed(99);
        let era = assemble(&request).unwrap();
        assert_eq!(era.period_count(), 9);
        for period in era.periods() {
            let mut seen = HashSet::new();
            for inc in period.incursions() {
                assert!(seen.insert(inc.spirits().first().clone()));
                assert!(seen.insert(inc.spirits().second().clone()));
                assert_ne!(inc.boards().first(), inc.boards().second());
            }
            assert_eq!(seen.len(), 10);
        }
        assert!(EraSummary::calculate(&era).is_complete_round_robin(10));
    }

    #[test]
    fn test_determinism() {
        let a = assemble(&sample_request(42)).unwrap();
        let b = assemble(&sample_request(42)).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_seeds_vary_presentation() {
        let request = EraRequest::new(spirits(8), spirits(8), spirits(4));
        let eras: HashSet<String> = (0..8)
            .map(|seed| {
                let era = assemble(&request.clone().with_seed(seed)).unwrap();
                serde_json::to_string(&era).unwrap()
            })
            .collect();
        assert!(eras.len() > 1);
    }

    #[test]
    fn test_boards_balanced_per_period() {
        // 8 spirits → 4 incursions/period; 4 boards → each used twice per period
        let boards = ["a", "b", "c", "d"].map(String::from).to_vec();
        let request = EraRequest::new(spirits(8), boards, vec!["L".to_string()]).with_seed(3);
        assert_eq!(request.check().unwrap(), 2);
        let era = assemble(&request).unwrap();
        for period in era.periods() {
            let mut counts = HashMap::new();
            for inc in period.incursions() {
                *counts.entry(inc.boards().first().as_str()).or_insert(0) += 1;
                *counts.entry(inc.boards().second().as_str()).or_insert(0) += 1;
            }
            assert!(counts.values().all(|&c| c == 2));
        }
    }

    #[test]
    fn test_layouts_follow_rotation_before_shuffle() {
        let layouts = ["L1", "L2", "L3", "L4"].map(String::from).to_vec();
        let request = EraRequest::new(spirits(4), spirits(4), layouts).with_seed(11);
        let era = assemble(&request).unwrap();
        for period in era.periods() {
            let mut used: Vec<&str> = period.incursions().iter().map(|i| i.layout()).collect();
            used.sort_unstable();
            let mut expected =
                rotate_layouts(&request.layouts, 2, period.index() as usize).unwrap();
            expected.sort_unstable();
            assert_eq!(used, expected);
        }
    }

    #[test]
    fn test_odd_spirits_rejected() {
        let request = EraRequest::new(["A", "B", "C"], ["r1", "r2"], ["L1"]);
        assert_eq!(
            assemble(&request).unwrap_err(),
            ScheduleError::InvalidInputSize {
                input: InputKind::Spirits,
                len: 3
            }
        );
    }

    #[test]
    fn test_unbalanceable_boards_rejected() {
        // 6 spirits → 3 incursions → 6 slots; 4 boards do not divide 6
        let request = EraRequest::new(spirits(6), spirits(4), spirits(1));
        assert!(matches!(
            assemble(&request),
            Err(ScheduleError::UnbalanceableResources { slots: 6, boards: 4 })
        ));
    }

    #[test]
    fn test_duplicate_spirit_rejected() {
        let request = EraRequest::new(["A", "B", "A", "D"], ["r1", "r2"], ["L1"]);
        assert!(matches!(
            assemble(&request),
            Err(ScheduleError::Validation(errors)) if errors.len() == 1
        ));
    }

    #[test]
    fn test_no_layouts_rejected() {
        let request = EraRequest::new(spirits(4), spirits(2), Vec::new());
        assert!(matches!(
            request.check(),
            Err(ScheduleError::InvalidInputSize {
                input: InputKind::Layouts,
                ..
            })
        ));
    }

    #[test]
    fn test_request_shape() {
        let request = sample_request(0);
        assert_eq!(request.period_count(), 3);
        assert_eq!(request.incursions_per_period(), 2);
        assert_eq!(request.check().unwrap(), 1);
    }
}
