//! Era fairness metrics.
//!
//! Computes usage and coverage indicators from a generated era.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Board usage | Incursion slots taken by each board |
//! | Layout usage | Incursions played on each layout |
//! | Spirit appearances | Incursions each spirit plays |
//! | Distinct pairings | Unordered spirit pairs that meet at least once |
//! | Repeated pairings | Meetings beyond the first for any pair |

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::models::Era;

/// Era fairness indicators.
#[derive(Debug, Clone, Serialize)]
pub struct EraSummary {
    /// Seed the era was generated with.
    pub seed: u64,
    /// Number of periods.
    pub period_count: usize,
    /// Number of incursions across all periods.
    pub incursion_count: usize,
    /// Board ID → number of incursions using it.
    pub board_usage: BTreeMap<String, usize>,
    /// Layout ID → number of incursions played on it.
    pub layout_usage: BTreeMap<String, usize>,
    /// Spirit ID → number of incursions played.
    pub spirit_appearances: BTreeMap<String, usize>,
    /// Unordered spirit pairs that meet at least once.
    pub distinct_pairings: usize,
    /// Extra meetings of pairs that already met.
    pub repeated_pairings: usize,
}

impl EraSummary {
    /// Computes the summary of an era.
    pub fn calculate(era: &Era) -> Self {
        let mut board_usage = BTreeMap::new();
        let mut layout_usage = BTreeMap::new();
        let mut spirit_appearances = BTreeMap::new();
        let mut meetings: HashMap<(String, String), usize> = HashMap::new();

        for (_, incursion) in era.incursions() {
            let boards = incursion.boards();
            for board in [boards.first(), boards.second()] {
                *board_usage.entry(board.clone()).or_insert(0) += 1;
            }

            *layout_usage
                .entry(incursion.layout().to_string())
                .or_insert(0) += 1;

            let spirits = incursion.spirits();
            for spirit in [spirits.first(), spirits.second()] {
                *spirit_appearances.entry(spirit.clone()).or_insert(0) += 1;
            }
            *meetings.entry(spirits.key()).or_insert(0) += 1;
        }

        let repeated_pairings = meetings.values().map(|&n| n - 1).sum();

        Self {
            seed: era.seed(),
            period_count: era.period_count(),
            incursion_count: era.incursion_count(),
            board_usage,
            layout_usage,
            spirit_appearances,
            distinct_pairings: meetings.len(),
            repeated_pairings,
        }
    }

    /// Whether every board is used the same number of times.
    pub fn boards_balanced(&self) -> bool {
        let mut counts = self.board_usage.values();
        match counts.next() {
            Some(first) => counts.all(|c| c == first),
            None => true,
        }
    }

    /// Whether the era is a complete single round-robin over `spirit_count` spirits.
    ///
    /// Every pair meets exactly once and every spirit plays `spirit_count - 1` times.
    pub fn is_complete_round_robin(&self, spirit_count: usize) -> bool {
        if spirit_count < 2 {
            return false;
        }
        self.repeated_pairings == 0
            && self.distinct_pairings == spirit_count * (spirit_count - 1) / 2
            && self.spirit_appearances.len() == spirit_count
            && self
                .spirit_appearances
                .values()
                .all(|&n| n == spirit_count - 1)
    }

    /// Largest difference in usage between two layouts.
    pub fn layout_spread(&self) -> usize {
        let max = self.layout_usage.values().max().copied().unwrap_or(0);
        let min = self.layout_usage.values().min().copied().unwrap_or(0);
        max - min
    }
}
