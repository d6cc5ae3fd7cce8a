//! Circle-method round-robin.
//!
//! # Algorithm
//!
//! 1. Hold `items[0]` fixed; the other `N-1` items form a rotating ring.
//! 2. Pair position `i` with position `N-1-i` for `i` in `0..N/2`.
//! 3. Rotate the ring right by one (last moves to front) and repeat.
//!
//! After `N-1` rotations every unordered pair has met exactly once and
//! every item appears in every round exactly once.
//!
//! # Complexity
//! O(N²) time and output size.
//!
//! # Reference
//! Kirkman (1847); Berger tables as used in chess pairings.

use crate::error::{InputKind, ScheduleError, ScheduleResult};
use crate::models::{Pairing, Round};

/// Fails unless `len` is even and at least 2.
pub(crate) fn ensure_even_pool(len: usize, input: InputKind) -> ScheduleResult<()> {
    if len < 2 || len % 2 != 0 {
        return Err(ScheduleError::InvalidInputSize { input, len });
    }
    Ok(())
}

/// Generates the `N-1` rounds of a complete round-robin over `items`.
///
/// Items are compared by position, not by value; callers are expected to
/// pass distinct items (see [`validate_roster`](crate::validation::validate_roster)).
///
/// # Errors
/// [`ScheduleError::InvalidInputSize`] if `items` has fewer than 2 elements
/// or an odd count.
pub fn circle_rounds<T: Clone>(items: &[T]) -> ScheduleResult<Vec<Round<T>>> {
    let n = items.len();
    ensure_even_pool(n, InputKind::Items)?;

    let mut order: Vec<usize> = (0..n).collect();
    let mut rounds = Vec::with_capacity(n - 1);

    for _ in 0..n - 1 {
        let round: Round<T> = (0..n / 2)
            .map(|i| {
                Pairing::from_distinct(items[order[i]].clone(), items[order[n - 1 - i]].clone())
            })
            .collect();
        rounds.push(round);
        order[1..].rotate_right(1);
    }

    Ok(rounds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_items_single_round() {
        let rounds = circle_rounds(&["A", "B"]).unwrap();
        assert_eq!(rounds.len(), 1);
        assert_eq!(rounds[0], vec![Pairing::new("A", "B").unwrap()]);
    }

    #[test]
    fn test_four_items_exact_order() {
        let rounds = circle_rounds(&["A", "B", "C", "D"]).unwrap();
        let keys: Vec<Vec<(&str, &str)>> = rounds
            .iter()
            .map(|r| r.iter().map(|p| (*p.first(), *p.second())).collect())
            .collect();
        assert_eq!(
            keys,
            vec![
                vec![("A", "D"), ("B", "C")],
                vec![("A", "C"), ("D", "B")],
                vec![("A", "B"), ("C", "D")],
            ]
        );
    }

    #[test]
    fn test_first_item_fixed_in_first_slot() {
        let items: Vec<u32> = (0..8).collect();
        let rounds = circle_rounds(&items).unwrap();
        assert!(rounds.iter().all(|r| *r[0].first() == 0));
    }

    #[test]
    fn test_rejects_single_item() {
        assert_eq!(
            circle_rounds(&["A"]).unwrap_err(),
            ScheduleError::InvalidInputSize {
                input: InputKind::Items,
                len: 1
            }
        );
    }

    #[test]
    fn test_rejects_odd_count() {
        assert!(matches!(
            circle_rounds(&["A", "B", "C"]),
            Err(ScheduleError::InvalidInputSize { len: 3, .. })
        ));
    }

    #[test]
    fn test_rejects_empty() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            circle_rounds(&empty),
            Err(ScheduleError::InvalidInputSize { len: 0, .. })
        ));
    }

    #[test]
    fn test_no_self_pairs() {
        let items: Vec<u32> = (0..10).collect();
        for round in circle_rounds(&items).unwrap() {
            for p in round {
                assert_ne!(p.first(), p.second());
            }
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    proptest! {
        #[test]
        fn test_complete_round_robin(half in 1usize..=16) {
            let n = half * 2;
            let items: Vec<usize> = (0..n).collect();
            let rounds = circle_rounds(&items).unwrap();

            // --- Completeness: N-1 rounds, each a perfect matching ---
            prop_assert_eq!(rounds.len(), n - 1);
            for round in &rounds {
                prop_assert_eq!(round.len(), n / 2);
                let mut seen = HashSet::new();
                for p in round {
                    prop_assert!(seen.insert(*p.first()));
                    prop_assert!(seen.insert(*p.second()));
                }
                prop_assert_eq!(seen.len(), n);
            }

            // --- Coverage: every unordered pair exactly once ---
            let mut pairs = HashSet::new();
            for p in rounds.iter().flatten() {
                prop_assert!(p.first() != p.second());
                prop_assert!(pairs.insert(p.key()), "pair {:?} repeated", p.key());
            }
            prop_assert_eq!(pairs.len(), n * (n - 1) / 2);
        }
    }
}
