//! Pairings and rounds.
//!
//! A pairing joins two distinct elements: two spirits facing each other,
//! or the two boards of one incursion. A round is a list of pairings that
//! forms a perfect matching over its pool.

use serde::{Deserialize, Serialize};

/// Two distinct elements, in presentation order.
///
/// The pair is unordered for fairness purposes (see [`Pairing::key`]);
/// the stored order only decides which side is shown first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pairing<T> {
    first: T,
    second: T,
}

/// A perfect matching: every element of the pool appears in exactly one pairing.
pub type Round<T> = Vec<Pairing<T>>;

impl<T: PartialEq> Pairing<T> {
    /// Creates a pairing. Returns `None` if both elements are equal.
    pub fn new(first: T, second: T) -> Option<Self> {
        if first == second {
            None
        } else {
            Some(Self { first, second })
        }
    }

    /// Whether `item` is one of the two sides.
    pub fn contains(&self, item: &T) -> bool {
        self.first == *item || self.second == *item
    }
}

impl<T> Pairing<T> {
    /// Builds a pairing from positions already known to be distinct.
    pub(crate) fn from_distinct(first: T, second: T) -> Self {
        Self { first, second }
    }

    /// The side shown first.
    pub fn first(&self) -> &T {
        &self.first
    }

    /// The side shown second.
    pub fn second(&self) -> &T {
        &self.second
    }

    /// The same pairing with its sides exchanged.
    pub fn swapped(self) -> Self {
        Self {
            first: self.second,
            second: self.first,
        }
    }

    /// Maps both sides through `f`.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Pairing<U> {
        Pairing {
            first: f(self.first),
            second: f(self.second),
        }
    }

    /// Consumes the pairing into `(first, second)`.
    pub fn into_tuple(self) -> (T, T) {
        (self.first, self.second)
    }
}

impl<T: Ord + Clone> Pairing<T> {
    /// Order-independent identity: `(min, max)` of the two sides.
    pub fn key(&self) -> (T, T) {
        if self.first <= self.second {
            (self.first.clone(), self.second.clone())
        } else {
            (self.second.clone(), self.first.clone())
        }
    }
}
