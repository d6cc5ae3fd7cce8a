//! Era (generated schedule) model.
//!
//! An era is the complete output of one generation run: an ordered list of
//! periods, each an ordered list of incursions. Indices are 1-based and
//! reflect final presentation order.
//!
//! Records are created once by the assembler and exposed read-only.

use serde::{Deserialize, Serialize};

use super::Pairing;

/// One scheduled game: two spirits, two boards, one layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incursion {
    index: u32,
    spirits: Pairing<String>,
    boards: Pairing<String>,
    layout: String,
}

/// One round of the era. Every spirit plays exactly once per period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    index: u32,
    incursions: Vec<Incursion>,
}

/// A complete generated schedule plus the seed that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Era {
    seed: u64,
    periods: Vec<Period>,
}

impl Incursion {
    pub(crate) fn new(
        index: u32,
        spirits: Pairing<String>,
        boards: Pairing<String>,
        layout: String,
    ) -> Self {
        Self {
            index,
            spirits,
            boards,
            layout,
        }
    }

    /// 1-based position within the period.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// The two spirits, in presentation order.
    pub fn spirits(&self) -> &Pairing<String> {
        &self.spirits
    }

    /// The two boards, in presentation order.
    pub fn boards(&self) -> &Pairing<String> {
        &self.boards
    }

    /// Layout ID.
    pub fn layout(&self) -> &str {
        &self.layout
    }

    /// Whether the given spirit plays in this incursion.
    pub fn involves(&self, spirit_id: &str) -> bool {
        self.spirits.first() == spirit_id || self.spirits.second() == spirit_id
    }
}

impl Period {
    pub(crate) fn new(index: u32, incursions: Vec<Incursion>) -> Self {
        Self { index, incursions }
    }

    /// 1-based position within the era.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Incursions in presentation order.
    pub fn incursions(&self) -> &[Incursion] {
        &self.incursions
    }

    /// Number of incursions.
    pub fn incursion_count(&self) -> usize {
        self.incursions.len()
    }

    /// The incursion a spirit plays in this period.
    pub fn incursion_for_spirit(&self, spirit_id: &str) -> Option<&Incursion> {
        self.incursions.iter().find(|i| i.involves(spirit_id))
    }
}

impl Era {
    pub(crate) fn new(seed: u64, periods: Vec<Period>) -> Self {
        Self { seed, periods }
    }

    /// Seed used to generate this era.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Periods in presentation order.
    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    /// Period by 1-based index.
    pub fn period(&self, index: u32) -> Option<&Period> {
        self.periods.iter().find(|p| p.index == index)
    }

    /// Number of periods.
    pub fn period_count(&self) -> usize {
        self.periods.len()
    }

    /// Total number of incursions across all periods.
    pub fn incursion_count(&self) -> usize {
        self.periods.iter().map(Period::incursion_count).sum()
    }

    /// All incursions, period by period.
    pub fn incursions(&self) -> impl Iterator<Item = (&Period, &Incursion)> {
        self.periods
            .iter()
            .flat_map(|p| p.incursions.iter().map(move |i| (p, i)))
    }

    /// All incursions a spirit plays, in era order.
    pub fn incursions_for_spirit<'a>(
        &'a self,
        spirit_id: &'a str,
    ) -> impl Iterator<Item = (&'a Period, &'a Incursion)> + 'a {
        self.incursions().filter(move |(_, i)| i.involves(spirit_id))
    }
}
