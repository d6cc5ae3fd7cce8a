//! In-memory document sink.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{IncursionRecord, ScheduleSink};
use crate::error::{SinkError, SinkResult};

/// Stored era document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EraDocument {
    /// Period ID → period document.
    pub periods: BTreeMap<String, PeriodDocument>,
}

/// Stored period document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodDocument {
    /// 1-based position within the era.
    pub index: u32,
    /// Incursion ID → incursion record.
    pub incursions: BTreeMap<String, IncursionRecord>,
}

/// Hierarchical document store kept in memory.
///
/// Serializes to the same tree shape a document database would hold.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemorySink {
    eras: BTreeMap<String, EraDocument>,
}

impl MemorySink {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a stored era.
    pub fn era(&self, era_id: &str) -> Option<&EraDocument> {
        self.eras.get(era_id)
    }

    /// IDs of all stored eras.
    pub fn era_ids(&self) -> impl Iterator<Item = &str> {
        self.eras.keys().map(String::as_str)
    }

    fn period_mut(&mut self, era_id: &str, period_id: &str) -> SinkResult<&mut PeriodDocument> {
        self.eras
            .get_mut(era_id)
            .ok_or_else(|| SinkError::UnknownEra(era_id.to_string()))?
            .periods
            .get_mut(period_id)
            .ok_or_else(|| SinkError::UnknownPeriod {
                era_id: era_id.to_string(),
                period_id: period_id.to_string(),
            })
    }
}

impl ScheduleSink for MemorySink {
    fn era_exists(&self, era_id: &str) -> SinkResult<bool> {
        Ok(self.eras.contains_key(era_id))
    }

    fn create_era(&mut self, era_id: &str) -> SinkResult<()> {
        if self.eras.contains_key(era_id) {
            return Err(SinkError::EraAlreadyExists(era_id.to_string()));
        }
        self.eras.insert(era_id.to_string(), EraDocument::default());
        Ok(())
    }

    fn create_period(&mut self, era_id: &str, period_id: &str, index: u32) -> SinkResult<()> {
        let era = self
            .eras
            .get_mut(era_id)
            .ok_or_else(|| SinkError::UnknownEra(era_id.to_string()))?;
        if era.periods.contains_key(period_id) {
            return Err(SinkError::DuplicatePeriod {
                era_id: era_id.to_string(),
                period_id: period_id.to_string(),
            });
        }
        era.periods.insert(
            period_id.to_string(),
            PeriodDocument {
                index,
                incursions: BTreeMap::new(),
            },
        );
        Ok(())
    }

    fn create_incursion(
        &mut self,
        era_id: &str,
        period_id: &str,
        incursion_id: &str,
        record: &IncursionRecord,
    ) -> SinkResult<()> {
        let period = self.period_mut(era_id, period_id)?;
        if period.incursions.contains_key(incursion_id) {
            return Err(SinkError::DuplicateIncursion {
                era_id: era_id.to_string(),
                period_id: period_id.to_string(),
                incursion_id: incursion_id.to_string(),
            });
        }
        period
            .incursions
            .insert(incursion_id.to_string(), record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(index: u32) -> IncursionRecord {
        IncursionRecord {
            index,
            spirit_1: "A".into(),
            spirit_2: "B".into(),
            board_1: "r1".into(),
            board_2: "r2".into(),
            layout_id: "L1".into(),
        }
    }

    #[test]
    fn test_create_era_twice() {
        let mut sink = MemorySink::new();
        sink.create_era("e01").unwrap();
        assert!(sink.era_exists("e01").unwrap());
        assert!(matches!(
            sink.create_era("e01"),
            Err(SinkError::EraAlreadyExists(_))
        ));
    }

    #[test]
    fn test_period_requires_era() {
        let mut sink = MemorySink::new();
        assert!(matches!(
            sink.create_period("nope", "p01", 1),
            Err(SinkError::UnknownEra(_))
        ));
    }

    #[test]
    fn test_incursion_requires_period() {
        let mut sink = MemorySink::new();
        sink.create_era("e01").unwrap();
        assert!(matches!(
            sink.create_incursion("e01", "p01", "i01", &record(1)),
            Err(SinkError::UnknownPeriod { .. })
        ));
    }

    #[test]
    fn test_duplicates_rejected() {
        let mut sink = MemorySink::new();
        sink.create_era("e01").unwrap();
        sink.create_period("e01", "p01", 1).unwrap();
        assert!(matches!(
            sink.create_period("e01", "p01", 1),
            Err(SinkError::DuplicatePeriod { .. })
        ));

        sink.create_incursion("e01", "p01", "i01", &record(1)).unwrap();
        assert!(matches!(
            sink.create_incursion("e01", "p01", "i01", &record(1)),
            Err(SinkError::DuplicateIncursion { .. })
        ));
        assert_eq!(sink.era_ids().collect::<Vec<_>>(), vec!["e01"]);
    }

    #[test]
    fn test_serializes_as_tree() {
        let mut sink = MemorySink::new();
        sink.create_era("e01").unwrap();
        sink.create_period("e01", "p01", 1).unwrap();
        sink.create_incursion("e01", "p01", "i01", &record(1)).unwrap();

        let json = serde_json::to_value(&sink).unwrap();
        assert_eq!(
            json["eras"]["e01"]["periods"]["p01"]["incursions"]["i01"]["layout_id"],
            "L1"
        );
    }
}
