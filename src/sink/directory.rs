//! On-disk JSON document sink.
//!
//! Layout under the root directory:
//!
//! ```text
//! <root>/<era_id>/era.json
//! <root>/<era_id>/<period_id>/period.json
//! <root>/<era_id>/<period_id>/<incursion_id>.json
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use super::{IncursionRecord, ScheduleSink};
use crate::error::{SinkError, SinkResult};

const ERA_FILE: &str = "era.json";
const PERIOD_FILE: &str = "period.json";

#[derive(Serialize)]
struct EraFile<'a> {
    id: &'a str,
}

#[derive(Serialize)]
struct PeriodFile<'a> {
    id: &'a str,
    index: u32,
}

/// Stores each era as a directory tree of JSON documents.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    /// Creates a sink rooted at `root`. The directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn era_dir(&self, era_id: &str) -> PathBuf {
        self.root.join(era_id)
    }

    fn period_dir(&self, era_id: &str, period_id: &str) -> PathBuf {
        self.era_dir(era_id).join(period_id)
    }

    fn write_json<T: Serialize>(path: &Path, value: &T) -> SinkResult<()> {
        let json = serde_json::to_string_pretty(value)?;
        fs::write(path, json)?;
        debug!(path = %path.display(), "document written");
        Ok(())
    }
}

impl ScheduleSink for DirectorySink {
    fn era_exists(&self, era_id: &str) -> SinkResult<bool> {
        Ok(self.era_dir(era_id).join(ERA_FILE).exists())
    }

    fn create_era(&mut self, era_id: &str) -> SinkResult<()> {
        if self.era_exists(era_id)? {
            return Err(SinkError::EraAlreadyExists(era_id.to_string()));
        }
        let dir = self.era_dir(era_id);
        fs::create_dir_all(&dir)?;
        Self::write_json(&dir.join(ERA_FILE), &EraFile { id: era_id })
    }

    fn create_period(&mut self, era_id: &str, period_id: &str, index: u32) -> SinkResult<()> {
        if !self.era_exists(era_id)? {
            return Err(SinkError::UnknownEra(era_id.to_string()));
        }
        let dir = self.period_dir(era_id, period_id);
        let file = dir.join(PERIOD_FILE);
        if file.exists() {
            return Err(SinkError::DuplicatePeriod {
                era_id: era_id.to_string(),
                period_id: period_id.to_string(),
            });
        }
        fs::create_dir_all(&dir)?;
        Self::write_json(
            &file,
            &PeriodFile {
                id: period_id,
                index,
            },
        )
    }

    fn create_incursion(
        &mut self,
        era_id: &str,
        period_id: &str,
        incursion_id: &str,
        record: &IncursionRecord,
    ) -> SinkResult<()> {
        let dir = self.period_dir(era_id, period_id);
        if !dir.join(PERIOD_FILE).exists() {
            return Err(SinkError::UnknownPeriod {
                era_id: era_id.to_string(),
                period_id: period_id.to_string(),
            });
        }
        let file = dir.join(format!("{incursion_id}.json"));
        if file.exists() {
            return Err(SinkError::DuplicateIncursion {
                era_id: era_id.to_string(),
                period_id: period_id.to_string(),
                incursion_id: incursion_id.to_string(),
            });
        }
        Self::write_json(&file, record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{assemble, EraRequest};
    use crate::sink::publish;

    #[test]
    fn test_publish_writes_tree() {
        let tmp = tempfile::tempdir().unwrap();
        let mut sink = DirectorySink::new(tmp.path());

        let request = EraRequest::new(
            ["A", "B", "C", "D"],
            ["r1", "r2", "r3", "r4"],
            ["L1", "L2"],
        )
        .with_seed(1);
        let era = assemble(&request).unwrap();
        publish(&era, "e01", &mut sink).unwrap();

        let era_dir = tmp.path().join("e01");
        assert!(era_dir.join("era.json").exists());
        for p in 1..=3 {
            let period_dir = era_dir.join(format!("p{p:02}"));
            assert!(period_dir.join("period.json").exists());
            assert!(period_dir.join("i01.json").exists());
            assert!(period_dir.join("i02.json").exists());
        }

        let raw = fs::read_to_string(era_dir.join("p01").join("i01.json")).unwrap();
        let stored: IncursionRecord = serde_json::from_str(&raw).unwrap();
        let expected = IncursionRecord::from(&era.period(1).unwrap().incursions()[0]);
        assert_eq!(stored, expected);
    }

    #[test]
    fn test_existing_era_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let mut sink = DirectorySink::new(tmp.path());
        sink.create_era("e01").unwrap();
        assert!(sink.era_exists("e01").unwrap());
        assert!(matches!(
            sink.create_era("e01"),
            Err(SinkError::EraAlreadyExists(_))
        ));
    }

    #[test]
    fn test_missing_parents_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let mut sink = DirectorySink::new(tmp.path());
        assert!(matches!(
            sink.create_period("e01", "p01", 1),
            Err(SinkError::UnknownEra(_))
        ));

        sink.create_era("e01").unwrap();
        let record = IncursionRecord {
            index: 1,
            spirit_1: "A".into(),
            spirit_2: "B".into(),
            board_1: "r1".into(),
            board_2: "r2".into(),
            layout_id: "L1".into(),
        };
        assert!(matches!(
            sink.create_incursion("e01", "p01", "i01", &record),
            Err(SinkError::UnknownPeriod { .. })
        ));
    }
}
