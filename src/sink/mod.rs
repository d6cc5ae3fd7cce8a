//! Schedule sinks.
//!
//! A sink makes a generated era durable. It exposes a hierarchical
//! document interface (era → period → incursion); the engine never calls
//! it directly. [`publish`] walks a finished [`Era`] into a sink once.
//!
//! Period and incursion IDs are derived from the engine's 1-based indices
//! (`p01`, `i01`, ...).

mod directory;
mod memory;

pub use directory::DirectorySink;
pub use memory::{EraDocument, MemorySink, PeriodDocument};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{SinkError, SinkResult};
use crate::models::{Era, Incursion};

/// Payload stored for one incursion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncursionRecord {
    /// 1-based position within the period.
    pub index: u32,
    /// First spirit.
    pub spirit_1: String,
    /// Second spirit.
    pub spirit_2: String,
    /// First board.
    pub board_1: String,
    /// Second board.
    pub board_2: String,
    /// Layout ID.
    pub layout_id: String,
}

impl From<&Incursion> for IncursionRecord {
    fn from(incursion: &Incursion) -> Self {
        Self {
            index: incursion.index(),
            spirit_1: incursion.spirits().first().clone(),
            spirit_2: incursion.spirits().second().clone(),
            board_1: incursion.boards().first().clone(),
            board_2: incursion.boards().second().clone(),
            layout_id: incursion.layout().to_string(),
        }
    }
}

/// Destination for generated eras.
pub trait ScheduleSink {
    /// Whether an era with this ID has already been created.
    fn era_exists(&self, era_id: &str) -> SinkResult<bool>;

    /// Creates an empty era.
    ///
    /// Fails with [`SinkError::EraAlreadyExists`] if the ID is taken.
    fn create_era(&mut self, era_id: &str) -> SinkResult<()>;

    /// Creates a period inside an existing era.
    fn create_period(&mut self, era_id: &str, period_id: &str, index: u32) -> SinkResult<()>;

    /// Stores an incursion inside an existing period.
    fn create_incursion(
        &mut self,
        era_id: &str,
        period_id: &str,
        incursion_id: &str,
        record: &IncursionRecord,
    ) -> SinkResult<()>;
}

/// Period document ID for a 1-based index.
pub fn period_id(index: u32) -> String {
    format!("p{index:02}")
}

/// Incursion document ID for a 1-based index.
pub fn incursion_id(index: u32) -> String {
    format!("i{index:02}")
}

/// Writes a finished era into `sink` under `era_id`.
///
/// Refuses to touch the sink at all when the era already exists.
pub fn publish<S>(era: &Era, era_id: &str, sink: &mut S) -> SinkResult<()>
where
    S: ScheduleSink + ?Sized,
{
    if sink.era_exists(era_id)? {
        return Err(SinkError::EraAlreadyExists(era_id.to_string()));
    }

    sink.create_era(era_id)?;
    for period in era.periods() {
        let pid = period_id(period.index());
        sink.create_period(era_id, &pid, period.index())?;
        for incursion in period.incursions() {
            let record = IncursionRecord::from(incursion);
            sink.create_incursion(era_id, &pid, &incursion_id(incursion.index()), &record)?;
        }
    }

    info!(
        era_id,
        periods = era.period_count(),
        incursions = era.incursion_count(),
        "era published"
    );
    Ok(())
}
