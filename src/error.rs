//! Error types.
//!
//! Generation errors are caller data errors detected before any output is
//! produced; none of them is retried internally.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::validation::ValidationError;

/// Which input pool a size error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Spirit (participant) list.
    Spirits,
    /// Board (resource) list.
    Boards,
    /// Layout (topology) list.
    Layouts,
    /// Generic items handed to the round-robin generator.
    Items,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputKind::Spirits => "spirits",
            InputKind::Boards => "boards",
            InputKind::Layouts => "layouts",
            InputKind::Items => "items",
        };
        f.write_str(name)
    }
}

/// Errors raised while generating an era.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    #[error("{input}: need an even count of at least 2, got {len}")]
    InvalidInputSize { input: InputKind, len: usize },

    #[error("{slots} board slots cannot cover all {boards} boards")]
    InsufficientResources { slots: usize, boards: usize },

    #[error("{slots} board slots cannot be split evenly across {boards} boards")]
    UnbalanceableResources { slots: usize, boards: usize },

    #[error("roster failed validation: {}", summarize(.0))]
    Validation(Vec<ValidationError>),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Errors raised by a [`ScheduleSink`](crate::sink::ScheduleSink).
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("era already exists: {0}")]
    EraAlreadyExists(String),

    #[error("era not found: {0}")]
    UnknownEra(String),

    #[error("period not found: {era_id}/{period_id}")]
    UnknownPeriod { era_id: String, period_id: String },

    #[error("period already exists: {era_id}/{period_id}")]
    DuplicatePeriod { era_id: String, period_id: String },

    #[error("incursion already exists: {era_id}/{period_id}/{incursion_id}")]
    DuplicateIncursion {
        era_id: String,
        period_id: String,
        incursion_id: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SinkResult<T> = Result<T, SinkError>;

/// Errors raised while loading rosters and configuration files.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}
