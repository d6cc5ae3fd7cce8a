//! Spirit (participant) model.
//!
//! Spirits are the competitors of an era. The engine only ever looks at
//! their identifiers; the display name is carried for rosters and reports.

use serde::{Deserialize, Serialize};

/// A competitor taking part in an era.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spirit {
    /// Unique spirit identifier.
    pub id: String,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
}

impl Spirit {
    /// Creates a spirit with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Name for display, falling back to the ID.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}
