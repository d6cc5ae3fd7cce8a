//! Board (shared resource) model.

use serde::{Deserialize, Serialize};

/// A board shared by both sides of an incursion.
///
/// Every incursion uses two distinct boards. Across an era each board is
/// used the same number of times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Unique board identifier.
    pub id: String,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
}

impl Board {
    /// Creates a board with the given ID.
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
}
