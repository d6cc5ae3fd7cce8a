//! Layout (map topology) model.
//!
//! Layouts carry two static attributes used to filter the pool before
//! generation: the player count the layout is designed for, and whether
//! it is currently in rotation. The engine itself only sees the ids of
//! the layouts that pass the filter.

use serde::{Deserialize, Serialize};

fn default_players() -> u32 {
    2
}

fn default_active() -> bool {
    true
}

/// A map arrangement assigned to an incursion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Unique layout identifier.
    pub id: String,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
    /// Intended number of players (default: 2).
    #[serde(default = "default_players")]
    pub players: u32,
    /// Whether the layout is in rotation (default: true).
    #[serde(default = "default_active")]
    pub active: bool,
}

impl Layout {
    /// Creates an active two-player layout.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            players: default_players(),
            active: default_active(),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the intended player count.
    pub fn with_players(mut self, players: u32) -> Self {
        self.players = players;
        self
    }

    /// Marks the layout as retired.
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// Whether this layout may be used for a game with `players` players.
    pub fn is_eligible(&self, players: u32) -> bool {
        self.active && self.players == players
    }
}
