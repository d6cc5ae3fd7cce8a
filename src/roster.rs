//! Roster loading.
//!
//! A roster lists the spirits, boards, and layouts available to an era in a
//! single TOML file:
//!
//! ```toml
//! [[spirits]]
//! id = "lightning"
//! name = "Lightning's Swift Strike"
//!
//! [[boards]]
//! id = "A"
//!
//! [[layouts]]
//! id = "coastline"
//! players = 2
//! active = true
//! ```
//!
//! The roster only turns the file into plain ID lists; every scheduling
//! rule is checked by the engine.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::EraRequest;
use crate::error::LoadError;
use crate::models::{Board, Layout, Spirit};

/// Everything that can be scheduled into an era.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    /// Competitors.
    #[serde(default)]
    pub spirits: Vec<Spirit>,
    /// Shared boards.
    #[serde(default)]
    pub boards: Vec<Board>,
    /// Map layouts, eligible or not.
    #[serde(default)]
    pub layouts: Vec<Layout>,
}

impl Roster {
    /// Reads a roster from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a roster from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, LoadError> {
        Ok(toml::from_str(content)?)
    }

    /// Spirit IDs in roster order.
    pub fn spirit_ids(&self) -> Vec<String> {
        self.spirits.iter().map(|s| s.id.clone()).collect()
    }

    /// Board IDs in roster order.
    pub fn board_ids(&self) -> Vec<String> {
        self.boards.iter().map(|b| b.id.clone()).collect()
    }

    /// IDs of active layouts designed for `players` players, in roster order.
    pub fn layout_ids_for(&self, players: u32) -> Vec<String> {
        self.layouts
            .iter()
            .filter(|l| l.is_eligible(players))
            .map(|l| l.id.clone())
            .collect()
    }

    /// Looks up a spirit by ID.
    pub fn spirit(&self, id: &str) -> Option<&Spirit> {
        self.spirits.iter().find(|s| s.id == id)
    }

    /// Builds a generation request for `players`-player layouts.
    pub fn to_request(&self, players: u32, seed: u64) -> EraRequest {
        EraRequest::new(
            self.spirit_ids(),
            self.board_ids(),
            self.layout_ids_for(players),
        )
        .with_seed(seed)
    }
}
