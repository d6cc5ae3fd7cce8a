//! era.toml configuration parser.
//!
//! ```toml
//! [era]
//! id = "e01"
//! seed = 42
//! players = 2
//!
//! [paths]
//! roster = "roster.toml"
//! output = "store"
//! ```
//!
//! Every value is optional; command-line flags take precedence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

fn default_players() -> u32 {
    2
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EraConfig {
    #[serde(default)]
    pub era: EraSection,
    #[serde(default)]
    pub paths: PathsSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EraSection {
    pub id: Option<String>,
    pub seed: Option<u64>,
    #[serde(default = "default_players")]
    pub players: u32,
}

impl Default for EraSection {
    fn default() -> Self {
        Self {
            id: None,
            seed: None,
            players: default_players(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsSection {
    pub roster: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl EraConfig {
    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Resolves relative paths against the directory holding the config file.
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        self.paths.roster = self.paths.roster.map(|p| base.join(p));
        self.paths.output = self.paths.output.map(|p| base.join(p));
        self
    }
}
