//! Configuration file loading (`.tagscan.toml`).
//!
//! The config owns the marker table and the walk filters. The comment
//! delimiters (`//`, `/* */`) and the three literal-quote kinds are
//! fixed constants of this scanner variant, not configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::extract::{MarkerTable, TagKind};
use crate::scanner::DEFAULT_EXTENSIONS;

/// Config file looked up at the walk root.
pub const CONFIG_FILE_NAME: &str = ".tagscan.toml";

/// A single configured marker token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerSpec {
    /// Literal token matched immediately before a colon.
    pub token: String,
    /// Kind the token maps to.
    pub kind: TagKind,
}

/// On-disk configuration, deserialized from `.tagscan.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TagscanConfig {
    /// File extensions to scan (no leading dot).
    pub extensions: Vec<String>,
    /// Extra ignore patterns (gitignore syntax).
    pub ignore: Vec<String>,
    /// Marker tokens to extract.
    pub markers: Vec<MarkerSpec>,
}

impl Default for TagscanConfig {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            ignore: vec![],
            markers: vec![
                MarkerSpec {
                    token: "TODO".into(),
                    kind: TagKind::FixLater,
                },
                MarkerSpec {
                    token: "FIXME".into(),
                    kind: TagKind::NeedsRepair,
                },
            ],
        }
    }
}

impl TagscanConfig {
    /// Load the config at `root/.tagscan.toml`. A missing file falls
    /// back to defaults; a present-but-invalid file is an error.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        toml::from_str(&raw).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Build the marker table configured here.
    pub fn marker_table(&self) -> MarkerTable {
        MarkerTable::new(
            self.markers
                .iter()
                .map(|m| (m.token.clone(), m.kind.clone()))
                .collect(),
        )
    }
}
