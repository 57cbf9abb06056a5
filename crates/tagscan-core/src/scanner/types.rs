//! Walk configuration and result types.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::extract::{MarkerTable, Tag};

/// Extensions of languages using `//` line comments and `/* */` block
/// comments, the two syntaxes this scanner variant understands.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    "go", "js", "jsx", "ts", "tsx", "c", "h", "cpp", "hpp", "cc", "java", "cs", "rs", "swift",
    "kt", "scala",
];

/// Configuration for a directory walk.
#[derive(Debug, Clone)]
pub struct WalkConfig {
    /// Root directory to walk.
    pub root: PathBuf,
    /// File extensions to scan (no leading dot).
    pub extensions: Vec<String>,
    /// Additional ignore patterns (beyond defaults).
    pub extra_ignores: Vec<String>,
    /// Maximum file size to scan (bytes).
    pub max_file_size: u64,
    /// Marker tokens to extract.
    pub markers: MarkerTable,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            extra_ignores: vec![],
            max_file_size: 10 * 1024 * 1024, // 10MB
            markers: MarkerTable::default(),
        }
    }
}

/// Statistics about one walk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WalkStats {
    /// Files that matched the extension filter and were scanned.
    pub files_matched: usize,
    /// Files skipped (ignored, wrong extension, too large).
    pub files_skipped: usize,
    /// Tags found across all files.
    pub tags_found: usize,
    /// Walk duration.
    #[serde(with = "duration_millis")]
    pub duration: Duration,
}

/// Result of a walk operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalkResult {
    /// Root directory that was walked.
    pub root: String,
    /// Every tag found, in discovery order. Never deduplicated or
    /// re-sorted.
    pub tags: Vec<Tag>,
    /// Walk statistics.
    pub stats: WalkStats,
    /// Per-file failures (non-fatal; the walk continues past them).
    pub errors: Vec<String>,
}

// Custom serialization for Duration as milliseconds
mod duration_millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}
