//! Tag data types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of a detected annotation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagKind {
    /// Work postponed on purpose (canonical token: `TODO`).
    FixLater,
    /// Something known to be broken (canonical token: `FIXME`).
    NeedsRepair,
    /// A user-configured marker with no built-in classification.
    Custom(String),
}

impl TagKind {
    /// The marker token printed in reports.
    pub fn as_str(&self) -> &str {
        match self {
            TagKind::FixLater => "TODO",
            TagKind::NeedsRepair => "FIXME",
            TagKind::Custom(token) => token,
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A detected annotation record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Path relative to the walk root.
    pub file: String,
    pub kind: TagKind,
    /// 1-based line the enclosing comment closed on.
    pub line: u32,
    /// Marker text after the colon, trimmed. May be empty.
    pub message: String,
}
