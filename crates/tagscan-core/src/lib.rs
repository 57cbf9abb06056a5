//! tagscan-core: comment-annotation extraction engine
//!
//! This crate provides the components for finding annotation markers
//! (TODO, FIXME, and user-configured tokens) in source comments:
//! - Lexer: streaming byte-level state machine that separates comments
//!   from code and string-literal content
//! - Extract: marker matching inside comment segments
//! - Scanner: directory walking with ignore patterns and extension
//!   filtering
//! - Config: `.tagscan.toml` loading

pub mod config;
pub mod errors;
pub mod extract;
pub mod lexer;
pub mod scanner;

// Re-exports for convenience
pub use config::{MarkerSpec, TagscanConfig, CONFIG_FILE_NAME};
pub use errors::{ConfigError, ScanError};
pub use extract::{extract, MarkerTable, Tag, TagKind};
pub use lexer::{CommentKind, CommentScanner, CommentSegment};
pub use scanner::{scan_file, IgnorePatterns, WalkConfig, WalkResult, WalkStats, Walker};
