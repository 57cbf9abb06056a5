//! Error taxonomy for tagscan.
//!
//! There is deliberately no parse-error kind: the lexer is permissive,
//! so every byte sequence (including unterminated literals and block
//! comments) has a defined, non-erroring handling path. The only scan
//! failure mode is the underlying read.

use std::path::PathBuf;

/// Errors that can occur while scanning one file.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("IO error scanning {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors that can occur during configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Config parse error in {path}: {message}")]
    Parse { path: String, message: String },
}
