//! Directory walker: collects candidate files and scans them in
//! parallel.
//!
//! Per-file scans share no state, so fanning out across files with rayon
//! is safe; each file gets its own scanner instance and file handle, and
//! results are reassembled in discovery order.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use globset::{Glob, GlobSet, GlobSetBuilder};
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::errors::ScanError;
use crate::extract::{extract, MarkerTable, Tag};
use crate::lexer::CommentScanner;

use super::ignores::IgnorePatterns;
use super::types::{WalkConfig, WalkResult, WalkStats};

/// Walks a directory tree and extracts annotation tags from every file
/// matching the configured extensions.
pub struct Walker {
    config: WalkConfig,
    ignores: IgnorePatterns,
    include_globs: GlobSet,
}

impl Walker {
    /// Create a walker with the given configuration.
    pub fn new(config: WalkConfig) -> Self {
        let ignores = IgnorePatterns::new(&config.root, &config.extra_ignores);

        let mut builder = GlobSetBuilder::new();
        for ext in &config.extensions {
            if let Ok(glob) = Glob::new(&format!("**/*.{ext}")) {
                builder.add(glob);
            }
        }
        let include_globs = builder.build().unwrap_or_else(|_| GlobSet::empty());

        Self {
            config,
            ignores,
            include_globs,
        }
    }

    /// Walk the tree and return every tag in discovery order.
    pub fn walk(&self) -> WalkResult {
        let start = Instant::now();

        let mut files = Vec::new();
        let mut skipped = 0usize;
        self.collect_files(&self.config.root, &mut files, &mut skipped);

        let per_file: Vec<Result<Vec<Tag>, ScanError>> = files
            .par_iter()
            .map(|path| self.scan_relative(path))
            .collect();

        let mut tags = Vec::new();
        let mut errors = Vec::new();
        for (path, outcome) in files.iter().zip(per_file) {
            match outcome {
                Ok(file_tags) => tags.extend(file_tags),
                // An IO failure is fatal for that file only.
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "file scan failed");
                    errors.push(format!("{}: {}", path.display(), e));
                }
            }
        }

        let stats = WalkStats {
            files_matched: files.len(),
            files_skipped: skipped,
            tags_found: tags.len(),
            duration: start.elapsed(),
        };
        debug!(
            files = stats.files_matched,
            tags = stats.tags_found,
            "walk complete"
        );

        WalkResult {
            root: self.config.root.display().to_string(),
            tags,
            stats,
            errors,
        }
    }

    fn scan_relative(&self, path: &Path) -> Result<Vec<Tag>, ScanError> {
        let relative = path
            .strip_prefix(&self.config.root)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();
        scan_file(path, &relative, &self.config.markers)
    }

    /// Recursively collect files that pass the ignore and extension
    /// filters. Entries are visited in file-name order so discovery
    /// order (and therefore tag order) is deterministic.
    fn collect_files(&self, dir: &Path, files: &mut Vec<PathBuf>, skipped: &mut usize) {
        let entries = match fs::read_dir(dir) {
            Ok(e) => e,
            Err(_) => return,
        };

        let mut entries: Vec<_> = entries.flatten().collect();
        entries.sort_by_key(|e| e.file_name());

        for entry in entries {
            let path = entry.path();
            let relative = path.strip_prefix(&self.config.root).unwrap_or(&path);

            if path.is_dir() {
                if self.ignores.is_ignored(relative, true) {
                    continue;
                }
                self.collect_files(&path, files, skipped);
            } else if path.is_file() {
                if self.ignores.is_ignored(relative, false)
                    || !self.include_globs.is_match(relative)
                {
                    *skipped += 1;
                    continue;
                }
                match entry.metadata() {
                    Ok(meta) if meta.len() > self.config.max_file_size => *skipped += 1,
                    _ => files.push(path),
                }
            }
        }
    }
}

/// Scan a single file for tags. `file` is the path recorded on each tag
/// (relative to the caller's root). The handle is released on every path
/// out of this function; a read failure discards the file's partial
/// results.
pub fn scan_file(path: &Path, file: &str, markers: &MarkerTable) -> Result<Vec<Tag>, ScanError> {
    let handle = fs::File::open(path).map_err(|source| ScanError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut tags = Vec::new();
    for segment in CommentScanner::new(handle, path) {
        let segment = segment?;
        tags.extend(extract(&segment, file, markers));
    }
    Ok(tags)
}
