//! Ignore patterns for the directory walk.

use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};

/// Directories and files never worth scanning for annotations:
/// dependency trees, build outputs, VCS metadata, generated bundles.
pub const DEFAULT_IGNORES: &[&str] = &[
    // Version control
    ".git",
    ".svn",
    ".hg",
    // Dependencies
    "node_modules",
    "vendor",
    ".venv",
    "venv",
    // Build outputs
    "target",
    "build",
    "dist",
    "out",
    "__pycache__",
    // IDE/Editor
    ".idea",
    ".vscode",
    // Generated
    "*.min.js",
    "*.lock",
];

/// Gitignore-style pattern set: defaults, then user patterns, then the
/// walk root's `.gitignore` when present.
pub struct IgnorePatterns {
    gitignore: Gitignore,
}

impl IgnorePatterns {
    pub fn new(root: &Path, extra_patterns: &[String]) -> Self {
        let mut builder = GitignoreBuilder::new(root);

        for pattern in DEFAULT_IGNORES {
            let _ = builder.add_line(None, pattern);
        }
        for pattern in extra_patterns {
            let _ = builder.add_line(None, pattern);
        }

        let gitignore_file = root.join(".gitignore");
        if gitignore_file.exists() {
            let _ = builder.add(&gitignore_file);
        }

        Self {
            gitignore: builder.build().unwrap_or_else(|_| Gitignore::empty()),
        }
    }

    /// Check if a path (relative to the walk root) should be skipped.
    pub fn is_ignored(&self, path: &Path, is_dir: bool) -> bool {
        self.gitignore.matched(path, is_dir).is_ignore()
    }
}
