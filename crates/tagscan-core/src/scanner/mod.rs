//! Directory scanning: ignore filtering, extension dispatch, and
//! parallel per-file tag extraction.

mod ignores;
mod types;
mod walker;

pub use ignores::{IgnorePatterns, DEFAULT_IGNORES};
pub use types::{WalkConfig, WalkResult, WalkStats, DEFAULT_EXTENSIONS};
pub use walker::{scan_file, Walker};
