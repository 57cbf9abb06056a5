//! tagscan: find annotation tags (TODO, FIXME, ...) in source comments.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tagscan_core::{
    scan_file, TagscanConfig, WalkConfig, WalkResult, WalkStats, Walker,
};

#[derive(Debug, Parser)]
#[command(name = "tagscan", about = "Extract annotation tags from source comments")]
struct Args {
    /// Files or directories to scan.
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Extra ignore pattern (gitignore syntax).
    #[arg(short, long)]
    ignore: Option<String>,

    /// Emit the full walk results as JSON.
    #[arg(long)]
    json: bool,

    /// Print walk statistics to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut results = Vec::new();
    for path in &args.paths {
        let meta = fs::metadata(path)
            .with_context(|| format!("cannot stat {}", path.display()))?;
        let result = if meta.is_dir() {
            walk_dir(path, &args)?
        } else {
            scan_single(path)?
        };
        results.push(result);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    for result in &results {
        for tag in &result.tags {
            println!("{}:{}: {}: {}", tag.file, tag.line, tag.kind, tag.message);
        }
        for error in &result.errors {
            tracing::warn!("{error}");
        }
        if args.verbose {
            eprintln!(
                "{}: {} files scanned, {} skipped, {} tags, {} errors",
                result.root,
                result.stats.files_matched,
                result.stats.files_skipped,
                result.stats.tags_found,
                result.errors.len(),
            );
        }
    }

    Ok(())
}

fn walk_dir(root: &Path, args: &Args) -> anyhow::Result<WalkResult> {
    let config = TagscanConfig::load(root)?;

    let mut walk = WalkConfig {
        root: root.to_path_buf(),
        extensions: config.extensions.clone(),
        extra_ignores: config.ignore.clone(),
        markers: config.marker_table(),
        ..Default::default()
    };
    if let Some(pattern) = &args.ignore {
        walk.extra_ignores.push(pattern.clone());
    }

    Ok(Walker::new(walk).walk())
}

/// A file argument is scanned directly when its extension matches the
/// configured list; the reported path is the argument as given.
fn scan_single(path: &Path) -> anyhow::Result<WalkResult> {
    let parent = path.parent().unwrap_or(Path::new("."));
    let config = TagscanConfig::load(parent)?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let mut tags = Vec::new();
    let mut stats = WalkStats::default();
    if config.extensions.iter().any(|e| e == ext) {
        tags = scan_file(path, &path.display().to_string(), &config.marker_table())?;
        stats.files_matched = 1;
        stats.tags_found = tags.len();
    } else {
        stats.files_skipped = 1;
    }

    Ok(WalkResult {
        root: path.display().to_string(),
        tags,
        stats,
        errors: vec![],
    })
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("TAGSCAN_LOG").unwrap_or_else(|_| EnvFilter::new("tagscan=warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
