//! End-to-end tests: config loading, directory walk, tag extraction.

use std::fs;
use std::path::Path;

use tagscan_core::{TagKind, TagscanConfig, WalkConfig, WalkResult, Walker};

fn write_file(dir: &Path, name: &str, contents: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

const GO_SAMPLE: &str = r#"package main

import "fmt"

// TODO: handle the error instead of printing it
func main() {
    s := "// TODO: inside a string, not a comment"
    t := `/* FIXME: still inside a string */`
    fmt.Println(s, t)
    /* block note
    FIXME: validate input
    end of block */
}
"#;

#[test]
fn test_full_pipeline_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "main.go", GO_SAMPLE);

    let result = Walker::new(WalkConfig {
        root: dir.path().to_path_buf(),
        ..Default::default()
    })
    .walk();

    assert!(result.errors.is_empty());
    assert_eq!(result.tags.len(), 2);

    assert_eq!(result.tags[0].kind, TagKind::FixLater);
    assert_eq!(result.tags[0].file, "main.go");
    assert_eq!(result.tags[0].line, 5);
    assert_eq!(
        result.tags[0].message,
        "handle the error instead of printing it"
    );

    // The block comment's tag is attributed the closing line, not the
    // line the marker sits on.
    assert_eq!(result.tags[1].kind, TagKind::NeedsRepair);
    assert_eq!(result.tags[1].line, 12);
    assert_eq!(result.tags[1].message, "validate input");
}

#[test]
fn test_config_file_drives_the_walk() {
    let dir = tempfile::tempdir().unwrap();
    write_file(
        dir.path(),
        ".tagscan.toml",
        r#"
extensions = ["go"]
ignore = ["generated"]

[[markers]]
token = "HACK"
kind = { custom = "HACK" }
"#,
    );
    write_file(dir.path(), "a.go", "// HACK: temporary\n// TODO: not configured\n");
    write_file(dir.path(), "b.ts", "// HACK: wrong extension\n");
    write_file(dir.path(), "generated/c.go", "// HACK: ignored dir\n");

    let config = TagscanConfig::load(dir.path()).unwrap();
    let result = Walker::new(WalkConfig {
        root: dir.path().to_path_buf(),
        extensions: config.extensions.clone(),
        extra_ignores: config.ignore.clone(),
        markers: config.marker_table(),
        ..Default::default()
    })
    .walk();

    assert_eq!(result.tags.len(), 1);
    assert_eq!(result.tags[0].file, "a.go");
    assert_eq!(result.tags[0].kind, TagKind::Custom("HACK".into()));
    assert_eq!(result.tags[0].message, "temporary");
}

#[test]
fn test_walk_result_json_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "x.go", "// TODO: a\n// FIXME: b\n");

    let result = Walker::new(WalkConfig {
        root: dir.path().to_path_buf(),
        ..Default::default()
    })
    .walk();

    let json = serde_json::to_string(&result).unwrap();
    let back: WalkResult = serde_json::from_str(&json).unwrap();
    assert_eq!(result.tags, back.tags);
    assert_eq!(result.stats.files_matched, back.stats.files_matched);
}

#[test]
fn test_repeated_walks_are_identical() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "a.go", "// TODO: one\n");
    write_file(dir.path(), "sub/b.go", "/* FIXME: two */\n");

    let config = WalkConfig {
        root: dir.path().to_path_buf(),
        ..Default::default()
    };
    let first = Walker::new(config.clone()).walk();
    let second = Walker::new(config).walk();

    assert_eq!(first.tags, second.tags);
}
