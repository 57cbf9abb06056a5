//! Scanning benchmarks
//!
//! Run with: cargo bench --package tagscan-core

use std::io::Cursor;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tagscan_core::{extract, CommentScanner, MarkerTable};

const GO_SAMPLE: &str = r#"
package server

import (
    "fmt"
    "net/http"
)

// TODO: make the timeout configurable
const readTimeout = 30

/* Handler wires the routes.
FIXME: split auth out of this function
*/
func Handler(mux *http.ServeMux) {
    mux.HandleFunc("/health", func(w http.ResponseWriter, r *http.Request) {
        fmt.Fprintln(w, "ok // TODO: not a comment")
    })
    query := `SELECT * FROM users /* FIXME: not a comment either */`
    _ = query
}
"#;

fn bench_scan_sample(c: &mut Criterion) {
    let table = MarkerTable::default();

    c.bench_function("scan_go_sample", |b| {
        b.iter(|| {
            let scanner = CommentScanner::new(
                Cursor::new(black_box(GO_SAMPLE.as_bytes())),
                "server.go",
            );
            let mut tags = Vec::new();
            for segment in scanner {
                let segment = segment.unwrap();
                tags.extend(extract(&segment, "server.go", &table));
            }
            tags
        })
    });
}

fn bench_scan_comment_free(c: &mut Criterion) {
    // Worst case for the extractor never firing: pure code.
    let source: String = "let x = a / b;\n".repeat(2_000);

    c.bench_function("scan_comment_free", |b| {
        b.iter(|| {
            CommentScanner::new(Cursor::new(black_box(source.as_bytes())), "code.rs")
                .into_segments()
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_scan_sample, bench_scan_comment_free);
criterion_main!(benches);
