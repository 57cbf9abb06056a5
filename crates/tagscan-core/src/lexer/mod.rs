//! Streaming comment lexer.
//!
//! One `CommentScanner` per file: a single forward pass with one byte of
//! lookahead, producing complete comment segments while skipping string
//! and character literal content. Literal content is never inspected for
//! comment openers, which is what keeps marker text inside strings from
//! producing false positives.

mod reader;
mod scanner;
mod types;

pub use scanner::CommentScanner;
pub use types::{CommentKind, CommentSegment, ScanState};
