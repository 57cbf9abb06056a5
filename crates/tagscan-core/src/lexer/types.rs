//! Lexer data types: comment segments and the scan state machine.

use serde::{Deserialize, Serialize};

/// The two comment syntaxes this scanner variant recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentKind {
    /// `//` to end of line.
    Line,
    /// `/*` to `*/`, possibly spanning many lines.
    Block,
}

/// One complete comment's text plus its line-number span.
///
/// `text` excludes the comment delimiters and, for line comments, the
/// terminating newline. Block comment text keeps its embedded newlines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentSegment {
    pub text: Vec<u8>,
    /// 1-based line the comment opened on.
    pub start_line: u32,
    /// 1-based line the comment closed on (or the last line read, for a
    /// comment still open at end of stream).
    pub end_line: u32,
    pub kind: CommentKind,
}

/// Live lexer mode. Exactly one variant is active at a time, and `Code`
/// is the only state a transition can start from, so quoting and
/// commenting can never nest or overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Code,
    InSingleQuote,
    InDoubleQuote,
    InRawLiteral,
    InLineComment,
    InBlockComment,
}
