//! The streaming comment scanner: a single-pass byte state machine.

use std::io::Read;
use std::path::PathBuf;

use crate::errors::ScanError;

use super::reader::LookaheadReader;
use super::types::{CommentKind, CommentSegment, ScanState};

/// Scans one file's byte stream and yields its comment segments.
///
/// A scanner owns its state for the duration of one file and is not
/// restartable: re-scanning requires a fresh stream and a fresh instance.
/// Iteration yields `Err` at most once, on the first read failure, after
/// which the scanner is exhausted. Use [`into_segments`] for the
/// collect-or-abandon contract where a failed read discards every
/// segment of the scan.
///
/// [`into_segments`]: CommentScanner::into_segments
pub struct CommentScanner<R: Read> {
    reader: LookaheadReader<R>,
    path: PathBuf,
    state: ScanState,
    buffer: Vec<u8>,
    line: u32,
    start_line: u32,
    done: bool,
}

impl<R: Read> CommentScanner<R> {
    /// Create a scanner over `inner`. `path` is only used in error
    /// reporting; in-memory scans can pass anything.
    pub fn new(inner: R, path: impl Into<PathBuf>) -> Self {
        Self {
            reader: LookaheadReader::new(inner),
            path: path.into(),
            state: ScanState::Code,
            buffer: Vec::new(),
            line: 1,
            start_line: 1,
            done: false,
        }
    }

    /// Run the scan to completion. A read failure abandons the whole
    /// scan: segments produced before the failure are discarded.
    pub fn into_segments(self) -> Result<Vec<CommentSegment>, ScanError> {
        self.collect()
    }

    /// Advance until a segment is emitted or the stream ends.
    fn advance(&mut self) -> Result<Option<CommentSegment>, ScanError> {
        loop {
            let Some(b) = self.next_byte()? else {
                return Ok(self.flush_at_eof());
            };

            let emitted = self.step(b)?;

            // The line counter advances on every newline regardless of
            // state. A segment closing on this newline was attributed
            // the pre-increment line inside `step`.
            if b == b'\n' {
                self.line += 1;
            }

            if emitted.is_some() {
                return Ok(emitted);
            }
        }
    }

    /// Process one byte in the current state.
    fn step(&mut self, b: u8) -> Result<Option<CommentSegment>, ScanError> {
        match self.state {
            ScanState::Code => {
                match b {
                    b'\'' => self.state = ScanState::InSingleQuote,
                    b'"' => self.state = ScanState::InDoubleQuote,
                    b'`' => self.state = ScanState::InRawLiteral,
                    b'/' => match self.peek_byte()? {
                        Some(b'/') => {
                            // The lookahead byte is part of the opener;
                            // consume it exactly once.
                            self.next_byte()?;
                            self.state = ScanState::InLineComment;
                            self.start_line = self.line;
                        }
                        Some(b'*') => {
                            self.next_byte()?;
                            self.state = ScanState::InBlockComment;
                            self.start_line = self.line;
                        }
                        // A lone slash is ordinary code; the peeked byte
                        // stays in place for the next iteration.
                        _ => {}
                    },
                    _ => {}
                }
                Ok(None)
            }
            // Literal content is discarded, never buffered and never
            // inspected for comment openers. Only the matching delimiter
            // for the open kind returns to Code; delimiters of the other
            // kinds are ordinary content.
            ScanState::InSingleQuote => {
                if b == b'\'' {
                    self.state = ScanState::Code;
                }
                Ok(None)
            }
            ScanState::InDoubleQuote => {
                if b == b'"' {
                    self.state = ScanState::Code;
                }
                Ok(None)
            }
            ScanState::InRawLiteral => {
                if b == b'`' {
                    self.state = ScanState::Code;
                }
                Ok(None)
            }
            ScanState::InLineComment => {
                if b == b'\n' {
                    Ok(Some(self.emit(CommentKind::Line)))
                } else {
                    self.buffer.push(b);
                    Ok(None)
                }
            }
            ScanState::InBlockComment => {
                if b == b'*' && self.peek_byte()? == Some(b'/') {
                    // Consume the closing slash so it cannot be re-read
                    // as the start of a new comment.
                    self.next_byte()?;
                    Ok(Some(self.emit(CommentKind::Block)))
                } else {
                    self.buffer.push(b);
                    Ok(None)
                }
            }
        }
    }

    fn emit(&mut self, kind: CommentKind) -> CommentSegment {
        self.state = ScanState::Code;
        CommentSegment {
            text: std::mem::take(&mut self.buffer),
            start_line: self.start_line,
            end_line: self.line,
            kind,
        }
    }

    /// A comment still open at end of stream is flushed with whatever
    /// accumulated. An open literal emits nothing: the scanner does not
    /// validate literal well-formedness.
    fn flush_at_eof(&mut self) -> Option<CommentSegment> {
        let kind = match self.state {
            ScanState::InLineComment => CommentKind::Line,
            ScanState::InBlockComment => CommentKind::Block,
            _ => return None,
        };
        if self.buffer.is_empty() {
            return None;
        }
        Some(self.emit(kind))
    }

    fn next_byte(&mut self) -> Result<Option<u8>, ScanError> {
        self.reader.next().map_err(|source| ScanError::Io {
            path: self.path.clone(),
            source,
        })
    }

    fn peek_byte(&mut self) -> Result<Option<u8>, ScanError> {
        self.reader.peek().map_err(|source| ScanError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl<R: Read> Iterator for CommentScanner<R> {
    type Item = Result<CommentSegment, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.advance() {
            Ok(Some(segment)) => Some(Ok(segment)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
