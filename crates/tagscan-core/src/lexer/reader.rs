//! One-byte-lookahead wrapper over a buffered reader.

use std::io::{self, BufRead, BufReader, Read};

/// Forward-only byte reader with a single byte of lookahead.
///
/// A failed lookahead is side-effect free: a peeked byte stays in place
/// until `next()` consumes it.
pub(crate) struct LookaheadReader<R: Read> {
    inner: BufReader<R>,
    peeked: Option<u8>,
}

impl<R: Read> LookaheadReader<R> {
    pub(crate) fn new(inner: R) -> Self {
        Self {
            inner: BufReader::new(inner),
            peeked: None,
        }
    }

    /// Consume and return the next byte, or `None` at end of stream.
    pub(crate) fn next(&mut self) -> io::Result<Option<u8>> {
        if let Some(b) = self.peeked.take() {
            return Ok(Some(b));
        }
        self.read_inner()
    }

    /// Return the next byte without consuming it.
    pub(crate) fn peek(&mut self) -> io::Result<Option<u8>> {
        if self.peeked.is_none() {
            self.peeked = self.read_inner()?;
        }
        Ok(self.peeked)
    }

    fn read_inner(&mut self) -> io::Result<Option<u8>> {
        let buf = self.inner.fill_buf()?;
        if buf.is_empty() {
            return Ok(None);
        }
        let b = buf[0];
        self.inner.consume(1);
        Ok(Some(b))
    }
}
