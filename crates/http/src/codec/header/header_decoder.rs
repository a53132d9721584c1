//! Request head decoder.
//!
//! The head is read line by line. It is complete when one of the following happens:
//!
//! 1. a blank line is found (the regular end of an HTTP head)
//! 2. the buffered bytes end exactly on a line boundary, meaning the client has
//!    nothing more ready for us right now
//!
//! Only the request line is interpreted, see [`RequestHead::parse`].
//!
//! # Limits
//!
//! - Maximum head size: 8KB

use bytes::BytesMut;
use tokio_util::codec::Decoder;
use tracing::trace;

use crate::ensure;

use crate::protocol::{ParseError, RequestHead};

/// Maximum size in bytes allowed for the entire request head
pub(crate) const MAX_HEADER_BYTES: usize = 8 * 1024;

/// Decoder for HTTP request heads implementing the [`Decoder`] trait.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeaderDecoder;

/// Outcome of scanning the buffered bytes for the end of the head.
#[derive(Debug, PartialEq, Eq)]
enum HeadScan {
    /// the head spans this many bytes, including the terminating line
    Complete(usize),
    /// need more data
    Partial,
}

impl Decoder for HeaderDecoder {
    type Item = RequestHead;
    type Error = ParseError;

    /// Attempts to decode a request head from the provided bytes buffer.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(head))` if the head is complete and the request line is valid
    /// - `Ok(None)` if more data is needed
    /// - `Err(ParseError)` if the head is too large or the request line is malformed
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if src.is_empty() {
            return Ok(None);
        }

        match scan_head(src) {
            HeadScan::Complete(head_size) => {
                trace!(head_size, "scanned request head");
                ensure!(head_size <= MAX_HEADER_BYTES, ParseError::too_large_header(head_size, MAX_HEADER_BYTES));
                let head_bytes = src.split_to(head_size);
                parse_head(&head_bytes).map(Some)
            }
            HeadScan::Partial => {
                ensure!(src.len() <= MAX_HEADER_BYTES, ParseError::too_large_header(src.len(), MAX_HEADER_BYTES));
                Ok(None)
            }
        }
    }

    /// At end of stream whatever was received is the head, even a last line
    /// without its terminator.
    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if let Some(head) = self.decode(src)? {
            return Ok(Some(head));
        }

        if src.is_empty() {
            return Ok(None);
        }

        let head_bytes = src.split();
        parse_head(&head_bytes).map(Some)
    }
}

fn parse_head(bytes: &[u8]) -> Result<RequestHead, ParseError> {
    let text = String::from_utf8_lossy(bytes);
    for line in text.lines() {
        trace!(line, "received");
    }
    RequestHead::parse(&text)
}

fn scan_head(buf: &[u8]) -> HeadScan {
    let mut start = 0;
    while let Some(pos) = buf[start..].iter().position(|b| *b == b'\n') {
        let line = &buf[start..start + pos];
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        start += pos + 1;
        if line.is_empty() {
            return HeadScan::Complete(start);
        }
    }

    if start > 0 && start == buf.len() { HeadScan::Complete(start) } else { HeadScan::Partial }
}
