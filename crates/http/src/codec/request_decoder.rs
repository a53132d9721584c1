//! HTTP request decoder module
//!
//! Requests carry no body in this server, so decoding a request means decoding its
//! head. The decoder is single-shot: once a head has been produced any further bytes
//! on the connection are left untouched.
//!
//! # Example
//!
//! ```no_run
//! use quill_http::codec::RequestDecoder;
//! use tokio_util::codec::Decoder;
//! use bytes::BytesMut;
//!
//! let mut decoder = RequestDecoder::new();
//! let mut buffer = BytesMut::from("GET /index.html HTTP/1.1\r\n\r\n");
//! let head = decoder.decode(&mut buffer);
//! ```

use crate::codec::header::HeaderDecoder;
use crate::protocol::{ParseError, RequestHead};
use bytes::BytesMut;
use tokio_util::codec::Decoder;

/// A decoder producing at most one [`RequestHead`] per connection.
#[derive(Debug, Default)]
pub struct RequestDecoder {
    header_decoder: HeaderDecoder,
    finished: bool,
}

impl RequestDecoder {
    /// Creates a new `RequestDecoder` instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once a request head has been decoded
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl Decoder for RequestDecoder {
    type Item = RequestHead;
    type Error = ParseError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if self.finished {
            return Ok(None);
        }

        let head = self.header_decoder.decode(src)?;
        self.finished = head.is_some();
        Ok(head)
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if self.finished {
            src.clear();
            return Ok(None);
        }

        let head = self.header_decoder.decode_eof(src)?;
        self.finished = head.is_some();
        Ok(head)
    }
}
