//! HTTP response head encoder.
//!
//! Serializes the status line and headers of a [`ResponseHead`] using the head's own
//! line terminator. Nothing is added or normalized: no implicit `Content-Length`,
//! header names are written as given.

use crate::protocol::{ResponseHead, SendError};

use bytes::{BufMut, BytesMut};

use std::io;
use std::io::Write;
use tokio_util::codec::Encoder;

/// Initial buffer size allocated for header serialization
const INIT_HEADER_SIZE: usize = 512;

/// Encoder for HTTP response heads implementing the [`Encoder`] trait.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeaderEncoder;

impl Encoder<ResponseHead> for HeaderEncoder {
    type Error = SendError;

    /// Encodes the response head into the provided bytes buffer.
    ///
    /// The status line is always `HTTP/1.1 <code> <reason>`.
    fn encode(&mut self, head: ResponseHead, dst: &mut BytesMut) -> Result<(), Self::Error> {
        let line_ending = head.line_ending().as_bytes();

        dst.reserve(INIT_HEADER_SIZE);
        write!(
            FastWrite(dst),
            "HTTP/1.1 {} {}",
            head.status().as_str(),
            head.status().canonical_reason().unwrap_or_default()
        )?;
        dst.put_slice(line_ending);

        for (name, value) in head.headers() {
            dst.put_slice(name.as_bytes());
            dst.put_slice(b": ");
            dst.put_slice(value.as_bytes());
            dst.put_slice(line_ending);
        }
        dst.put_slice(line_ending);
        Ok(())
    }
}

/// Fast writer implementation for writing to BytesMut.
struct FastWrite<'a>(&'a mut BytesMut);

impl Write for FastWrite<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.put_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::LineEnding;
    use http::StatusCode;

    fn encode(head: ResponseHead) -> BytesMut {
        let mut dst = BytesMut::new();
        HeaderEncoder.encode(head, &mut dst).unwrap();
        dst
    }

    #[test]
    fn crlf_head() {
        let head = ResponseHead::new(StatusCode::OK).header("Content-Type", "image/png").header("Content-Length", "42");

        assert_eq!(&encode(head)[..], b"HTTP/1.1 200 OK\r\nContent-Type: image/png\r\nContent-Length: 42\r\n\r\n");
    }

    #[test]
    fn lfcr_head_keeps_header_spelling() {
        let head = ResponseHead::new(StatusCode::OK).with_line_ending(LineEnding::LfCr).header("contente-type", "text/html");

        assert_eq!(&encode(head)[..], b"HTTP/1.1 200 OK\n\rcontente-type: text/html\n\r\n\r");
    }

    #[test]
    fn not_found_status_line() {
        let head = ResponseHead::new(StatusCode::NOT_FOUND).header("Content-Type", "text/plain");

        assert_eq!(&encode(head)[..], b"HTTP/1.1 404 Not Found\r\nContent-Type: text/plain\r\n\r\n");
    }
}
