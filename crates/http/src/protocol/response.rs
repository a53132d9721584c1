//! HTTP response head handling.
//!
//! Header names are kept exactly as given and the line terminator is chosen per
//! response, so a head can be written byte-for-byte as callers expect, including
//! non-canonical forms such as `\n\r` terminators.

use std::borrow::Cow;

use bytes::Bytes;
use http::StatusCode;

use crate::protocol::body::ResponseBody;

/// Body written by [`HttpResponse::not_found`].
pub const NOT_FOUND_BODY: &str = "404 Not Found";

/// Body written by [`HttpResponse::internal_error`].
pub const INTERNAL_ERROR_BODY: &str = "500 Internal Server Error";

/// The terminator written after the status line, after every header and for the blank line.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// `\r\n`
    #[default]
    Crlf,
    /// `\n\r`
    LfCr,
}

impl LineEnding {
    #[inline]
    pub fn as_bytes(self) -> &'static [u8] {
        match self {
            LineEnding::Crlf => b"\r\n",
            LineEnding::LfCr => b"\n\r",
        }
    }
}

type HeaderField = (Cow<'static, str>, Cow<'static, str>);

/// Status, headers and line terminator of an outgoing response.
#[derive(Debug, Clone)]
pub struct ResponseHead {
    status: StatusCode,
    line_ending: LineEnding,
    headers: Vec<HeaderField>,
}

impl ResponseHead {
    pub fn new(status: StatusCode) -> Self {
        Self { status, line_ending: LineEnding::default(), headers: Vec::with_capacity(4) }
    }

    #[must_use]
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Appends a header. Names are written verbatim, no case normalization happens.
    #[must_use]
    pub fn header(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<Cow<'static, str>>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    pub fn headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(name, value)| (name.as_ref(), value.as_ref()))
    }

    /// Returns the first header value whose name matches ignoring ASCII case.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers().find(|(n, _)| n.eq_ignore_ascii_case(name)).map(|(_, v)| v)
    }
}

/// A complete outgoing response: head plus body.
#[derive(Debug)]
pub struct HttpResponse {
    head: ResponseHead,
    body: ResponseBody,
}

impl HttpResponse {
    pub fn new(head: ResponseHead, body: impl Into<ResponseBody>) -> Self {
        Self { head, body: body.into() }
    }

    /// The plain-text `404 Not Found` response.
    pub fn not_found() -> Self {
        Self::plain_text(StatusCode::NOT_FOUND, NOT_FOUND_BODY)
    }

    /// The plain-text `500 Internal Server Error` response.
    pub fn internal_error() -> Self {
        Self::plain_text(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY)
    }

    fn plain_text(status: StatusCode, body: &'static str) -> Self {
        let head = ResponseHead::new(status).header("Content-Type", mime::TEXT_PLAIN.as_ref().to_owned());
        Self::new(head, Bytes::from_static(body.as_bytes()))
    }

    pub fn head(&self) -> &ResponseHead {
        &self.head
    }

    pub fn status(&self) -> StatusCode {
        self.head.status()
    }

    pub fn into_parts(self) -> (ResponseHead, ResponseBody) {
        (self.head, self.body)
    }
}
