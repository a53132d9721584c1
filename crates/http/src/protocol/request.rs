//! HTTP request head handling.
//!
//! Only the request line is interpreted: the method token and the request URI.
//! Every line after it is kept verbatim so it can be traced, but is otherwise ignored.

use http::{Method, Uri};

use crate::protocol::ParseError;

/// The parsed head of an incoming request.
#[derive(Debug, Clone)]
pub struct RequestHead {
    method: Method,
    uri: Uri,
    request_line: String,
    header_lines: Vec<String>,
}

impl RequestHead {
    /// Parses a raw request head.
    ///
    /// The first line is split on whitespace: token 0 is the method and token 1 the
    /// request URI. Anything after the URI (usually the version) is ignored.
    pub fn parse(head: &str) -> Result<Self, ParseError> {
        let mut lines = head.lines();
        let request_line = lines.next().map(str::trim).unwrap_or_default();
        if request_line.is_empty() {
            return Err(ParseError::EmptyRequestLine);
        }

        let mut tokens = request_line.split_whitespace();
        let method_token = tokens.next().ok_or(ParseError::EmptyRequestLine)?;
        let uri_token = tokens.next().ok_or_else(|| ParseError::missing_uri(request_line))?;

        let method = Method::from_bytes(method_token.as_bytes()).map_err(|_e| ParseError::invalid_method(method_token))?;
        let uri = uri_token.parse::<Uri>().map_err(|e| ParseError::invalid_uri(uri_token, e))?;

        let header_lines = lines.take_while(|line| !line.is_empty()).map(ToOwned::to_owned).collect();

        Ok(Self { method, uri, request_line: request_line.to_owned(), header_lines })
    }

    /// Returns the request method. Dispatch never looks at it.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Returns the request URI.
    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Returns the path component of the request URI.
    pub fn path(&self) -> &str {
        self.uri.path()
    }

    /// Returns the raw request line.
    pub fn request_line(&self) -> &str {
        &self.request_line
    }

    /// Returns the lines received after the request line, unparsed.
    pub fn header_lines(&self) -> &[String] {
        &self.header_lines
    }

    /// Consumes the head and returns the request URI.
    pub fn into_uri(self) -> Uri {
        self.uri
    }
}
