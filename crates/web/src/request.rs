//! The request value handed to `/app` route handlers.
//!
//! A [`Request`] wraps the parsed request URI. Query parameters are looked up on
//! demand from the raw query string, they are never URL-decoded.

use std::collections::HashMap;

use http::Uri;

/// A request as seen by a route handler.
///
/// The query string is split on `&`, and every token on its first `=`. A token
/// without `=` binds its name to the empty string. When a name appears more
/// than once the last occurrence wins.
#[derive(Debug, Clone)]
pub struct Request {
    uri: Uri,
}

impl Request {
    pub fn new(uri: Uri) -> Self {
        Self { uri }
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    pub fn path(&self) -> &str {
        self.uri.path()
    }

    pub fn query(&self) -> Option<&str> {
        self.uri.query()
    }

    /// Returns the value of the query parameter `name`, or `""` when the request
    /// has no query, the parameter is absent, or it has no value.
    ///
    /// ```
    /// use http::Uri;
    /// use quill_web::Request;
    ///
    /// let request = Request::new(Uri::from_static("/app/hello?name=Pedro&x=a=b"));
    /// assert_eq!(request.value("name"), "Pedro");
    /// assert_eq!(request.value("x"), "a=b");
    /// assert_eq!(request.value("missing"), "");
    /// ```
    pub fn value(&self, name: &str) -> &str {
        self.pairs().rfind(|(key, _)| *key == name).map_or("", |(_, value)| value)
    }

    /// All query parameters, later duplicates replacing earlier ones.
    pub fn query_map(&self) -> HashMap<&str, &str> {
        self.pairs().collect()
    }

    fn pairs(&self) -> impl DoubleEndedIterator<Item = (&str, &str)> {
        self.query().into_iter().flat_map(|query| query.split('&')).map(|token| token.split_once('=').unwrap_or((token, "")))
    }
}

impl From<Uri> for Request {
    fn from(uri: Uri) -> Self {
        Self::new(uri)
    }
}
