//! Response production.
//!
//! The [`Responder`] trait turns what a route handler returns into a body. The
//! submodules build the full responses for each dispatch target: static text files,
//! images, `/app` routes and the not-found page.

pub(crate) mod dynamic;
pub(crate) mod image;
pub(crate) mod not_found;
pub(crate) mod text;

use http::StatusCode;
use quill_http::handler::BoxError;
use quill_http::protocol::{LineEnding, ResponseHead};
use serde::Serialize;

/// A type that can be returned from a route handler.
pub trait Responder {
    fn into_body(self) -> Result<String, BoxError>;
}

impl Responder for String {
    fn into_body(self) -> Result<String, BoxError> {
        Ok(self)
    }
}

impl Responder for &'static str {
    fn into_body(self) -> Result<String, BoxError> {
        Ok(self.to_owned())
    }
}

/// `Ok` responds with its content, `Err` becomes a `500 Internal Server Error`.
impl<T, E> Responder for Result<T, E>
where
    T: Responder,
    E: Into<BoxError>,
{
    fn into_body(self) -> Result<String, BoxError> {
        self.map_err(Into::into).and_then(Responder::into_body)
    }
}

/// Serializes the wrapped value with `serde_json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Json<T>(pub T);

impl<T: Serialize> Responder for Json<T> {
    fn into_body(self) -> Result<String, BoxError> {
        Ok(serde_json::to_string(&self.0)?)
    }
}

/// How text and `/app` response heads are spelled.
///
/// `Legacy` writes a `contente-type` header and `\n\r` line terminators, which
/// existing clients of this server expect. `Standard` writes `Content-Type` and
/// `\r\n`. Images and error pages always use the standard form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderStyle {
    #[default]
    Legacy,
    Standard,
}

impl HeaderStyle {
    pub(crate) fn ok_head(self, content_type: String) -> ResponseHead {
        let head = ResponseHead::new(StatusCode::OK);
        match self {
            HeaderStyle::Legacy => head.with_line_ending(LineEnding::LfCr).header("contente-type", content_type),
            HeaderStyle::Standard => head.header("Content-Type", content_type),
        }
    }
}
