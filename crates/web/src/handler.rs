//! Route handlers for the `/app` namespace.
//!
//! Any `Fn(&Request, &Response) -> R` closure or function with `R: Responder` is a
//! [`RouteHandler`]; types needing more state can implement the trait directly.

use std::panic::{AssertUnwindSafe, catch_unwind};

use quill_http::handler::BoxError;

use crate::responder::Responder;
use crate::{Request, Response};

#[cfg_attr(test, mockall::automock)]
pub trait RouteHandler: Send + Sync {
    /// Produces the response body for `request`.
    fn handle(&self, request: &Request, response: &Response) -> Result<String, BoxError>;
}

impl<F, R> RouteHandler for F
where
    F: Fn(&Request, &Response) -> R + Send + Sync,
    R: Responder,
{
    fn handle(&self, request: &Request, response: &Response) -> Result<String, BoxError> {
        self(request, response).into_body()
    }
}

/// Runs `handler`, turning a panic into an error.
pub(crate) fn invoke(handler: &dyn RouteHandler, request: &Request, response: &Response) -> Result<String, BoxError> {
    match catch_unwind(AssertUnwindSafe(|| handler.handle(request, response))) {
        Ok(result) => result,
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| (*s).to_owned())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic payload".to_owned());
            Err(format!("route handler panicked: {message}").into())
        }
    }
}
