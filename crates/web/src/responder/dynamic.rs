use http::Uri;
use quill_http::handler::BoxError;
use quill_http::protocol::HttpResponse;
use tracing::debug;

use crate::handler;
use crate::responder::{HeaderStyle, not_found};
use crate::router::Router;
use crate::{Request, Response};

/// Runs the handler registered for `route` against the full request `uri`.
///
/// The body is sent as `application/json` without being checked. A handler error
/// or panic is returned as `Err`.
pub(crate) fn respond(router: &Router, route: &str, uri: Uri, style: HeaderStyle) -> Result<HttpResponse, BoxError> {
    let Some(route_handler) = router.lookup(route) else {
        return Ok(not_found::respond(uri.path()));
    };

    debug!(route, uri = %uri, "invoking route handler");
    let request = Request::new(uri);
    let body = handler::invoke(route_handler, &request, &Response::new())?;

    Ok(HttpResponse::new(style.ok_head(mime::APPLICATION_JSON.to_string()), body))
}
