use quill_http::protocol::HttpResponse;
use tracing::debug;

pub(crate) fn respond(path: &str) -> HttpResponse {
    debug!(path, "nothing to serve");
    HttpResponse::not_found()
}
