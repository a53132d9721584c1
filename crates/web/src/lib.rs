//! A small web framework on top of `quill-http`.
//!
//! Requests are dispatched by path: `.js`, `.css` and `.html` files (and `/`) are
//! served from a static root, paths under `/app` go to registered route handlers,
//! images are streamed from the root's `images` directory, everything else is a
//! `404 Not Found`. See [`dispatch`] for the exact rules.
//!
//! ```no_run
//! use quill_web::{Request, Response, Server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let server = Server::builder()
//!         .static_files("/webroot/public")
//!         .get("/hello", |req: &Request, _: &Response| format!("Hello {}", req.value("name")))
//!         .build()
//!         .expect("valid configuration");
//!
//!     server.start().await;
//! }
//! ```

mod handler;
mod request;
mod response;
mod server;

pub mod dispatch;
pub mod responder;
pub mod router;
pub mod static_files;

pub use handler::RouteHandler;
pub use quill_http::handler::BoxError;
pub use request::Request;
pub use responder::{HeaderStyle, Json, Responder};
pub use response::Response;
pub use router::{Router, RouterBuilder};
pub use server::{DEFAULT_PORT, Server, ServerBuildError, ServerBuilder, ServerError};
pub use static_files::StaticFiles;
