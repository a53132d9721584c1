//! The wire layer of the quill HTTP server
//!
//! This crate reads one request head per connection, hands it to a handler and writes
//! the response back, then closes the connection. It is deliberately small: no
//! keep-alive, no request bodies, no chunked encoding.
//!
//! Response heads are written byte-for-byte as built: header names keep their
//! spelling and case, and each head picks its own line terminator (`\r\n`, or the
//! reversed `\n\r` some legacy clients of this server rely on).
//!
//! # Example
//!
//! ```no_run
//! use http::StatusCode;
//! use std::sync::Arc;
//! use tokio::net::TcpListener;
//! use tracing::{error, info, warn, Level};
//! use tracing_subscriber::FmtSubscriber;
//! use quill_http::connection::HttpConnection;
//! use quill_http::handler::{make_handler, BoxError};
//! use quill_http::protocol::{HttpResponse, RequestHead, ResponseHead};
//!
//! #[tokio::main]
//! async fn main() {
//!     // Initialize logging
//!     let subscriber = FmtSubscriber::builder()
//!         .with_max_level(Level::INFO)
//!         .finish();
//!     tracing::subscriber::set_global_default(subscriber)
//!         .expect("setting default subscriber failed");
//!
//!     info!(port = 35000, "start listening");
//!     let tcp_listener = match TcpListener::bind("127.0.0.1:35000").await {
//!         Ok(tcp_listener) => tcp_listener,
//!         Err(e) => {
//!             error!(cause = %e, "bind server error");
//!             return;
//!         }
//!     };
//!
//!     let handler = Arc::new(make_handler(hello_world));
//!
//!     loop {
//!         let (tcp_stream, _remote_addr) = match tcp_listener.accept().await {
//!             Ok(stream_and_addr) => stream_and_addr,
//!             Err(e) => {
//!                 warn!(cause = %e, "failed to accept");
//!                 continue;
//!             }
//!         };
//!
//!         let handler = Arc::clone(&handler);
//!
//!         tokio::spawn(async move {
//!             let (reader, writer) = tcp_stream.into_split();
//!             let connection = HttpConnection::new(reader, writer);
//!             if let Err(e) = connection.process(handler).await {
//!                 error!("service has error, cause {}, connection shutdown", e);
//!             }
//!         });
//!     }
//! }
//!
//! async fn hello_world(request: RequestHead) -> Result<HttpResponse, BoxError> {
//!     info!("request path {}", request.path());
//!
//!     let head = ResponseHead::new(StatusCode::OK).header("Content-Type", "text/plain");
//!     Ok(HttpResponse::new(head, "Hello World!\r\n"))
//! }
//! ```
//!
//! # Architecture
//!
//! - [`connection`]: Connection lifecycle, one request then close
//! - [`protocol`]: Protocol types and errors
//! - [`codec`]: Request head decoding and response encoding
//! - [`handler`]: The handler trait and [`handler::make_handler`]
//!
//! # Error Handling
//!
//! - [`protocol::HttpError`]: Top-level error type
//! - [`protocol::ParseError`]: Request head errors, answered with `404 Not Found`
//! - [`protocol::SendError`]: Response sending errors
//!
//! # Limitations
//!
//! - One request per connection
//! - Request bodies are never read
//! - Maximum request head size: 8KB

pub mod codec;
pub mod connection;
pub mod handler;
pub mod protocol;

mod utils;
pub(crate) use utils::ensure;
