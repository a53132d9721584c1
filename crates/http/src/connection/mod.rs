//! HTTP connection handling module
//!
//! # Components
//!
//! - [`HttpConnection`]: Main connection handler that:
//!   - Reads and decodes the single request head of a connection
//!   - Hands the head to a [`Handler`](crate::handler::Handler)
//!   - Streams the response back
//!   - Shuts the connection down after the response
//!
//! # Features
//!
//! - Asynchronous I/O handling
//! - Streaming response bodies
//! - Error recovery: 404 on malformed requests, 500 on handler errors

mod http_connection;

pub use http_connection::HttpConnection;
