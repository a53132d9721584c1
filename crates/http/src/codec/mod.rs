//! HTTP codec module for decoding request heads and encoding responses
//!
//! # Architecture
//!
//! - Request handling:
//!   - [`RequestDecoder`]: Decodes the single request head a connection carries
//!   - Head parsing via [`HeaderDecoder`]
//!
//! - Response handling:
//!   - [`ResponseEncoder`]: Encodes the outgoing response, head first then raw payload
//!   - Head encoding via [`HeaderEncoder`]
//!
//! # Example
//!
//! ```no_run
//! use quill_http::codec::{RequestDecoder, ResponseEncoder};
//! use tokio_util::codec::{Decoder, Encoder};
//! use bytes::BytesMut;
//!
//! // Decode incoming request
//! let mut decoder = RequestDecoder::new();
//! let mut request_buffer = BytesMut::new();
//! let request = decoder.decode(&mut request_buffer);
//!
//! // Encode outgoing response
//! let mut encoder = ResponseEncoder::new();
//! let mut response_buffer = BytesMut::new();
//! // ... encode response ...
//! ```

mod header;
mod request_decoder;
mod response_encoder;

pub use header::{HeaderDecoder, HeaderEncoder};
pub use request_decoder::RequestDecoder;
pub use response_encoder::ResponseEncoder;
