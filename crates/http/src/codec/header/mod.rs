//! HTTP head processing module for decoding request heads and encoding response heads
//!
//! # Components
//!
//! - [`HeaderDecoder`]: Decodes request heads from raw bytes
//!   - Finds the end of the head (blank line, or drained buffer on a line boundary)
//!   - Enforces the head size limit
//!   - Parses the request line
//!
//! - [`HeaderEncoder`]: Encodes response heads to bytes
//!   - Writes header names verbatim
//!   - Uses the head's own line terminator

mod header_decoder;
mod header_encoder;

pub use header_decoder::HeaderDecoder;
pub use header_encoder::HeaderEncoder;
