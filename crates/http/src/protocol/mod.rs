//! Core HTTP protocol types.
//!
//! - **Message Handling** (`message`): [`Message`] and [`PayloadItem`], the units the
//!   response encoder consumes
//! - **Request Processing** (`request`): [`RequestHead`], the parsed request line
//! - **Response Processing** (`response`): [`ResponseHead`], [`LineEnding`] and
//!   [`HttpResponse`]
//! - **Body** ([`body`]): [`ResponseBody`], buffered or streamed
//! - **Error Handling** (`error`): [`HttpError`], [`ParseError`], [`SendError`]

mod message;
pub use message::Message;
pub use message::PayloadItem;

mod request;
pub use request::RequestHead;

mod response;
pub use response::HttpResponse;
pub use response::LineEnding;
pub use response::ResponseHead;
pub use response::{INTERNAL_ERROR_BODY, NOT_FOUND_BODY};

mod error;
pub use error::HttpError;
pub use error::ParseError;
pub use error::SendError;

pub mod body;
pub use body::ResponseBody;
