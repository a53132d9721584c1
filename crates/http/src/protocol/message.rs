use std::fmt;

use bytes::{Buf, Bytes};

/// A piece of an outgoing response as fed to the response encoder.
///
/// A response is exactly one `Header`, then any number of `Payload(Chunk(_))`
/// items, then `Payload(Eof)`.
pub enum Message<T, Data: Buf = Bytes> {
    Header(T),
    Payload(PayloadItem<Data>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadItem<Data: Buf = Bytes> {
    Chunk(Data),
    /// Ends the response; the encoder is ready for a new header afterwards.
    Eof,
}

impl<T, D: Buf> fmt::Debug for Message<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Header(_) => f.write_str("Message::Header"),
            Message::Payload(PayloadItem::Chunk(data)) => write!(f, "Message::Payload(Chunk({} bytes))", data.remaining()),
            Message::Payload(PayloadItem::Eof) => f.write_str("Message::Payload(Eof)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_hides_content() {
        let header: Message<&str> = Message::Header("HTTP/1.1 200 OK");
        let chunk: Message<&str> = Message::Payload(PayloadItem::Chunk(Bytes::from_static(b"abc")));
        let eof: Message<&str> = Message::Payload(PayloadItem::Eof);

        assert_eq!(format!("{header:?}"), "Message::Header");
        assert_eq!(format!("{chunk:?}"), "Message::Payload(Chunk(3 bytes))");
        assert_eq!(format!("{eof:?}"), "Message::Payload(Eof)");
    }
}
