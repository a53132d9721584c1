use crate::codec::header::HeaderEncoder;
use crate::protocol::{Message, PayloadItem, ResponseHead, SendError};
use bytes::{Buf, BufMut, BytesMut};
use std::io;
use std::io::ErrorKind;
use tokio_util::codec::Encoder;
use tracing::error;

/// Encodes a response as one head followed by raw payload chunks.
///
/// The payload is written as-is: the response is delimited by closing the
/// connection, or by a `Content-Length` header the caller put on the head.
#[derive(Debug, Default)]
pub struct ResponseEncoder {
    header_encoder: HeaderEncoder,
    in_payload: bool,
}

impl ResponseEncoder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: Buf> Encoder<Message<ResponseHead, D>> for ResponseEncoder {
    type Error = SendError;

    fn encode(&mut self, item: Message<ResponseHead, D>, dst: &mut BytesMut) -> Result<(), Self::Error> {
        match item {
            Message::Header(head) => {
                if self.in_payload {
                    error!("expect payload item but receive response head");
                    return Err(io::Error::from(ErrorKind::InvalidInput).into());
                }

                self.in_payload = true;
                self.header_encoder.encode(head, dst)
            }

            Message::Payload(payload_item) => {
                if !self.in_payload {
                    error!("expect response header but receive payload item");
                    return Err(io::Error::from(ErrorKind::InvalidInput).into());
                }

                match payload_item {
                    PayloadItem::Chunk(data) => {
                        dst.put(data);
                    }
                    PayloadItem::Eof => {
                        self.in_payload = false;
                    }
                }
                Ok(())
            }
        }
    }
}
