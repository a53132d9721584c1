use std::sync::Arc;

use futures::{SinkExt, StreamExt};
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};

use crate::codec::{RequestDecoder, ResponseEncoder};
use crate::handler::Handler;
use crate::protocol::body::Kind;
use crate::protocol::{HttpError, HttpResponse, Message, PayloadItem, ResponseHead, SendError};

use tokio_util::codec::{FramedRead, FramedWrite};
use tracing::{debug, error, info, warn};

/// An HTTP connection serving exactly one request.
///
/// `HttpConnection` handles the full lifecycle of a connection:
/// - Reading and decoding the request head
/// - Handing it to the [`Handler`]
/// - Writing the response, streaming the body when it is a stream
/// - Shutting the write side down
///
/// A malformed request head is answered with `404 Not Found`; a handler error with
/// `500 Internal Server Error`. A connection closed before any request line arrives
/// gets no response at all.
///
/// # Type Parameters
///
/// * `R`: The async readable stream type
/// * `W`: The async writable stream type
///
#[derive(Debug)]
pub struct HttpConnection<R, W> {
    framed_read: FramedRead<R, RequestDecoder>,
    framed_write: FramedWrite<W, ResponseEncoder>,
}

impl<R, W> HttpConnection<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            framed_read: FramedRead::with_capacity(reader, RequestDecoder::new(), 8 * 1024),
            framed_write: FramedWrite::new(writer, ResponseEncoder::new()),
        }
    }

    pub async fn process<H>(mut self, handler: Arc<H>) -> Result<(), HttpError>
    where
        H: Handler + ?Sized,
    {
        let response = match self.framed_read.next().await {
            Some(Ok(head)) => {
                debug!(path = head.path(), request_line = head.request_line(), "received request");
                match handler.call(head).await {
                    Ok(response) => response,
                    Err(e) => {
                        error!(cause = %e, "handle request error, answering 500");
                        HttpResponse::internal_error()
                    }
                }
            }

            Some(Err(e)) => {
                warn!(cause = %e, "can't parse request, answering 404");
                HttpResponse::not_found()
            }

            None => {
                info!("connection closed before sending a request");
                return Ok(());
            }
        };

        let send_result = self.do_send_response(response).await;
        let shutdown_result = self.framed_write.get_mut().shutdown().await;

        send_result?;
        shutdown_result.map_err(SendError::io)?;
        Ok(())
    }

    async fn do_send_response(&mut self, response: HttpResponse) -> Result<(), HttpError> {
        let (head, body) = response.into_parts();

        self.framed_write.feed(Message::<ResponseHead>::Header(head)).await?;

        match body.into_kind() {
            Kind::Once(Some(bytes)) => {
                self.framed_write.feed(Message::<ResponseHead>::Payload(PayloadItem::Chunk(bytes))).await?;
            }
            Kind::Once(None) => {}
            Kind::Stream(mut stream) => {
                while let Some(chunk) = stream.next().await {
                    match chunk {
                        Ok(bytes) => {
                            self.framed_write
                                .send(Message::<ResponseHead>::Payload(PayloadItem::Chunk(bytes)))
                                .await
                                .map_err(|e| SendError::invalid_body(format!("can't send response: {e}")))?;
                        }
                        Err(e) => {
                            // whatever was already sent stays sent, the client sees a short body
                            let _ = SinkExt::<Message<ResponseHead>>::flush(&mut self.framed_write).await;
                            return Err(SendError::invalid_body(format!("resolve response body error: {e}")).into());
                        }
                    }
                }
            }
        }

        self.framed_write
            .feed(Message::<ResponseHead>::Payload(PayloadItem::Eof))
            .await
            .map_err(|e| SendError::invalid_body(format!("can't send eof response: {e}")))?;
        SinkExt::<Message<ResponseHead>>::flush(&mut self.framed_write).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::{BoxError, make_handler};
    use crate::protocol::{LineEnding, RequestHead, ResponseBody};
    use bytes::Bytes;
    use futures::stream;
    use http::StatusCode;
    use std::io;
    use tokio::io::{AsyncReadExt, duplex};

    async fn run<H: Handler + 'static>(request: &'static [u8], handler: H) -> Vec<u8> {
        let (mut client, server) = duplex(64 * 1024);
        let (reader, writer) = tokio::io::split(server);

        client.write_all(request).await.unwrap();
        client.shutdown().await.unwrap();

        let connection = HttpConnection::new(reader, writer);
        let _ = connection.process(Arc::new(handler)).await;

        let mut out = Vec::new();
        client.read_to_end(&mut out).await.unwrap();
        out
    }

    async fn echo_path(req: RequestHead) -> Result<HttpResponse, BoxError> {
        let head = ResponseHead::new(StatusCode::OK).with_line_ending(LineEnding::LfCr).header("contente-type", "text/plain");
        Ok(HttpResponse::new(head, req.path().to_owned()))
    }

    async fn failing(_req: RequestHead) -> Result<HttpResponse, BoxError> {
        Err("boom".into())
    }

    async fn truncated(_req: RequestHead) -> Result<HttpResponse, BoxError> {
        let chunks = vec![Ok(Bytes::from_static(b"abcd")), Err(io::Error::other("read failed"))];
        let head = ResponseHead::new(StatusCode::OK).header("Content-Length", "8");
        Ok(HttpResponse::new(head, ResponseBody::stream(stream::iter(chunks))))
    }

    #[tokio::test]
    async fn serves_one_request() {
        let out = run(b"GET /hello HTTP/1.1\r\nHost: localhost\r\n\r\n", make_handler(echo_path)).await;
        assert_eq!(out, b"HTTP/1.1 200 OK\n\rcontente-type: text/plain\n\r\n\r/hello");
    }

    #[tokio::test]
    async fn malformed_request_gets_404() {
        let out = run(b"GARBAGE\r\n\r\n", make_handler(echo_path)).await;
        assert_eq!(out, b"HTTP/1.1 404 Not Found\r\nContent-Type: text/plain\r\n\r\n404 Not Found");
    }

    #[tokio::test]
    async fn handler_error_gets_500() {
        let out = run(b"GET / HTTP/1.1\r\n\r\n", make_handler(failing)).await;
        assert_eq!(out, b"HTTP/1.1 500 Internal Server Error\r\nContent-Type: text/plain\r\n\r\n500 Internal Server Error");
    }

    #[tokio::test]
    async fn empty_connection_gets_nothing() {
        let out = run(b"", make_handler(echo_path)).await;
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn stream_error_truncates_body() {
        let out = run(b"GET /x.png HTTP/1.1\r\n\r\n", make_handler(truncated)).await;
        assert_eq!(out, b"HTTP/1.1 200 OK\r\nContent-Length: 8\r\n\r\nabcd");
    }
}
