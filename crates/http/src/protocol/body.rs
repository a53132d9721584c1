//! Response body representation.
//!
//! A body is either a single buffered chunk or a stream of chunks. Streams are
//! used for file delivery so large files never sit in memory at once.

use std::fmt;
use std::io;

use bytes::{Bytes, BytesMut};
use futures::stream::BoxStream;
use futures::{Stream, StreamExt};

pub struct ResponseBody {
    inner: Kind,
}

pub(crate) enum Kind {
    Once(Option<Bytes>),
    Stream(BoxStream<'static, io::Result<Bytes>>),
}

impl ResponseBody {
    pub fn empty() -> Self {
        Self { inner: Kind::Once(None) }
    }

    pub fn once(bytes: Bytes) -> Self {
        Self { inner: Kind::Once(Some(bytes)) }
    }

    pub fn stream<S>(stream: S) -> Self
    where
        S: Stream<Item = io::Result<Bytes>> + Send + 'static,
    {
        Self { inner: Kind::Stream(stream.boxed()) }
    }

    pub(crate) fn into_kind(self) -> Kind {
        self.inner
    }

    /// Buffers the whole body. A stream error is returned as soon as it is seen.
    pub async fn collect(self) -> io::Result<Bytes> {
        match self.inner {
            Kind::Once(bytes) => Ok(bytes.unwrap_or_default()),
            Kind::Stream(mut stream) => {
                let mut buf = BytesMut::new();
                while let Some(chunk) = stream.next().await {
                    buf.extend_from_slice(&chunk?);
                }
                Ok(buf.freeze())
            }
        }
    }
}

impl fmt::Debug for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Kind::Once(None) => f.write_str("ResponseBody::Empty"),
            Kind::Once(Some(bytes)) => write!(f, "ResponseBody::Once({} bytes)", bytes.len()),
            Kind::Stream(_) => f.write_str("ResponseBody::Stream"),
        }
    }
}

impl Default for ResponseBody {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Bytes> for ResponseBody {
    fn from(value: Bytes) -> Self {
        Self::once(value)
    }
}

impl From<String> for ResponseBody {
    fn from(value: String) -> Self {
        Self::once(Bytes::from(value))
    }
}

impl From<&'static str> for ResponseBody {
    fn from(value: &'static str) -> Self {
        Self::once(Bytes::from_static(value.as_bytes()))
    }
}

impl From<()> for ResponseBody {
    fn from((): ()) -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;

    #[tokio::test]
    async fn collect_once() {
        let body = ResponseBody::from("hello");
        assert_eq!(body.collect().await.unwrap(), Bytes::from_static(b"hello"));
        assert!(ResponseBody::empty().collect().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn collect_stream() {
        let chunks = vec![Ok(Bytes::from_static(b"ab")), Ok(Bytes::from_static(b"cd"))];
        let body = ResponseBody::stream(stream::iter(chunks));
        assert_eq!(body.collect().await.unwrap(), Bytes::from_static(b"abcd"));
    }

    #[tokio::test]
    async fn collect_stream_error() {
        let chunks = vec![Ok(Bytes::from_static(b"ab")), Err(io::Error::other("disk gone"))];
        let body = ResponseBody::stream(stream::iter(chunks));
        assert!(body.collect().await.is_err());
    }
}
