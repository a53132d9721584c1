//! Connection-level request handling.
//!
//! A [`Handler`] turns the parsed [`RequestHead`] into an [`HttpResponse`]. An `Err`
//! is answered by the connection with a `500 Internal Server Error`.

use std::error::Error;

use async_trait::async_trait;

use crate::protocol::{HttpResponse, RequestHead};

pub type BoxError = Box<dyn Error + Send + Sync>;

#[async_trait]
pub trait Handler: Send + Sync {
    async fn call(&self, req: RequestHead) -> Result<HttpResponse, BoxError>;
}

#[derive(Debug)]
pub struct HandlerFn<F> {
    f: F,
}

#[async_trait]
impl<F, Fut, Err> Handler for HandlerFn<F>
where
    F: Fn(RequestHead) -> Fut + Send + Sync,
    Fut: Future<Output = Result<HttpResponse, Err>> + Send + 'static,
    Err: Into<BoxError> + 'static,
{
    async fn call(&self, req: RequestHead) -> Result<HttpResponse, BoxError> {
        (self.f)(req).await.map_err(Into::into)
    }
}

pub fn make_handler<F, Fut, Err>(f: F) -> HandlerFn<F>
where
    F: Fn(RequestHead) -> Fut,
    Fut: Future<Output = Result<HttpResponse, Err>>,
    Err: Into<BoxError>,
{
    HandlerFn { f }
}
