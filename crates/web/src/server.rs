//! The server: configuration builder, accept loop and dispatch.

use std::io;
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use async_trait::async_trait;
use quill_http::connection::HttpConnection;
use quill_http::handler::{BoxError, Handler};
use quill_http::protocol::{HttpResponse, RequestHead};
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{debug, error, info};

use crate::dispatch::Target;
use crate::responder::{HeaderStyle, Responder, dynamic, image, not_found, text};
use crate::router::{Router, RouterBuilder};
use crate::static_files::{DEFAULT_ASSETS, StaticFiles};
use crate::{Request, Response};

/// Port listened on when no address is configured.
pub const DEFAULT_PORT: u16 = 35000;

#[derive(Debug)]
pub struct ServerBuilder {
    address: Result<Vec<SocketAddr>, io::Error>,
    router: RouterBuilder,
    static_files: StaticFiles,
    mirror_spec: Option<String>,
    assets_source: PathBuf,
    header_style: HeaderStyle,
}

impl ServerBuilder {
    fn new() -> Self {
        Self {
            address: Ok(vec![SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT))]),
            router: Router::builder(),
            static_files: StaticFiles::default(),
            mirror_spec: None,
            assets_source: PathBuf::from(DEFAULT_ASSETS),
            header_style: HeaderStyle::default(),
        }
    }

    #[must_use]
    pub fn address<A: ToSocketAddrs>(mut self, address: A) -> Self {
        self.address = address.to_socket_addrs().map(Iterator::collect);
        self
    }

    /// Registers a handler answering `/app` + `route`.
    #[must_use]
    pub fn get<F, R>(mut self, route: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&Request, &Response) -> R + Send + Sync + 'static,
        R: Responder + 'static,
    {
        self.router = self.router.get(route, handler);
        self
    }

    /// Replaces every route registered so far.
    #[must_use]
    pub fn router(mut self, router: RouterBuilder) -> Self {
        self.router = router;
        self
    }

    /// Serves static files from a copy of the bundled assets placed at `spec` under
    /// the build output directory. The copy is made by [`ServerBuilder::build`].
    #[must_use]
    pub fn static_files(mut self, spec: impl Into<String>) -> Self {
        self.mirror_spec = Some(spec.into());
        self
    }

    /// Serves static files directly from `root`, without copying anything.
    #[must_use]
    pub fn static_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.static_files = StaticFiles::new(root);
        self.mirror_spec = None;
        self
    }

    /// Where [`ServerBuilder::static_files`] copies the bundled assets from.
    #[must_use]
    pub fn assets_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.assets_source = source.into();
        self
    }

    #[must_use]
    pub fn header_style(mut self, header_style: HeaderStyle) -> Self {
        self.header_style = header_style;
        self
    }

    pub fn build(self) -> Result<Server, ServerBuildError> {
        let address = self.address.map_err(ServerBuildError::InvalidAddress)?;
        if address.is_empty() {
            return Err(ServerBuildError::MissingAddress);
        }

        let static_files = match self.mirror_spec {
            Some(spec) => StaticFiles::mirror_from(&self.assets_source, &spec),
            None => self.static_files,
        };

        Ok(Server { address, router: self.router.build(), static_files, header_style: self.header_style })
    }
}

#[derive(Debug)]
pub struct Server {
    address: Vec<SocketAddr>,
    router: Router,
    static_files: StaticFiles,
    header_style: HeaderStyle,
}

#[derive(Error, Debug)]
pub enum ServerBuildError {
    #[error("invalid address: {0}")]
    InvalidAddress(#[source] io::Error),
    #[error("address resolved to nothing")]
    MissingAddress,
}

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("bind {address:?} error: {source}")]
    Bind { address: Vec<SocketAddr>, source: io::Error },
    #[error("accept error: {0}")]
    Accept(#[source] io::Error),
}

impl Server {
    pub fn builder() -> ServerBuilder {
        ServerBuilder::new()
    }

    pub fn address(&self) -> &[SocketAddr] {
        &self.address
    }

    pub fn static_files(&self) -> &StaticFiles {
        &self.static_files
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub async fn bind(&self) -> Result<TcpListener, ServerError> {
        TcpListener::bind(self.address.as_slice())
            .await
            .map_err(|source| ServerError::Bind { address: self.address.clone(), source })
    }

    /// Binds the configured address and serves forever.
    ///
    /// The process exits with status 1 when binding or accepting fails.
    pub async fn start(self) {
        info!("start listening at {:?}", self.address);
        let tcp_listener = match self.bind().await {
            Ok(tcp_listener) => tcp_listener,
            Err(e) => {
                error!(cause = %e, "bind server error");
                process::exit(1);
            }
        };

        if let Err(e) = self.serve(tcp_listener).await {
            error!(cause = %e, "accept loop stopped");
            process::exit(1);
        }
    }

    /// Serves connections from `tcp_listener`, one task per connection.
    ///
    /// Only returns on an accept failure.
    pub async fn serve(self, tcp_listener: TcpListener) -> Result<(), ServerError> {
        let handler = Arc::new(self);
        loop {
            let (tcp_stream, remote_addr) = tcp_listener.accept().await.map_err(ServerError::Accept)?;
            debug!(%remote_addr, "accepted connection");

            let handler = Arc::clone(&handler);

            tokio::spawn(async move {
                let (reader, writer) = tcp_stream.into_split();
                let connection = HttpConnection::new(reader, writer);
                match connection.process(handler).await {
                    Ok(()) => {
                        debug!("finished process, connection shutdown");
                    }
                    Err(e) => {
                        error!("service has error, cause {e}, connection shutdown");
                    }
                }
            });
        }
    }
}

#[async_trait]
impl Handler for Server {
    async fn call(&self, req: RequestHead) -> Result<HttpResponse, BoxError> {
        let uri = req.into_uri();
        let path = uri.path();

        let target = Target::classify(path);
        debug!(path, ?target, "dispatching");

        match target {
            Target::Text { kind, file } => Ok(text::respond(&self.static_files, file, kind, self.header_style).await),
            Target::Dynamic { route } => dynamic::respond(&self.router, route, uri.clone(), self.header_style),
            Target::Image => Ok(image::respond(&self.static_files, path).await),
            Target::NotFound => Ok(not_found::respond(path)),
        }
    }
}
