//! Demo application.
//!
//! Run from `crates/web` so the bundled assets are found, then open
//! <http://127.0.0.1:35000/> or try:
//!
//! ```text
//! curl -v 'http://127.0.0.1:35000/app/hello?name=Pedro'
//! curl -v http://127.0.0.1:35000/app/pi
//! ```

use quill_web::{Request, Response, Server};
use tracing::{Level, error};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let server = Server::builder()
        .assets_source(concat!(env!("CARGO_MANIFEST_DIR"), "/src/main/java/resorces"))
        .static_files("/webroot/public")
        .get("/hello", |req: &Request, _resp: &Response| format!("Hello {}", req.value("name")))
        .get("/pi", |_req: &Request, _resp: &Response| std::f64::consts::PI.to_string())
        .build();

    match server {
        Ok(server) => server.start().await,
        Err(e) => error!(cause = %e, "invalid server configuration"),
    }
}
