//! The registry of `/app` route handlers.
//!
//! Routes are exact keys: the request path with `/app` removed must equal the
//! registered route. Registering a route twice keeps the last handler.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::handler::RouteHandler;
use crate::responder::Responder;
use crate::{Request, Response};

/// Immutable route table shared by every connection.
pub struct Router {
    routes: HashMap<String, Box<dyn RouteHandler>>,
}

impl Router {
    pub fn builder() -> RouterBuilder {
        RouterBuilder::new()
    }

    /// Looks up the handler registered for `route`.
    pub fn lookup(&self, route: &str) -> Option<&dyn RouteHandler> {
        self.routes.get(route).map(AsRef::as_ref)
    }

    pub fn contains(&self, route: &str) -> bool {
        self.routes.contains_key(route)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Default for Router {
    fn default() -> Self {
        RouterBuilder::new().build()
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router").field("routes", &self.routes.keys().collect::<Vec<_>>()).finish()
    }
}

pub struct RouterBuilder {
    routes: HashMap<String, Box<dyn RouteHandler>>,
}

impl RouterBuilder {
    fn new() -> Self {
        Self { routes: HashMap::new() }
    }

    /// Registers a closure or function for `route`, e.g. `/hello` for `/app/hello`.
    #[must_use]
    pub fn get<F, R>(self, route: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&Request, &Response) -> R + Send + Sync + 'static,
        R: Responder + 'static,
    {
        self.handler(route, handler)
    }

    /// Registers any [`RouteHandler`] for `route`.
    #[must_use]
    pub fn handler(mut self, route: impl Into<String>, handler: impl RouteHandler + 'static) -> Self {
        let route = route.into();
        if self.routes.insert(route.clone(), Box::new(handler)).is_some() {
            debug!(route = %route, "replaced route handler");
        }
        self
    }

    pub fn build(self) -> Router {
        Router { routes: self.routes }
    }
}

impl fmt::Debug for RouterBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouterBuilder").field("routes", &self.routes.keys().collect::<Vec<_>>()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Uri;

    fn call(router: &Router, route: &str, uri: &'static str) -> String {
        let handler = router.lookup(route).unwrap();
        handler.handle(&Request::new(Uri::from_static(uri)), &Response::new()).unwrap()
    }

    fn router() -> Router {
        Router::builder()
            .get("/hello", |req: &Request, _: &Response| format!("Hello {}", req.value("name")))
            .get("/pi", |_: &Request, _: &Response| std::f64::consts::PI.to_string())
            .build()
    }

    #[test]
    fn lookup_registered_routes() {
        let router = router();

        assert_eq!(router.len(), 2);
        assert!(router.contains("/hello"));
        assert_eq!(call(&router, "/hello", "/app/hello?name=Pedro"), "Hello Pedro");
        assert_eq!(call(&router, "/pi", "/app/pi"), "3.141592653589793");
    }

    #[test]
    fn unknown_route() {
        let router = router();

        assert!(router.lookup("/nope").is_none());
        assert!(router.lookup("/hello/").is_none());
        assert!(router.lookup("hello").is_none());
    }

    #[test]
    fn last_registration_wins() {
        let router = Router::builder()
            .get("/hello", |_: &Request, _: &Response| "first")
            .get("/hello", |_: &Request, _: &Response| "second")
            .build();

        assert_eq!(router.len(), 1);
        assert_eq!(call(&router, "/hello", "/app/hello"), "second");
    }

    #[test]
    fn empty_router() {
        let router = Router::default();
        assert!(router.is_empty());
        assert_eq!(format!("{router:?}"), "Router { routes: [] }");
    }
}
