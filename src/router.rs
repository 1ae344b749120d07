//! Radix-tree request router.
//!
//! One tree per HTTP method. O(path-length) lookup. A router also owns the
//! request-rewriting middleware that must run before lookup (method
//! override) and the fallback used when no route matches.

use std::collections::HashMap;
use std::sync::Arc;

use matchit::Router as MatchitRouter;
use tracing::debug;

use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;
use crate::middleware::method_override;
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;

/// The application router.
///
/// Build it once at startup; pass it to [`Server::serve`](crate::Server::serve).
/// Each registration returns `self` so calls chain naturally.
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
    fallback: Option<BoxedHandler>,
    method_override_key: Option<String>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new(), fallback: None, method_override_key: None }
    }

    /// Register a handler for a method + path pair.
    ///
    /// Path parameters use `{name}` syntax; `req.param("name")` retrieves them.
    /// Static segments win over parameters, so `/posts/new` and `/posts/{id}`
    /// coexist.
    ///
    /// # Panics
    ///
    /// Panics if `path` is not a valid route or conflicts with an existing one.
    /// Routes are fixed at startup, so this is a programming error.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{method} {path}`: {e}"));
        self
    }

    pub fn get(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::Get, path, handler)
    }

    pub fn post(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::Post, path, handler)
    }

    pub fn patch(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::Patch, path, handler)
    }

    pub fn delete(self, path: &str, handler: impl Handler) -> Self {
        self.on(Method::Delete, path, handler)
    }

    /// Handler for `GET`/`HEAD` requests that match no route.
    pub fn fallback(mut self, handler: impl Handler) -> Self {
        self.fallback = Some(handler.into_boxed_handler());
        self
    }

    /// Enables method override: a `POST` whose query string carries `key`
    /// is dispatched as the method named there (`?_method=DELETE`).
    pub fn method_override(mut self, key: impl Into<String>) -> Self {
        self.method_override_key = Some(key.into());
        self
    }

    /// Routes one request and produces one response.
    pub async fn handle(&self, mut req: Request) -> Response {
        if let Some(key) = &self.method_override_key {
            method_override::apply(&mut req, key);
        }

        if let Some((handler, params)) = self.lookup(req.method(), req.path()) {
            req.set_params(params);
            return handler.call(req).await;
        }

        let allowed = self.allowed_methods(req.path());
        if !allowed.is_empty() {
            debug!(method = %req.method(), path = req.path(), "method not allowed");
            let allow = allowed.iter().map(|m| m.as_str()).collect::<Vec<_>>().join(", ");
            return Response::builder()
                .status(Status::MethodNotAllowed)
                .header("allow", &allow)
                .text("Method Not Allowed");
        }

        match &self.fallback {
            Some(fallback) if matches!(req.method(), Method::Get | Method::Head) => {
                fallback.call(req).await
            }
            _ => Response::builder().status(Status::NotFound).text("Not Found"),
        }
    }

    fn lookup(
        &self,
        method: Method,
        path: &str,
    ) -> Option<(BoxedHandler, HashMap<String, String>)> {
        self.tree_match(method, path).or_else(|| {
            // HEAD is answered by the GET handler; hyper drops the body.
            (method == Method::Head).then(|| self.tree_match(Method::Get, path)).flatten()
        })
    }

    fn tree_match(
        &self,
        method: Method,
        path: &str,
    ) -> Option<(BoxedHandler, HashMap<String, String>)> {
        let tree = self.routes.get(&method)?;
        let matched = tree.at(path).ok()?;
        let handler = Arc::clone(matched.value);
        let params = matched.params.iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        Some((handler, params))
    }

    fn allowed_methods(&self, path: &str) -> Vec<Method> {
        let mut allowed: Vec<Method> = Method::ALL
            .into_iter()
            .filter(|m| self.routes.get(m).is_some_and(|tree| tree.at(path).is_ok()))
            .collect();
        if allowed.contains(&Method::Get) && !allowed.contains(&Method::Head) {
            allowed.insert(1, Method::Head);
        }
        allowed
    }
}

impl Default for Router {
    fn default() -> Self { Self::new() }
}
