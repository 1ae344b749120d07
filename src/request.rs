//! Incoming HTTP request type.

use std::collections::HashMap;

use bytes::Bytes;
use url::form_urlencoded;

use crate::method::Method;

/// An incoming HTTP request with its body fully collected.
pub struct Request {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) query: Option<String>,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) body: Bytes,
    pub(crate) params: HashMap<String, String>,
}

impl Request {
    /// Builds a request from a method and a request target (`/path?query`).
    ///
    /// The server uses this for every incoming request; tests use it to drive
    /// a [`Router`](crate::Router) without a socket.
    pub fn new(
        method: Method,
        target: &str,
        headers: Vec<(String, String)>,
        body: impl Into<Bytes>,
    ) -> Self {
        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path, Some(query.to_owned())),
            None => (target, None),
        };
        Self {
            method,
            path: path.to_owned(),
            query,
            headers,
            body: body.into(),
            params: HashMap::new(),
        }
    }

    pub fn method(&self) -> Method { self.method }
    pub fn path(&self) -> &str { &self.path }
    pub fn query(&self) -> Option<&str> { self.query.as_deref() }
    pub fn body(&self) -> &[u8] { &self.body }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Returns a named path parameter.
    ///
    /// For a route `/posts/{id}`, `req.param("id")` on `/posts/42` returns `Some("42")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Returns the first decoded value of `key` in the query string.
    pub fn query_param(&self, key: &str) -> Option<String> {
        let query = self.query.as_deref()?;
        form_urlencoded::parse(query.as_bytes())
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    /// Decodes the body as `application/x-www-form-urlencoded`.
    ///
    /// The content type is not checked; a body that is not urlencoded simply
    /// yields whatever pairs the decoder finds in it.
    pub fn form(&self) -> Form {
        Form(
            form_urlencoded::parse(&self.body)
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
        )
    }

    pub(crate) fn set_method(&mut self, method: Method) {
        self.method = method;
    }

    pub(crate) fn set_params(&mut self, params: HashMap<String, String>) {
        self.params = params;
    }
}

/// Decoded urlencoded form fields, in submission order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Form(Vec<(String, String)>);

impl Form {
    /// First value submitted under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// First value under `name`, or an empty string when the field is absent.
    pub fn text(&self, name: &str) -> String {
        self.get(name).unwrap_or_default().to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_query_from_path() {
        let req = Request::new(Method::Post, "/posts/7?_method=PATCH", Vec::new(), "");
        assert_eq!(req.path(), "/posts/7");
        assert_eq!(req.query(), Some("_method=PATCH"));
        assert_eq!(req.query_param("_method").as_deref(), Some("PATCH"));
        assert_eq!(req.query_param("missing"), None);
    }

    #[test]
    fn decodes_form_body() {
        let req = Request::new(
            Method::Post,
            "/posts",
            Vec::new(),
            "username=ada+l&content=hello%2C%20world&content=ignored",
        );
        let form = req.form();
        assert_eq!(form.get("username"), Some("ada l"));
        assert_eq!(form.get("content"), Some("hello, world"));
        assert_eq!(form.text("absent"), "");
    }

    #[test]
    fn header_lookup_ignores_case() {
        let req = Request::new(
            Method::Get,
            "/",
            vec![("Content-Type".into(), "text/html".into())],
            Bytes::new(),
        );
        assert_eq!(req.header("content-type"), Some("text/html"));
    }
}
