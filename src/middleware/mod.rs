//! Middleware layer.
//!
//! Cross-cutting request handling that runs around every route:
//!
//! - [`method_override`] rewrites HTML-form `POST`s into `PATCH`/`PUT`/`DELETE`
//!   before the router looks the request up.
//! - [`trace`] wraps a dispatch in a span carrying method, path, status and
//!   latency.

pub mod method_override;
pub mod trace;
