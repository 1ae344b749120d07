//! # postboard
//!
//! A small server-rendered posts board. One in-memory, ordered collection
//! of posts, listed, created, shown, edited and deleted through HTML forms.
//!
//! The crate carries its own thin HTTP layer on top of hyper:
//!
//! - Radix-tree routing, one tree per method, via [`matchit`]
//! - Method override so plain HTML forms can `PATCH` and `DELETE`
//! - Per-request tracing spans
//! - Static assets as the routing fallback
//! - Graceful shutdown on SIGTERM / Ctrl-C, draining in-flight requests
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use postboard::{App, Server};
//! use postboard::posts::PostStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), postboard::Error> {
//!     let router = App::new(PostStore::seeded(), "public").into_router();
//!
//!     Server::bind("127.0.0.1:8080".parse().unwrap())
//!         .serve(router)
//!         .await
//! }
//! ```

mod error;
mod method;
mod request;
mod response;
mod router;
mod server;
mod status;

pub mod config;
pub mod handler;
pub mod health;
pub mod middleware;
pub mod posts;
pub mod static_files;

use std::path::PathBuf;

pub use error::Error;
pub use handler::{Handler, with_state};
pub use method::{Method, UnknownMethod};
pub use request::{Form, Request};
pub use response::{ContentType, IntoResponse, Response, ResponseBuilder};
pub use router::Router;
pub use server::{DEFAULT_MAX_BODY_BYTES, Server, shutdown_signal};
pub use status::Status;

use middleware::method_override;
use posts::PostStore;

/// The assembled application: post routes, probes, and static assets.
pub struct App {
    store: PostStore,
    assets_dir: PathBuf,
}

impl App {
    pub fn new(store: PostStore, assets_dir: impl Into<PathBuf>) -> Self {
        Self { store, assets_dir: assets_dir.into() }
    }

    /// Builds the full route table.
    pub fn into_router(self) -> Router {
        let router = Router::new()
            .method_override(method_override::DEFAULT_KEY)
            .get(health::LIVENESS_PATH, health::liveness)
            .get(health::READINESS_PATH, health::readiness)
            .fallback(static_files::serve_dir(self.assets_dir));
        posts::routes(router, &self.store)
    }
}
