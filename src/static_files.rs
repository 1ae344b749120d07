//! Static asset serving.
//!
//! Serves files from one directory as the router fallback, so anything that
//! is not a route (stylesheets, images, `favicon.ico`) is looked up on disk.

use std::path::{Path, PathBuf};

use percent_encoding::percent_decode_str;
use tracing::{debug, warn};

use crate::handler::Handler;
use crate::request::Request;
use crate::response::{ContentType, Response};
use crate::status::Status;

const INDEX_FILE: &str = "index.html";

/// A handler serving files under `dir`.
pub fn serve_dir(dir: impl Into<PathBuf>) -> impl Handler {
    let dir: PathBuf = dir.into();
    move |req: Request| {
        let dir = dir.clone();
        async move { serve(&dir, req.path()).await }
    }
}

/// Serves the file under `dir` named by the request path `path`.
pub async fn serve(dir: &Path, path: &str) -> Response {
    let Some(relative) = sanitize(path) else {
        warn!(path, "refusing asset path");
        return Response::status(Status::NotFound);
    };

    let Some(file) = resolve(dir, &relative).await else {
        debug!(path, "asset not found");
        return Response::status(Status::NotFound);
    };

    match tokio::fs::read(&file).await {
        Ok(bytes) => {
            let extension = file.extension().and_then(|e| e.to_str());
            Response::builder().bytes(ContentType::Other(content_type(extension)), bytes)
        }
        Err(e) => {
            warn!(file = %file.display(), "failed to read asset: {e}");
            Response::status(Status::NotFound)
        }
    }
}

/// Percent-decodes `path` and turns it into a relative path.
///
/// Returns `None` for anything that could step outside the asset directory:
/// `..` segments, backslashes, NUL bytes, or undecodable input.
fn sanitize(path: &str) -> Option<PathBuf> {
    let decoded = percent_decode_str(path).decode_utf8().ok()?;
    if decoded.contains('\\') || decoded.contains('\0') {
        return None;
    }

    let mut relative = PathBuf::new();
    for segment in decoded.split('/') {
        match segment {
            "" | "." => {}
            ".." => return None,
            s => relative.push(s),
        }
    }
    Some(relative)
}

/// Finds the file to send, mapping directories to their index file and
/// making sure symlinks do not lead out of `dir`.
async fn resolve(dir: &Path, relative: &Path) -> Option<PathBuf> {
    let root = tokio::fs::canonicalize(dir).await.ok()?;
    let mut candidate = tokio::fs::canonicalize(root.join(relative)).await.ok()?;

    if tokio::fs::metadata(&candidate).await.ok()?.is_dir() {
        candidate = tokio::fs::canonicalize(candidate.join(INDEX_FILE)).await.ok()?;
    }

    let meta = tokio::fs::metadata(&candidate).await.ok()?;
    (meta.is_file() && candidate.starts_with(&root)).then_some(candidate)
}

/// Content-Type for a file extension.
pub fn content_type(extension: Option<&str>) -> &'static str {
    match extension {
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("txt") => "text/plain; charset=utf-8",
        Some("js" | "mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        _ => "application/octet-stream",
    }
}
