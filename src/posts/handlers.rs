//! Route handlers for the post collection.

use tracing::{info, warn};

use super::model::{NewPost, Post, PostId};
use super::store::PostStore;
use super::views;
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;

/// Where every mutation sends the browser afterwards.
const LIST_PATH: &str = "/posts";

/// `GET /posts`
pub async fn index(store: PostStore, _req: Request) -> Response {
    Response::html(views::index(&store.list().await))
}

/// `GET /posts/new`
pub async fn new_form(_req: Request) -> Response {
    Response::html(views::new_form())
}

/// `POST /posts`
///
/// Missing fields are stored as empty strings.
pub async fn create(store: PostStore, req: Request) -> Response {
    let form = req.form();
    let post = store
        .create(NewPost::new(form.text("username"), form.text("content")))
        .await;
    info!(id = %post.id, username = %post.username, "post created");
    Response::redirect(LIST_PATH)
}

/// `GET /posts/{id}`
pub async fn show(store: PostStore, req: Request) -> Response {
    match find(&store, &req).await {
        Ok(post) => Response::html(views::show(&post)),
        Err(res) => res,
    }
}

/// `GET /posts/{id}/edit`
pub async fn edit_form(store: PostStore, req: Request) -> Response {
    match find(&store, &req).await {
        Ok(post) => Response::html(views::edit_form(&post)),
        Err(res) => res,
    }
}

/// `PATCH /posts/{id}`
///
/// Only the content changes; the author stays as created.
pub async fn update(store: PostStore, req: Request) -> Response {
    let id = match parse_id(&req) {
        Ok(id) => id,
        Err(res) => return res,
    };
    let content = req.form().text("content");
    match store.update_content(&id, content).await {
        Some(post) => {
            info!(id = %post.id, "post updated");
            Response::redirect(LIST_PATH)
        }
        None => not_found(&id.to_string()),
    }
}

/// `DELETE /posts/{id}`
///
/// Deleting an id that names no post still redirects.
pub async fn delete(store: PostStore, req: Request) -> Response {
    if let Ok(id) = parse_id(&req) {
        let removed = store.delete(&id).await;
        info!(id = %id, removed, "post deleted");
    }
    Response::redirect(LIST_PATH)
}

async fn find(store: &PostStore, req: &Request) -> Result<Post, Response> {
    let id = parse_id(req)?;
    store.get(&id).await.ok_or_else(|| not_found(&id.to_string()))
}

fn parse_id(req: &Request) -> Result<PostId, Response> {
    let raw = req.param("id").unwrap_or_default();
    raw.parse().map_err(|_| not_found(raw))
}

fn not_found(id: &str) -> Response {
    warn!(id, "no such post");
    Response::builder()
        .status(Status::NotFound)
        .html(views::not_found(id))
}
