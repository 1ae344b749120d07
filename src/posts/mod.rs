//! The post collection: records, their store, HTML views and routes.
//!
//! | Verb | Path | Handler |
//! |---|---|---|
//! | GET | `/posts` | [`handlers::index`] |
//! | GET | `/posts/new` | [`handlers::new_form`] |
//! | POST | `/posts` | [`handlers::create`] |
//! | GET | `/posts/{id}` | [`handlers::show`] |
//! | GET | `/posts/{id}/edit` | [`handlers::edit_form`] |
//! | PATCH | `/posts/{id}` | [`handlers::update`] |
//! | DELETE | `/posts/{id}` | [`handlers::delete`] |

pub mod handlers;
pub mod model;
pub mod store;
pub mod views;

pub use model::{NewPost, Post, PostId};
pub use store::PostStore;

use crate::handler::with_state;
use crate::router::Router;

/// Registers the post routes on `router`, all sharing `store`.
pub fn routes(router: Router, store: &PostStore) -> Router {
    router
        .get("/posts", with_state(store.clone(), handlers::index))
        .get("/posts/new", handlers::new_form)
        .post("/posts", with_state(store.clone(), handlers::create))
        .get("/posts/{id}", with_state(store.clone(), handlers::show))
        .get("/posts/{id}/edit", with_state(store.clone(), handlers::edit_form))
        .patch("/posts/{id}", with_state(store.clone(), handlers::update))
        .delete("/posts/{id}", with_state(store.clone(), handlers::delete))
}
