//! The in-memory post collection.
//!
//! One ordered `Vec<Post>` behind an async `RwLock`. Insertion order is the
//! display order. Every operation takes the lock once, so a reader never
//! sees half of a mutation.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use super::model::{NewPost, Post, PostId};

/// Posts present at process start, in display order.
const SEED: [(&str, &str); 4] = [
    ("kushagra", "Learning Web Development"),
    ("nikhil", "Learning Python"),
    ("vivek", "Learning Communication Skill"),
    ("umashankar", "Learning JavaScript"),
];

/// Shared handle to the collection. Clones point at the same posts.
#[derive(Debug, Clone, Default)]
pub struct PostStore {
    posts: Arc<RwLock<Vec<Post>>>,
}

impl PostStore {
    /// An empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// The collection a fresh process starts with: four fixed posts.
    pub fn seeded() -> Self {
        let posts = SEED
            .iter()
            .map(|(username, content)| Post {
                id: PostId::generate(),
                username: (*username).to_owned(),
                content: (*content).to_owned(),
            })
            .collect();
        Self { posts: Arc::new(RwLock::new(posts)) }
    }

    /// Snapshot of every post in insertion order.
    pub async fn list(&self) -> Vec<Post> {
        self.posts.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.posts.read().await.is_empty()
    }

    /// Appends a post with a freshly generated id and returns it.
    pub async fn create(&self, new: NewPost) -> Post {
        let post = Post { id: PostId::generate(), username: new.username, content: new.content };
        self.posts.write().await.push(post.clone());
        debug!(id = %post.id, "post created");
        post
    }

    pub async fn get(&self, id: &PostId) -> Option<Post> {
        self.posts.read().await.iter().find(|p| p.id == *id).cloned()
    }

    /// Replaces the content of post `id`, leaving its author untouched.
    ///
    /// Returns the updated post, or `None` when no post has that id.
    pub async fn update_content(&self, id: &PostId, content: String) -> Option<Post> {
        let mut posts = self.posts.write().await;
        let post = posts.iter_mut().find(|p| p.id == *id)?;
        post.content = content;
        debug!(id = %post.id, "post updated");
        Some(post.clone())
    }

    /// Removes every post with `id` and returns how many went.
    ///
    /// An unknown id removes nothing.
    pub async fn delete(&self, id: &PostId) -> usize {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| p.id != *id);
        let removed = before - posts.len();
        debug!(id = %id, removed, "post delete");
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(posts: &[Post]) -> Vec<&str> {
        posts.iter().map(|p| p.content.as_str()).collect()
    }

    #[tokio::test]
    async fn seeded_store_holds_the_four_fixed_posts() {
        let store = PostStore::seeded();
        let posts = store.list().await;
        let users: Vec<_> = posts.iter().map(|p| p.username.as_str()).collect();
        assert_eq!(users, ["kushagra", "nikhil", "vivek", "umashankar"]);
        assert_eq!(posts[3].content, "Learning JavaScript");
    }

    #[tokio::test]
    async fn seeded_ids_are_unique() {
        let posts = PostStore::seeded().list().await;
        for (i, a) in posts.iter().enumerate() {
            for b in &posts[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[tokio::test]
    async fn create_appends_and_is_retrievable() {
        let store = PostStore::seeded();
        let post = store.create(NewPost::new("ada", "first!")).await;

        assert_eq!(store.len().await, 5);
        assert_eq!(store.get(&post.id).await, Some(post.clone()));
        assert_eq!(store.list().await.last(), Some(&post));
    }

    #[tokio::test]
    async fn create_accepts_empty_fields() {
        let store = PostStore::new();
        let post = store.create(NewPost::default()).await;
        assert_eq!(post.username, "");
        assert_eq!(post.content, "");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn update_changes_only_that_posts_content() {
        let store = PostStore::seeded();
        let before = store.list().await;
        let target = before[1].clone();

        let updated = store.update_content(&target.id, "Learning Rust".into()).await;
        assert_eq!(updated.as_ref().map(|p| p.username.as_str()), Some("nikhil"));

        let after = store.list().await;
        assert_eq!(after[1].content, "Learning Rust");
        assert_eq!(after[1].id, target.id);
        for i in [0, 2, 3] {
            assert_eq!(after[i], before[i]);
        }
    }

    #[tokio::test]
    async fn update_of_unknown_id_changes_nothing() {
        let store = PostStore::seeded();
        let before = store.list().await;
        assert!(store.update_content(&PostId::generate(), "x".into()).await.is_none());
        assert_eq!(store.list().await, before);
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_and_keeps_order() {
        let store = PostStore::seeded();
        let before = store.list().await;

        assert_eq!(store.delete(&before[1].id).await, 1);

        let after = store.list().await;
        assert_eq!(after, [before[0].clone(), before[2].clone(), before[3].clone()]);
    }

    #[tokio::test]
    async fn delete_of_unknown_id_is_a_no_op() {
        let store = PostStore::seeded();
        assert_eq!(store.delete(&PostId::generate()).await, 0);
        assert_eq!(store.len().await, 4);
    }

    #[tokio::test]
    async fn list_follows_insertion_order_across_mutations() {
        let store = PostStore::new();
        let a = store.create(NewPost::new("a", "1")).await;
        let b = store.create(NewPost::new("b", "2")).await;
        let c = store.create(NewPost::new("c", "3")).await;

        store.update_content(&a.id, "1'".into()).await;
        store.delete(&b.id).await;
        let d = store.create(NewPost::new("d", "4")).await;

        let posts = store.list().await;
        assert_eq!(contents(&posts), ["1'", "3", "4"]);
        assert_eq!(posts[1].id, c.id);
        assert_eq!(posts[2].id, d.id);
    }

    #[tokio::test]
    async fn clones_share_the_collection() {
        let store = PostStore::new();
        let other = store.clone();
        other.create(NewPost::new("a", "b")).await;
        assert!(!store.is_empty().await);
    }
}
