//! Post records.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

/// Opaque post identifier: a random v4 UUID, rendered hyphenated.
///
/// Generated once when a post is created and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostId(Uuid);

impl PostId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

impl FromStr for PostId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// One post in the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub username: String,
    pub content: String,
}

/// Fields submitted by the create form. Stored as given, without validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPost {
    pub username: String,
    pub content: String,
}

impl NewPost {
    pub fn new(username: impl Into<String>, content: impl Into<String>) -> Self {
        Self { username: username.into(), content: content.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_round_trips_through_its_text_form() {
        let id = PostId::generate();
        let text = id.to_string();
        assert_eq!(text.len(), 36);
        assert_eq!(text.parse::<PostId>().ok(), Some(id));
    }

    #[test]
    fn garbage_is_not_an_id() {
        assert!("not-a-post".parse::<PostId>().is_err());
        assert!("".parse::<PostId>().is_err());
    }
}
