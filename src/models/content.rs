use std::hash::{Hash, Hasher};

use crate::types::Timestamp;

/// A single comment pulled from the corpus.
///
/// Identity is derived from `(content, time)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Comment {
    pub content: String,
    pub time: Timestamp,
}

/// A single post pulled from the corpus.
///
/// Identity is derived from `(title, body, time)`; `num_comments` is metadata
/// and takes no part in equality or hashing.
#[derive(Debug, Clone)]
pub struct Post {
    pub title: String,
    pub body: String,
    pub num_comments: u32,
    pub time: Timestamp,
}

impl PartialEq for Post {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && self.body == other.body && self.time == other.time
    }
}

impl Eq for Post {}

impl Hash for Post {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
        self.body.hash(state);
        self.time.hash(state);
    }
}

/// The two kinds of content that can reference a ticker.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Content {
    Comment(Comment),
    Post(Post),
}

impl Content {
    /// Timestamp of the underlying item. Ordering between two `Content`
    /// values is defined solely by this value.
    pub fn time(&self) -> Timestamp {
        match self {
            Content::Comment(comment) => comment.time,
            Content::Post(post) => post.time,
        }
    }
}
