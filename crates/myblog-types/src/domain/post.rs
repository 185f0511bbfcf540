use serde::{Deserialize, Serialize};

/// A published blog post as returned by the API.
///
/// Posts are created server-side; the client only receives them and patches
/// `likes`/`comments` from authoritative server responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Upstream Mongo-style identifier.
    #[serde(rename = "_id")]
    pub id: String,

    pub title: String,

    pub content: String,

    /// Ids of users who liked this post. At-most-once membership per user is
    /// server-enforced; the client does not verify it.
    #[serde(default)]
    pub likes: Vec<String>,

    /// Ordered by append position.
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Post {
    pub fn liked_by(&self, user_id: &str) -> bool {
        self.likes.iter().any(|id| id == user_id)
    }
}

/// A single comment on a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub content: String,
}
