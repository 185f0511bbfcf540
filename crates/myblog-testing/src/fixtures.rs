//! Canned wire payloads for tests.
//!
//! Builders return `serde_json::Value` in the upstream wire shape so tests
//! exercise the same deserialization path as production responses.

use serde_json::{Value, json};

pub fn fresh_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// A post with no likes and no comments.
pub fn post_json(id: &str, title: &str) -> Value {
    json!({
        "_id": id,
        "title": title,
        "content": format!("Content of {}", title),
        "likes": [],
        "comments": [],
    })
}

/// A post with explicit like/comment payloads.
pub fn post_json_with(id: &str, title: &str, likes: &[&str], comments: &[&str]) -> Value {
    json!({
        "_id": id,
        "title": title,
        "content": format!("Content of {}", title),
        "likes": likes,
        "comments": comments
            .iter()
            .map(|content| json!({ "content": content }))
            .collect::<Vec<_>>(),
    })
}

pub fn user_json(id: &str, username: &str) -> Value {
    json!({ "_id": id, "username": username })
}

/// The default two-post feed most tests start from.
pub fn sample_feed() -> Value {
    json!([
        post_json("post-1", "First post"),
        post_json_with("post-2", "Second post", &["user-2"], &["already here"]),
    ])
}
