use serde::{Deserialize, Serialize};

/// The authenticated user, fetched via the session token.
///
/// Used only to decide "did I like this post" and for the greeting text in
/// the navigation header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
}
