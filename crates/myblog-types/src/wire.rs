//! Request and response payloads for the MyBlog API.
//!
//! Field names mirror the upstream wire format exactly; the client neither
//! renames nor restructures what the server sends.

use serde::{Deserialize, Serialize};

use crate::domain::{Comment, Post, User};

/// `GET /users/getData` response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileResponse {
    pub data: User,
}

/// `POST /blog/LikeBlog/{id}` response envelope carrying the authoritative
/// post after the like was applied.
#[derive(Debug, Clone, Deserialize)]
pub struct LikeResponse {
    pub blog: Post,
}

/// `POST /blog/Comment/{id}` response envelope carrying the stored comment.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentResponse {
    pub comment: Comment,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentRequest {
    pub content: String,
}

/// Raw signup field bundle, posted as-is after client-side validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}
