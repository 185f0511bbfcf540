use myblog_types::{
    Comment, CommentRequest, CommentResponse, LikeResponse, LoginRequest, LoginResponse, Post,
    ProfileResponse, SignupRequest, User,
};
use tracing::debug;

use crate::error::{Error, Result};

/// Header carrying the session token, as expected by the upstream API.
pub const AUTH_HEADER: &str = "auth";

/// Stateless client for the MyBlog API.
///
/// Holds no session state: callers pass the token per request. One instance
/// can be shared across views (reqwest pools connections internally).
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /blog/AllBlog` — the full post list, no pagination.
    pub async fn list_posts(&self) -> Result<Vec<Post>> {
        let url = self.url("/blog/AllBlog");
        debug!(%url, "fetching post list");

        let response = check(self.http.get(&url).send().await?).await?;
        Ok(response.json().await?)
    }

    /// `GET /users/getData` — profile of the token's owner.
    pub async fn profile(&self, token: &str) -> Result<User> {
        let url = self.url("/users/getData");
        debug!(%url, "fetching profile");

        let response = check(
            self.http
                .get(&url)
                .header(AUTH_HEADER, token)
                .send()
                .await?,
        )
        .await?;
        let envelope: ProfileResponse = response.json().await?;
        Ok(envelope.data)
    }

    /// `POST /blog/LikeBlog/{id}` — returns the authoritative post with the
    /// like applied.
    pub async fn like_post(&self, token: &str, post_id: &str) -> Result<Post> {
        let url = self.url(&format!("/blog/LikeBlog/{}", post_id));
        debug!(%url, "liking post");

        let response = check(
            self.http
                .post(&url)
                .header(AUTH_HEADER, token)
                .send()
                .await?,
        )
        .await?;
        let envelope: LikeResponse = response.json().await?;
        Ok(envelope.blog)
    }

    /// `POST /blog/Comment/{id}` — returns the stored comment.
    pub async fn comment_post(&self, token: &str, post_id: &str, content: &str) -> Result<Comment> {
        let url = self.url(&format!("/blog/Comment/{}", post_id));
        debug!(%url, "posting comment");

        let body = CommentRequest {
            content: content.to_string(),
        };
        let response = check(
            self.http
                .post(&url)
                .header(AUTH_HEADER, token)
                .json(&body)
                .send()
                .await?,
        )
        .await?;
        let envelope: CommentResponse = response.json().await?;
        Ok(envelope.comment)
    }

    /// `POST /users/signup` — the response body is opaque; only the status
    /// matters.
    pub async fn signup(&self, request: &SignupRequest) -> Result<()> {
        let url = self.url("/users/signup");
        debug!(%url, "creating account");

        check(self.http.post(&url).json(request).send().await?).await?;
        Ok(())
    }

    /// `POST /users/login` — returns the session token.
    pub async fn login(&self, request: &LoginRequest) -> Result<String> {
        let url = self.url("/users/login");
        debug!(%url, "logging in");

        let response = check(self.http.post(&url).json(request).send().await?).await?;
        let envelope: LoginResponse = response.json().await?;
        Ok(envelope.token)
    }
}

/// Map non-success statuses to `Error::Api`, keeping the body as the message.
async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    Err(Error::Api {
        status: status.as_u16(),
        message,
    })
}
