//! Wiremock-backed stand-in for the MyBlog API.
//!
//! Routes mirror the upstream endpoint set; each `with_*` builder mounts one
//! canned route. `received_requests` is exposed so tests can assert that a
//! call was — or, just as importantly, was not — issued.

use serde_json::{Value, json};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub struct MockApi {
    server: MockServer,
}

impl MockApi {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL to point an `ApiClient` (or the CLI) at.
    pub fn url(&self) -> String {
        self.server.uri()
    }

    pub fn server(&self) -> &MockServer {
        &self.server
    }

    /// Mount `GET /blog/AllBlog` returning the given post array.
    pub async fn with_posts(self, posts: Value) -> Self {
        Mock::given(method("GET"))
            .and(path("/blog/AllBlog"))
            .respond_with(ResponseTemplate::new(200).set_body_json(posts))
            .mount(&self.server)
            .await;
        self
    }

    /// Mount `GET /users/getData` for one specific token.
    pub async fn with_profile(self, token: &str, user: Value) -> Self {
        Mock::given(method("GET"))
            .and(path("/users/getData"))
            .and(header("auth", token))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": user })))
            .mount(&self.server)
            .await;
        self
    }

    /// Mount `GET /users/getData` rejecting every token.
    pub async fn with_profile_rejection(self, status: u16) -> Self {
        Mock::given(method("GET"))
            .and(path("/users/getData"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
        self
    }

    /// Mount `POST /blog/LikeBlog/{id}` returning the authoritative post.
    pub async fn with_like(self, post_id: &str, updated_post: Value) -> Self {
        Mock::given(method("POST"))
            .and(path(format!("/blog/LikeBlog/{}", post_id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "blog": updated_post })))
            .mount(&self.server)
            .await;
        self
    }

    /// Mount `POST /blog/Comment/{id}` echoing the stored comment.
    pub async fn with_comment(self, post_id: &str, content: &str) -> Self {
        Mock::given(method("POST"))
            .and(path(format!("/blog/Comment/{}", post_id)))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "comment": { "content": content } })),
            )
            .mount(&self.server)
            .await;
        self
    }

    /// Mount `POST /users/signup` with the given status.
    pub async fn with_signup(self, status: u16) -> Self {
        Mock::given(method("POST"))
            .and(path("/users/signup"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
        self
    }

    /// Mount `POST /users/login` returning a token.
    pub async fn with_login(self, token: &str) -> Self {
        Mock::given(method("POST"))
            .and(path("/users/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": token })))
            .mount(&self.server)
            .await;
        self
    }

    /// Every request the server saw, for absence/count assertions.
    pub async fn received_requests(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    /// Count of requests hitting a given path.
    pub async fn requests_to(&self, request_path: &str) -> usize {
        self.received_requests()
            .await
            .iter()
            .filter(|request| request.url.path() == request_path)
            .count()
    }
}
