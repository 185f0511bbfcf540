use myblog_api::{ApiClient, Error};
use myblog_testing::MockApi;
use myblog_testing::fixtures;
use myblog_types::SignupRequest;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test(flavor = "multi_thread")]
async fn list_posts_parses_the_array() {
    let mock = MockApi::start().await.with_posts(fixtures::sample_feed()).await;
    let api = ApiClient::new(mock.url());

    let posts = api.list_posts().await.unwrap();

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, "post-1");
    assert_eq!(posts[1].comments[0].content, "already here");
}

#[tokio::test(flavor = "multi_thread")]
async fn profile_sends_the_auth_header() {
    // The mounted route only matches requests carrying `auth: tok-1`.
    let mock = MockApi::start()
        .await
        .with_profile("tok-1", fixtures::user_json("user-1", "alice"))
        .await;
    let api = ApiClient::new(mock.url());

    let user = api.profile("tok-1").await.unwrap();
    assert_eq!(user.id, "user-1");
    assert_eq!(user.username, "alice");
}

#[tokio::test(flavor = "multi_thread")]
async fn like_unwraps_the_blog_envelope() {
    let mock = MockApi::start()
        .await
        .with_like("post-1", fixtures::post_json_with("post-1", "First post", &["user-1"], &[]))
        .await;
    let api = ApiClient::new(mock.url());

    let post = api.like_post("tok-1", "post-1").await.unwrap();
    assert_eq!(post.likes, vec!["user-1".to_string()]);
}

#[tokio::test(flavor = "multi_thread")]
async fn comment_posts_the_content_body() {
    let mock = MockApi::start().await;
    Mock::given(method("POST"))
        .and(path("/blog/Comment/post-1"))
        .and(header("auth", "tok-1"))
        .and(body_partial_json(serde_json::json!({ "content": "hello" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "comment": { "content": "hello" } })),
        )
        .mount(mock.server())
        .await;
    let api = ApiClient::new(mock.url());

    let comment = api.comment_post("tok-1", "post-1", "hello").await.unwrap();
    assert_eq!(comment.content, "hello");
}

#[tokio::test(flavor = "multi_thread")]
async fn signup_serializes_confirm_password_in_camel_case() {
    let mock = MockApi::start().await;
    Mock::given(method("POST"))
        .and(path("/users/signup"))
        .and(body_partial_json(
            serde_json::json!({ "confirmPassword": "secret1" }),
        ))
        .respond_with(ResponseTemplate::new(201))
        .mount(mock.server())
        .await;
    let api = ApiClient::new(mock.url());

    let request = SignupRequest {
        username: "alice".to_string(),
        email: "alice@example.com".to_string(),
        password: "secret1".to_string(),
        confirm_password: "secret1".to_string(),
    };
    api.signup(&request).await.unwrap();

    assert_eq!(mock.requests_to("/users/signup").await, 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn non_success_status_maps_to_api_error() {
    let mock = MockApi::start().await.with_profile_rejection(401).await;
    let api = ApiClient::new(mock.url());

    let err = api.profile("tok-bad").await.unwrap_err();

    match &err {
        Error::Api { status, .. } => assert_eq!(*status, 401),
        other => panic!("expected Error::Api, got {:?}", other),
    }
    assert!(err.is_rejection());
}

#[tokio::test(flavor = "multi_thread")]
async fn server_fault_is_not_a_rejection() {
    let mock = MockApi::start().await.with_profile_rejection(500).await;
    let api = ApiClient::new(mock.url());

    let err = api.profile("tok-1").await.unwrap_err();
    assert!(!err.is_rejection());
}

#[tokio::test(flavor = "multi_thread")]
async fn trailing_slash_in_base_url_is_tolerated() {
    let mock = MockApi::start().await.with_posts(fixtures::sample_feed()).await;
    let api = ApiClient::new(format!("{}/", mock.url()));

    let posts = api.list_posts().await.unwrap();
    assert_eq!(posts.len(), 2);
}
