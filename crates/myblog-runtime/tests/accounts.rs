use std::sync::Arc;

use myblog_api::ApiClient;
use myblog_engine::{LoginForm, SignupForm};
use myblog_runtime::{LoginOutcome, SignupOutcome, login, signup};
use myblog_session::{AuthState, SessionProvider, TokenStore};
use myblog_testing::MockApi;
use myblog_testing::fixtures;
use tempfile::TempDir;

fn filled_signup() -> SignupForm {
    SignupForm::new("alice", "alice@example.com", "secret1", "secret1")
}

#[tokio::test(flavor = "multi_thread")]
async fn invalid_signup_reports_all_fields_and_issues_no_request() {
    let mock = MockApi::start().await.with_signup(201).await;
    let api = ApiClient::new(mock.url());

    let mut form = SignupForm::new("", "bad-email", "secret1", "different");

    let outcome = signup(&api, &mut form).await;

    assert_eq!(outcome, SignupOutcome::Invalid);
    assert_eq!(form.errors().len(), 3);
    assert_eq!(mock.requests_to("/users/signup").await, 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn valid_signup_issues_exactly_one_request() {
    let mock = MockApi::start().await.with_signup(201).await;
    let api = ApiClient::new(mock.url());

    let mut form = filled_signup();
    let outcome = signup(&api, &mut form).await;

    assert_eq!(outcome, SignupOutcome::Created);
    assert!(form.errors().is_empty());
    assert_eq!(mock.requests_to("/users/signup").await, 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn rejected_signup_leaves_the_form_populated() {
    let mock = MockApi::start().await.with_signup(500).await;
    let api = ApiClient::new(mock.url());

    let mut form = filled_signup();
    let outcome = signup(&api, &mut form).await;

    // The server's rejection reason is logged, not surfaced as a field error.
    assert_eq!(outcome, SignupOutcome::Failed);
    assert!(form.errors().is_empty());
    assert_eq!(form.username, "alice");
}

#[tokio::test(flavor = "multi_thread")]
async fn login_stores_the_token_and_authenticates() {
    let mock = MockApi::start()
        .await
        .with_login("tok-9")
        .await
        .with_profile("tok-9", fixtures::user_json("user-1", "alice"))
        .await;
    let api = ApiClient::new(mock.url());

    let temp_dir = TempDir::new().unwrap();
    let session = Arc::new(SessionProvider::new(TokenStore::new(temp_dir.path())));

    let mut form = LoginForm::new("alice@example.com", "secret1");

    let outcome = login(&api, &session, &mut form).await.unwrap();

    match outcome {
        LoginOutcome::LoggedIn(user) => assert_eq!(user.username, "alice"),
        other => panic!("expected LoggedIn, got {:?}", other),
    }
    assert_eq!(session.token().as_deref(), Some("tok-9"));
    assert!(matches!(session.state(), AuthState::Authenticated(_)));
}

#[tokio::test(flavor = "multi_thread")]
async fn invalid_login_issues_no_request() {
    let mock = MockApi::start().await.with_login("tok-9").await;
    let api = ApiClient::new(mock.url());

    let temp_dir = TempDir::new().unwrap();
    let session = Arc::new(SessionProvider::new(TokenStore::new(temp_dir.path())));

    let mut form = LoginForm::new("", "");
    let outcome = login(&api, &session, &mut form).await.unwrap();

    assert_eq!(outcome, LoginOutcome::Invalid);
    assert_eq!(mock.requests_to("/users/login").await, 0);
    assert_eq!(session.token(), None);
}
