//! Signup and login flows.
//!
//! Both run client-side validation first and issue no request when any
//! field message exists. Server rejections are logged, never surfaced as
//! field errors (the form keeps only its own validation messages).

use myblog_api::ApiClient;
use myblog_engine::{LoginForm, SignupForm};
use myblog_session::SessionProvider;
use myblog_types::User;
use tracing::error;

use crate::error::Result;

#[derive(Debug, PartialEq)]
pub enum SignupOutcome {
    /// Validation produced field messages; no request was issued.
    Invalid,
    /// Account created; the caller navigates to the login flow.
    Created,
    /// The request failed; the form stays populated.
    Failed,
}

pub async fn signup(api: &ApiClient, form: &mut SignupForm) -> SignupOutcome {
    if !form.validate() {
        return SignupOutcome::Invalid;
    }

    match api.signup(&form.request()).await {
        Ok(()) => SignupOutcome::Created,
        Err(err) => {
            error!("error signing up user: {}", err);
            SignupOutcome::Failed
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum LoginOutcome {
    Invalid,
    LoggedIn(User),
    Failed,
}

/// Log in: exchange credentials for a token, store it through the session
/// provider, then resolve the profile so subscribers see `Authenticated`.
pub async fn login(
    api: &ApiClient,
    session: &SessionProvider,
    form: &mut LoginForm,
) -> Result<LoginOutcome> {
    if !form.validate() {
        return Ok(LoginOutcome::Invalid);
    }

    let token = match api.login(&form.request()).await {
        Ok(token) => token,
        Err(err) => {
            error!("error logging in: {}", err);
            return Ok(LoginOutcome::Failed);
        }
    };

    session.login(&token)?;

    match api.profile(&token).await {
        Ok(user) => {
            session.authenticated(user.clone());
            Ok(LoginOutcome::LoggedIn(user))
        }
        Err(err) => {
            error!("error fetching user data after login: {}", err);
            session.check_failed(err.is_rejection())?;
            Ok(LoginOutcome::Failed)
        }
    }
}
