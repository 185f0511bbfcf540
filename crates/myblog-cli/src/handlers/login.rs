use anyhow::{Result, bail};
use myblog_engine::LoginForm;
use myblog_runtime::LoginOutcome;
use owo_colors::OwoColorize;

use crate::context::AppContext;

pub async fn handle(context: &AppContext, email: String, password: String) -> Result<()> {
    let mut form = LoginForm::new(email, password);

    match myblog_runtime::login(&context.api, &context.session, &mut form).await? {
        LoginOutcome::Invalid => {
            eprintln!("Login blocked by validation:");
            for (field, message) in form.errors() {
                eprintln!("  {}: {}", field.name(), message.red());
            }
            bail!("login validation failed")
        }
        LoginOutcome::LoggedIn(user) => {
            println!("Logged in as {}", user.username.green());
            Ok(())
        }
        LoginOutcome::Failed => bail!("login failed"),
    }
}
