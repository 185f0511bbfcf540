use anyhow::{Result, bail};
use myblog_engine::SignupForm;
use myblog_runtime::SignupOutcome;
use owo_colors::OwoColorize;

use crate::context::AppContext;

pub async fn handle(
    context: &AppContext,
    username: String,
    email: String,
    password: String,
    confirm_password: String,
) -> Result<()> {
    let mut form = SignupForm::new(username, email, password, confirm_password);

    match myblog_runtime::signup(&context.api, &mut form).await {
        SignupOutcome::Invalid => {
            eprintln!("Signup blocked by validation:");
            for (field, message) in form.errors() {
                eprintln!("  {}: {}", field.name(), message.red());
            }
            bail!("signup validation failed")
        }
        SignupOutcome::Created => {
            println!("{}", "Account created.".green());
            println!("Log in with: myblog login --email {}", form.email);
            Ok(())
        }
        // The server's reason was logged, not surfaced; only the fact of
        // failure reaches the user.
        SignupOutcome::Failed => bail!("signup request failed"),
    }
}
