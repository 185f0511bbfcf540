use anyhow::Result;
use tracing::error;

use crate::args::OutputFormat;
use crate::context::AppContext;

pub async fn handle(context: &AppContext, format: OutputFormat) -> Result<()> {
    let Some(token) = context.session.begin_check() else {
        println!("Not logged in.");
        return Ok(());
    };

    match context.api.profile(&token).await {
        Ok(user) => {
            context.session.authenticated(user.clone());
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&user)?),
                OutputFormat::Plain => println!("Logged in as {} (id {})", user.username, user.id),
            }
        }
        Err(err) => {
            error!("error fetching user data: {}", err);
            context.session.check_failed(err.is_rejection())?;
            println!("Not logged in.");
        }
    }

    Ok(())
}
