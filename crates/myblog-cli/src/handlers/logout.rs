use anyhow::Result;

use crate::context::AppContext;

pub fn handle(context: &AppContext) -> Result<()> {
    context.session.logout()?;
    println!("Logged out.");
    Ok(())
}
