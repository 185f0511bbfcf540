use anyhow::Result;
use myblog_session::Config;

use crate::context::AppContext;

pub fn handle(context: &AppContext) -> Result<()> {
    let config_path = Config::path_in(&context.data_dir);

    if config_path.exists() {
        println!("Config already present at {}", config_path.display());
    } else {
        context.config.save_to(&config_path)?;
        println!("Wrote config to {}", config_path.display());
    }

    println!("Data directory: {}", context.data_dir.display());
    println!("API host: {}", context.config.api_base_url);
    println!("Web origin: {}", context.config.web_origin);
    Ok(())
}
