use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::args::{Cli, Commands};
use crate::context::AppContext;
use crate::handlers;

pub fn run(cli: Cli) -> Result<()> {
    init_tracing();

    let context = AppContext::from_cli(cli.data_dir.as_deref(), cli.api_url.as_deref())?;
    let runtime = tokio::runtime::Runtime::new()?;

    let Some(command) = cli.command else {
        show_guidance(&context);
        return Ok(());
    };

    match command {
        Commands::Init => handlers::init::handle(&context),

        Commands::Feed { mode } => handlers::feed::handle(&context, &runtime, mode),

        Commands::Signup {
            username,
            email,
            password,
            confirm_password,
        } => runtime.block_on(handlers::signup::handle(
            &context,
            username,
            email,
            password,
            confirm_password,
        )),

        Commands::Login { email, password } => {
            runtime.block_on(handlers::login::handle(&context, email, password))
        }

        Commands::Logout => handlers::logout::handle(&context),

        Commands::Whoami => runtime.block_on(handlers::whoami::handle(&context, cli.format)),
    }
}

/// Diagnostics go to stderr so they never land inside a TUI frame. RUST_LOG
/// overrides the default `warn` filter.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn show_guidance(context: &AppContext) {
    println!("myblog - Terminal client for the MyBlog feed\n");
    println!("Quick commands:");
    println!("  myblog feed                       # Browse the feed");
    println!("  myblog signup --username <name>   # Create an account");
    println!("  myblog login --email <email>      # Log in");
    println!("  myblog whoami                     # Show the signed-in user");
    println!("  myblog logout                     # Clear the stored session\n");
    println!("API host: {}", context.config.api_base_url);
    println!("Data directory: {}\n", context.data_dir.display());
    println!("For more commands:");
    println!("  myblog --help");
}
