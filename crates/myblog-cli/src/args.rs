use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "myblog")]
#[command(about = "Browse and interact with the MyBlog feed", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory holding the token slot and config
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Override the configured API base URL for this invocation
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FeedMode {
    /// TUI on a terminal, plain listing otherwise
    Auto,
    Tui,
    Console,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Browse the feed")]
    Feed {
        #[arg(
            long,
            default_value = "auto",
            help = "Display mode: tui (interactive) or console (plain listing)"
        )]
        mode: FeedMode,
    },

    #[command(about = "Create an account")]
    Signup {
        #[arg(long, default_value = "")]
        username: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        password: String,

        #[arg(long, default_value = "")]
        confirm_password: String,
    },

    #[command(about = "Log in and store the session token")]
    Login {
        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        password: String,
    },

    #[command(about = "Clear the stored session token")]
    Logout,

    #[command(about = "Show the signed-in user")]
    Whoami,

    #[command(about = "Initialize the data directory and config")]
    Init,
}
