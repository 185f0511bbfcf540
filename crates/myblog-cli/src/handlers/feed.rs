use anyhow::Result;
use is_terminal::IsTerminal;
use myblog_engine::FeedModel;
use owo_colors::OwoColorize;
use tracing::error;

use crate::args::FeedMode;
use crate::context::AppContext;
use crate::tui;

pub fn handle(context: &AppContext, runtime: &tokio::runtime::Runtime, mode: FeedMode) -> Result<()> {
    let interactive = match mode {
        FeedMode::Tui => true,
        FeedMode::Console => false,
        FeedMode::Auto => std::io::stdout().is_terminal(),
    };

    if interactive {
        // The TUI loop stays on this thread; worker threads drive the
        // controller's spawned requests.
        let _guard = runtime.enter();
        tui::run(context)
    } else {
        runtime.block_on(console_feed(context))
    }
}

/// One-shot plain listing for pipes and scripts.
async fn console_feed(context: &AppContext) -> Result<()> {
    let mut model = FeedModel::new();

    if let Some(token) = context.session.begin_check() {
        match context.api.profile(&token).await {
            Ok(user) => {
                context.session.authenticated(user.clone());
                model.set_user(Some(user));
            }
            Err(err) => {
                error!("error fetching user data: {}", err);
                context.session.check_failed(err.is_rejection())?;
            }
        }
    }

    let posts = context.api.list_posts().await?;
    model.set_posts(posts);
    print_posts(&model);
    Ok(())
}

fn print_posts(model: &FeedModel) {
    if model.posts().is_empty() {
        println!("No posts yet.");
        return;
    }

    for post in model.posts() {
        let liked = if model.liked_by_me(post) {
            " (liked by you)"
        } else {
            ""
        };
        println!(
            "{}  [{} likes, {} comments]{}",
            post.title.bold(),
            post.likes.len(),
            post.comments.len(),
            liked
        );
        println!("  {}", post.content);
        for comment in &post.comments {
            println!("    - {}", comment.content.dimmed());
        }
        println!();
    }
}
