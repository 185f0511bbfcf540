mod app;
mod components;
mod ui;

use std::io;
use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::{
    execute, terminal,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use myblog_engine::{SessionDisplay, SharePlatform};
use myblog_runtime::{Envelope, FeedController, apply_feed_event};
use myblog_session::{AuthState, SessionProvider};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::context::AppContext;
use app::AppState;

/// Run the interactive feed screen until the user quits.
pub fn run(context: &AppContext) -> Result<()> {
    let (controller, completions) = FeedController::new(
        context.api.clone(),
        context.session.clone(),
        context.config.web_origin.clone(),
    );
    let session_events = context.session.subscribe();

    let mut app = AppState::new();
    controller.mount();

    let mut guard = TerminalGuard::new()?;
    let result = event_loop(
        &mut guard.terminal,
        &mut app,
        &controller,
        &completions,
        &session_events,
        &context.session,
    );
    drop(guard);

    // Anything still in flight is discarded when it arrives.
    controller.dispose();
    result
}

struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        // Enter alternate screen so we don't mess up the user's shell history
        execute!(io::stdout(), EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;

        Ok(Self {
            terminal: Terminal::new(CrosstermBackend::new(io::stdout()))?,
        })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Restore terminal state when the view goes away
        let _ = terminal::disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

enum Flow {
    Continue,
    Quit,
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    controller: &FeedController,
    completions: &Receiver<Envelope>,
    session_events: &Receiver<AuthState>,
    session: &Arc<SessionProvider>,
) -> Result<()> {
    loop {
        // Apply completions in arrival order; stale generations are dropped.
        while let Ok(envelope) = completions.try_recv() {
            if controller.is_current(envelope.generation) {
                apply_feed_event(&mut app.feed, envelope.event);
                app.clamp_selection();
            }
        }

        while let Ok(state) = session_events.try_recv() {
            apply_session_state(app, state);
        }

        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
                && matches!(handle_key(app, controller, session, key)?, Flow::Quit)
            {
                return Ok(());
            }
        }
    }
}

fn apply_session_state(app: &mut AppState, state: AuthState) {
    match state {
        AuthState::Checking => app.nav.set_session(SessionDisplay::Checking),
        AuthState::Authenticated(user) => {
            app.nav.set_session(SessionDisplay::LoggedIn {
                username: user.username.clone(),
            });
            app.feed.set_user(Some(user));
        }
        AuthState::Unknown | AuthState::Unauthenticated => {
            app.nav.set_session(SessionDisplay::LoggedOut);
            app.feed.set_user(None);
        }
    }
}

fn handle_key(
    app: &mut AppState,
    controller: &FeedController,
    session: &Arc<SessionProvider>,
    key: KeyEvent,
) -> Result<Flow> {
    // An open comment box captures the keyboard for draft editing.
    if let Some(post_id) = app.feed.active_comment_box().map(str::to_string) {
        match key.code {
            KeyCode::Esc => app.feed.toggle_comment_box(&post_id),
            KeyCode::Enter => {
                controller.submit_comment(&post_id, app.feed.comment_draft().to_string())
            }
            KeyCode::Backspace => app.feed.draft_pop(),
            KeyCode::Char(ch) => app.feed.draft_push(ch),
            _ => {}
        }
        return Ok(Flow::Continue);
    }

    match key.code {
        KeyCode::Char('q') => return Ok(Flow::Quit),

        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev(),

        KeyCode::Char('l') => {
            if let Some(post_id) = app.selected_post_id() {
                controller.like(&post_id);
            }
        }

        KeyCode::Char('c') => {
            if let Some(post_id) = app.selected_post_id() {
                app.feed.toggle_comment_box(&post_id);
            }
        }

        KeyCode::Char('s') => {
            if let Some(post_id) = app.selected_post_id() {
                app.feed.toggle_share_menu(&post_id);
            }
        }

        KeyCode::Char('x') => {
            session.logout()?;
            app.status = Some("Logged out.".to_string());
        }

        KeyCode::Char(digit @ '1'..='3') => {
            if let Some(post_id) = app.feed.active_share_menu().map(str::to_string) {
                let platform = SharePlatform::ALL[digit as usize - '1' as usize];
                if let Some(url) = controller.share(&mut app.feed, platform.label(), &post_id) {
                    app.status = Some(format!("Share link: {}", url));
                }
            }
        }

        _ => {}
    }

    Ok(Flow::Continue)
}
