use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::tui::app::AppState;
use myblog_engine::{BRAND, SessionDisplay};

/// Navigation header: brand on the left, session state on the right.
pub(crate) struct HeaderComponent;

impl Component for HeaderComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                .split(inner);

        let brand = Paragraph::new(Line::from(Span::styled(
            BRAND,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        f.render_widget(brand, chunks[0]);

        let session_line = match state.nav.session() {
            SessionDisplay::Checking => Line::from(Span::styled(
                "Checking session...",
                Style::default().fg(Color::DarkGray),
            )),
            SessionDisplay::LoggedIn { .. } => {
                let greeting = state.nav.greeting().unwrap_or_default();
                Line::from(vec![
                    Span::styled(greeting, Style::default().fg(Color::Green)),
                    Span::raw("  "),
                    Span::styled("[x]", Style::default().fg(Color::Yellow)),
                    Span::raw(" logout"),
                ])
            }
            SessionDisplay::LoggedOut => Line::from(vec![
                Span::raw("Not logged in - use "),
                Span::styled("myblog login", Style::default().fg(Color::Cyan)),
                Span::raw(" / "),
                Span::styled("myblog signup", Style::default().fg(Color::Cyan)),
            ]),
        };

        let session = Paragraph::new(session_line).right_aligned();
        f.render_widget(session, chunks[1]);
    }
}
