use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::tui::app::AppState;
use myblog_engine::SharePlatform;

/// Platform picker shown while a post's share menu is open.
pub(crate) struct ShareMenuComponent;

impl Component for ShareMenuComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let title = state
            .feed
            .active_share_menu()
            .and_then(|post_id| state.feed.post(post_id))
            .map(|post| format!("Share \"{}\"", post.title))
            .unwrap_or_else(|| "Share".to_string());

        let mut spans = vec![Span::raw("Share via: ")];
        for (index, platform) in SharePlatform::ALL.iter().enumerate() {
            spans.push(Span::styled(
                format!("[{}]", index + 1),
                Style::default().fg(Color::Yellow),
            ));
            spans.push(Span::raw(format!(" {}  ", platform.label())));
        }
        spans.push(Span::styled(
            "[s] close",
            Style::default().fg(Color::DarkGray),
        ));

        let widget = Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(widget, area);
    }
}
