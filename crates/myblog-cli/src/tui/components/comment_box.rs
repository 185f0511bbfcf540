use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::tui::app::AppState;

/// Draft editor shown while a post's comment box is open.
pub(crate) struct CommentBoxComponent;

impl Component for CommentBoxComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let title = state
            .feed
            .active_comment_box()
            .and_then(|post_id| state.feed.post(post_id))
            .map(|post| format!("Comment on \"{}\"", post.title))
            .unwrap_or_else(|| "Comment".to_string());

        let draft = Line::from(vec![
            Span::raw(state.feed.comment_draft().to_string()),
            Span::styled("_", Style::default().fg(Color::DarkGray)),
        ]);
        let hint = Line::from(Span::styled(
            "[Enter] send  [Esc] close",
            Style::default().fg(Color::DarkGray),
        ));

        let widget = Paragraph::new(vec![draft, hint])
            .block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(widget, area);
    }
}
