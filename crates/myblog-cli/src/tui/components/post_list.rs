use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use super::Component;
use crate::tui::app::AppState;

/// The feed itself: every post with its like/comment counts and comments.
pub(crate) struct PostListComponent;

impl Component for PostListComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let items: Vec<ListItem> = state
            .feed
            .posts()
            .iter()
            .map(|post| {
                let liked_marker = if state.feed.liked_by_me(post) {
                    Span::styled(" [liked]", Style::default().fg(Color::Red))
                } else {
                    Span::raw("")
                };

                let mut lines = vec![
                    Line::from(vec![
                        Span::styled(
                            post.title.clone(),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(
                            format!("  {} likes, {} comments", post.likes.len(), post.comments.len()),
                            Style::default().fg(Color::DarkGray),
                        ),
                        liked_marker,
                    ]),
                    Line::from(Span::raw(post.content.clone())),
                ];

                for comment in &post.comments {
                    lines.push(Line::from(Span::styled(
                        format!("  > {}", comment.content),
                        Style::default().fg(Color::DarkGray),
                    )));
                }
                lines.push(Line::from(""));

                ListItem::new(lines)
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Feed"))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        let mut list_state = ListState::default();
        if !state.feed.posts().is_empty() {
            list_state.select(Some(state.selected));
        }

        f.render_stateful_widget(list, area, &mut list_state);
    }
}
