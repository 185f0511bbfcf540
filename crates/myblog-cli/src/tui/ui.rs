use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use super::app::AppState;
use super::components::{
    Component, CommentBoxComponent, FooterComponent, HeaderComponent, PostListComponent,
    ShareMenuComponent,
};

pub(crate) fn render(frame: &mut Frame, state: &mut AppState) {
    let aux_height = if state.feed.active_comment_box().is_some() {
        5
    } else if state.feed.active_share_menu().is_some() {
        3
    } else {
        0
    };

    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(aux_height),
        Constraint::Length(3),
    ])
    .split(frame.area());

    HeaderComponent.render(frame, chunks[0], state);
    PostListComponent.render(frame, chunks[1], state);

    if state.feed.active_comment_box().is_some() {
        CommentBoxComponent.render(frame, chunks[2], state);
    } else if state.feed.active_share_menu().is_some() {
        ShareMenuComponent.render(frame, chunks[2], state);
    }

    FooterComponent.render(frame, chunks[3], state);
}
