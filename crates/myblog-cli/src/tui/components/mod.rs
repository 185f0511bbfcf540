//! Feed screen components.
//!
//! Each component is a thin wrapper that maps view-model state to Ratatui
//! widgets; no logic or formatting decisions live here beyond layout.

mod comment_box;
mod footer;
mod header;
mod post_list;
mod share_menu;

pub(crate) use comment_box::CommentBoxComponent;
pub(crate) use footer::FooterComponent;
pub(crate) use header::HeaderComponent;
pub(crate) use post_list::PostListComponent;
pub(crate) use share_menu::ShareMenuComponent;

use ratatui::Frame;
use ratatui::layout::Rect;

use super::app::AppState;

pub(crate) trait Component {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState);
}
