use myblog_engine::{FeedModel, NavModel};

/// Mutable state of the interactive feed screen: the two view-models plus
/// TUI-only concerns (cursor position, footer status line).
pub(crate) struct AppState {
    pub feed: FeedModel,
    pub nav: NavModel,
    pub selected: usize,
    pub status: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            feed: FeedModel::new(),
            nav: NavModel::new(),
            selected: 0,
            status: None,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_post_id(&self) -> Option<String> {
        self.feed
            .posts()
            .get(self.selected)
            .map(|post| post.id.clone())
    }

    pub fn select_next(&mut self) {
        let count = self.feed.posts().len();
        if count > 0 && self.selected + 1 < count {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Keep the cursor valid after a wholesale post replacement.
    pub fn clamp_selection(&mut self) {
        let count = self.feed.posts().len();
        if count == 0 {
            self.selected = 0;
        } else if self.selected >= count {
            self.selected = count - 1;
        }
    }
}
