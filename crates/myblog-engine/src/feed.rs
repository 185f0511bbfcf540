use myblog_types::{Comment, Post, User};

/// In-memory state of the feed view.
///
/// Owns the post list plus the per-post UI selectors. Server responses are
/// merged in through `apply_*`; the model itself never talks to the network.
#[derive(Debug, Default)]
pub struct FeedModel {
    posts: Vec<Post>,
    user: Option<User>,
    active_comment_box: Option<String>,
    active_share_menu: Option<String>,
    comment_draft: String,
}

impl FeedModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn post(&self, post_id: &str) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == post_id)
    }

    /// Wholesale replacement with the server's list; there is no
    /// incremental sync.
    pub fn set_posts(&mut self, posts: Vec<Post>) {
        self.posts = posts;
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn set_user(&mut self, user: Option<User>) {
        self.user = user;
    }

    /// Did the signed-in user like this post? False when logged out.
    pub fn liked_by_me(&self, post: &Post) -> bool {
        self.user
            .as_ref()
            .is_some_and(|user| post.liked_by(&user.id))
    }

    pub fn active_comment_box(&self) -> Option<&str> {
        self.active_comment_box.as_deref()
    }

    /// Toggle the comment box selector: the open post's button closes it,
    /// any other post opens it there (implicitly closing the previous one).
    pub fn toggle_comment_box(&mut self, post_id: &str) {
        if self.active_comment_box.as_deref() == Some(post_id) {
            self.active_comment_box = None;
        } else {
            self.active_comment_box = Some(post_id.to_string());
        }
    }

    pub fn active_share_menu(&self) -> Option<&str> {
        self.active_share_menu.as_deref()
    }

    /// Same single-nullable-selector pattern as the comment box, tracked
    /// independently of it.
    pub fn toggle_share_menu(&mut self, post_id: &str) {
        if self.active_share_menu.as_deref() == Some(post_id) {
            self.active_share_menu = None;
        } else {
            self.active_share_menu = Some(post_id.to_string());
        }
    }

    pub fn close_share_menu(&mut self) {
        self.active_share_menu = None;
    }

    pub fn comment_draft(&self) -> &str {
        &self.comment_draft
    }

    pub fn set_comment_draft(&mut self, text: impl Into<String>) {
        self.comment_draft = text.into();
    }

    pub fn draft_push(&mut self, ch: char) {
        self.comment_draft.push(ch);
    }

    pub fn draft_pop(&mut self) {
        self.comment_draft.pop();
    }

    /// Merge the authoritative post returned by a like request. Only the
    /// like data is replaced; no optimistic update ever preceded it.
    pub fn apply_like(&mut self, updated: &Post) {
        if let Some(post) = self.posts.iter_mut().find(|post| post.id == updated.id) {
            post.likes = updated.likes.clone();
        }
    }

    /// Merge a stored comment: append to the targeted post, clear the
    /// draft, close the box.
    pub fn apply_comment(&mut self, post_id: &str, comment: Comment) {
        if let Some(post) = self.posts.iter_mut().find(|post| post.id == post_id) {
            post.comments.push(comment);
        }
        self.comment_draft.clear();
        self.active_comment_box = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: &str) -> Post {
        Post {
            id: id.to_string(),
            title: format!("Post {}", id),
            content: "content".to_string(),
            likes: Vec::new(),
            comments: Vec::new(),
        }
    }

    fn model_with_posts(ids: &[&str]) -> FeedModel {
        let mut model = FeedModel::new();
        model.set_posts(ids.iter().map(|id| post(id)).collect());
        model
    }

    #[test]
    fn test_set_posts_replaces_wholesale() {
        let mut model = model_with_posts(&["a", "b"]);
        model.set_posts(vec![post("c")]);

        let ids: Vec<&str> = model.posts().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["c"]);
    }

    #[test]
    fn test_comment_box_toggle_is_single_selector() {
        let mut model = model_with_posts(&["a", "b"]);

        model.toggle_comment_box("a");
        assert_eq!(model.active_comment_box(), Some("a"));

        // Opening B implicitly closes A.
        model.toggle_comment_box("b");
        assert_eq!(model.active_comment_box(), Some("b"));

        // Toggling the open post closes it, leaving none open.
        model.toggle_comment_box("b");
        assert_eq!(model.active_comment_box(), None);
    }

    #[test]
    fn test_share_selector_is_independent_of_comment_selector() {
        let mut model = model_with_posts(&["a", "b"]);

        model.toggle_comment_box("a");
        model.toggle_share_menu("b");

        assert_eq!(model.active_comment_box(), Some("a"));
        assert_eq!(model.active_share_menu(), Some("b"));
    }

    #[test]
    fn test_apply_like_replaces_only_that_posts_likes() {
        let mut model = model_with_posts(&["a", "b"]);

        let mut updated = post("a");
        updated.likes = vec!["u1".to_string()];
        model.apply_like(&updated);

        assert_eq!(model.post("a").unwrap().likes, vec!["u1".to_string()]);
        assert!(model.post("b").unwrap().likes.is_empty());
    }

    #[test]
    fn test_apply_comment_targets_one_post_and_resets_draft() {
        let mut model = model_with_posts(&["a", "b"]);
        model.toggle_comment_box("a");
        model.set_comment_draft("nice post");

        model.apply_comment(
            "a",
            Comment {
                content: "nice post".to_string(),
            },
        );

        assert_eq!(model.post("a").unwrap().comments.len(), 1);
        assert!(model.post("b").unwrap().comments.is_empty());
        assert_eq!(model.comment_draft(), "");
        assert_eq!(model.active_comment_box(), None);
    }

    #[test]
    fn test_liked_by_me_requires_a_user() {
        let mut model = model_with_posts(&["a"]);
        let mut liked = post("a");
        liked.likes = vec!["u1".to_string()];
        model.apply_like(&liked);

        let target = model.post("a").unwrap().clone();
        assert!(!model.liked_by_me(&target));

        model.set_user(Some(User {
            id: "u1".to_string(),
            username: "alice".to_string(),
        }));
        assert!(model.liked_by_me(&target));
    }

    #[test]
    fn test_draft_editing() {
        let mut model = FeedModel::new();
        model.draft_push('h');
        model.draft_push('i');
        assert_eq!(model.comment_draft(), "hi");

        model.draft_pop();
        assert_eq!(model.comment_draft(), "h");
    }
}
