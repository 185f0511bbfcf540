use myblog_types::{Comment, Post, User};

/// Completion of one network call, delivered to the owning view's event
/// loop. Errors ride along so the loop logs them in dispatch order.
#[derive(Debug)]
pub enum FeedEvent {
    PostsLoaded(Result<Vec<Post>, myblog_api::Error>),
    ProfileLoaded(Result<User, myblog_api::Error>),
    LikeApplied {
        post_id: String,
        result: Result<Post, myblog_api::Error>,
    },
    CommentStored {
        post_id: String,
        result: Result<Comment, myblog_api::Error>,
    },
}

/// A completion tagged with the generation of the view that issued the
/// request. The receiver discards envelopes whose generation is no longer
/// current instead of applying a late response to a replaced view.
#[derive(Debug)]
pub struct Envelope {
    pub generation: u64,
    pub event: FeedEvent,
}
