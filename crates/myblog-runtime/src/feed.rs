use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{Receiver, Sender, channel};

use myblog_api::ApiClient;
use myblog_engine::{FeedModel, SharePlatform, post_url};
use myblog_session::SessionProvider;
use tracing::{error, warn};

use crate::events::{Envelope, FeedEvent};
use crate::opener;

/// Drives the feed view: spawns one task per network call and delivers
/// completions over a channel, tagged with the issuing view generation.
///
/// The view's event loop polls the receiver and applies events through
/// [`apply_feed_event`]; an envelope whose generation is stale (the view
/// re-mounted or was disposed) must be dropped, not applied.
pub struct FeedController {
    api: ApiClient,
    session: Arc<SessionProvider>,
    web_origin: String,
    tx: Sender<Envelope>,
    generation: AtomicU64,
}

impl FeedController {
    pub fn new(
        api: ApiClient,
        session: Arc<SessionProvider>,
        web_origin: impl Into<String>,
    ) -> (Self, Receiver<Envelope>) {
        let (tx, rx) = channel();
        let controller = Self {
            api,
            session,
            web_origin: web_origin.into(),
            tx,
            generation: AtomicU64::new(0),
        };
        (controller, rx)
    }

    /// Mount the feed: request the full post list, and independently start
    /// the session check (profile fetch) when a token is stored. Returns
    /// the new view generation.
    pub fn mount(&self) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let api = self.api.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = api.list_posts().await;
            let _ = tx.send(Envelope {
                generation,
                event: FeedEvent::PostsLoaded(result),
            });
        });

        if let Some(token) = self.session.begin_check() {
            let api = self.api.clone();
            let tx = self.tx.clone();
            let session = self.session.clone();
            tokio::spawn(async move {
                match api.profile(&token).await {
                    Ok(user) => {
                        session.authenticated(user.clone());
                        let _ = tx.send(Envelope {
                            generation,
                            event: FeedEvent::ProfileLoaded(Ok(user)),
                        });
                    }
                    Err(err) => {
                        if let Err(store_err) = session.check_failed(err.is_rejection()) {
                            error!("could not update token slot: {}", store_err);
                        }
                        let _ = tx.send(Envelope {
                            generation,
                            event: FeedEvent::ProfileLoaded(Err(err)),
                        });
                    }
                }
            });
        }

        generation
    }

    /// True when the envelope belongs to the currently mounted view.
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation.load(Ordering::SeqCst)
    }

    /// Unmount: bump the generation so responses still in flight are
    /// discarded when they arrive.
    pub fn dispose(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Like a post. Requires a token: without one this logs and issues no
    /// request, mutating nothing.
    pub fn like(&self, post_id: &str) {
        let Some(token) = self.session.token() else {
            warn!("user not authenticated; like ignored");
            return;
        };

        let generation = self.generation.load(Ordering::SeqCst);
        let api = self.api.clone();
        let tx = self.tx.clone();
        let post_id = post_id.to_string();
        tokio::spawn(async move {
            let result = api.like_post(&token, &post_id).await;
            let _ = tx.send(Envelope {
                generation,
                event: FeedEvent::LikeApplied { post_id, result },
            });
        });
    }

    /// Submit the comment draft for a post. Requires a token, like `like`.
    pub fn submit_comment(&self, post_id: &str, content: String) {
        let Some(token) = self.session.token() else {
            warn!("user not authenticated; comment ignored");
            return;
        };

        let generation = self.generation.load(Ordering::SeqCst);
        let api = self.api.clone();
        let tx = self.tx.clone();
        let post_id = post_id.to_string();
        tokio::spawn(async move {
            let result = api.comment_post(&token, &post_id, &content).await;
            let _ = tx.send(Envelope {
                generation,
                event: FeedEvent::CommentStored { post_id, result },
            });
        });
    }

    /// Share a post on a platform: build the deep link from the canonical
    /// post URL and hand it to the OS opener. Unrecognized platform names
    /// are a no-op. The share menu closes regardless of outcome.
    pub fn share(&self, model: &mut FeedModel, platform: &str, post_id: &str) -> Option<String> {
        let link = SharePlatform::parse(platform)
            .map(|platform| platform.share_url(&post_url(&self.web_origin, post_id)));

        if let Some(url) = &link {
            opener::open_external(url);
        }
        model.close_share_menu();

        link
    }
}

/// Apply a completion to the feed model. Failures are logged and leave the
/// model untouched; nothing is retried and nothing is fatal.
pub fn apply_feed_event(model: &mut FeedModel, event: FeedEvent) {
    match event {
        FeedEvent::PostsLoaded(Ok(posts)) => model.set_posts(posts),
        FeedEvent::PostsLoaded(Err(err)) => error!("error fetching posts: {}", err),

        FeedEvent::ProfileLoaded(Ok(user)) => model.set_user(Some(user)),
        FeedEvent::ProfileLoaded(Err(err)) => error!("error fetching user data: {}", err),

        FeedEvent::LikeApplied {
            result: Ok(post), ..
        } => model.apply_like(&post),
        FeedEvent::LikeApplied {
            post_id,
            result: Err(err),
        } => error!(%post_id, "error liking post: {}", err),

        FeedEvent::CommentStored {
            post_id,
            result: Ok(comment),
        } => model.apply_comment(&post_id, comment),
        FeedEvent::CommentStored {
            post_id,
            result: Err(err),
        } => error!(%post_id, "error adding comment: {}", err),
    }
}
