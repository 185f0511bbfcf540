pub mod accounts;
pub mod error;
pub mod events;
pub mod feed;
pub mod opener;

pub use accounts::{LoginOutcome, SignupOutcome, login, signup};
pub use error::{Error, Result};
pub use events::{Envelope, FeedEvent};
pub use feed::{FeedController, apply_feed_event};
