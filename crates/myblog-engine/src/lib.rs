pub mod feed;
pub mod forms;
pub mod nav;
pub mod share;

pub use feed::FeedModel;
pub use forms::{LoginField, LoginForm, SignupField, SignupForm};
pub use nav::{BRAND, NavModel, SessionDisplay};
pub use share::{SharePlatform, post_url};
