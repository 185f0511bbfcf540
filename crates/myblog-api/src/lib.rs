mod client;
mod error;

pub use client::{ApiClient, AUTH_HEADER};
pub use error::{Error, Result};
