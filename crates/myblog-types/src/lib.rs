pub mod domain;
pub mod wire;

pub use domain::*;
pub use wire::*;
