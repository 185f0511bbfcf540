//! Testing utilities shared across the myblog workspace: a wiremock-backed
//! mock API, wire-shaped fixtures, and a TestWorld harness for CLI tests.

pub mod fixtures;
pub mod mock_api;
pub mod world;

pub use mock_api::MockApi;
pub use world::{RunResult, TestWorld};
