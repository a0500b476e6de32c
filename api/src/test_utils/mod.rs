//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The in-memory repository assigns ids to new pets on save the way the
//! database does, so tests can inspect the stored aggregate afterwards.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
