//! Helpers for end-to-end tests against a locally spawned portfolio server.

pub mod browser;
pub mod test_server;
