//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer validates request limits, runs the pure domain analyzers and
//! stamps results. Handlers are synchronous; the HTTP layer calls them directly.

pub mod handlers;
