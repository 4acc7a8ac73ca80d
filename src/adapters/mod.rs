//! Adapters - Connections between the domain and the outside world.
//!
//! - `http` - REST endpoints, error mapping and the middleware stack

pub mod http;
