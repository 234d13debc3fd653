// Library root — exposes internals for integration tests.
// The binary entry point is src/main.rs.

pub mod config;
pub mod routes;

pub use config::Config;
pub use routes::{router, AppState};
