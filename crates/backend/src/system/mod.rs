pub mod app_state;
pub mod middleware;
pub mod tracing;
