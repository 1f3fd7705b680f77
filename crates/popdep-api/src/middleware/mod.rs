//! # Middleware Stack
//!
//! Tower middleware for the API layer:
//! - [`tracing_layer`]: request/response tracing with `TraceLayer`.
//! - [`cors`]: single-origin, credentialed CORS.

pub mod cors;
pub mod tracing_layer;
