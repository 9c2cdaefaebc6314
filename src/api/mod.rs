//! API Module
//!
//! HTTP handlers and routing for the result proxy.
//!
//! # Endpoints
//! - `GET /api/result` - Lookup envelope (cache or upstream)
//! - `OPTIONS /api/result` - CORS preflight
//! - `GET /result/view` - Rendered HTML marksheet
//! - `GET /result/print` - Marksheet with auto-print trigger
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
