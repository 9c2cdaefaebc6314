//! BEU Result Proxy - caching proxy and printable renderer for university
//! examination results
//!
//! Fetches a student's result from the upstream service, normalizes its
//! inconsistent response shapes into a stable schema, caches lookups briefly,
//! and renders a printable marksheet.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod normalize;
pub mod render;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
