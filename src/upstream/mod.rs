//! Upstream Module
//!
//! Fetches results from the university service and parses whatever shape
//! it answers with.

mod client;
mod parse;

pub use client::{UpstreamClient, UpstreamResponse};
pub use parse::{parse_lenient, ParsedBody};
