//! Render Module
//!
//! Turns a normalized result into a printable marksheet document.

mod document;
mod style;

pub use document::DocumentView;
