//! Reporter module for output formatting

pub mod json;
pub mod text;

pub use json::JsonReporter;
pub use text::TextReporter;
