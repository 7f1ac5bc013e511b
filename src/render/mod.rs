//! Rendering of analysis results.

mod json;
mod text;

pub use json::{to_json, JsonFormat};
pub use text::to_summary;
