//! Output formatting for check and comparison results.
//!
//! - [`json`] - JSON output
//! - [`terminal`] - Terminal output with colors

mod json;
mod terminal;

pub use json::to_json;
pub use terminal::{format_field, render_check_report, render_comparison_report};
