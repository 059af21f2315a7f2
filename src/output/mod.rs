//! Output formatting for calculator results.
//!
//! - [`terminal`] - coloured text for people
//! - [`json`] - JSON for scripts

mod json;
mod terminal;

pub use json::{error_json, help_json, to_json};
pub use terminal::{
    format_field, render_breakdown, render_classification, render_error, render_help, render_plan,
};
