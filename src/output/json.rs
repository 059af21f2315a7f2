//! JSON output.

use crate::TutorError;
use serde::Serialize;
use serde_json::json;

/// Pretty-print any result record.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

pub fn error_json(err: &TutorError) -> Result<String, serde_json::Error> {
    to_json(&json!({ "error": err.to_string() }))
}

pub fn help_json(commands: &[(&str, &str)]) -> Result<String, serde_json::Error> {
    let commands: Vec<_> = commands
        .iter()
        .map(|(usage, description)| json!({ "usage": usage, "description": description }))
        .collect();
    to_json(&json!({ "commands": commands }))
}
