//! Turns validated request inputs into the segments and output schema sent to
//! the model. Everything here is pure: the same input always yields the same
//! [`Prompt`].

pub mod plan;
pub mod practice;
pub mod schema;
pub mod syllabus;
pub mod tracker;

use serde_json::Value;

use crate::models::Document;

pub const DEFAULT_DIFFICULTY: &str = "normal";

#[derive(Debug, Clone, PartialEq)]
pub enum PromptSegment {
    Text(String),
    Document(Document),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub segments: Vec<PromptSegment>,
    /// Output-shape descriptor the model's JSON must follow.
    pub schema: Value,
}

impl Prompt {
    /// All text segments joined, mostly useful for logging and tests.
    pub fn text(&self) -> String {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                PromptSegment::Text(text) => Some(text.as_str()),
                PromptSegment::Document(_) => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Trimmed value, or `None` when absent or blank.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

pub(crate) fn difficulty_or_default(value: Option<&str>) -> String {
    non_blank(value).unwrap_or(DEFAULT_DIFFICULTY).to_string()
}

/// Browsers post `<input type="number">` values as strings, so both forms are accepted.
/// `Ok(None)` means the field was absent, null or blank.
pub(crate) fn positive_number(value: Option<&Value>) -> Result<Option<f64>, ()> {
    let number = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) if s.trim().is_empty() => return Ok(None),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };
    match number {
        Some(n) if n.is_finite() && n > 0.0 => Ok(Some(n)),
        _ => Err(()),
    }
}

/// `0` or `"0"`, which some callers send for "no value".
pub(crate) fn is_zero(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.trim().parse::<f64>().ok() == Some(0.0),
        _ => false,
    }
}
