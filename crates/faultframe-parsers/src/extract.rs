//! Field-extraction heuristics shared by all framework parsers

use std::sync::OnceLock;

use faultframe_core::StackFrame;
use regex::Regex;
use serde_json::Value;

/// Field names carrying an error message across common API conventions
///
/// Scanned in order; the first non-empty match wins, so position in this
/// list is the tie-break, not specificity.
pub const MESSAGE_FIELDS: &[&str] = &[
    "error",
    "message",
    "errorMessage",
    "error_message",
    "errorText",
    "error_text",
    "msg",
    "detail",
    "description",
    "reason",
    "errorDescription",
    "error_description",
];

/// Structural markers of a stack-bearing error payload
const TRACE_MARKERS: &[&str] = &["trace", "stack", "file", "class", "exception"];

/// Extract an error message from an arbitrary payload
///
/// A bare string is returned as-is. Objects are scanned against
/// [`MESSAGE_FIELDS`] in order; when a matched field holds a nested
/// object, its own `message` field is unwrapped one level. Empty strings
/// never match.
#[must_use]
pub fn extract_message(data: &Value) -> Option<String> {
    match data {
        Value::String(s) if !s.is_empty() => return Some(s.clone()),
        Value::Object(map) => {
            for field in MESSAGE_FIELDS {
                let Some(value) = map.get(*field) else {
                    continue;
                };

                match value {
                    Value::String(s) if !s.is_empty() => return Some(s.clone()),
                    Value::Object(nested) => {
                        if let Some(Value::String(s)) = nested.get("message")
                            && !s.is_empty()
                        {
                            return Some(s.clone());
                        }
                    }
                    _ => {}
                }
            }
        }
        _ => {}
    }

    None
}

/// Whether a payload is a message-only error with no trace structure
///
/// True when at least one [`MESSAGE_FIELDS`] candidate is present and
/// none of the markers of a stack-bearing payload are. Parsers use this
/// to skip structured trace extraction entirely.
#[must_use]
pub fn looks_like_simple_error(data: &Value) -> bool {
    let Value::Object(map) = data else {
        return false;
    };

    let has_message = MESSAGE_FIELDS.iter().any(|field| map.contains_key(*field));
    let has_trace = TRACE_MARKERS.iter().any(|field| map.contains_key(*field));

    has_message && !has_trace
}

/// Split multi-line stack text into frames
///
/// Recognizes `at FUNC (FILE:LINE:COL)` and `at FILE:LINE:COL`. Any other
/// non-empty line becomes a raw-only frame with an empty file path; blank
/// lines are dropped. Frame order follows line order.
#[must_use]
pub fn parse_stack_text(stack: &str) -> Vec<StackFrame> {
    stack
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() { None } else { Some(parse_stack_line(line)) }
        })
        .collect()
}

/// Parse one trimmed, non-empty stack line
fn parse_stack_line(line: &str) -> StackFrame {
    if let Some(caps) = frame_with_function_regex().captures(line) {
        return StackFrame {
            function: Some(caps[1].to_owned()),
            file: caps[2].to_owned(),
            line: caps[3].parse().ok(),
            column: caps[4].parse().ok(),
            raw: line.to_owned(),
            ..StackFrame::default()
        };
    }

    if let Some(caps) = frame_location_regex().captures(line) {
        return StackFrame {
            file: caps[1].to_owned(),
            line: caps[2].parse().ok(),
            column: caps[3].parse().ok(),
            raw: line.to_owned(),
            ..StackFrame::default()
        };
    }

    StackFrame::raw_only(line)
}

fn frame_with_function_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"at\s+(.+?)\s+\((.+?):(\d+):(\d+)\)").expect("valid frame regex"))
}

fn frame_location_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"at\s+(.+?):(\d+):(\d+)").expect("valid location regex"))
}
