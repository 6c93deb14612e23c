//! Parser for Symfony-style problem documents

use faultframe_core::{CanonicalError, Framework, RawErrorEvent, StackFrame};
use serde_json::Value;

use crate::extract::extract_message;
use crate::generic::parse_generic;
use crate::protocol::symfony::{SymfonyErrorBody, SymfonyFrame};
use crate::FrameworkParser;

/// Recognizes Symfony debug error documents
#[derive(Debug, Clone, Copy, Default)]
pub struct SymfonyParser;

impl FrameworkParser for SymfonyParser {
    fn matches(&self, data: &Value) -> bool {
        let Value::Object(map) = data else {
            return false;
        };

        map.contains_key("type") && map.contains_key("title") && map.contains_key("status") && map.contains_key("class")
    }

    fn parse(&self, event: &RawErrorEvent) -> CanonicalError {
        let Some(data) = &event.data else {
            return parse_generic(event);
        };

        if !self.matches(data) {
            tracing::debug!(framework = %Framework::Symfony, "payload does not fit fingerprint, using generic fallback");
            return parse_generic(event);
        }

        let body = SymfonyErrorBody::from_value(data);

        let trace: Vec<StackFrame> = body.trace.iter().map(convert_frame).collect();

        let extracted = extract_message(data);
        let message = extracted
            .clone()
            .or_else(|| body.detail.clone().filter(|s| !s.is_empty()))
            .or_else(|| body.title.clone().filter(|s| !s.is_empty()))
            .unwrap_or_else(|| "Unknown error".to_owned());
        let title = body
            .title
            .clone()
            .filter(|s| !s.is_empty())
            .or(extracted)
            .unwrap_or_else(|| "Server Error".to_owned());

        CanonicalError {
            title,
            message,
            status: body.status,
            error_class: body.class,
            trace,
            request: event.request.clone(),
            raw: Some(data.clone()),
            framework: Framework::Symfony,
        }
    }
}

fn convert_frame(frame: &SymfonyFrame) -> StackFrame {
    StackFrame {
        file: frame.file.clone().unwrap_or_default(),
        line: frame.line,
        column: None,
        function: frame.function.clone(),
        class: frame.class.clone(),
        namespace: frame.namespace.clone(),
        call_type: frame.call_type.clone(),
        args: frame.args.clone(),
        raw: format_frame(frame),
    }
}

/// Render a frame as `Class->function at file:line`
fn format_frame(frame: &SymfonyFrame) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(class) = frame.class.as_deref().filter(|c| !c.is_empty()) {
        let call_type = frame.call_type.as_deref().filter(|t| !t.is_empty()).unwrap_or("->");
        let function = frame.function.as_deref().unwrap_or_default();
        parts.push(format!("{class}{call_type}{function}"));
    } else if let Some(function) = frame.function.as_deref().filter(|f| !f.is_empty()) {
        parts.push(function.to_owned());
    }

    if let Some(file) = frame.file.as_deref().filter(|f| !f.is_empty()) {
        let line = frame.line.map_or_else(|| "?".to_owned(), |l| l.to_string());
        parts.push(format!("at {file}:{line}"));
    }

    if parts.is_empty() {
        "Unknown frame".to_owned()
    } else {
        parts.join(" ")
    }
}
