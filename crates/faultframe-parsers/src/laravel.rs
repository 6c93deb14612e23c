//! Parser for Laravel-style exception payloads

use faultframe_core::{CanonicalError, Framework, RawErrorEvent, StackFrame};
use serde_json::Value;

use crate::extract::extract_message;
use crate::generic::parse_generic;
use crate::protocol::laravel::{LaravelErrorBody, LaravelFrame};
use crate::FrameworkParser;

/// Recognizes Laravel debug-mode exception payloads
#[derive(Debug, Clone, Copy, Default)]
pub struct LaravelParser;

impl FrameworkParser for LaravelParser {
    fn matches(&self, data: &Value) -> bool {
        let Value::Object(map) = data else {
            return false;
        };

        (map.contains_key("exception") || map.contains_key("message"))
            && map.contains_key("file")
            && map.contains_key("line")
    }

    fn parse(&self, event: &RawErrorEvent) -> CanonicalError {
        let Some(data) = &event.data else {
            return parse_generic(event);
        };

        if !self.matches(data) {
            tracing::debug!(framework = %Framework::Laravel, "payload does not fit fingerprint, using generic fallback");
            return parse_generic(event);
        }

        let body = LaravelErrorBody::from_value(data);

        let extracted = extract_message(data);
        let message = extracted
            .clone()
            .or_else(|| body.message.clone().filter(|s| !s.is_empty()))
            .unwrap_or_else(|| "Unknown error".to_owned());
        let title = body
            .exception
            .clone()
            .filter(|s| !s.is_empty())
            .or(extracted)
            .unwrap_or_else(|| "Server Error".to_owned());

        // The throwing site leads the trace, ahead of the reported frames
        let origin = origin_frame(&body);
        let trace: Vec<StackFrame> = std::iter::once(origin)
            .chain(body.trace.iter().map(convert_frame))
            .collect();

        CanonicalError {
            title,
            message,
            status: event.status,
            error_class: body.exception,
            trace,
            request: event.request.clone(),
            raw: Some(data.clone()),
            framework: Framework::Laravel,
        }
    }
}

/// Synthetic frame for the body's own file/line
fn origin_frame(body: &LaravelErrorBody) -> StackFrame {
    let file = body.file.clone().unwrap_or_default();
    let line = body.line.map_or_else(|| "?".to_owned(), |l| l.to_string());

    StackFrame {
        raw: format!("at {file}:{line}"),
        line: body.line,
        file,
        ..StackFrame::default()
    }
}

fn convert_frame(frame: &LaravelFrame) -> StackFrame {
    StackFrame {
        file: frame.file.clone().unwrap_or_default(),
        line: frame.line,
        column: None,
        function: frame.function.clone(),
        class: frame.class.clone(),
        namespace: None,
        call_type: frame.call_type.clone(),
        args: frame.args.clone(),
        raw: format_frame(frame),
    }
}

/// Render a frame as `Class::function at file:line`
fn format_frame(frame: &LaravelFrame) -> String {
    let mut parts: Vec<String> = Vec::new();

    let class = frame.class.as_deref().filter(|c| !c.is_empty());
    let function = frame.function.as_deref().filter(|f| !f.is_empty());

    match (class, function) {
        (Some(class), Some(function)) => {
            let call_type = frame.call_type.as_deref().filter(|t| !t.is_empty()).unwrap_or("::");
            parts.push(format!("{class}{call_type}{function}"));
        }
        (None, Some(function)) => parts.push(function.to_owned()),
        _ => {}
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn exception_payload() -> Value {
        json!({
            "message": "Call to undefined method upload()",
            "exception": "ErrorException",
            "file": "/var/www/app/Http/Controllers/FileController.php",
            "line": 118,
            "trace": [
                {
                    "file": "/var/www/vendor/laravel/framework/src/Router.php",
                    "line": 42,
                    "function": "upload",
                    "class": "App\\Http\\Controllers\\FileController",
                    "type": "->"
                }
            ]
        })
    }

    #[test]
    fn fingerprint_requires_file_and_line() {
        let parser = LaravelParser;
        assert!(parser.matches(&exception_payload()));
        assert!(parser.matches(&json!({"exception": "E", "file": "a.php", "line": 1})));
        assert!(!parser.matches(&json!({"message": "m", "file": "a.php"})));
        assert!(!parser.matches(&json!({"file": "a.php", "line": 1})));
    }

    #[test]
    fn exception_class_becomes_the_title() {
        let event = RawErrorEvent::from_body(500, exception_payload());
        let parsed = LaravelParser.parse(&event);

        assert_eq!(parsed.title, "ErrorException");
        assert_eq!(parsed.message, "Call to undefined method upload()");
        assert_eq!(parsed.error_class.as_deref(), Some("ErrorException"));
        assert_eq!(parsed.framework, Framework::Laravel);
    }

    #[test]
    fn status_comes_from_the_event_not_the_body() {
        let event = RawErrorEvent::from_body(500, exception_payload());
        let parsed = LaravelParser.parse(&event);
        assert_eq!(parsed.status, Some(500));
    }

    #[test]
    fn trace_is_prefixed_with_the_throwing_site() {
        let event = RawErrorEvent::from_body(500, exception_payload());
        let parsed = LaravelParser.parse(&event);

        assert_eq!(parsed.trace.len(), 2);
        assert_eq!(parsed.trace[0].file, "/var/www/app/Http/Controllers/FileController.php");
        assert_eq!(parsed.trace[0].line, Some(118));
        assert_eq!(parsed.trace[0].raw, "at /var/www/app/Http/Controllers/FileController.php:118");
        assert_eq!(parsed.trace[1].function.as_deref(), Some("upload"));
        assert_eq!(
            parsed.trace[1].raw,
            "App\\Http\\Controllers\\FileController->upload at /var/www/vendor/laravel/framework/src/Router.php:42"
        );
    }

    #[test]
    fn mistyped_line_does_not_erase_the_rest_of_the_payload() {
        let mut payload = exception_payload();
        payload["line"] = json!("118");

        let event = RawErrorEvent::from_body(500, payload);
        let parsed = LaravelParser.parse(&event);

        assert_eq!(parsed.title, "ErrorException");
        assert_eq!(parsed.message, "Call to undefined method upload()");
        assert_eq!(parsed.trace.len(), 2);
        assert_eq!(parsed.trace[0].line, None);
        assert_eq!(parsed.trace[1].function.as_deref(), Some("upload"));
    }

    #[test]
    fn non_matching_payload_falls_through_to_generic() {
        let event = RawErrorEvent {
            status: Some(422),
            data: Some(json!({"message": "The given data was invalid."})),
            ..RawErrorEvent::default()
        };

        // No file/line, so this is not a debug-mode payload
        let parsed = LaravelParser.parse(&event);
        assert_eq!(parsed.framework, Framework::Generic);
        assert_eq!(parsed.message, "The given data was invalid.");
        assert_eq!(parsed.title, "The given data was invalid.");
    }
}
