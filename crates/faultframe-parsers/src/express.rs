//! Parser for Express-style flat error payloads

use faultframe_core::{CanonicalError, Framework, RawErrorEvent};
use serde_json::Value;

use crate::extract::{extract_message, looks_like_simple_error, parse_stack_text};
use crate::generic::parse_generic;
use crate::protocol::express::ExpressErrorBody;
use crate::FrameworkParser;

/// Recognizes Express-style `error`/`message` payloads
///
/// The fingerprint excludes payloads carrying a `class` field so a
/// Symfony document is never misread as Express when the configured
/// framework is wrong.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpressParser;

impl FrameworkParser for ExpressParser {
    fn matches(&self, data: &Value) -> bool {
        let Value::Object(map) = data else {
            return false;
        };

        (map.contains_key("error") || map.contains_key("message")) && !map.contains_key("class")
    }

    fn parse(&self, event: &RawErrorEvent) -> CanonicalError {
        let Some(data) = &event.data else {
            return parse_generic(event);
        };

        if !self.matches(data) {
            tracing::debug!(framework = %Framework::Express, "payload does not fit fingerprint, using generic fallback");
            return parse_generic(event);
        }

        let body = ExpressErrorBody::from_value(data);

        let extracted = extract_message(data);
        let message = extracted
            .clone()
            .or_else(|| event.message.clone().filter(|s| !s.is_empty()))
            .unwrap_or_else(|| "Unknown error".to_owned());
        let title = extracted
            .or_else(|| body.error.clone().filter(|s| !s.is_empty()))
            .or_else(|| event.status_text.clone().filter(|s| !s.is_empty()))
            .unwrap_or_else(|| "Server Error".to_owned());

        // Message-only payloads carry no trace structure worth walking
        let trace = if looks_like_simple_error(data) {
            Vec::new()
        } else {
            body.stack.as_deref().map(parse_stack_text).unwrap_or_default()
        };

        CanonicalError {
            title,
            message,
            status: body.status_code.or(event.status),
            error_class: None,
            trace,
            request: event.request.clone(),
            raw: Some(data.clone()),
            framework: Framework::Express,
        }
    }
}
