//! Shared fallback path for payloads that match no framework fingerprint

use faultframe_core::{CanonicalError, Framework, RawErrorEvent};

use crate::extract::{extract_message, parse_stack_text};

/// Normalize an event whose body fits no framework shape
///
/// Field precedence is load-bearing: a message extracted from the body
/// sets both message and title; the event's own message only ever fills
/// the message slot, never the title.
pub fn parse_generic(event: &RawErrorEvent) -> CanonicalError {
    let trace = event.stack.as_deref().map(parse_stack_text).unwrap_or_default();

    let mut title = event
        .status_text
        .clone()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "Error".to_owned());
    let mut message = "Unknown error".to_owned();

    // The server's own body outranks the transport's error message
    if let Some(data) = &event.data
        && let Some(extracted) = extract_message(data)
    {
        title.clone_from(&extracted);
        message = extracted;
    }

    if message == "Unknown error"
        && let Some(event_message) = &event.message
        && !event_message.is_empty()
    {
        message.clone_from(event_message);
    }

    CanonicalError {
        title,
        message,
        status: event.status,
        error_class: None,
        trace,
        request: event.request.clone(),
        raw: event.data.clone(),
        framework: Framework::Generic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_when_event_is_empty() {
        let parsed = parse_generic(&RawErrorEvent::default());

        assert_eq!(parsed.title, "Error");
        assert_eq!(parsed.message, "Unknown error");
        assert_eq!(parsed.framework, Framework::Generic);
        assert!(parsed.trace.is_empty());
    }

    #[test]
    fn extracted_body_message_sets_title_and_message() {
        let event = RawErrorEvent {
            status_text: Some("Bad Request".to_owned()),
            data: Some(json!({"reason": "quota exceeded"})),
            ..RawErrorEvent::default()
        };

        let parsed = parse_generic(&event);
        assert_eq!(parsed.title, "quota exceeded");
        assert_eq!(parsed.message, "quota exceeded");
    }

    #[test]
    fn event_message_fills_message_but_not_title() {
        let event = RawErrorEvent {
            status: Some(0),
            status_text: Some("Network Error".to_owned()),
            message: Some("connection refused".to_owned()),
            ..RawErrorEvent::default()
        };

        let parsed = parse_generic(&event);
        assert_eq!(parsed.title, "Network Error");
        assert_eq!(parsed.message, "connection refused");
    }

    #[test]
    fn stack_text_is_tokenized() {
        let event = RawErrorEvent {
            stack: Some("at run (app.js:3:1)".to_owned()),
            ..RawErrorEvent::default()
        };

        let parsed = parse_generic(&event);
        assert_eq!(parsed.trace.len(), 1);
        assert_eq!(parsed.trace[0].file, "app.js");
    }
}
