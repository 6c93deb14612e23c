//! Framework parsers: normalize backend error payloads into [`CanonicalError`]
//!
//! Each parser recognizes one backend framework's error-document shape.
//! Parsing is total: a payload that does not fit the active parser's
//! fingerprint is routed through a shared generic fallback, so `parse`
//! always yields a usable canonical error and never fails.

pub mod extract;
mod express;
mod generic;
mod laravel;
pub mod protocol;
mod symfony;

pub use express::ExpressParser;
pub use generic::parse_generic;
pub use laravel::LaravelParser;
pub use symfony::SymfonyParser;

use faultframe_core::{CanonicalError, Framework, RawErrorEvent};
use serde_json::Value;

/// Contract implemented by each framework parser
pub trait FrameworkParser: Send + Sync {
    /// Structural fingerprint test; pure, no side effects
    fn matches(&self, data: &Value) -> bool;

    /// Normalize an event into a canonical error
    ///
    /// Total: unmatched input falls through to the generic path.
    fn parse(&self, event: &RawErrorEvent) -> CanonicalError;
}

/// Select the parser for a configured framework
///
/// Selection happens once at configuration time; `matches` only guards
/// the chosen parser against payloads that don't fit its shape, it is
/// not cross-parser sniffing. The generic tag maps to the Symfony
/// parser, whose fallback handles shapeless payloads.
#[must_use]
pub fn parser_for(framework: Framework) -> &'static dyn FrameworkParser {
    match framework {
        Framework::Laravel => &LaravelParser,
        Framework::Express => &ExpressParser,
        Framework::Symfony | Framework::Generic => &SymfonyParser,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn selection_covers_every_framework() {
        let payload = json!({"error": "x"});
        assert!(!parser_for(Framework::Symfony).matches(&payload));
        assert!(parser_for(Framework::Express).matches(&payload));
        assert!(!parser_for(Framework::Laravel).matches(&payload));
    }

    #[test]
    fn parse_is_idempotent() {
        let event = RawErrorEvent {
            status: Some(500),
            status_text: Some("Internal Server Error".to_owned()),
            message: Some("request failed".to_owned()),
            data: Some(json!({"error": "boom", "stack": "at a.js:1:2"})),
            ..RawErrorEvent::default()
        };

        for framework in [Framework::Symfony, Framework::Laravel, Framework::Express] {
            let parser = parser_for(framework);
            assert_eq!(parser.parse(&event), parser.parse(&event));
        }
    }

    #[test]
    fn unmatched_input_with_a_message_never_reports_unknown_error() {
        let events = [
            RawErrorEvent {
                message: Some("socket hang up".to_owned()),
                ..RawErrorEvent::default()
            },
            RawErrorEvent {
                data: Some(json!({"reason": "upstream timeout"})),
                ..RawErrorEvent::default()
            },
        ];

        for event in &events {
            for framework in [Framework::Symfony, Framework::Laravel, Framework::Express] {
                let parsed = parser_for(framework).parse(event);
                assert_eq!(parsed.framework, Framework::Generic);
                assert_ne!(parsed.message, "Unknown error");
            }
        }
    }

    #[test]
    fn title_and_message_are_never_empty() {
        let events = [
            RawErrorEvent::default(),
            RawErrorEvent::from_body(500, json!({})),
            RawErrorEvent::from_body(500, json!({"error": ""})),
            RawErrorEvent::from_body(500, json!(null)),
        ];

        for event in &events {
            for framework in [Framework::Symfony, Framework::Laravel, Framework::Express] {
                let parsed = parser_for(framework).parse(event);
                assert!(!parsed.title.is_empty());
                assert!(!parsed.message.is_empty());
            }
        }
    }
}
