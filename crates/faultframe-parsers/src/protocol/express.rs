//! Express error document wire format
//!
//! Express apps have no single error shape; the common convention is a
//! flat object with `error` and/or `message`, optionally a `statusCode`
//! echo and a stack string.

use serde_json::Value;

use super::{field, status_field};

/// Express-style flat error payload
#[derive(Debug, Clone, Default)]
pub struct ExpressErrorBody {
    /// Short error label
    pub error: Option<String>,
    /// Error message
    pub message: Option<String>,
    /// Status code echoed in the body
    pub status_code: Option<u16>,
    /// Stack trace text
    pub stack: Option<String>,
}

impl ExpressErrorBody {
    /// Read the payload field by field, tolerating mistyped fields
    #[must_use]
    pub fn from_value(data: &Value) -> Self {
        let Value::Object(map) = data else {
            return Self::default();
        };

        Self {
            error: field(map, "error"),
            message: field(map, "message"),
            status_code: status_field(map, "statusCode"),
            stack: field(map, "stack"),
        }
    }
}
