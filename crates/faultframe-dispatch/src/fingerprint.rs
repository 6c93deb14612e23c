use faultframe_core::CanonicalError;

/// Identity of an error occurrence for duplicate suppression
///
/// Two occurrences are the same error when status, message, and request
/// URL all agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprint {
    status: Option<u16>,
    message: String,
    url: Option<String>,
}

impl Fingerprint {
    /// Fingerprint of a parsed error
    #[must_use]
    pub fn of(error: &CanonicalError) -> Self {
        Self {
            status: error.status,
            message: error.message.clone(),
            url: error.request.as_ref().and_then(|r| r.url.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faultframe_core::{Framework, RequestInfo};

    fn error(status: Option<u16>, message: &str, url: Option<&str>) -> CanonicalError {
        CanonicalError {
            title: "Error".to_owned(),
            message: message.to_owned(),
            status,
            error_class: None,
            trace: Vec::new(),
            request: url.map(|u| RequestInfo::new("GET", u)),
            raw: None,
            framework: Framework::Generic,
        }
    }

    #[test]
    fn equal_tuples_are_equal() {
        let a = Fingerprint::of(&error(Some(500), "boom", Some("/api")));
        let b = Fingerprint::of(&error(Some(500), "boom", Some("/api")));
        assert_eq!(a, b);
    }

    #[test]
    fn any_differing_component_breaks_equality() {
        let base = Fingerprint::of(&error(Some(500), "boom", Some("/api")));

        assert_ne!(base, Fingerprint::of(&error(Some(502), "boom", Some("/api"))));
        assert_ne!(base, Fingerprint::of(&error(Some(500), "bust", Some("/api"))));
        assert_ne!(base, Fingerprint::of(&error(Some(500), "boom", Some("/other"))));
        assert_ne!(base, Fingerprint::of(&error(Some(500), "boom", None)));
    }
}
