//! API Response types
//!
//! Response shapes shared across the service's endpoints.

use serde::{Deserialize, Serialize};

/// Error body carried by non-2xx responses
///
/// The service reports failures as either `{"detail": "..."}` or
/// `{"message": "..."}`; both shapes deserialize here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// The human-readable reason, if the server provided one
    pub fn reason(&self) -> Option<&str> {
        self.detail.as_deref().or(self.message.as_deref())
    }

    /// Best-effort extraction from a raw response body
    pub fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}

/// Plain `{"message": "..."}` confirmation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_prefers_detail() {
        let body = ErrorBody::parse(r#"{"detail":"Meal not found","message":"ignored"}"#);
        assert_eq!(body.reason(), Some("Meal not found"));
    }

    #[test]
    fn reason_falls_back_to_message() {
        let body = ErrorBody::parse(r#"{"message":"Failed to place order"}"#);
        assert_eq!(body.reason(), Some("Failed to place order"));
    }

    #[test]
    fn unparseable_body_has_no_reason() {
        assert_eq!(ErrorBody::parse("<html>502</html>").reason(), None);
    }
}
