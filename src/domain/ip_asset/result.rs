//! Outcome of a mint submission.

use serde::Serialize;
use serde_json::Value;

/// A parsed response body together with the status that carried it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MintResponse {
    pub status: u16,
    pub body: Value,
}

impl MintResponse {
    pub fn is_success_status(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Whether the body carries a truthy `error` field.
    pub fn reports_error(&self) -> bool {
        self.body.get("error").is_some_and(is_truthy)
    }

    /// Error message the service put in the body, preferring `message` over a
    /// string-valued `error`.
    pub fn error_message(&self) -> Option<String> {
        if !self.reports_error() {
            return None;
        }
        let message = self
            .body
            .get("message")
            .and_then(Value::as_str)
            .or_else(|| self.body.get("error").and_then(Value::as_str))
            .unwrap_or("Unknown error");
        Some(message.to_string())
    }
}

/// Result of one submission attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum MintResult {
    /// The service answered with JSON. Under the pass-through policy this
    /// includes 4xx/5xx answers; check [`MintResult::reports_error`].
    Success(MintResponse),
    /// Non-2xx answer, only produced under the strict status policy.
    Rejected(MintResponse),
    /// Client-side fault: transport, parse, empty body, validation or
    /// duplicate submission.
    Failure(String),
}

impl MintResult {
    pub fn response(&self) -> Option<&MintResponse> {
        match self {
            MintResult::Success(r) | MintResult::Rejected(r) => Some(r),
            MintResult::Failure(_) => None,
        }
    }

    pub fn body(&self) -> Option<&Value> {
        self.response().map(|r| &r.body)
    }

    /// True for failures, rejections and bodies with a truthy `error` field.
    pub fn reports_error(&self) -> bool {
        match self {
            MintResult::Success(r) => r.reports_error(),
            MintResult::Rejected(_) | MintResult::Failure(_) => true,
        }
    }

    /// Human-readable reason when [`MintResult::reports_error`] holds.
    pub fn error_message(&self) -> Option<String> {
        match self {
            MintResult::Success(r) => r.error_message(),
            MintResult::Rejected(r) => Some(
                r.error_message()
                    .unwrap_or_else(|| format!("Server returned status {}", r.status)),
            ),
            MintResult::Failure(message) => Some(message.clone()),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(status: u16, body: Value) -> MintResponse {
        MintResponse { status, body }
    }

    #[test]
    fn test_success_without_error_field() {
        let result = MintResult::Success(response(200, json!({"id": "abc"})));
        assert!(!result.reports_error());
        assert_eq!(result.error_message(), None);
        assert_eq!(result.body(), Some(&json!({"id": "abc"})));
    }

    #[test]
    fn test_error_field_truthiness() {
        for body in [
            json!({"error": true}),
            json!({"error": "boom"}),
            json!({"error": 1}),
            json!({"error": {"code": 4}}),
        ] {
            assert!(response(400, body.clone()).reports_error(), "{body}");
        }
        for body in [
            json!({"error": false}),
            json!({"error": null}),
            json!({"error": ""}),
            json!({"error": 0}),
            json!({"message": "ok"}),
            json!([1, 2]),
        ] {
            assert!(!response(200, body.clone()).reports_error(), "{body}");
        }
    }

    #[test]
    fn test_error_message_preference() {
        let r = response(400, json!({"error": true, "message": "bad request"}));
        assert_eq!(r.error_message().as_deref(), Some("bad request"));

        let r = response(400, json!({"error": "invalid owner"}));
        assert_eq!(r.error_message().as_deref(), Some("invalid owner"));

        let r = response(400, json!({"error": true}));
        assert_eq!(r.error_message().as_deref(), Some("Unknown error"));
    }

    #[test]
    fn test_rejected_and_failure_always_report_error() {
        let rejected = MintResult::Rejected(response(503, json!({})));
        assert!(rejected.reports_error());
        assert_eq!(
            rejected.error_message().as_deref(),
            Some("Server returned status 503")
        );

        let failure = MintResult::Failure("Request failed: dns".to_string());
        assert!(failure.reports_error());
        assert!(failure.body().is_none());
        assert_eq!(failure.error_message().as_deref(), Some("Request failed: dns"));
    }

    #[test]
    fn test_status_range() {
        assert!(response(201, json!({})).is_success_status());
        assert!(!response(302, json!({})).is_success_status());
        assert!(!response(400, json!({})).is_success_status());
    }
}
