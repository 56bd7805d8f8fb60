//! How response status codes map onto [`crate::domain::ip_asset::MintResult`].

use crate::domain::ip_asset::{MintResponse, MintResult};

/// Status handling for mint responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusPolicy {
    /// Every parsed body is a `Success`, whatever the status. Callers tell
    /// success from failure by the body's `error` field.
    #[default]
    PassThrough,
    /// Non-2xx responses become `Rejected`.
    Strict,
}

impl StatusPolicy {
    pub fn classify(self, response: MintResponse) -> MintResult {
        match self {
            StatusPolicy::Strict if !response.is_success_status() => {
                MintResult::Rejected(response)
            }
            _ => MintResult::Success(response),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bad_request() -> MintResponse {
        MintResponse {
            status: 400,
            body: json!({"error": true, "message": "bad request"}),
        }
    }

    #[test]
    fn test_status_policy_default_is_pass_through() {
        assert_eq!(StatusPolicy::default(), StatusPolicy::PassThrough);
    }

    #[test]
    fn test_pass_through_ignores_status() {
        let result = StatusPolicy::PassThrough.classify(bad_request());
        assert_eq!(result, MintResult::Success(bad_request()));
    }

    #[test]
    fn test_strict_rejects_non_2xx() {
        let result = StatusPolicy::Strict.classify(bad_request());
        assert_eq!(result, MintResult::Rejected(bad_request()));

        let ok = MintResponse {
            status: 201,
            body: json!({"id": "abc"}),
        };
        assert_eq!(
            StatusPolicy::Strict.classify(ok.clone()),
            MintResult::Success(ok)
        );
    }
}
