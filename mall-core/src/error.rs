use serde_json::Value;
use thiserror::Error;

/// Fallback error code when the backend envelope carries none.
pub const REQUEST_FAILED: &str = "REQUEST_FAILED";

/// Fallback message shown when the backend envelope carries none.
pub const GENERIC_FAILURE_MESSAGE: &str = "请求失败";

/// Normalized API failure: the HTTP status (absent when the request never
/// produced a response) plus the backend envelope's code and message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    pub status: Option<u16>,
    pub code: String,
    pub message: String,
}

impl ApiError {
    #[must_use]
    pub fn new(status: Option<u16>, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Transport-level failure that never reached the server.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(None, REQUEST_FAILED, message)
    }

    /// Build from a non-success response payload, defaulting the absent or
    /// empty envelope fields.
    #[must_use]
    pub fn from_envelope(status: u16, payload: &Value) -> Self {
        let envelope = payload.get("error");
        let field = |name: &str| {
            envelope
                .and_then(|error| error.get(name))
                .and_then(Value::as_str)
                .filter(|text| !text.is_empty())
        };
        Self::new(
            Some(status),
            field("code").unwrap_or(REQUEST_FAILED),
            field("message").unwrap_or(GENERIC_FAILURE_MESSAGE),
        )
    }

    /// Raised locally when a token refresh is attempted with no refresh
    /// token on hand; no network call is made.
    #[must_use]
    pub fn refresh_required() -> Self {
        Self::new(Some(401), "REFRESH_REQUIRED", "没有可用的刷新令牌")
    }

    /// Retryable by the user: transport failures, timeouts, throttling and
    /// server errors. Everything else is terminal.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self.status {
            None | Some(0) => true,
            Some(status) => status == 408 || status == 429 || status >= 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;
    use serde_json::json;

    #[test]
    fn envelope_fields_surface_verbatim() {
        let err = ApiError::from_envelope(
            401,
            &json!({"error": {"code": "AUTH_INVALID", "message": "凭证无效"}}),
        );
        assert_eq!(err.status, Some(401));
        assert_eq!(err.code, "AUTH_INVALID");
        assert_eq!(err.message, "凭证无效");
    }

    #[test]
    fn missing_envelope_falls_back_to_generic() {
        let err = ApiError::from_envelope(500, &json!({}));
        assert_eq!(err.code, "REQUEST_FAILED");
        assert_eq!(err.message, "请求失败");

        let empty = ApiError::from_envelope(500, &json!({"error": {"code": "", "message": ""}}));
        assert_eq!(empty.code, "REQUEST_FAILED");
        assert_eq!(empty.message, "请求失败");
    }

    #[test]
    fn transient_classification() {
        for status in [503, 500, 429, 408, 0] {
            assert!(
                ApiError::new(Some(status), "X", "x").is_transient(),
                "status {status} should be transient"
            );
        }
        assert!(ApiError::network("connection refused").is_transient());
        for status in [400, 401, 404, 422] {
            assert!(
                !ApiError::new(Some(status), "X", "x").is_transient(),
                "status {status} should be terminal"
            );
        }
    }

    #[test]
    fn refresh_required_is_local_and_terminal() {
        let err = ApiError::refresh_required();
        assert_eq!(err.code, "REFRESH_REQUIRED");
        assert_eq!(err.status, Some(401));
        assert!(!err.is_transient());
    }
}
