//! Outcome classifier — maps raw upstream results and gateway faults to a
//! fixed set of client-visible outcomes with stable error codes.
//!
//! First match wins; every branch is terminal and mutually exclusive. No
//! outcome is retried internally — a failed call surfaces immediately and
//! the client decides whether to resubmit.

use axum::http::StatusCode;
use guidepost_core::error::ProviderError;
use guidepost_core::provider::GenerationResult;

/// Error code for transport-level failures.
pub const CODE_NETWORK: &str = "NETWORK";
/// Error code for responses with no extractable text.
pub const CODE_EMPTY_RESPONSE: &str = "EMPTY_RESPONSE";

/// The terminal result of one chat turn, ready for the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatOutcome {
    Success {
        text: String,
    },
    Failure {
        user_message: String,
        error_code: Option<String>,
        http_status: StatusCode,
    },
}

impl ChatOutcome {
    fn failure(message: impl Into<String>, code: Option<&str>, status: StatusCode) -> Self {
        Self::Failure {
            user_message: message.into(),
            error_code: code.map(str::to_string),
            http_status: status,
        }
    }
}

/// Classify one upstream call's result.
///
/// Decision order:
/// 1. transport failure → `NETWORK`, 500
/// 2. safety block → `SAFETY`, 400
/// 3. non-safety block (`OTHER`) → 400
/// 4. generation stopped abnormally → code = finish reason, 500
/// 5. no extractable text → `EMPTY_RESPONSE`, 500
/// 6. success
///
/// Other thrown gateway faults (credentials, quota, upstream API errors)
/// map to distinct status codes without an error code.
pub fn classify(result: Result<GenerationResult, ProviderError>) -> ChatOutcome {
    let generation = match result {
        Err(ProviderError::Network(_)) | Err(ProviderError::Timeout(_)) => {
            return ChatOutcome::failure(
                "No response received from server. Please check your connection and try again.",
                Some(CODE_NETWORK),
                StatusCode::INTERNAL_SERVER_ERROR,
            );
        }
        Err(ProviderError::AuthenticationFailed(_)) => {
            return ChatOutcome::failure(
                "Server configuration error: Invalid API Key.",
                None,
                StatusCode::INTERNAL_SERVER_ERROR,
            );
        }
        Err(ProviderError::RateLimited { .. }) => {
            return ChatOutcome::failure(
                "API quota exceeded or rate limit hit. Please try again later.",
                None,
                StatusCode::TOO_MANY_REQUESTS,
            );
        }
        Err(ProviderError::ApiError { message, .. }) => {
            return ChatOutcome::failure(
                format!("An API error occurred: {message}"),
                None,
                StatusCode::BAD_GATEWAY,
            );
        }
        Ok(generation) => generation,
    };

    if let Some(reason) = generation.block_reason.as_deref() {
        return match reason {
            "SAFETY" => ChatOutcome::failure(
                "The request was blocked due to safety guidelines. Please rephrase your \
                 message, avoiding potentially sensitive content.",
                Some("SAFETY"),
                StatusCode::BAD_REQUEST,
            ),
            "OTHER" => ChatOutcome::failure(
                "The request could not be processed, potentially due to prompt constraints \
                 or content issues. Please try rephrasing.",
                Some("OTHER"),
                StatusCode::BAD_REQUEST,
            ),
            other => ChatOutcome::failure(
                "I encountered an issue generating a response. Please try rephrasing.",
                Some(other),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        };
    }

    if let Some(reason) = generation.finish_reason.as_deref() {
        if reason != "STOP" {
            return ChatOutcome::failure(
                format!(
                    "Response generation stopped unexpectedly (Reason: {reason}). \
                     Try a shorter or different message."
                ),
                Some(reason),
                StatusCode::INTERNAL_SERVER_ERROR,
            );
        }
    }

    match generation.text {
        Some(text) => ChatOutcome::Success { text },
        None => ChatOutcome::failure(
            "An empty or incomplete response was received. Please try again.",
            Some(CODE_EMPTY_RESPONSE),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expect_failure(outcome: ChatOutcome) -> (String, Option<String>, StatusCode) {
        match outcome {
            ChatOutcome::Failure {
                user_message,
                error_code,
                http_status,
            } => (user_message, error_code, http_status),
            ChatOutcome::Success { .. } => panic!("expected failure"),
        }
    }

    #[test]
    fn success_passes_text_through() {
        let outcome = classify(Ok(GenerationResult::completed("hello")));
        assert_eq!(outcome, ChatOutcome::Success { text: "hello".into() });
    }

    #[test]
    fn network_error_maps_to_network_500() {
        let outcome = classify(Err(ProviderError::Network("connection reset".into())));
        let (message, code, status) = expect_failure(outcome);
        assert!(message.contains("No response received from server"));
        assert_eq!(code.as_deref(), Some("NETWORK"));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn timeout_maps_to_network_branch() {
        let outcome = classify(Err(ProviderError::Timeout("deadline exceeded".into())));
        let (_, code, status) = expect_failure(outcome);
        assert_eq!(code.as_deref(), Some("NETWORK"));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    /// Scenario: upstream reports a safety block. 400 + "SAFETY" +
    /// a rephrase-suggesting message, regardless of category.
    #[test]
    fn safety_block_maps_to_400() {
        let result = GenerationResult {
            text: None,
            finish_reason: None,
            block_reason: Some("SAFETY".into()),
        };
        let (message, code, status) = expect_failure(classify(Ok(result)));
        assert!(message.contains("rephrase"));
        assert_eq!(code.as_deref(), Some("SAFETY"));
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn other_block_maps_to_400() {
        let result = GenerationResult {
            text: None,
            finish_reason: None,
            block_reason: Some("OTHER".into()),
        };
        let (_, code, status) = expect_failure(classify(Ok(result)));
        assert_eq!(code.as_deref(), Some("OTHER"));
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn block_reason_wins_over_finish_reason() {
        let result = GenerationResult {
            text: Some("partial".into()),
            finish_reason: Some("MAX_TOKENS".into()),
            block_reason: Some("SAFETY".into()),
        };
        let (_, code, _) = expect_failure(classify(Ok(result)));
        assert_eq!(code.as_deref(), Some("SAFETY"));
    }

    #[test]
    fn abnormal_finish_carries_reason_as_code() {
        let result = GenerationResult {
            text: None,
            finish_reason: Some("MAX_TOKENS".into()),
            block_reason: None,
        };
        let (message, code, status) = expect_failure(classify(Ok(result)));
        assert!(message.contains("MAX_TOKENS"));
        assert_eq!(code.as_deref(), Some("MAX_TOKENS"));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn missing_text_is_empty_response() {
        let result = GenerationResult {
            text: None,
            finish_reason: Some("STOP".into()),
            block_reason: None,
        };
        let (_, code, status) = expect_failure(classify(Ok(result)));
        assert_eq!(code.as_deref(), Some("EMPTY_RESPONSE"));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn auth_failure_is_config_error_500() {
        let outcome = classify(Err(ProviderError::AuthenticationFailed("bad key".into())));
        let (message, code, status) = expect_failure(outcome);
        assert_eq!(message, "Server configuration error: Invalid API Key.");
        assert!(code.is_none());
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn rate_limit_is_429() {
        let outcome = classify(Err(ProviderError::RateLimited {
            retry_after_secs: 5,
        }));
        let (message, code, status) = expect_failure(outcome);
        assert!(message.contains("quota"));
        assert!(code.is_none());
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn upstream_api_fault_is_502() {
        let outcome = classify(Err(ProviderError::ApiError {
            status_code: 500,
            message: "internal".into(),
        }));
        let (message, _, status) = expect_failure(outcome);
        assert!(message.contains("An API error occurred"));
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn no_outcome_is_both_success_and_failure() {
        // A fully-normal result is the only way to reach Success.
        let result = GenerationResult {
            text: Some("ok".into()),
            finish_reason: Some("STOP".into()),
            block_reason: None,
        };
        assert!(matches!(classify(Ok(result)), ChatOutcome::Success { .. }));
    }
}
