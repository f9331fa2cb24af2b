//! Provider trait — the abstraction over the upstream LLM backend.
//!
//! A Provider knows how to issue exactly one generation call: system
//! instruction, prior turns, newest user message in, raw result out. The
//! gateway calls `generate()` through `Arc<dyn Provider>` without knowing
//! which backend is configured — tests substitute a mock.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ProviderError;
use crate::turn::ModelTurn;

/// One generation call's worth of input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// The resolved policy's system instruction.
    pub system_instruction: String,

    /// Prior turns, already adapted, in client-supplied order.
    pub history: Vec<ModelTurn>,

    /// The newest user message.
    pub message: String,
}

/// Fixed generation parameters. Static configuration, never request-varying.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationParams {
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_top_p")]
    pub top_p: f32,

    #[serde(default = "default_top_k")]
    pub top_k: u32,

    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
}

fn default_temperature() -> f32 {
    0.6
}
fn default_top_p() -> f32 {
    0.9
}
fn default_top_k() -> u32 {
    50
}
fn default_max_output_tokens() -> u32 {
    8192
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            top_p: default_top_p(),
            top_k: default_top_k(),
            max_output_tokens: default_max_output_tokens(),
        }
    }
}

/// The raw result of a generation call that completed at the HTTP level.
///
/// Deliberately loose: the upstream may block the prompt, stop early, or
/// return no text at all. Classifying these into client-visible outcomes is
/// the gateway's job, not the provider's.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Extracted candidate text, if any.
    pub text: Option<String>,

    /// Upstream finish reason (e.g. "STOP", "MAX_TOKENS", "SAFETY").
    pub finish_reason: Option<String>,

    /// Prompt-feedback block reason (e.g. "SAFETY", "OTHER").
    pub block_reason: Option<String>,
}

impl GenerationResult {
    /// A normally-completed result carrying text.
    pub fn completed(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            finish_reason: Some("STOP".into()),
            block_reason: None,
        }
    }
}

/// The core Provider trait.
///
/// One upstream call per invocation; no internal retry loop. Retries, if
/// desired, are the caller's responsibility.
#[async_trait]
pub trait Provider: Send + Sync {
    /// A human-readable name for this provider (e.g., "gemini").
    fn name(&self) -> &str;

    /// Issue one generation call.
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> std::result::Result<GenerationResult, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_defaults_match_tuning() {
        let params = GenerationParams::default();
        assert!((params.temperature - 0.6).abs() < f32::EPSILON);
        assert!((params.top_p - 0.9).abs() < f32::EPSILON);
        assert_eq!(params.top_k, 50);
        assert_eq!(params.max_output_tokens, 8192);
    }

    #[test]
    fn params_deserialize_with_defaults() {
        let params: GenerationParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.top_k, 50);
        let params: GenerationParams =
            serde_json::from_str(r#"{"temperature": 0.2}"#).unwrap();
        assert!((params.temperature - 0.2).abs() < f32::EPSILON);
        assert_eq!(params.max_output_tokens, 8192);
    }

    #[test]
    fn completed_result_has_stop_reason() {
        let result = GenerationResult::completed("hello");
        assert_eq!(result.text.as_deref(), Some("hello"));
        assert_eq!(result.finish_reason.as_deref(), Some("STOP"));
        assert!(result.block_reason.is_none());
    }
}
