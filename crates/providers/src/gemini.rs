//! Google Gemini provider implementation.
//!
//! Uses the Generative Language `generateContent` API directly:
//! - `x-goog-api-key` header authentication
//! - System prompt as the top-level `systemInstruction` field
//! - Fixed generation config and harm-category safety settings
//!
//! Exactly one upstream call per `generate()`; no retry loop.

use async_trait::async_trait;
use guidepost_core::error::ProviderError;
use guidepost_core::provider::{GenerationParams, GenerationRequest, GenerationResult};
use guidepost_core::turn::ModelTurn;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Safety settings sent with every request. The upstream safety layer is
/// the only content moderation this service performs.
const SAFETY_CATEGORIES: &[&str] = &[
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];
const SAFETY_THRESHOLD: &str = "BLOCK_MEDIUM_AND_ABOVE";

/// Gemini generateContent provider.
pub struct GeminiProvider {
    name: String,
    base_url: String,
    api_key: String,
    model: String,
    params: GenerationParams,
    client: reqwest::Client,
}

impl GeminiProvider {
    /// Create a new Gemini provider.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            name: "gemini".into(),
            base_url: DEFAULT_BASE_URL.into(),
            api_key: api_key.into(),
            model: model.into(),
            params: GenerationParams::default(),
            client,
        }
    }

    /// Create with a custom base URL (e.g., for testing or proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the fixed generation parameters.
    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    /// Convert adapted history plus the newest user message into the
    /// `contents` array the API expects.
    fn to_api_contents(history: &[ModelTurn], message: &str) -> Vec<GeminiContent> {
        let mut contents: Vec<GeminiContent> = history
            .iter()
            .map(|turn| GeminiContent {
                role: turn.role.as_str().into(),
                parts: vec![GeminiPart {
                    text: turn.text.clone(),
                }],
            })
            .collect();

        contents.push(GeminiContent {
            role: "user".into(),
            parts: vec![GeminiPart {
                text: message.into(),
            }],
        });

        contents
    }

    /// Build the full request body for one generation call.
    fn build_body(&self, request: &GenerationRequest) -> serde_json::Value {
        let contents = Self::to_api_contents(&request.history, &request.message);

        let safety_settings: Vec<serde_json::Value> = SAFETY_CATEGORIES
            .iter()
            .map(|category| {
                serde_json::json!({
                    "category": category,
                    "threshold": SAFETY_THRESHOLD,
                })
            })
            .collect();

        serde_json::json!({
            "contents": contents,
            "systemInstruction": {
                "role": "system",
                "parts": [{ "text": request.system_instruction }],
            },
            "generationConfig": {
                "temperature": self.params.temperature,
                "topP": self.params.top_p,
                "topK": self.params.top_k,
                "maxOutputTokens": self.params.max_output_tokens,
                "responseMimeType": "text/plain",
            },
            "safetySettings": safety_settings,
        })
    }

    /// Convert the API response to our raw generation result. The result
    /// stays deliberately loose — classifying blocked/empty/stopped
    /// responses into client outcomes is the gateway's job.
    fn into_result(resp: GenerateContentResponse) -> GenerationResult {
        let block_reason = resp.prompt_feedback.and_then(|f| f.block_reason);

        let (text, finish_reason) = match resp.candidates.into_iter().next() {
            Some(candidate) => {
                let text = candidate.content.map(|content| {
                    content
                        .parts
                        .into_iter()
                        .filter_map(|p| p.text)
                        .collect::<Vec<_>>()
                        .join("")
                });
                let text = text.filter(|t| !t.is_empty());
                (text, candidate.finish_reason)
            }
            None => (None, None),
        };

        GenerationResult {
            text,
            finish_reason,
            block_reason,
        }
    }
}

#[async_trait]
impl guidepost_core::Provider for GeminiProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> std::result::Result<GenerationResult, ProviderError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        let body = self.build_body(&request);

        debug!(provider = "gemini", model = %self.model, "Sending generation request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout(e.to_string())
                } else {
                    ProviderError::Network(e.to_string())
                }
            })?;

        let status = response.status().as_u16();

        if status == 429 {
            return Err(ProviderError::RateLimited {
                retry_after_secs: 5,
            });
        }
        if status == 401 || status == 403 {
            return Err(ProviderError::AuthenticationFailed(
                "Invalid Gemini API key".into(),
            ));
        }
        if status != 200 {
            let error_body = response.text().await.unwrap_or_default();
            // Gemini reports a bad key as 400 INVALID_ARGUMENT.
            if error_body.contains("API key not valid") {
                return Err(ProviderError::AuthenticationFailed(
                    "Invalid Gemini API key".into(),
                ));
            }
            warn!(status, body = %error_body, "Gemini API error");
            return Err(ProviderError::ApiError {
                status_code: status,
                message: error_body,
            });
        }

        let api_resp: GenerateContentResponse =
            response.json().await.map_err(|e| ProviderError::ApiError {
                status_code: 200,
                message: format!("Failed to parse Gemini response: {e}"),
            })?;

        Ok(Self::into_result(api_resp))
    }
}

// --- Gemini API types ---

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    role: String,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,

    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,

    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use guidepost_core::Provider;

    #[test]
    fn constructor() {
        let provider = GeminiProvider::new("test-key", "gemini-1.5-flash");
        assert_eq!(provider.name(), "gemini");
        assert_eq!(provider.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn constructor_with_base_url() {
        let provider = GeminiProvider::new("test-key", "gemini-1.5-flash")
            .with_base_url("https://custom.proxy.com/");
        assert_eq!(provider.base_url, "https://custom.proxy.com");
    }

    #[test]
    fn contents_append_message_after_history() {
        let history = vec![ModelTurn::user("hello"), ModelTurn::model("hi there")];
        let contents = GeminiProvider::to_api_contents(&history, "how are you?");
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[0].role, "user");
        assert_eq!(contents[1].role, "model");
        assert_eq!(contents[2].role, "user");
        assert_eq!(contents[2].parts[0].text, "how are you?");
    }

    #[test]
    fn body_carries_policy_and_tuning() {
        let provider = GeminiProvider::new("test-key", "gemini-1.5-flash");
        let request = GenerationRequest {
            system_instruction: "You are a strict guide.".into(),
            history: vec![],
            message: "hi".into(),
        };
        let body = provider.build_body(&request);

        assert_eq!(
            body["systemInstruction"]["parts"][0]["text"],
            "You are a strict guide."
        );
        assert_eq!(body["generationConfig"]["temperature"], 0.6);
        assert_eq!(body["generationConfig"]["topK"], 50);
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 8192);
        assert_eq!(body["safetySettings"].as_array().unwrap().len(), 4);
        assert_eq!(
            body["safetySettings"][0]["threshold"],
            "BLOCK_MEDIUM_AND_ABOVE"
        );
    }

    #[test]
    fn parse_text_response() {
        let resp: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [{
                    "content": {"parts": [{"text": "Take a slow breath."}], "role": "model"},
                    "finishReason": "STOP"
                }]
            }"#,
        )
        .unwrap();

        let result = GeminiProvider::into_result(resp);
        assert_eq!(result.text.as_deref(), Some("Take a slow breath."));
        assert_eq!(result.finish_reason.as_deref(), Some("STOP"));
        assert!(result.block_reason.is_none());
    }

    #[test]
    fn parse_multi_part_response_joins_text() {
        let resp: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [{
                    "content": {"parts": [{"text": "Part one. "}, {"text": "Part two."}]},
                    "finishReason": "STOP"
                }]
            }"#,
        )
        .unwrap();

        let result = GeminiProvider::into_result(resp);
        assert_eq!(result.text.as_deref(), Some("Part one. Part two."));
    }

    #[test]
    fn parse_safety_block() {
        let resp: GenerateContentResponse = serde_json::from_str(
            r#"{
                "promptFeedback": {"blockReason": "SAFETY"}
            }"#,
        )
        .unwrap();

        let result = GeminiProvider::into_result(resp);
        assert!(result.text.is_none());
        assert_eq!(result.block_reason.as_deref(), Some("SAFETY"));
    }

    #[test]
    fn parse_abnormal_finish() {
        let resp: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [{"finishReason": "MAX_TOKENS"}]
            }"#,
        )
        .unwrap();

        let result = GeminiProvider::into_result(resp);
        assert!(result.text.is_none());
        assert_eq!(result.finish_reason.as_deref(), Some("MAX_TOKENS"));
    }

    #[test]
    fn parse_empty_response() {
        let resp: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        let result = GeminiProvider::into_result(resp);
        assert!(result.text.is_none());
        assert!(result.finish_reason.is_none());
        assert!(result.block_reason.is_none());
    }

    #[test]
    fn empty_parts_yield_no_text() {
        let resp: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [{
                    "content": {"parts": []},
                    "finishReason": "STOP"
                }]
            }"#,
        )
        .unwrap();

        let result = GeminiProvider::into_result(resp);
        assert!(result.text.is_none());
    }
}
