//! Upstream LLM provider implementations for Guidepost.
//!
//! All providers implement the `guidepost_core::Provider` trait. The
//! gateway holds a `Arc<dyn Provider>` built from configuration.

pub mod gemini;

pub use gemini::GeminiProvider;

use guidepost_config::AppConfig;

/// Build the configured provider. The config must already be validated;
/// a missing credential here falls back to an empty key and every upstream
/// call will fail authentication.
pub fn build_from_config(config: &AppConfig) -> GeminiProvider {
    GeminiProvider::new(
        config.api_key.clone().unwrap_or_default(),
        config.model.clone(),
    )
    .with_base_url(config.base_url.clone())
    .with_params(config.generation.clone())
}
