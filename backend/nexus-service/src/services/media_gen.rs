//! Generative-media client: text-to-bio and text-to-image.
//!
//! The two operations fail differently on purpose: bio generation always
//! returns a usable string (static localized fallback when the credential is
//! missing or the upstream call fails), while image generation surfaces the
//! failure to the caller.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde_json::Value;

use crate::config::MediaConfig;
use crate::error::AppError;
use crate::i18n::{self, Language};

#[derive(Clone)]
pub struct MediaGenClient {
    http: reqwest::Client,
    config: MediaConfig,
}

impl MediaGenClient {
    pub fn new(config: MediaConfig) -> Self {
        if config.api_key.is_none() {
            tracing::warn!("GENAI_API_KEY not set; generative media features are disabled");
        }
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.config.timeout_secs)
    }

    /// Generate a short profile bio from free-text interests.
    /// Never fails: credential or upstream problems yield a localized
    /// fallback string instead.
    pub async fn generate_bio(&self, interests: &str, lang: Language) -> String {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return i18n::bio_unavailable(lang).to_string();
        };

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.bio_model
        );
        let body = serde_json::json!({
            "contents": [{
                "parts": [{ "text": i18n::bio_prompt(lang, interests) }]
            }]
        });

        let result = self
            .http
            .post(&url)
            .query(&[("key", api_key)])
            .json(&body)
            .timeout(self.timeout())
            .send()
            .await;

        match Self::extract_bio(result).await {
            Ok(bio) => bio,
            Err(e) => {
                tracing::warn!("bio generation failed: {}", e);
                i18n::bio_failed(lang).to_string()
            }
        }
    }

    async fn extract_bio(
        result: Result<reqwest::Response, reqwest::Error>,
    ) -> Result<String, AppError> {
        let response = result?.error_for_status()?;
        let payload: Value = response.json().await?;

        payload["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                AppError::MediaGeneration("text model returned no candidates".into())
            })
    }

    /// Generate a square JPEG from a prompt, returned as a data URL.
    /// Unlike bio generation, a missing credential or upstream failure is an
    /// error here.
    pub async fn generate_image(&self, prompt: &str) -> Result<String, AppError> {
        let api_key = self.config.api_key.as_deref().ok_or_else(|| {
            AppError::MediaGeneration("generative media credential is not configured".into())
        })?;

        let url = format!(
            "{}/v1beta/models/{}:predict",
            self.config.base_url, self.config.image_model
        );
        let body = serde_json::json!({
            "instances": [{ "prompt": prompt }],
            "parameters": {
                "sampleCount": 1,
                "outputMimeType": "image/jpeg",
                "aspectRatio": "1:1"
            }
        });

        let response = self
            .http
            .post(&url)
            .query(&[("key", api_key)])
            .json(&body)
            .timeout(self.timeout())
            .send()
            .await?
            .error_for_status()?;

        let payload: Value = response.json().await?;
        let encoded = payload["predictions"][0]["bytesBase64Encoded"]
            .as_str()
            .ok_or_else(|| {
                AppError::MediaGeneration("image model returned no image bytes".into())
            })?;

        // Round-trip through a decode so a corrupt upstream payload is
        // rejected here rather than handed to clients.
        let bytes = BASE64
            .decode(encoded)
            .map_err(|e| AppError::MediaGeneration(format!("invalid image payload: {}", e)))?;

        Ok(format!("data:image/jpeg;base64,{}", BASE64.encode(bytes)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MediaConfig;

    fn config_without_key() -> MediaConfig {
        MediaConfig {
            api_key: None,
            base_url: "http://localhost:0".into(),
            bio_model: "bio-model".into(),
            image_model: "image-model".into(),
            timeout_secs: 1,
        }
    }

    #[tokio::test]
    async fn bio_without_credential_falls_back() {
        let client = MediaGenClient::new(config_without_key());
        let bio = client.generate_bio("hiking", Language::En).await;
        assert_eq!(bio, i18n::bio_unavailable(Language::En));
    }

    #[tokio::test]
    async fn image_without_credential_is_an_error() {
        let client = MediaGenClient::new(config_without_key());
        let err = client.generate_image("a red bicycle").await.unwrap_err();
        assert!(matches!(err, AppError::MediaGeneration(_)));
    }
}
