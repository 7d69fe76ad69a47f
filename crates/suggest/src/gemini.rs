use async_trait::async_trait;
use fxbook_core::suggest::error::SuggestError;
use fxbook_core::suggest::port::{SuggestionPort, TradeContext};
use serde::{Deserialize, Serialize};

use crate::prompt::render_prompt;

/// 官方 Generative Language API 地址
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
/// 默认模型
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// # Summary
/// A suggestion generator backed by the Gemini `generateContent` REST API.
///
/// # Invariants
/// * Stateless: one request per call, no retry, no timeout.
/// * An empty `api_key` is accepted at construction and reported as `SuggestError::Config` on use.
pub struct GeminiSuggester {
    /// The API key sent as `x-goog-api-key`.
    api_key: String,
    /// The model name, e.g. `gemini-2.5-flash`.
    model: String,
    /// Scheme and host of the API, without trailing slash.
    base_url: String,
    /// The HTTP client used for requests.
    client: reqwest::Client,
}

/// Request payload of `models/{model}:generateContent`.
#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

/// Subset of the `generateContent` response we read.
#[derive(Deserialize, Debug)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize, Debug)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize, Debug)]
struct CandidatePart {
    text: Option<String>,
}

impl GeminiSuggester {
    /// # Summary
    /// Creates a new `GeminiSuggester`.
    ///
    /// # Logic
    /// 1. Makes sure a rustls crypto provider (ring) is installed for the process.
    /// 2. Builds the HTTP client.
    ///
    /// # Arguments
    /// * `api_key` - The Gemini API key.
    /// * `model` - The model to call.
    /// * `base_url` - API root, overridable for tests and proxies.
    ///
    /// # Returns
    /// * A new instance, or `SuggestError::Config` when the HTTP client cannot be built.
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, SuggestError> {
        ensure_crypto_provider();
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| SuggestError::Config(e.to_string()))?;

        Ok(Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

/// 进程内只需安装一次 rustls 加密后端，已安装时跳过
fn ensure_crypto_provider() {
    if rustls::crypto::CryptoProvider::get_default().is_none()
        && rustls::crypto::ring::default_provider()
            .install_default()
            .is_err()
    {
        tracing::debug!("rustls crypto provider was installed concurrently");
    }
}

#[async_trait]
impl SuggestionPort for GeminiSuggester {
    /// # Summary
    /// Asks Gemini for a short coaching note on the given trade.
    ///
    /// # Logic
    /// 1. Rejects the call early when no API key is configured.
    /// 2. Renders the prompt and POSTs it to `generateContent`.
    /// 3. Maps transport failures to `Network` and non-success statuses to `Platform`.
    /// 4. Joins the text parts of the first candidate; blank output is `EmptyResponse`.
    ///
    /// # Arguments
    /// * `context` - The validated trade context.
    ///
    /// # Returns
    /// * `Ok(String)` with the trimmed suggestion.
    /// * `Err(SuggestError)` otherwise.
    async fn suggest(&self, context: &TradeContext) -> Result<String, SuggestError> {
        if self.api_key.trim().is_empty() {
            return Err(SuggestError::Config("Gemini API key is not set".to_string()));
        }

        let prompt = render_prompt(context);
        let payload = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: &prompt }],
            }],
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| SuggestError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(SuggestError::Platform(format!(
                "Gemini API error ({}): {}",
                status, error_text
            )));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| SuggestError::Platform(format!("Unexpected Gemini response: {}", e)))?;

        let text: String = body
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        let text = text.trim();
        if text.is_empty() {
            return Err(SuggestError::EmptyResponse);
        }
        tracing::debug!("Gemini suggestion received ({} chars)", text.len());
        Ok(text.to_string())
    }
}
