//! Gemini API client for reverse prompt analysis.

use async_trait::async_trait;
use base64::Engine;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use reveo_models::{MediaPayload, VeoPrompt};

use crate::error::{AnalysisError, AnalysisResult};
use crate::prompts::{ANALYZE_INSTRUCTION, SYSTEM_INSTRUCTION};
use crate::schema::{veo_prompt_schema, ResponseSchema};

/// Model used when `GEMINI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// The external inference boundary: one validated payload in, one structured
/// prompt or typed failure out.
///
/// The session is generic over this trait so tests can substitute a
/// deterministic stub for the live service.
#[async_trait]
pub trait MediaAnalyzer {
    async fn analyze(&self, payload: &MediaPayload) -> AnalysisResult<VeoPrompt>;
}

/// Gemini client configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key, required.
    pub api_key: String,
    /// Model name.
    pub model: String,
    /// Service base URL; overridable so tests can point at a local mock.
    pub base_url: String,
}

impl GeminiConfig {
    /// Create a config with default model and endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create config from environment variables.
    ///
    /// `GEMINI_API_KEY` is mandatory; its absence is a fatal startup
    /// condition for the client. `GEMINI_MODEL` and `GEMINI_BASE_URL` are
    /// optional overrides.
    pub fn from_env() -> AnalysisResult<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| AnalysisError::config("GEMINI_API_KEY not set"))?;

        Ok(Self {
            api_key,
            model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        })
    }

    /// Override the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the service base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Gemini API client.
///
/// Holds no state between calls; each analysis issues exactly one request
/// with no retries, streaming, or partial results.
pub struct GeminiClient {
    config: GeminiConfig,
    client: Client,
}

/// Gemini API request.
#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "systemInstruction")]
    system_instruction: Content,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

/// Untagged union of text and inline media content parts.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

/// Base64 inline payload carrying the media content.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
    #[serde(rename = "responseSchema")]
    response_schema: ResponseSchema,
}

/// Gemini API response envelope.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: String,
}

impl GeminiClient {
    /// Create a new client from the environment.
    pub fn new() -> AnalysisResult<Self> {
        Ok(Self::with_config(GeminiConfig::from_env()?))
    }

    /// Create a new client with an explicit configuration.
    pub fn with_config(config: GeminiConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.config.base_url, self.config.model, self.config.api_key
        )
    }

    fn build_request(&self, payload: &MediaPayload) -> GenerateContentRequest {
        let data = base64::engine::general_purpose::STANDARD.encode(&payload.bytes);

        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: payload.content_type.clone(),
                            data,
                        },
                    },
                    Part::Text {
                        text: ANALYZE_INSTRUCTION.to_string(),
                    },
                ],
            }],
            system_instruction: Content {
                parts: vec![Part::Text {
                    text: SYSTEM_INSTRUCTION.to_string(),
                }],
            },
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: veo_prompt_schema(),
            },
        }
    }
}

#[async_trait]
impl MediaAnalyzer for GeminiClient {
    async fn analyze(&self, payload: &MediaPayload) -> AnalysisResult<VeoPrompt> {
        let request = self.build_request(payload);

        debug!(
            model = %self.config.model,
            content_type = %payload.content_type,
            size_bytes = payload.len(),
            "Issuing analysis request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!("Gemini API request failed: {}", e);
                AnalysisError::request_failed(format!("Gemini API request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            warn!(%status, "Gemini API returned error status");
            return Err(AnalysisError::request_failed(format!(
                "Gemini API returned {}: {}",
                status, error_text
            )));
        }

        let body = response.text().await.map_err(|e| {
            AnalysisError::request_failed(format!("Failed to read Gemini response body: {}", e))
        })?;

        let envelope: GenerateContentResponse = serde_json::from_str(&body).map_err(|e| {
            AnalysisError::malformed(format!("Failed to decode Gemini response envelope: {}", e))
        })?;

        let text = envelope
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
            .ok_or_else(|| AnalysisError::malformed("No content in Gemini response"))?;

        parse_prompt(text)
    }
}

/// Parse the schema-constrained response text into a [`VeoPrompt`].
fn parse_prompt(text: &str) -> AnalysisResult<VeoPrompt> {
    let text = strip_code_fences(text);
    if text.is_empty() {
        return Err(AnalysisError::malformed("Empty response text"));
    }

    serde_json::from_str(text).map_err(|e| {
        AnalysisError::malformed(format!("Response does not match the prompt schema: {}", e))
    })
}

/// Strip a markdown code fence, if the model wrapped its JSON in one.
fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    let text = text.strip_prefix("```json").unwrap_or(text);
    let text = text.strip_prefix("```").unwrap_or(text);
    let text = text.strip_suffix("```").unwrap_or(text);
    text.trim()
}
