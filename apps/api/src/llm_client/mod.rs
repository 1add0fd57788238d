/// Generation client — the single point of entry for all external
/// text-generation calls in this service.
///
/// ARCHITECTURAL RULE: No other module may call the generation API directly.
/// All AI interactions MUST go through this module.
///
/// Model: command (hardcoded — do not make configurable to prevent drift)
use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

const COHERE_API_URL: &str = "https://api.cohere.ai/v1/generate";
/// The model used for all generation calls.
pub const MODEL: &str = "command";

/// Failure of a single generation attempt.
///
/// These are recoverable-fallback signals: the assessment pipeline catches
/// them and drops to the next tier instead of surfacing them, with one
/// exception (`NotConfigured` on a single-skill generation request, which the
/// provider promotes to a caller-visible error).
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("no generation API key configured")]
    NotConfigured,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("generator returned empty output")]
    EmptyOutput,

    #[error("no JSON object found in generator output")]
    Unparsable,
}

/// Narrow contract over the external text-generation service.
///
/// Carried in `AppState` as `Arc<dyn TextGenerator>` so the tier chain can be
/// exercised in tests with fake generators.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, LlmError>;

    fn is_configured(&self) -> bool;
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    generations: Vec<Generation>,
}

#[derive(Debug, Deserialize)]
struct Generation {
    text: String,
}

#[derive(Debug, Deserialize)]
struct CohereErrorBody {
    message: String,
}

/// The production generation client, backed by the Cohere generate API.
///
/// Carries no retry logic: a failed call is a tier failure, and the pipeline
/// recovers by falling through to a cheaper deterministic tier rather than
/// retrying with backoff.
#[derive(Clone)]
pub struct CohereClient {
    client: Client,
    api_key: Option<String>,
}

impl CohereClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }
}

#[async_trait]
impl TextGenerator for CohereClient {
    async fn generate(
        &self,
        prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::NotConfigured)?;

        let request_body = GenerateRequest {
            model: MODEL,
            prompt,
            max_tokens,
            temperature,
        };

        let response = self
            .client
            .post(COHERE_API_URL)
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<CohereErrorBody>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            warn!("generation API returned {status}: {message}");
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateResponse = response.json().await?;
        let text = parsed
            .generations
            .into_iter()
            .next()
            .map(|g| g.text)
            .unwrap_or_default();
        let text = text.trim();
        if text.is_empty() {
            return Err(LlmError::EmptyOutput);
        }

        debug!("generation call succeeded ({} chars)", text.len());
        Ok(text.to_string())
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Best-effort extraction of the first top-level JSON object in model output:
/// strict parse of the substring between the first `{` and the last `}`.
/// Any failure is a miss (`None`), never an error — the caller treats a miss
/// as a tier failure.
pub fn extract_json<T: DeserializeOwned>(text: &str) -> Option<T> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    serde_json::from_str(&text[start..=end]).ok()
}
