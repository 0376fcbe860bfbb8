//! OpenAI chat-completions provider.
//!
//! The default generation backend. Any OpenAI-compatible endpoint works via
//! [`OpenAiProvider::with_custom_url`], which is also what the integration
//! tests and proxies use.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::GenerationError;
use crate::llm::{Choice, GenerationRequest, GenerationResponse, LlmProvider, Message, Usage};

/// Default OpenAI API endpoint.
const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model to use if none specified.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Environment variable the API key is read from.
const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Maximum number of retry attempts for transient failures.
const MAX_RETRIES: u32 = 3;

/// Base delay for exponential backoff in milliseconds.
const BASE_RETRY_DELAY_MS: u64 = 1000;

/// Request timeout in seconds.
const REQUEST_TIMEOUT_SECS: u64 = 120;

/// OpenAI provider for poem generation requests.
pub struct OpenAiProvider {
    /// HTTP client for making API requests.
    client: Client,
    /// API key for authentication.
    api_key: String,
    /// Base URL for the API.
    base_url: String,
    /// Default model to use when the request leaves it empty.
    default_model: String,
}

impl OpenAiProvider {
    /// Create a new provider with the given API key and the default model.
    ///
    /// Fails with [`GenerationError::ModelInitialization`] when the
    /// underlying HTTP client cannot be constructed (e.g. broken system TLS
    /// configuration).
    pub fn new(api_key: String) -> Result<Self, GenerationError> {
        Self::with_custom_url(api_key, OPENAI_BASE_URL.to_string(), DEFAULT_MODEL.to_string())
    }

    /// Create a new provider with a specific default model.
    pub fn with_model(api_key: String, model: String) -> Result<Self, GenerationError> {
        Self::with_custom_url(api_key, OPENAI_BASE_URL.to_string(), model)
    }

    /// Create a new provider with custom base URL. Useful for testing or for
    /// OpenAI-compatible proxies.
    pub fn with_custom_url(
        api_key: String,
        base_url: String,
        model: String,
    ) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| GenerationError::ModelInitialization(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            base_url,
            default_model: model,
        })
    }

    /// Create a provider from the `OPENAI_API_KEY` environment variable.
    ///
    /// Fails with [`GenerationError::MissingApiKey`] before any request is
    /// attempted when the variable is unset or empty.
    pub fn from_env() -> Result<Self, GenerationError> {
        let api_key = env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or(GenerationError::MissingApiKey)?;
        Self::new(api_key)
    }

    /// Get the API key for debug logging, masked to first/last four chars.
    pub fn api_key_masked(&self) -> String {
        if self.api_key.len() <= 8 {
            "*".repeat(self.api_key.len())
        } else {
            format!(
                "{}...{}",
                &self.api_key[..4],
                &self.api_key[self.api_key.len() - 4..]
            )
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the default model.
    pub fn default_model(&self) -> &str {
        &self.default_model
    }

    /// Execute a request with exponential backoff retry logic.
    async fn execute_with_retry(
        &self,
        request: &ApiRequest,
    ) -> Result<GenerationResponse, GenerationError> {
        let mut last_error = None;
        let url = format!("{}/chat/completions", self.base_url);

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s, 4s
                let delay_ms = BASE_RETRY_DELAY_MS * (1 << (attempt - 1));
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                tracing::debug!(
                    attempt = attempt + 1,
                    delay_ms = delay_ms,
                    "Retrying generation request after transient failure"
                );
            }

            match self.execute_request(&url, request).await {
                Ok(response) => return Ok(response),
                Err(err) => {
                    if is_transient_error(&err) {
                        tracing::warn!(
                            attempt = attempt + 1,
                            max_retries = MAX_RETRIES,
                            error = %err,
                            "Transient error, will retry"
                        );
                        last_error = Some(err);
                    } else {
                        // Non-transient errors fail immediately.
                        return Err(err);
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            GenerationError::RequestFailed("Max retries exceeded with no error captured".to_string())
        }))
    }

    /// Execute a single request (no retry logic).
    async fn execute_request(
        &self,
        url: &str,
        request: &ApiRequest,
    ) -> Result<GenerationResponse, GenerationError> {
        let http_response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(request)
            .send()
            .await
            .map_err(|e| GenerationError::RequestFailed(e.to_string()))?;

        let status = http_response.status();

        if !status.is_success() {
            let status_code = status.as_u16();
            let error_text = http_response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error response".to_string());

            // Try to parse structured error response
            if let Ok(error_response) = serde_json::from_str::<ApiErrorResponse>(&error_text) {
                if status_code == 429 {
                    return Err(GenerationError::RateLimited(error_response.error.message));
                }
                return Err(GenerationError::ApiError {
                    code: status_code,
                    message: error_response.error.message,
                });
            }

            return Err(GenerationError::ApiError {
                code: status_code,
                message: error_text,
            });
        }

        let api_response: ApiResponse = http_response.json().await.map_err(|e| {
            GenerationError::ParseError(format!("Failed to parse API response: {}", e))
        })?;

        let choices = api_response
            .choices
            .into_iter()
            .map(|choice| Choice {
                index: choice.index,
                message: Message {
                    role: choice.message.role,
                    content: choice.message.content,
                },
                finish_reason: choice.finish_reason.unwrap_or_else(|| "stop".to_string()),
            })
            .collect();

        Ok(GenerationResponse {
            id: api_response.id,
            model: api_response.model,
            choices,
            usage: Usage {
                prompt_tokens: api_response.usage.prompt_tokens,
                completion_tokens: api_response.usage.completion_tokens,
                total_tokens: api_response.usage.total_tokens,
            },
        })
    }
}

/// Check if an error is transient and should be retried.
fn is_transient_error(error: &GenerationError) -> bool {
    match error {
        GenerationError::RequestFailed(msg) => {
            // Network errors, timeouts, connection issues
            msg.contains("timeout")
                || msg.contains("connection")
                || msg.contains("temporarily")
                || msg.contains("Connection refused")
        }
        GenerationError::RateLimited(_) => true,
        GenerationError::ApiError { code, .. } => {
            // Server errors (5xx) and rate limits are transient
            *code >= 500 || *code == 429
        }
        _ => false,
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, GenerationError> {
        let model = if request.model.is_empty() {
            self.default_model.clone()
        } else {
            request.model.clone()
        };

        let api_request = ApiRequest {
            model,
            messages: request.messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        self.execute_with_retry(&api_request).await
    }
}

/// Internal request structure for the chat-completions API.
#[derive(Debug, Clone, Serialize)]
struct ApiRequest {
    model: String,
    messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

/// Internal response structure from the API.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    id: String,
    model: String,
    choices: Vec<ApiChoice>,
    usage: ApiUsage,
}

/// Internal choice structure from the API response.
#[derive(Debug, Deserialize)]
struct ApiChoice {
    index: u32,
    message: ApiMessage,
    finish_reason: Option<String>,
}

/// Internal message structure from the API response.
#[derive(Debug, Deserialize)]
struct ApiMessage {
    role: String,
    content: String,
}

/// Internal usage structure from the API response.
#[derive(Debug, Deserialize)]
struct ApiUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

/// Error response from the API.
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorDetail,
}

/// Error detail from the API.
#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_new() {
        let provider =
            OpenAiProvider::new("test-api-key".to_string()).expect("provider should build");

        assert_eq!(provider.base_url(), OPENAI_BASE_URL);
        assert_eq!(provider.default_model(), DEFAULT_MODEL);
        assert_eq!(provider.api_key_masked(), "test...-key");
    }

    #[test]
    fn test_provider_with_model() {
        let provider = OpenAiProvider::with_model("test-key".to_string(), "gpt-4o-mini".to_string())
            .expect("provider should build");

        assert_eq!(provider.default_model(), "gpt-4o-mini");
    }

    #[test]
    fn test_provider_with_custom_url() {
        let provider = OpenAiProvider::with_custom_url(
            "test-key".to_string(),
            "https://custom.api.com/v1".to_string(),
            "custom-model".to_string(),
        )
        .expect("provider should build");

        assert_eq!(provider.base_url(), "https://custom.api.com/v1");
        assert_eq!(provider.default_model(), "custom-model");
    }

    #[test]
    fn test_api_key_masked_short() {
        let provider = OpenAiProvider::new("abc".to_string()).expect("provider should build");
        assert_eq!(provider.api_key_masked(), "***");
    }

    #[test]
    fn test_api_key_masked_normal() {
        let provider =
            OpenAiProvider::new("sk-1234567890abcdef".to_string()).expect("provider should build");
        assert_eq!(provider.api_key_masked(), "sk-1...cdef");
    }

    #[test]
    fn test_is_transient_error_rate_limited() {
        let error = GenerationError::RateLimited("Too many requests".to_string());
        assert!(is_transient_error(&error));
    }

    #[test]
    fn test_is_transient_error_server_error() {
        let error = GenerationError::ApiError {
            code: 500,
            message: "Internal server error".to_string(),
        };
        assert!(is_transient_error(&error));
    }

    #[test]
    fn test_is_transient_error_client_error() {
        let error = GenerationError::ApiError {
            code: 400,
            message: "Bad request".to_string(),
        };
        assert!(!is_transient_error(&error));
    }

    #[test]
    fn test_is_transient_error_timeout() {
        let error = GenerationError::RequestFailed("Request timeout".to_string());
        assert!(is_transient_error(&error));
    }

    #[test]
    fn test_missing_api_key_is_not_transient() {
        assert!(!is_transient_error(&GenerationError::MissingApiKey));
    }
}
