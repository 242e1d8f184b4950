//! Hugging Face Inference API tier.

use serde::{Deserialize, Serialize};

use super::{GenerateOptions, ProviderError, TextGenerator};

/// Conversational model queried on the inference API.
const DEFAULT_MODEL: &str = "microsoft/DialoGPT-large";
const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";

/// Hugging Face text-generation client.
///
/// Constructed with an optional API token; without one the tier reports
/// itself unconfigured and the chain skips it without a network call.
pub struct HuggingFaceClient {
    api_token: Option<String>,
    base_url: String,
    model: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl HuggingFaceClient {
    pub fn new(api_token: Option<String>, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_token: api_token.filter(|t| !t.trim().is_empty()),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            client,
            timeout_secs,
        }
    }

    /// Override the API endpoint. Used by tests and self-hosted inference.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Strip the echoed prompt prefix the inference API returns and trim.
    fn postprocess(prompt: &str, generated: &str) -> String {
        generated
            .strip_prefix(prompt)
            .unwrap_or(generated)
            .trim()
            .to_string()
    }
}

#[derive(Serialize)]
struct HfGenerateRequest<'a> {
    inputs: &'a str,
    parameters: HfParameters,
}

#[derive(Serialize)]
struct HfParameters {
    max_length: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct HfGenerated {
    #[serde(default)]
    generated_text: String,
}

impl TextGenerator for HuggingFaceClient {
    fn label(&self) -> &'static str {
        "huggingface"
    }

    fn is_configured(&self) -> bool {
        self.api_token.is_some()
    }

    fn generate(&self, prompt: &str, options: &GenerateOptions) -> Result<String, ProviderError> {
        let token = self.api_token.as_ref().ok_or(ProviderError::NotConfigured)?;

        let url = format!("{}/models/{}", self.base_url, self.model);
        let body = HfGenerateRequest {
            inputs: prompt,
            parameters: HfParameters {
                max_length: options.max_length,
                temperature: options.temperature,
            },
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    ProviderError::Connection(self.base_url.clone())
                } else if e.is_timeout() {
                    ProviderError::Timeout(self.timeout_secs)
                } else {
                    ProviderError::Connection(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                body,
            });
        }

        // The inference API answers with a list of candidates.
        let parsed: Vec<HfGenerated> = response
            .json()
            .map_err(|e| ProviderError::ResponseParsing(e.to_string()))?;

        let generated = parsed
            .first()
            .map(|c| Self::postprocess(prompt, &c.generated_text))
            .unwrap_or_default();

        if generated.is_empty() {
            return Err(ProviderError::EmptyResponse);
        }
        Ok(generated)
    }
}
